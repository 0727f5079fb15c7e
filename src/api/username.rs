//! Handlers for the username-keyed user resource.

use crate::api::AppState;
use crate::api::schemas::username::{UserArgs, UserBody};
use crate::domain::user::User;
use crate::error::{AppError, Result};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Fetches one user by id.
///
/// # Errors
/// Returns `AppError::UserNotFound` if no record has the id.
pub async fn fetch_user(State(state): State<AppState>, Path(id): Path<i64>) -> Result<impl IntoResponse> {
    let user = state.users.fetch(id).await?.ok_or(AppError::UserNotFound)?;
    Ok(Json(UserBody::from(user)))
}

/// Lists every user, ordered by id.
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.users.list().await?;
    let body: Vec<UserBody> = users.into_iter().map(UserBody::from).collect();
    Ok(Json(body))
}

/// Creates a user under the caller-supplied id.
///
/// # Errors
/// Returns `AppError::BadRequest` if a required field is missing and
/// `AppError::IdAlreadyTaken` if the id is in use. The existence check and
/// the insert are separate statements; concurrent creates for one id race,
/// and the loser surfaces either the conflict or the primary-key fault.
pub async fn create_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(args): Json<UserArgs>,
) -> Result<impl IntoResponse> {
    let (username, password) = args.require()?;

    if state.users.fetch(id).await?.is_some() {
        return Err(AppError::IdAlreadyTaken);
    }

    let user = User { id, login: username, password };
    state.users.insert(&user).await?;

    Ok((StatusCode::CREATED, Json(UserBody::from(user))))
}

/// Applies the supplied fields to an existing user; absent fields keep their
/// stored values.
///
/// # Errors
/// Returns `AppError::UpdateTargetMissing` if no record has the id.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(args): Json<UserArgs>,
) -> Result<impl IntoResponse> {
    let mut user = state.users.fetch(id).await?.ok_or(AppError::UpdateTargetMissing)?;
    user.apply_patch(args.into_patch());
    state.users.update(&user).await?;
    Ok(Json(UserBody::from(user)))
}

/// Removes a user.
///
/// # Errors
/// Returns `AppError::DeleteTargetMissing` if no record has the id.
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> Result<impl IntoResponse> {
    if state.users.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::DeleteTargetMissing)
    }
}
