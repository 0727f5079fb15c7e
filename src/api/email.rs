//! Handlers for the email-keyed user resource. Same surface as the username
//! flavor; only the wire field differs.

use crate::api::AppState;
use crate::api::schemas::email::{UserArgs, UserBody};
use crate::domain::user::User;
use crate::error::{AppError, Result};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

pub async fn fetch_user(State(state): State<AppState>, Path(id): Path<i64>) -> Result<impl IntoResponse> {
    let user = state.users.fetch(id).await?.ok_or(AppError::UserNotFound)?;
    Ok(Json(UserBody::from(user)))
}

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.users.list().await?;
    let body: Vec<UserBody> = users.into_iter().map(UserBody::from).collect();
    Ok(Json(body))
}

pub async fn create_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(args): Json<UserArgs>,
) -> Result<impl IntoResponse> {
    let (email, password) = args.require()?;

    if state.users.fetch(id).await?.is_some() {
        return Err(AppError::IdAlreadyTaken);
    }

    let user = User { id, login: email, password };
    state.users.insert(&user).await?;

    Ok((StatusCode::CREATED, Json(UserBody::from(user))))
}

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

pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> Result<impl IntoResponse> {
    if state.users.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::DeleteTargetMissing)
    }
}
