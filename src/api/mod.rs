use crate::config::ApiVariant;
use crate::storage::UserStore;
use axum::body::Body;
use axum::http::Request;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod email;
pub mod middleware;
pub mod schemas;
pub mod username;

/// Shared handler context. Built once at startup and passed to every request
/// through the router, never referenced globally.
#[derive(Clone, Debug)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

/// Builds the router for the selected wire variant and attaches the
/// request-id and trace layers.
pub fn app_router(state: AppState, variant: ApiVariant) -> Router {
    let routes = match variant {
        ApiVariant::Username => Router::new()
            .route(
                "/user/{id}",
                get(username::fetch_user)
                    .put(username::create_user)
                    .patch(username::update_user)
                    .delete(username::delete_user),
            )
            .route("/users", get(username::list_users)),
        ApiVariant::Email => Router::new()
            .route(
                "/user/{id}",
                get(email::fetch_user)
                    .put(email::create_user)
                    .patch(email::update_user)
                    .delete(email::delete_user),
            )
            .route("/users", get(email::list_users)),
    };

    routes
        .layer(PropagateRequestIdLayer::new(axum::http::HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<tower_http::request_id::RequestId>()
                        .map(|id| id.header_value().to_str().unwrap_or_default())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        let status = response.status();
                        tracing::Span::current().record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(|error, _latency, _span: &tracing::Span| {
                    tracing::error!(error = %error, "request failed");
                }),
        )
        .layer(SetRequestIdLayer::new(
            axum::http::HeaderName::from_static("x-request-id"),
            middleware::MakeRequestUuidOrHeader,
        ))
        .with_state(state)
}
