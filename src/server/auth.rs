use super::handlers::AppState;
use super::types::ErrorResponse;
use crate::Error;
use axum::{
    extract::{Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

/// Rejects callers without the configured bearer token. With no token
/// configured, enforcement is off and every caller passes through.
pub async fn require_caller_identity(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.config.server.auth_token.as_deref() else {
        return next.run(request).await;
    };

    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if presented == Some(expected) {
        next.run(request).await
    } else {
        warn!("Rejecting unauthenticated request to {}", request.uri());
        (
            StatusCode::UNAUTHORIZED,
            axum::Json(ErrorResponse::new(&Error::Unauthenticated)),
        )
            .into_response()
    }
}
