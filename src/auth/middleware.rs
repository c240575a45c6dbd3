//! Access Guard Middleware
//! Mission: Protect the static-data routes with token verification

use crate::auth::jwt::TokenCodec;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Guard that validates the access token on every protected request.
///
/// The token is the raw `Authorization` header value, not a
/// `Bearer`-prefixed one. On success the decoded claims are attached to
/// the request extensions for downstream handlers.
pub async fn access_guard(
    State(codec): State<Arc<TokenCodec>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    // An empty header value counts as missing, same as no header at all.
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingAuthorization)?;

    let claims = codec.verify(token).map_err(|_| AuthError::InvalidToken)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Guard rejection
#[derive(Debug)]
pub enum AuthError {
    MissingAuthorization,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingAuthorization => {
                (StatusCode::UNAUTHORIZED, "Authorization header missing")
            }
            AuthError::InvalidToken => (StatusCode::FORBIDDEN, "Invalid or expired token"),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
