//! Bearer-token authentication for admin pages.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::config::AdminConfig;
use crate::error::AdminError;

/// Reject requests without the configured admin token. Pages are open when
/// no token is configured.
pub async fn auth_middleware(
    State(config): State<AdminConfig>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AdminError> {
    let expected = match &config.admin_token {
        Some(token) => token,
        None => return Ok(next.run(request).await),
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if token == expected => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid admin token provided");
            Err(AdminError::Unauthorized)
        }
        None => {
            tracing::warn!("Missing or malformed Authorization header");
            Err(AdminError::Unauthorized)
        }
    }
}
