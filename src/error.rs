//! Errors surfaced by the admin server.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::components::{render_component, render_document, NotFoundPage, NotFoundPageProps};

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Unauthorized: admin token required or invalid")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            AdminError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
            AdminError::NotFound(path) => {
                let body =
                    render_component(NotFoundPage, NotFoundPageProps::builder().path(path).build());
                let page = render_document("Page not found", &body);
                (StatusCode::NOT_FOUND, Html(page)).into_response()
            }
            AdminError::Config(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
