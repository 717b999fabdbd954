use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;

use super::{AppState, RequestNavigator};
use crate::components::*;
use crate::error::AdminError;
use crate::routing::RouteParams;

// ============================================================
// Health
// ============================================================

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

// ============================================================
// Static pages
// ============================================================

pub async fn customers() -> Html<String> {
    Html(render_document(
        CUSTOMERS_TITLE,
        &render_component(CustomersPage, ()),
    ))
}

pub async fn reports() -> Html<String> {
    Html(render_document(REPORTS_TITLE, &render_component(ReportsPage, ())))
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> AdminError {
    tracing::debug!("No admin page at {}", uri.path());
    AdminError::NotFound(uri.path().to_string())
}

// ============================================================
// Orders
// ============================================================

pub async fn order_detail(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    render_order(&state, RouteParams::from(params), &headers)
}

pub async fn order_without_id(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render_order(&state, RouteParams::new(), &headers)
}

fn render_order(state: &AppState, params: RouteParams, headers: &HeaderMap) -> Response {
    let navigator = Arc::new(RequestNavigator::from_headers(headers));
    let body = render_order_detail(params, navigator.clone(), state.order_view);

    if let Some(target) = navigator.redirect_target() {
        tracing::debug!("Order view navigated back to {}", target);
        return Redirect::to(target).into_response();
    }

    if body.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    Html(render_document("Order detail", &body)).into_response()
}
