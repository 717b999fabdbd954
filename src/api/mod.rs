mod handlers;
mod middleware;
mod navigator;

pub use navigator::RequestNavigator;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::components::{OrderDetailView, OrderSummaryFrame};
use crate::config::AdminConfig;

/// Shared, read-only state for page handlers.
#[derive(Clone)]
pub struct AppState {
    pub order_view: OrderDetailView,
}

/// Build the admin router with the default order detail view.
pub fn create_router(config: AdminConfig) -> Router {
    create_router_with_view(config, OrderSummaryFrame)
}

/// Build the admin router with a caller-supplied order detail view.
pub fn create_router_with_view(config: AdminConfig, order_view: OrderDetailView) -> Router {
    let admin = Router::new()
        .route("/customers", get(handlers::customers))
        .route("/reports", get(handlers::reports))
        .route("/orders", get(handlers::order_without_id))
        .route("/orders/", get(handlers::order_without_id))
        .route("/orders/{id}", get(handlers::order_detail))
        .fallback(handlers::not_found)
        .layer(from_fn_with_state(config, middleware::auth_middleware));

    Router::new()
        .nest("/admin", admin)
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { order_view })
}
