use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::{handlers, middleware::metrics_middleware, sync, tickets};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Tickets
        .route("/tickets", get(tickets::list_tickets))
        .route("/history/{id}", get(tickets::get_history))
        .route("/manager/tickets", get(tickets::list_manager_tickets))
        .route("/manager/tickets/{id}", get(tickets::get_manager_ticket))
        // Pending sync counter
        .route("/sync/pending", get(sync::get_pending))
        .route("/sync/pending", post(sync::increment_pending))
        .route("/sync/pending", delete(sync::clear_pending))
        .route("/sync/pending/decrement", post(sync::decrement_pending));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(metrics_middleware)),
        )
        .with_state(state)
}
