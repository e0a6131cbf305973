use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::users;

/// Create the application router
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        // User resource
        .route("/api/users", post(users::create_user))
        .route("/api/users", get(users::list_users))
        .route("/api/users/{id}", get(users::get_user))
        .route("/api/users/{id}", put(users::update_user))
        .route("/api/users/{id}", delete(users::delete_user))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
