//! Secret Santa API — HTTP surface over the draw and share contexts.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the application router with every route mounted.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/draws", routes::draws::router())
        .nest("/api/v1/links", routes::links::router())
        .with_state(app_state)
}
