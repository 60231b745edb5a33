mod dto;
pub mod engine;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::calculate_routes())
        .merge(handlers::history_routes())
}
