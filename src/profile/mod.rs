mod dto;
pub mod handlers;
mod repo;
mod repo_types;

use crate::state::AppState;
use axum::Router;

pub use repo_types::{MeasurementSystem, Profile};

pub fn router() -> Router<AppState> {
    handlers::routes()
}
