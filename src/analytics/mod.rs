mod dto;
pub mod handlers;
mod repo;
pub mod summary;

use crate::state::AppState;
use axum::Router;

pub use repo::PgMacroSource;
pub use summary::{summarize, AnalyticsError, AnalyticsSummary, MacroRow, MacroSource};

pub fn router() -> Router<AppState> {
    handlers::routes()
}
