mod client;
mod error;
pub mod handlers;
mod types;

use crate::state::AppState;
use axum::Router;

pub use client::{FoodDataCentral, FoodSearch};
pub use error::FoodDataError;
pub use types::{FdcFood, FdcNutrient, FoodSearchResponse, FoodSearchResult, NutrientAmount};

pub fn router() -> Router<AppState> {
    handlers::routes()
}
