use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, instrument};

use super::types::FoodSearchResponse;
use crate::{auth::AuthUser, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/fooddata/search", get(search_foods))
}

#[derive(Debug, Deserialize)]
pub struct FoodQuery {
    pub food: Option<String>,
}

#[instrument(skip(state, query))]
pub async fn search_foods(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    query: Result<Query<FoodQuery>, QueryRejection>,
) -> Result<Json<FoodSearchResponse>, ApiError> {
    let Query(params) = query?;
    let food = params
        .food
        .filter(|f| !f.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Query parameter is required".into()))?;

    let foods = state
        .food_search
        .search(&food)
        .await
        .map_err(|e| ApiError::Upstream(e.into()))?;
    if foods.is_empty() {
        return Err(ApiError::NotFound("No foods found"));
    }

    info!(query = %food, results = foods.len(), "food search");
    Ok(Json(FoodSearchResponse::new(food, &foods)))
}
