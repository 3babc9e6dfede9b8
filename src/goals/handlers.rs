use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::put,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{DailyGoalUpsert, GoalDateQuery, WeightGoalUpsert},
    repo_types::{DailyMacronutrientGoal, WeightGoal},
};
use crate::{auth::AuthUser, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/goals/macronutrient/daily",
            put(upsert_daily_goal).get(get_daily_goal),
        )
        .route("/goals/weight", put(upsert_weight_goal).get(get_weight_goal))
}

#[instrument(skip(state, body))]
pub async fn upsert_daily_goal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    body: Result<Json<DailyGoalUpsert>, JsonRejection>,
) -> Result<Json<DailyMacronutrientGoal>, ApiError> {
    let Json(goal) = body?;
    goal.validate().inspect_err(|e| warn!(error = %e, "daily goal rejected"))?;

    let stored = DailyMacronutrientGoal::upsert(&state.db, user_id, &goal).await?;
    info!(%user_id, date = %stored.date, "daily macronutrient goal saved");
    Ok(Json(stored))
}

#[instrument(skip(state, query))]
pub async fn get_daily_goal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<GoalDateQuery>, QueryRejection>,
) -> Result<Json<DailyMacronutrientGoal>, ApiError> {
    let Query(q) = query?;
    DailyMacronutrientGoal::find(&state.db, user_id, q.date)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Goal not found for given date"))
}

#[instrument(skip(state, body))]
pub async fn upsert_weight_goal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    body: Result<Json<WeightGoalUpsert>, JsonRejection>,
) -> Result<Json<WeightGoal>, ApiError> {
    let Json(goal) = body?;
    goal.validate().inspect_err(|e| warn!(error = %e, "weight goal rejected"))?;

    let stored = WeightGoal::upsert(&state.db, user_id, &goal).await?;
    info!(%user_id, goal_date = %stored.goal_date, "weight goal saved");
    Ok(Json(stored))
}

#[instrument(skip(state))]
pub async fn get_weight_goal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<WeightGoal>, ApiError> {
    WeightGoal::find(&state.db, user_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Weight goal not found"))
}
