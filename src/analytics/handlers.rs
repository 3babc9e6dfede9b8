use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};

use super::{
    dto::{AnalyticsQuery, AnalyticsResponse},
    summary::{summarize, AnalyticsError},
};
use crate::{auth::AuthUser, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/analytics/macronutrients/summary", get(macronutrient_summary))
}

#[instrument(skip(state, query))]
pub async fn macronutrient_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<AnalyticsQuery>, QueryRejection>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let Query(q) = query?;

    let summary = summarize(state.macros.as_ref(), user_id, q.start, q.end)
        .await
        .map_err(|e| match e {
            AnalyticsError::InvalidRange { start, end } => {
                warn!(%user_id, %start, %end, "analytics range rejected");
                ApiError::validation("start", e.to_string())
            }
            AnalyticsError::Storage(cause) => ApiError::Internal(cause),
        })?;

    Ok(Json(summary.into()))
}
