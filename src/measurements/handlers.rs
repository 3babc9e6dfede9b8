use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{WeightEntryDate, WeightEntryUpsert},
    repo_types::WeightEntry,
};
use crate::{auth::AuthUser, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/measurements/weights",
            put(upsert_weight).delete(delete_weight),
        )
        .route("/measurements/weights/history", get(weight_history))
}

#[instrument(skip(state, body))]
pub async fn upsert_weight(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    body: Result<Json<WeightEntryUpsert>, JsonRejection>,
) -> Result<Json<WeightEntry>, ApiError> {
    let Json(entry) = body?;
    entry.validate().inspect_err(|e| warn!(error = %e, "weight entry rejected"))?;

    let stored = WeightEntry::upsert(&state.db, user_id, &entry).await?;
    info!(%user_id, date = %stored.date, "weight entry saved");
    Ok(Json(stored))
}

#[instrument(skip(state, body))]
pub async fn delete_weight(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    body: Result<Json<WeightEntryDate>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(target) = body?;
    if !WeightEntry::delete(&state.db, user_id, target.date).await? {
        return Err(ApiError::NotFound("Weight entry not found"));
    }
    info!(%user_id, date = %target.date, "weight entry deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn weight_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<WeightEntry>>, ApiError> {
    Ok(Json(WeightEntry::history(&state.db, user_id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use uuid::Uuid;

    #[test]
    fn weight_entry_serializes_owner_as_user() {
        let user_id = Uuid::new_v4();
        let entry = WeightEntry {
            user_id,
            date: date!(2025 - 08 - 01),
            weight_kg: 80.5,
            notes: "after run".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["user"], user_id.to_string());
        assert_eq!(json["date"], "2025-08-01");
        assert_eq!(json["weight_kg"], 80.5);
        assert!(json.get("user_id").is_none());
    }
}
