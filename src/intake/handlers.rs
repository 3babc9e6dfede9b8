use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{DateQuery, FoodEntryFields, FoodEntryPatch, IdQuery},
    repo_types::FoodEntry,
};
use crate::{auth::AuthUser, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/intake/foods",
        get(list_foods)
            .post(create_food)
            .patch(update_food)
            .delete(delete_food),
    )
}

#[instrument(skip(state, query))]
pub async fn list_foods(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<Vec<FoodEntry>>, ApiError> {
    let Query(q) = query?;
    let entries = FoodEntry::list_by_date(&state.db, user_id, q.date).await?;
    if entries.is_empty() {
        return Err(ApiError::NotFound("No entries found for the given date."));
    }
    Ok(Json(entries))
}

#[instrument(skip(state, query, body))]
pub async fn create_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<DateQuery>, QueryRejection>,
    body: Result<Json<FoodEntryFields>, JsonRejection>,
) -> Result<(StatusCode, Json<FoodEntry>), ApiError> {
    let Query(q) = query?;
    let Json(fields) = body?;
    fields.validate().inspect_err(|e| warn!(error = %e, "food entry rejected"))?;

    let entry = FoodEntry::create(&state.db, user_id, q.date, &fields).await?;
    info!(%user_id, entry_id = entry.id, date = %entry.date, "food entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

#[instrument(skip(state, query, body))]
pub async fn update_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<IdQuery>, QueryRejection>,
    body: Result<Json<FoodEntryPatch>, JsonRejection>,
) -> Result<Json<FoodEntry>, ApiError> {
    let Query(q) = query?;
    let Json(patch) = body?;

    let current = FoodEntry::find(&state.db, user_id, q.id)
        .await?
        .ok_or(ApiError::NotFound("Food entry not found"))?;

    let fields = patch.apply(FoodEntryFields::from(&current));
    fields.validate().inspect_err(|e| warn!(error = %e, "food entry update rejected"))?;

    let entry = FoodEntry::update(&state.db, user_id, q.id, &fields)
        .await?
        .ok_or(ApiError::NotFound("Food entry not found"))?;
    info!(%user_id, entry_id = entry.id, "food entry updated");
    Ok(Json(entry))
}

#[instrument(skip(state, query))]
pub async fn delete_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let Query(q) = query?;
    if !FoodEntry::delete(&state.db, user_id, q.id).await? {
        return Err(ApiError::NotFound("Food entry not found"));
    }
    info!(%user_id, entry_id = q.id, "food entry deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtKeys;
    use axum::{
        body::{to_bytes, Body},
        extract::FromRef,
        http::{header, Request},
    };
    use tower::ServiceExt;
    use uuid::Uuid;

    fn bearer(state: &AppState) -> String {
        let token = JwtKeys::from_ref(state).sign(Uuid::new_v4()).unwrap();
        format!("Bearer {token}")
    }

    #[tokio::test]
    async fn create_rejects_out_of_range_calories_before_touching_the_database() {
        let state = AppState::fake();
        let auth = bearer(&state);
        let app = routes().with_state(state);

        let body = serde_json::json!({
            "food_name": "Lard",
            "total_calories": 9000.0,
            "total_protein": 0.0,
            "total_fats": 100.0,
            "total_carbs": 0.0,
            "food_weight": 100.0
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/intake/foods?date=2025-08-01")
                    .header(header::AUTHORIZATION, auth)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["field"], "total_calories");
    }

    #[tokio::test]
    async fn create_requires_a_date() {
        let state = AppState::fake();
        let auth = bearer(&state);
        let app = routes().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/intake/foods")
                    .header(header::AUTHORIZATION, auth)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_requires_a_numeric_id() {
        let state = AppState::fake();
        let auth = bearer(&state);
        let app = routes().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/intake/foods?id=abc")
                    .header(header::AUTHORIZATION, auth)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
