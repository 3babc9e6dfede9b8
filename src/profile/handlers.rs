use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{CreateProfileRequest, PatchProfileRequest},
    repo_types::Profile,
};
use crate::{auth::AuthUser, error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(get_profile)
            .post(create_profile)
            .patch(update_profile)
            .delete(delete_profile),
    )
}

#[instrument(skip(state, body))]
pub async fn create_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    body: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    let Json(req) = body?;
    req.validate().inspect_err(|e| warn!(error = %e, "profile rejected"))?;

    let profile = Profile {
        name: req.name,
        measurement_system: req.measurement_system,
    };
    let created = Profile::create(&state.db, user_id, &profile)
        .await?
        .ok_or(ApiError::Conflict("Profile already exists"))?;
    info!(%user_id, "profile created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Profile>, ApiError> {
    Profile::find(&state.db, user_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Profile not found"))
}

#[instrument(skip(state, body))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    body: Result<Json<PatchProfileRequest>, JsonRejection>,
) -> Result<Json<Profile>, ApiError> {
    let Json(patch) = body?;
    let current = Profile::find(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("Profile not found"))?;

    let merged = patch
        .apply(current)
        .inspect_err(|e| warn!(error = %e, "profile update rejected"))?;
    let updated = Profile::update(&state.db, user_id, &merged)
        .await?
        .ok_or(ApiError::NotFound("Profile not found"))?;
    info!(%user_id, "profile updated");
    Ok(Json(updated))
}

#[instrument(skip(state))]
pub async fn delete_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<StatusCode, ApiError> {
    if !Profile::delete(&state.db, user_id).await? {
        return Err(ApiError::NotFound("Profile not found"));
    }
    info!(%user_id, "profile deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtKeys;
    use axum::{
        body::Body,
        extract::FromRef,
        http::{header, Request},
    };
    use tower::ServiceExt;
    use uuid::Uuid;

    #[tokio::test]
    async fn create_rejects_non_alphabetic_name() {
        let state = AppState::fake();
        let token = JwtKeys::from_ref(&state).sign(Uuid::new_v4()).unwrap();
        let app = routes().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/profile")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"Ada 2","measurement_system":"Metric"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn profile_serializes_measurement_system_by_name() {
        let profile = Profile {
            name: "Ada".into(),
            measurement_system: crate::profile::MeasurementSystem::Imperial,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["measurement_system"], "Imperial");
        assert_eq!(json["name"], "Ada");
    }
}
