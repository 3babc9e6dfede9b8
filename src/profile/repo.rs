use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{Profile, ProfileRow};

impl Profile {
    pub async fn find(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT name, measurement_system FROM profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        row.map(Profile::try_from).transpose()
    }

    /// Returns `None` when the user already has a profile.
    pub async fn create(db: &PgPool, user_id: Uuid, profile: &Profile) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (user_id, name, measurement_system)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO NOTHING
            RETURNING name, measurement_system
            "#,
        )
        .bind(user_id)
        .bind(&profile.name)
        .bind(profile.measurement_system.as_str())
        .fetch_optional(db)
        .await?;
        row.map(Profile::try_from).transpose()
    }

    pub async fn update(db: &PgPool, user_id: Uuid, profile: &Profile) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            UPDATE profiles
            SET name = $2, measurement_system = $3
            WHERE user_id = $1
            RETURNING name, measurement_system
            "#,
        )
        .bind(user_id)
        .bind(&profile.name)
        .bind(profile.measurement_system.as_str())
        .fetch_optional(db)
        .await?;
        row.map(Profile::try_from).transpose()
    }

    pub async fn delete(db: &PgPool, user_id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
