use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use super::{dto::FoodEntryFields, repo_types::FoodEntry};

const COLUMNS: &str =
    "id, user_id, date, food_name, total_calories, total_protein, total_fats, total_carbs, food_weight";

impl FoodEntry {
    /// All of a user's entries on one date, oldest first.
    pub async fn list_by_date(db: &PgPool, user_id: Uuid, date: Date) -> anyhow::Result<Vec<FoodEntry>> {
        let rows = sqlx::query_as::<_, FoodEntry>(&format!(
            "SELECT {COLUMNS} FROM food_entries WHERE user_id = $1 AND date = $2 ORDER BY id"
        ))
        .bind(user_id)
        .bind(date)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find(db: &PgPool, user_id: Uuid, id: i64) -> anyhow::Result<Option<FoodEntry>> {
        let row = sqlx::query_as::<_, FoodEntry>(&format!(
            "SELECT {COLUMNS} FROM food_entries WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        date: Date,
        fields: &FoodEntryFields,
    ) -> anyhow::Result<FoodEntry> {
        let row = sqlx::query_as::<_, FoodEntry>(&format!(
            r#"
            INSERT INTO food_entries
                (user_id, date, food_name, total_calories, total_protein, total_fats, total_carbs, food_weight)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(date)
        .bind(&fields.food_name)
        .bind(fields.total_calories)
        .bind(fields.total_protein)
        .bind(fields.total_fats)
        .bind(fields.total_carbs)
        .bind(fields.food_weight)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: i64,
        fields: &FoodEntryFields,
    ) -> anyhow::Result<Option<FoodEntry>> {
        let row = sqlx::query_as::<_, FoodEntry>(&format!(
            r#"
            UPDATE food_entries
            SET food_name = $3, total_calories = $4, total_protein = $5,
                total_fats = $6, total_carbs = $7, food_weight = $8
            WHERE id = $1 AND user_id = $2
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(&fields.food_name)
        .bind(fields.total_calories)
        .bind(fields.total_protein)
        .bind(fields.total_fats)
        .bind(fields.total_carbs)
        .bind(fields.food_weight)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Returns false when no entry with that id belongs to the user.
    pub async fn delete(db: &PgPool, user_id: Uuid, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM food_entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
