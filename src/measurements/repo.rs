use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use super::{dto::WeightEntryUpsert, repo_types::WeightEntry};

impl WeightEntry {
    pub async fn upsert(db: &PgPool, user_id: Uuid, entry: &WeightEntryUpsert) -> anyhow::Result<WeightEntry> {
        let row = sqlx::query_as::<_, WeightEntry>(
            r#"
            INSERT INTO weight_entries (user_id, date, weight_kg, notes)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, date) DO UPDATE
            SET weight_kg = EXCLUDED.weight_kg,
                notes = EXCLUDED.notes
            RETURNING user_id, date, weight_kg, notes
            "#,
        )
        .bind(user_id)
        .bind(entry.date)
        .bind(entry.weight_kg)
        .bind(&entry.notes)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, user_id: Uuid, date: Date) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM weight_entries WHERE user_id = $1 AND date = $2")
            .bind(user_id)
            .bind(date)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Most recent date first.
    pub async fn history(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<WeightEntry>> {
        let rows = sqlx::query_as::<_, WeightEntry>(
            r#"
            SELECT user_id, date, weight_kg, notes
            FROM weight_entries
            WHERE user_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
