use anyhow::Context;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use time::Date;
use uuid::Uuid;

use super::summary::{MacroRow, MacroSource};
use crate::nutrients::Macros;

#[derive(Debug, FromRow)]
struct DatedMacrosRow {
    date: Date,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
}

impl From<DatedMacrosRow> for MacroRow {
    fn from(r: DatedMacrosRow) -> Self {
        Self {
            date: r.date,
            macros: Macros::new(r.calories, r.protein, r.carbs, r.fats),
        }
    }
}

/// [`MacroSource`] over the `food_entries` and `daily_macronutrient_goals` tables.
#[derive(Clone)]
pub struct PgMacroSource {
    db: PgPool,
}

impl PgMacroSource {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MacroSource for PgMacroSource {
    async fn food_entries(&self, user_id: Uuid, start: Date, end: Date) -> anyhow::Result<Vec<MacroRow>> {
        let rows = sqlx::query_as::<_, DatedMacrosRow>(
            r#"
            SELECT date,
                   total_calories AS calories,
                   total_protein  AS protein,
                   total_carbs    AS carbs,
                   total_fats     AS fats
            FROM food_entries
            WHERE user_id = $1 AND date BETWEEN $2 AND $3
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await
        .context("select food entries in range")?;
        Ok(rows.into_iter().map(MacroRow::from).collect())
    }

    async fn goals(&self, user_id: Uuid, start: Date, end: Date) -> anyhow::Result<Vec<MacroRow>> {
        let rows = sqlx::query_as::<_, DatedMacrosRow>(
            r#"
            SELECT date,
                   goal_calories AS calories,
                   goal_protein  AS protein,
                   goal_carbs    AS carbs,
                   goal_fats     AS fats
            FROM daily_macronutrient_goals
            WHERE user_id = $1 AND date BETWEEN $2 AND $3
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await
        .context("select macronutrient goals in range")?;
        Ok(rows.into_iter().map(MacroRow::from).collect())
    }
}
