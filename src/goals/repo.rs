use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use super::{
    dto::{DailyGoalUpsert, WeightGoalUpsert},
    repo_types::{DailyMacronutrientGoal, WeightGoal},
};

impl DailyMacronutrientGoal {
    /// Creates the goal for `(user, date)` or replaces the existing one.
    pub async fn upsert(db: &PgPool, user_id: Uuid, goal: &DailyGoalUpsert) -> anyhow::Result<DailyMacronutrientGoal> {
        let row = sqlx::query_as::<_, DailyMacronutrientGoal>(
            r#"
            INSERT INTO daily_macronutrient_goals
                (user_id, date, goal_calories, goal_protein, goal_carbs, goal_fats)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, date) DO UPDATE
            SET goal_calories = EXCLUDED.goal_calories,
                goal_protein  = EXCLUDED.goal_protein,
                goal_carbs    = EXCLUDED.goal_carbs,
                goal_fats     = EXCLUDED.goal_fats
            RETURNING user_id, date, goal_calories, goal_protein, goal_carbs, goal_fats
            "#,
        )
        .bind(user_id)
        .bind(goal.date)
        .bind(goal.goal_calories)
        .bind(goal.goal_protein)
        .bind(goal.goal_carbs)
        .bind(goal.goal_fats)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn find(db: &PgPool, user_id: Uuid, date: Date) -> anyhow::Result<Option<DailyMacronutrientGoal>> {
        let row = sqlx::query_as::<_, DailyMacronutrientGoal>(
            r#"
            SELECT user_id, date, goal_calories, goal_protein, goal_carbs, goal_fats
            FROM daily_macronutrient_goals
            WHERE user_id = $1 AND date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}

impl WeightGoal {
    pub async fn upsert(db: &PgPool, user_id: Uuid, goal: &WeightGoalUpsert) -> anyhow::Result<WeightGoal> {
        let row = sqlx::query_as::<_, WeightGoal>(
            r#"
            INSERT INTO weight_goals (user_id, goal_date, goal_weight_kg)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE
            SET goal_date = EXCLUDED.goal_date,
                goal_weight_kg = EXCLUDED.goal_weight_kg
            RETURNING user_id, goal_date, goal_weight_kg
            "#,
        )
        .bind(user_id)
        .bind(goal.goal_date)
        .bind(goal.goal_weight_kg)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn find(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<WeightGoal>> {
        let row = sqlx::query_as::<_, WeightGoal>(
            "SELECT user_id, goal_date, goal_weight_kg FROM weight_goals WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
