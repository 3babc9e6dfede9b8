use serde::Serialize;
use sqlx::FromRow;
use time::Date;
use uuid::Uuid;

/// Macronutrient targets for one user on one date.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyMacronutrientGoal {
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub date: Date,
    pub goal_calories: f64,
    pub goal_protein: f64,
    pub goal_carbs: f64,
    pub goal_fats: f64,
}

/// The single body-weight target a user works towards.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeightGoal {
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub goal_date: Date,
    pub goal_weight_kg: f64,
}
