use serde::Serialize;
use sqlx::FromRow;
use time::Date;
use uuid::Uuid;

/// One logged food item.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FoodEntry {
    pub id: i64,
    pub user_id: Uuid,
    pub date: Date,
    pub food_name: String,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_fats: f64,
    pub total_carbs: f64,
    pub food_weight: f64, // grams
}
