use serde::Deserialize;
use time::Date;

use super::repo_types::FoodEntry;
use crate::error::{ensure_range, ApiError};

/// Upper bound shared by every nutrient and the food weight.
pub const MAX_AMOUNT: f64 = 5000.0;

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Date,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

/// Client-editable part of a food entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoodEntryFields {
    pub food_name: String,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_fats: f64,
    pub total_carbs: f64,
    pub food_weight: f64,
}

impl FoodEntryFields {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.food_name.trim().is_empty() {
            return Err(ApiError::validation("food_name", "food_name may not be blank"));
        }
        ensure_range("total_calories", self.total_calories, 0.0, MAX_AMOUNT)?;
        ensure_range("total_protein", self.total_protein, 0.0, MAX_AMOUNT)?;
        ensure_range("total_fats", self.total_fats, 0.0, MAX_AMOUNT)?;
        ensure_range("total_carbs", self.total_carbs, 0.0, MAX_AMOUNT)?;
        ensure_range("food_weight", self.food_weight, 0.0, MAX_AMOUNT)?;
        Ok(())
    }
}

impl From<&FoodEntry> for FoodEntryFields {
    fn from(e: &FoodEntry) -> Self {
        Self {
            food_name: e.food_name.clone(),
            total_calories: e.total_calories,
            total_protein: e.total_protein,
            total_fats: e.total_fats,
            total_carbs: e.total_carbs,
            food_weight: e.food_weight,
        }
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct FoodEntryPatch {
    pub food_name: Option<String>,
    pub total_calories: Option<f64>,
    pub total_protein: Option<f64>,
    pub total_fats: Option<f64>,
    pub total_carbs: Option<f64>,
    pub food_weight: Option<f64>,
}

impl FoodEntryPatch {
    pub fn apply(self, current: FoodEntryFields) -> FoodEntryFields {
        FoodEntryFields {
            food_name: self.food_name.unwrap_or(current.food_name),
            total_calories: self.total_calories.unwrap_or(current.total_calories),
            total_protein: self.total_protein.unwrap_or(current.total_protein),
            total_fats: self.total_fats.unwrap_or(current.total_fats),
            total_carbs: self.total_carbs.unwrap_or(current.total_carbs),
            food_weight: self.food_weight.unwrap_or(current.food_weight),
        }
    }
}
