use serde::Deserialize;
use time::Date;

use crate::error::{ensure_min, ensure_range, ApiError};

pub const MAX_GOAL: f64 = 5000.0;
pub const MIN_WEIGHT_KG: f64 = 1.0;

#[derive(Debug, Deserialize)]
pub struct GoalDateQuery {
    pub date: Date,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyGoalUpsert {
    pub date: Date,
    pub goal_calories: f64,
    pub goal_protein: f64,
    pub goal_carbs: f64,
    pub goal_fats: f64,
}

impl DailyGoalUpsert {
    pub fn validate(&self) -> Result<(), ApiError> {
        ensure_range("goal_calories", self.goal_calories, 0.0, MAX_GOAL)?;
        ensure_range("goal_protein", self.goal_protein, 0.0, MAX_GOAL)?;
        ensure_range("goal_carbs", self.goal_carbs, 0.0, MAX_GOAL)?;
        ensure_range("goal_fats", self.goal_fats, 0.0, MAX_GOAL)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightGoalUpsert {
    pub goal_date: Date,
    pub goal_weight_kg: f64,
}

impl WeightGoalUpsert {
    pub fn validate(&self) -> Result<(), ApiError> {
        ensure_min("goal_weight_kg", self.goal_weight_kg, MIN_WEIGHT_KG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn goal() -> DailyGoalUpsert {
        DailyGoalUpsert {
            date: date!(2025 - 08 - 01),
            goal_calories: 2000.0,
            goal_protein: 50.0,
            goal_carbs: 275.0,
            goal_fats: 70.0,
        }
    }

    #[test]
    fn zero_goals_are_allowed() {
        let g = DailyGoalUpsert {
            goal_calories: 0.0,
            goal_protein: 0.0,
            goal_carbs: 0.0,
            goal_fats: 0.0,
            ..goal()
        };
        assert!(g.validate().is_ok());
    }

    #[test]
    fn goal_above_limit_is_rejected() {
        let g = DailyGoalUpsert {
            goal_carbs: 5001.0,
            ..goal()
        };
        match g.validate() {
            Err(ApiError::Validation { field, .. }) => assert_eq!(field, "goal_carbs"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn weight_goal_must_be_at_least_one_kg() {
        let ok = WeightGoalUpsert {
            goal_date: date!(2025 - 12 - 31),
            goal_weight_kg: 1.0,
        };
        assert!(ok.validate().is_ok());

        let bad = WeightGoalUpsert {
            goal_weight_kg: 0.5,
            ..ok
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn upsert_body_parses_iso_date() {
        let g: DailyGoalUpsert = serde_json::from_str(
            r#"{"date":"2025-08-01","goal_calories":2000,"goal_protein":50,"goal_carbs":275,"goal_fats":70}"#,
        )
        .unwrap();
        assert_eq!(g.date, date!(2025 - 08 - 01));
        assert_eq!(g.goal_calories, 2000.0);
    }
}
