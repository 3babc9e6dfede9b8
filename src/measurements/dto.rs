use serde::Deserialize;
use time::Date;

use crate::error::{ensure_min, ApiError};

pub const MIN_WEIGHT_KG: f64 = 1.0;
pub const MAX_NOTES_CHARS: usize = 255;

#[derive(Debug, Clone, Deserialize)]
pub struct WeightEntryUpsert {
    pub date: Date,
    pub weight_kg: f64,
    #[serde(default)]
    pub notes: String,
}

impl WeightEntryUpsert {
    pub fn validate(&self) -> Result<(), ApiError> {
        ensure_min("weight_kg", self.weight_kg, MIN_WEIGHT_KG)?;
        if self.notes.chars().count() > MAX_NOTES_CHARS {
            return Err(ApiError::validation(
                "notes",
                format!("notes may not exceed {MAX_NOTES_CHARS} characters"),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct WeightEntryDate {
    pub date: Date,
}
