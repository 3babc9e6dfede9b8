use serde::Serialize;
use sqlx::FromRow;
use time::Date;
use uuid::Uuid;

/// A body-weight reading. Stored unrounded; clients round for display.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeightEntry {
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub date: Date,
    pub weight_kg: f64,
    pub notes: String,
}
