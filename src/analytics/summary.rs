//! Macronutrient consumption against daily goals over a date range.
//!
//! The aggregator reads through a [`MacroSource`] and reduces in memory, so it
//! never touches the pool directly and can be driven by an in-memory source in
//! tests.

use std::collections::HashSet;

use async_trait::async_trait;
use time::Date;
use tracing::debug;
use uuid::Uuid;

use crate::nutrients::Macros;

/// One dated set of macronutrient values: a food entry or a daily goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRow {
    pub date: Date,
    pub macros: Macros,
}

/// Read-only access to the two tables the aggregator needs.
///
/// Both ranges are inclusive and scoped to `user_id`.
#[async_trait]
pub trait MacroSource: Send + Sync {
    async fn food_entries(&self, user_id: Uuid, start: Date, end: Date) -> anyhow::Result<Vec<MacroRow>>;

    async fn goals(&self, user_id: Uuid, start: Date, end: Date) -> anyhow::Result<Vec<MacroRow>>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("start must be on or before end")]
    InvalidRange { start: Date, end: Date },

    #[error("failed to read analytics data")]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientSummary {
    pub total_consumed: f64,
    pub total_goal: f64,
    pub percentage_of_goal: f64,
    pub average_consumed: f64,
}

impl NutrientSummary {
    /// Zero-goal policy for every nutrient lives here. `days_with_logs` must be non-zero.
    fn new(total_consumed: f64, total_goal: f64, days_with_logs: usize) -> Self {
        // A zero goal and a missing goal both report 0%.
        let percentage_of_goal = if total_goal == 0.0 {
            0.0
        } else {
            (total_consumed / total_goal) * 100.0
        };
        Self {
            total_consumed,
            total_goal,
            percentage_of_goal,
            average_consumed: total_consumed / days_with_logs as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroSummary {
    pub calories: NutrientSummary,
    pub protein: NutrientSummary,
    pub carbs: NutrientSummary,
    pub fats: NutrientSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub start_date: Date,
    pub end_date: Date,
    pub days_with_logs: usize,
    pub summary: MacroSummary,
}

impl AnalyticsSummary {
    fn empty(start_date: Date, end_date: Date) -> Self {
        Self {
            start_date,
            end_date,
            days_with_logs: 0,
            summary: MacroSummary::default(),
        }
    }
}

/// Summarizes a user's intake between `start` and `end`, both inclusive.
///
/// Fails with [`AnalyticsError::InvalidRange`] before reading anything when
/// `start > end`. When no food was logged in the range the goals are not read
/// and every figure is zero.
pub async fn summarize<S>(
    source: &S,
    user_id: Uuid,
    start: Date,
    end: Date,
) -> Result<AnalyticsSummary, AnalyticsError>
where
    S: MacroSource + ?Sized,
{
    if start > end {
        return Err(AnalyticsError::InvalidRange { start, end });
    }

    let entries = source.food_entries(user_id, start, end).await?;
    let logged_dates: HashSet<Date> = entries.iter().map(|row| row.date).collect();
    let days_with_logs = logged_dates.len();

    if days_with_logs == 0 {
        debug!(%user_id, %start, %end, "no food logged in range");
        return Ok(AnalyticsSummary::empty(start, end));
    }

    let goals = source.goals(user_id, start, end).await?;

    let consumed: Macros = entries.iter().map(|row| row.macros).sum();
    let goal: Macros = goals
        .iter()
        .filter(|row| logged_dates.contains(&row.date))
        .map(|row| row.macros)
        .sum();

    debug!(
        %user_id,
        entries = entries.len(),
        goals = goals.len(),
        days_with_logs,
        "macronutrient summary computed"
    );

    Ok(AnalyticsSummary {
        start_date: start,
        end_date: end,
        days_with_logs,
        summary: MacroSummary {
            calories: NutrientSummary::new(consumed.calories, goal.calories, days_with_logs),
            protein: NutrientSummary::new(consumed.protein, goal.protein, days_with_logs),
            carbs: NutrientSummary::new(consumed.carbs, goal.carbs, days_with_logs),
            fats: NutrientSummary::new(consumed.fats, goal.fats, days_with_logs),
        },
    })
}
