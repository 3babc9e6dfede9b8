use serde::{Deserialize, Serialize};
use time::Date;

use super::summary::{AnalyticsSummary, MacroSummary, NutrientSummary};

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub start: Date,
    pub end: Date,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryItem {
    pub total_consumed: f64,
    pub total_goal: f64,
    pub percentage_of_goal: f64,
    pub average_consumed: f64,
}

#[derive(Debug, Serialize)]
pub struct SummaryBody {
    pub calories: SummaryItem,
    pub protein: SummaryItem,
    pub carbs: SummaryItem,
    pub fats: SummaryItem,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub start_date: Date,
    pub end_date: Date,
    pub days_with_logs: usize,
    pub summary: SummaryBody,
}

impl From<NutrientSummary> for SummaryItem {
    fn from(n: NutrientSummary) -> Self {
        Self {
            total_consumed: n.total_consumed,
            total_goal: n.total_goal,
            percentage_of_goal: n.percentage_of_goal,
            average_consumed: n.average_consumed,
        }
    }
}

impl From<MacroSummary> for SummaryBody {
    fn from(s: MacroSummary) -> Self {
        Self {
            calories: s.calories.into(),
            protein: s.protein.into(),
            carbs: s.carbs.into(),
            fats: s.fats.into(),
        }
    }
}

impl From<AnalyticsSummary> for AnalyticsResponse {
    fn from(s: AnalyticsSummary) -> Self {
        Self {
            start_date: s.start_date,
            end_date: s.end_date,
            days_with_logs: s.days_with_logs,
            summary: s.summary.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn response_uses_camel_case_and_iso_dates() {
        let response = AnalyticsResponse::from(AnalyticsSummary {
            start_date: date!(2025 - 08 - 01),
            end_date: date!(2025 - 08 - 07),
            days_with_logs: 0,
            summary: MacroSummary::default(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["startDate"], "2025-08-01");
        assert_eq!(json["endDate"], "2025-08-07");
        assert_eq!(json["daysWithLogs"], 0);
        for nutrient in ["calories", "protein", "carbs", "fats"] {
            let item = &json["summary"][nutrient];
            assert_eq!(item["totalConsumed"], 0.0);
            assert_eq!(item["totalGoal"], 0.0);
            assert_eq!(item["percentageOfGoal"], 0.0);
            assert_eq!(item["averageConsumed"], 0.0);
        }
    }

    #[test]
    fn query_parses_iso_dates() {
        let q: AnalyticsQuery = serde_json::from_value(serde_json::json!({
            "start": "2025-08-01",
            "end": "2025-08-07"
        }))
        .unwrap();
        assert_eq!(q.start, date!(2025 - 08 - 01));
        assert_eq!(q.end, date!(2025 - 08 - 07));
    }
}
