//! Wire types for the FoodData Central search API and the shape we return.

use serde::{Deserialize, Serialize};

/// Every search result is reported per this serving.
pub const SERVING_WEIGHT: u32 = 100;
pub const SERVING_UNIT: &str = "G";

const KJ_PER_KCAL: f64 = 4.18;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub foods: Vec<FdcFood>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdcFood {
    pub description: String,
    #[serde(default)]
    pub food_nutrients: Vec<FdcNutrient>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdcNutrient {
    pub nutrient_name: String,
    pub value: f64,
    pub unit_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientAmount {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodSearchResult {
    pub description: String,
    pub calories: Option<NutrientAmount>,
    pub protein: Option<NutrientAmount>,
    pub fat: Option<NutrientAmount>,
    pub carbs: Option<NutrientAmount>,
}

impl FdcFood {
    /// First nutrient whose name matches exactly.
    fn nutrient(&self, name: &str) -> Option<NutrientAmount> {
        self.food_nutrients
            .iter()
            .find(|n| n.nutrient_name == name)
            .map(|n| NutrientAmount {
                value: n.value,
                unit: n.unit_name.clone(),
            })
    }

    /// SR Legacy reports energy under a single "Energy" entry, in either kcal or kJ.
    fn calories(&self) -> Option<NutrientAmount> {
        self.nutrient("Energy").map(|energy| {
            if energy.unit == "kJ" {
                NutrientAmount {
                    value: (energy.value / KJ_PER_KCAL * 100.0).round() / 100.0,
                    unit: "KCAL".into(),
                }
            } else {
                energy
            }
        })
    }
}

impl From<&FdcFood> for FoodSearchResult {
    fn from(food: &FdcFood) -> Self {
        Self {
            description: food.description.clone(),
            calories: food.calories(),
            protein: food.nutrient("Protein"),
            fat: food.nutrient("Total lipid (fat)"),
            carbs: food.nutrient("Carbohydrate, by difference"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FoodSearchResponse {
    pub food_weight: u32,
    pub food_unit: &'static str,
    pub search_query: String,
    pub search_results: Vec<FoodSearchResult>,
}

impl FoodSearchResponse {
    pub fn new(search_query: String, foods: &[FdcFood]) -> Self {
        Self {
            food_weight: SERVING_WEIGHT,
            food_unit: SERVING_UNIT,
            search_query,
            search_results: foods.iter().map(FoodSearchResult::from).collect(),
        }
    }
}
