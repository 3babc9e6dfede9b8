//! The four tracked macronutrients.

/// Calories (kcal) and protein, carbs and fats (grams).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Macros {
    pub fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fats,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
        }
    }
}

impl std::iter::Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_of_nothing_is_zero() {
        let total: Macros = std::iter::empty().sum();
        assert_eq!(total, Macros::zero());
    }

    #[test]
    fn sum_adds_each_field_independently() {
        let total: Macros = [
            Macros::new(300.0, 15.0, 30.0, 10.0),
            Macros::new(200.0, 10.0, 20.0, 5.0),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Macros::new(500.0, 25.0, 50.0, 15.0));
    }
}
