//! Calorie derivation
//!
//! Converts macro grams to whole calories using Atwater factors.

/// Calories per gram of protein and carbohydrate
const KCAL_PER_G_PROTEIN_CARB: f64 = 4.0;

/// Calories per gram of fat
const KCAL_PER_G_FAT: f64 = 9.0;

/// Derive whole calories from macro grams: round(4p + 4c + 9f)
///
/// Fiber does not contribute. Non-finite inputs are treated as 0 so that
/// downstream aggregation stays total. Rounding is half away from zero.
pub fn derive_calories(protein_g: f64, carb_g: f64, fat_g: f64) -> i64 {
    let protein = finite_or_zero(protein_g);
    let carb = finite_or_zero(carb_g);
    let fat = finite_or_zero(fat_g);

    (protein * KCAL_PER_G_PROTEIN_CARB + carb * KCAL_PER_G_PROTEIN_CARB + fat * KCAL_PER_G_FAT)
        .round() as i64
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_arithmetic() {
        // 25*4 + 1*4 + 2*9 = 100 + 4 + 18
        assert_eq!(derive_calories(25.0, 1.0, 2.0), 122);
    }

    #[test]
    fn test_zero_macros() {
        assert_eq!(derive_calories(0.0, 0.0, 0.0), 0);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 0.5*4 + 0.375*4 = 2 + 1.5 = 3.5 -> 4
        assert_eq!(derive_calories(0.5, 0.375, 0.0), 4);
    }

    #[test]
    fn test_fractional_grams() {
        // 10.3*4 + 20.6*4 + 5.1*9 = 41.2 + 82.4 + 45.9 = 169.5 -> 170
        assert_eq!(derive_calories(10.3, 20.6, 5.1), 170);
    }

    #[test]
    fn test_non_finite_inputs_treated_as_zero() {
        assert_eq!(derive_calories(f64::NAN, 1.0, 2.0), 22);
        assert_eq!(derive_calories(25.0, f64::INFINITY, 2.0), 118);
        assert_eq!(derive_calories(f64::NAN, f64::NAN, f64::NAN), 0);
    }
}
