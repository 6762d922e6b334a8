//! Unit Converter
//!
//! Canonical unit names and proportional serving-size scaling.
//! No conversion across measurement systems is performed.

use super::error::ValidationError;
use super::ingredient::Ingredient;

/// Raw unit token -> canonical unit
const UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("tablespoons", "tablespoon"),
    ("tablespoon", "tablespoon"),
    ("tbsps", "tablespoon"),
    ("tbsp", "tablespoon"),
    ("tbs", "tablespoon"),
    ("teaspoons", "teaspoon"),
    ("teaspoon", "teaspoon"),
    ("tsps", "teaspoon"),
    ("tsp", "teaspoon"),
    ("ounces", "ounce"),
    ("ounce", "ounce"),
    ("oz", "ounce"),
    ("cups", "cup"),
    ("cup", "cup"),
    ("pounds", "pound"),
    ("pound", "pound"),
    ("lbs", "pound"),
    ("lb", "pound"),
    ("kilograms", "kg"),
    ("kilogram", "kg"),
    ("kg", "kg"),
    ("grams", "g"),
    ("gram", "g"),
    ("g", "g"),
];

/// Map a raw unit token to its canonical form.
///
/// Matching ignores case and a single trailing period (`"Tbsp."`).
pub fn canonical_unit(token: &str) -> Option<&'static str> {
    let token = token.strip_suffix('.').unwrap_or(token).to_lowercase();
    UNIT_SYNONYMS
        .iter()
        .find(|(raw, _)| *raw == token)
        .map(|(_, canonical)| *canonical)
}

/// Scale an ingredient from one serving count to another.
///
/// A missing quantity stays missing. Both serving counts must be at least 1.
pub fn scale(
    ingredient: &Ingredient,
    from_servings: u32,
    to_servings: u32,
) -> Result<Ingredient, ValidationError> {
    if from_servings == 0 {
        return Err(ValidationError::InvalidServings(from_servings));
    }
    if to_servings == 0 {
        return Err(ValidationError::InvalidServings(to_servings));
    }

    let quantity = ingredient
        .quantity
        .map(|q| q * f64::from(to_servings) / f64::from(from_servings));

    Ok(Ingredient {
        quantity,
        ..ingredient.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flour(quantity: Option<f64>) -> Ingredient {
        Ingredient {
            quantity,
            unit: Some("cup".to_string()),
            name: "flour".to_string(),
        }
    }

    #[test]
    fn test_canonical_unit_synonyms() {
        assert_eq!(canonical_unit("tbsp"), Some("tablespoon"));
        assert_eq!(canonical_unit("Tablespoons"), Some("tablespoon"));
        assert_eq!(canonical_unit("cups"), Some("cup"));
        assert_eq!(canonical_unit("oz."), Some("ounce"));
        assert_eq!(canonical_unit("flour"), None);
        assert_eq!(canonical_unit(""), None);
    }

    #[test]
    fn test_scale_doubles_quantity() {
        let scaled = scale(&flour(Some(1.5)), 4, 8).unwrap();
        assert_eq!(scaled.quantity, Some(3.0));
        assert_eq!(scaled.unit.as_deref(), Some("cup"));
        assert_eq!(scaled.name, "flour");
    }

    #[test]
    fn test_scale_there_and_back_recovers_quantity() {
        for q in [0.25, 1.0, 4.5, 7.0 / 3.0, 1000.0] {
            let original = flour(Some(q));
            let back = scale(&scale(&original, 4, 8).unwrap(), 8, 4).unwrap();
            assert!((back.quantity.unwrap() - q).abs() < 1e-9, "quantity {} drifted", q);
        }
        let odd = scale(&scale(&flour(Some(2.0)), 3, 7).unwrap(), 7, 3).unwrap();
        assert!((odd.quantity.unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_keeps_missing_quantity() {
        let scaled = scale(&flour(None), 4, 6).unwrap();
        assert_eq!(scaled.quantity, None);
    }

    #[test]
    fn test_scale_rejects_zero_servings() {
        assert_eq!(scale(&flour(Some(1.0)), 4, 0), Err(ValidationError::InvalidServings(0)));
        assert_eq!(scale(&flour(Some(1.0)), 0, 4), Err(ValidationError::InvalidServings(0)));
    }
}
