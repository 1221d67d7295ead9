//! Catalog matching
//!
//! Filters catalog rows into a calorie tolerance window and orders the
//! survivors by calorie value.

use serde_json::Value;

use crate::catalog::Catalog;
use crate::models::Recommendation;

use super::{PlanError, PlanResult};

/// Match catalog rows against a calorie target
///
/// Rows are kept when `|calories - target| <= tolerance` (both boundaries
/// inclusive) and, if a category is requested, when the row's category
/// equals it case-insensitively. Survivors are projected to name/calories
/// and sorted ascending by calories; rows with equal calories keep their
/// catalog order (stable sort).
///
/// A negative tolerance is permitted; the inclusive comparison then admits
/// nothing. An empty result is a valid outcome, not an error.
pub fn recommend(
    catalog: &Catalog,
    target: f64,
    tolerance: f64,
    category: Option<&str>,
) -> PlanResult<Vec<Recommendation>> {
    if !target.is_finite() {
        return Err(PlanError::InvalidInput(
            "calorie target must be a finite number".to_string(),
        ));
    }
    if !tolerance.is_finite() {
        return Err(PlanError::InvalidInput(
            "tolerance must be a finite number".to_string(),
        ));
    }

    // An empty snapshot has no column labels to validate; it simply has
    // nothing to match.
    if catalog.is_empty() {
        return Ok(Vec::new());
    }

    // Schema check against the catalog's normalized column labels
    let mut required = vec!["name", "calories"];
    if category.is_some() {
        required.push("category");
    }
    for column in required {
        if !catalog.has_column(column) {
            return Err(PlanError::Schema {
                column: column.to_string(),
            });
        }
    }

    let wanted_category = category.map(|c| c.trim().to_lowercase());

    let mut matches: Vec<Recommendation> = catalog
        .rows()
        .iter()
        .filter(|row| match &wanted_category {
            Some(wanted) => row
                .get("category")
                .and_then(Value::as_str)
                .map(|c| c.to_lowercase() == *wanted)
                .unwrap_or(false),
            None => true,
        })
        .filter_map(|row| {
            // Rows without a usable calorie number never match; mirrors a
            // NaN comparison coming out false in a tabular filter.
            let calories = row.get("calories").and_then(Value::as_f64)?;
            if !calories.is_finite() || (calories - target).abs() > tolerance {
                return None;
            }
            let name = match row.get("name") {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => return None,
            };
            Some(Recommendation::new(name, calories))
        })
        .collect();

    // Vec::sort_by is stable: calorie ties keep catalog order
    matches.sort_by(|a, b| a.calories.total_cmp(&b.calories));

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_catalog() -> Catalog {
        Catalog::from_rows(vec![
            json!({"name": "Nasi Goreng", "calories": 630.0, "category": "makanan"}),
            json!({"name": "Gado-Gado", "calories": 520.0, "category": "makanan"}),
            json!({"name": "Es Teh", "calories": 90.0, "category": "minuman"}),
            json!({"name": "Soto Ayam", "calories": 520.0, "category": "MAKANAN"}),
            json!({"name": "Rendang", "calories": 700.0, "category": "makanan"}),
        ])
        .unwrap()
    }

    #[test]
    fn test_window_and_ordering() {
        let result = recommend(&sample_catalog(), 600.0, 100.0, None).unwrap();
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Gado-Gado", "Soto Ayam", "Nasi Goreng", "Rendang"]);
    }

    #[test]
    fn test_tie_keeps_catalog_order() {
        let result = recommend(&sample_catalog(), 520.0, 0.0, None).unwrap();
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Gado-Gado", "Soto Ayam"]);
    }

    #[test]
    fn test_inclusive_boundaries() {
        let catalog = Catalog::from_rows(vec![
            json!({"name": "Low", "calories": 400.0}),
            json!({"name": "High", "calories": 600.0}),
            json!({"name": "Above", "calories": 600.001}),
        ])
        .unwrap();

        let result = recommend(&catalog, 500.0, 100.0, None).unwrap();
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Low", "High"]);
    }

    #[test]
    fn test_negative_tolerance_yields_no_matches() {
        let result = recommend(&sample_catalog(), 630.0, -1.0, None).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let result = recommend(&sample_catalog(), 520.0, 150.0, Some("Makanan")).unwrap();
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        // Soto Ayam is tagged "MAKANAN" and still matches
        assert_eq!(names, ["Gado-Gado", "Soto Ayam", "Nasi Goreng"]);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let result = recommend(&sample_catalog(), 520.0, 500.0, Some("dessert")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_schema_error_names_missing_column() {
        let catalog = Catalog::from_rows(vec![json!({"name": "A", "kcal": 100.0})]).unwrap();
        match recommend(&catalog, 100.0, 50.0, None) {
            Err(PlanError::Schema { column }) => assert_eq!(column, "calories"),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_category_column_required_only_when_requested() {
        let catalog = Catalog::from_rows(vec![json!({"name": "A", "calories": 100.0})]).unwrap();
        assert!(recommend(&catalog, 100.0, 50.0, None).is_ok());
        match recommend(&catalog, 100.0, 50.0, Some("makanan")) {
            Err(PlanError::Schema { column }) => assert_eq!(column, "category"),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_labels_match() {
        let catalog = Catalog::from_rows(vec![
            json!({"  Name ": "Bakso", " Calories ": 380.0}),
        ])
        .unwrap();
        let result = recommend(&catalog, 400.0, 50.0, None).unwrap();
        assert_eq!(result, vec![Recommendation::new("Bakso", 380.0)]);
    }

    #[test]
    fn test_non_numeric_calories_never_match() {
        let catalog = Catalog::from_rows(vec![
            json!({"name": "Good", "calories": 500.0}),
            json!({"name": "Bad", "calories": "lots"}),
        ])
        .unwrap();
        let result = recommend(&catalog, 500.0, 10.0, None).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Good");
    }

    #[test]
    fn test_empty_catalog_is_not_an_error() {
        let catalog = Catalog::from_rows(vec![]).unwrap();
        let result = recommend(&catalog, 500.0, 100.0, None).unwrap();
        assert!(result.is_empty());

        // A catalog with the right columns but no window hits returns empty
        let catalog = Catalog::from_rows(vec![json!({"name": "A", "calories": 10.0})]).unwrap();
        let result = recommend(&catalog, 500.0, 100.0, None).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let catalog = sample_catalog();
        let first = recommend(&catalog, 600.0, 100.0, Some("makanan")).unwrap();
        let second = recommend(&catalog, 600.0, 100.0, Some("makanan")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        let catalog = sample_catalog();
        assert!(recommend(&catalog, f64::NAN, 100.0, None).is_err());
        assert!(recommend(&catalog, 500.0, f64::INFINITY, None).is_err());
    }
}
