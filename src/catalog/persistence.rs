use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::source::Catalog;
use crate::error::{OrderError, Result};
use crate::models::{AddOn, DeliverySlot, FoodItem, UserTarget};

/// On-disk catalog document shape.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    items: Vec<FoodItem>,

    #[serde(rename = "addOns", default)]
    add_ons: Vec<AddOn>,

    schedule: Vec<DeliverySlot>,
}

/// Load a catalog from a JSON file.
///
/// Rejects items with negative price or macro figures; duplicate ids are
/// deduplicated by the catalog (last definition wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;

    for item in &file.items {
        if !item.is_valid() {
            return Err(OrderError::InvalidInput(format!(
                "menu item '{}' has negative price or macro figures",
                item.name
            )));
        }
    }
    for add_on in &file.add_ons {
        if add_on.price < 0.0 {
            return Err(OrderError::InvalidInput(format!(
                "add-on '{}' has a negative price",
                add_on.name
            )));
        }
    }

    Ok(Catalog::new(file.items, file.add_ons, file.schedule))
}

/// Load user targets from a JSON file.
///
/// Every goal must be positive.
pub fn load_targets<P: AsRef<Path>>(path: P) -> Result<UserTarget> {
    let content = fs::read_to_string(path)?;
    let targets: UserTarget = serde_json::from_str(&content)?;

    if !targets.is_valid() {
        return Err(OrderError::InvalidInput(
            "every goal must be positive".to_string(),
        ));
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_json(price: f64) -> String {
        format!(
            r#"{{
                "items": [
                    {{
                        "id": "1",
                        "name": "Test Bowl",
                        "description": "A bowl",
                        "price": {},
                        "image": "",
                        "macros": {{ "calories": 400, "protein": 30, "carbs": 40, "fat": 10 }},
                        "category": "MUSCLE_GAIN",
                        "stock": 8,
                        "availableSlots": ["LUNCH", "DINNER"]
                    }}
                ],
                "addOns": [
                    {{ "id": "ao1", "name": "Extra Protein Powder", "price": 5.0 }}
                ],
                "schedule": [
                    {{ "id": "LUNCH", "label": "Lunch", "cutoff": "9:00 AM", "delivery": "12:00 PM", "cutoffHour": 9 }}
                ]
            }}"#,
            price
        )
    }

    #[test]
    fn test_load_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(catalog_json(12.5).as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.items().len(), 1);
        assert_eq!(catalog.items()[0].name, "Test Bowl");
        assert_eq!(catalog.add_ons().len(), 1);
        assert_eq!(catalog.schedule().len(), 1);
    }

    #[test]
    fn test_load_catalog_rejects_negative_price() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(catalog_json(-1.0).as_bytes()).unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, OrderError::InvalidInput(_)));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, OrderError::Io(_)));
    }

    #[test]
    fn test_load_targets() {
        let json = r#"{ "proteinGoal": 120, "carbsGoal": 180, "fatGoal": 50, "caloriesGoal": 2000 }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let targets = load_targets(file.path()).unwrap();
        assert!((targets.protein_goal - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_load_targets_rejects_non_positive_goal() {
        let json = r#"{ "proteinGoal": 0, "carbsGoal": 180, "fatGoal": 50, "caloriesGoal": 2000 }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let err = load_targets(file.path()).unwrap_err();
        assert!(matches!(err, OrderError::InvalidInput(_)));
    }
}
