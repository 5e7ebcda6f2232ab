//! Suggestion lists for free-text form fields

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Option set category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DropdownCategory {
    Brands,
    Types,
    Colors,
    Urgencies,
}

/// Previously seen values per category, in first-seen order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DropdownOptions {
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub brands: IndexSet<String>,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub types: IndexSet<String>,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub colors: IndexSet<String>,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub urgencies: IndexSet<String>,
}

impl DropdownOptions {
    pub fn get(&self, category: DropdownCategory) -> &IndexSet<String> {
        match category {
            DropdownCategory::Brands => &self.brands,
            DropdownCategory::Types => &self.types,
            DropdownCategory::Colors => &self.colors,
            DropdownCategory::Urgencies => &self.urgencies,
        }
    }

    fn get_mut(&mut self, category: DropdownCategory) -> &mut IndexSet<String> {
        match category {
            DropdownCategory::Brands => &mut self.brands,
            DropdownCategory::Types => &mut self.types,
            DropdownCategory::Colors => &mut self.colors,
            DropdownCategory::Urgencies => &mut self.urgencies,
        }
    }

    /// Add a value; returns false for blanks and values already present
    pub fn insert(&mut self, category: DropdownCategory, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        self.get_mut(category).insert(value.to_string())
    }
}

impl Default for DropdownOptions {
    fn default() -> Self {
        fn set(values: &[&str]) -> IndexSet<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        Self {
            brands: set(&["Overture", "Sunlu", "Hatchbox"]),
            types: set(&["PLA", "PETG", "ABS", "TPU"]),
            colors: set(&["Black", "White", "Space Gray", "Red", "Blue", "Green"]),
            urgencies: set(&["Low", "Medium", "High"]),
        }
    }
}

/// Add dropdown option request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddDropdownOption {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut options = DropdownOptions::default();
        assert!(options.insert(DropdownCategory::Brands, "Polymaker"));
        assert!(!options.insert(DropdownCategory::Brands, "Polymaker"));
        assert!(!options.insert(DropdownCategory::Brands, " Sunlu "));
        assert!(!options.insert(DropdownCategory::Colors, "   "));
        assert_eq!(options.brands.len(), 4);
        assert_eq!(options.brands.last().map(String::as_str), Some("Polymaker"));
    }

    #[test]
    fn test_serializes_as_arrays() {
        let value = serde_json::to_value(DropdownOptions::default()).unwrap();
        assert_eq!(value["types"][0], "PLA");
        assert_eq!(value["urgencies"].as_array().map(Vec::len), Some(3));
    }
}
