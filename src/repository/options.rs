//! Dropdown option methods on Store

use super::Store;
use crate::models::DropdownCategory;

impl Store {
    /// Remember a value for a category; duplicates are ignored
    pub fn options_add(&mut self, category: DropdownCategory, value: &str) -> bool {
        self.dropdown_options.insert(category, value)
    }
}
