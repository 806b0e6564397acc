use std::collections::HashMap;

use crate::dataset::Record;

/// Legend-driven visibility for the map.
///
/// Two independent maps, both all-visible at construction:
/// - category -> visible
/// - eruption code -> visible
///
/// Admission contract (see [`FilterState::admits`]):
/// - the category must be known AND visible; unknown or blank categories are hidden.
/// - the eruption code is hidden only if it is known AND switched off; unknown codes pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    categories: HashMap<String, bool>,
    eruptions: HashMap<String, bool>,
}

impl FilterState {
    pub fn new<'a, 'b>(
        categories: impl IntoIterator<Item = &'a str>,
        eruption_codes: impl IntoIterator<Item = &'b str>,
    ) -> Self {
        Self {
            categories: categories.into_iter().map(|c| (c.to_string(), true)).collect(),
            eruptions: eruption_codes
                .into_iter()
                .map(|c| (c.to_string(), true))
                .collect(),
        }
    }

    /// Returns `false` (and changes nothing) for a category with no legend entry.
    pub fn set_category_visible(&mut self, category: &str, visible: bool) -> bool {
        match self.categories.get_mut(category) {
            Some(v) => {
                *v = visible;
                true
            }
            None => false,
        }
    }

    /// Returns `false` (and changes nothing) for a code with no legend entry.
    pub fn set_eruption_visible(&mut self, code: &str, visible: bool) -> bool {
        match self.eruptions.get_mut(code) {
            Some(v) => {
                *v = visible;
                true
            }
            None => false,
        }
    }

    pub fn category_visible(&self, category: &str) -> Option<bool> {
        self.categories.get(category).copied()
    }

    pub fn eruption_visible(&self, code: &str) -> Option<bool> {
        self.eruptions.get(code).copied()
    }

    pub fn admits(&self, category: Option<&str>, eruption_code: &str) -> bool {
        let category_ok = category
            .and_then(|c| self.category_visible(c))
            .unwrap_or(false);
        let eruption_ok = self.eruption_visible(eruption_code).unwrap_or(true);
        category_ok && eruption_ok
    }

    pub fn admits_record(&self, record: &Record<'_>) -> bool {
        self.admits(record.type_category(), record.last_eruption())
    }
}
