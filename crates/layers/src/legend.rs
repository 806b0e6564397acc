use foundation::color::Rgba;

use crate::symbology::{ERUPTION_CODES, Symbology};

pub const CATEGORY_HEADING: &str = "TypeCategory legend";
pub const ERUPTION_HEADING: &str = "Opacity = recency of last eruption";
pub const SIZE_NOTE: &str =
    "Note: circle diameter is proportional to the volcano's elevation (higher elevation → larger circle).";

/// Grey used for the opacity swatches.
const SWATCH_GREY: Rgba = Rgba::rgb(200, 200, 200);

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    pub category: String,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EruptionEntry {
    pub code: &'static str,
    pub period: &'static str,
    pub swatch: Rgba,
}

impl EruptionEntry {
    pub fn label(&self) -> String {
        format!("{}: {}", self.code, self.period)
    }
}

/// Legend content shared by both views; only the map makes it interactive.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub categories: Vec<CategoryEntry>,
    pub eruptions: Vec<EruptionEntry>,
}

impl Legend {
    pub fn from_symbology(symbology: &Symbology) -> Self {
        let categories = symbology
            .colors
            .entries()
            .iter()
            .map(|(category, color)| CategoryEntry {
                category: category.clone(),
                color: *color,
            })
            .collect();
        let eruptions = ERUPTION_CODES
            .iter()
            .map(|e| EruptionEntry {
                code: e.code,
                period: e.period,
                swatch: SWATCH_GREY.with_alpha(symbology.opacity.alpha_for(e.code)),
            })
            .collect();
        Self {
            categories,
            eruptions,
        }
    }
}
