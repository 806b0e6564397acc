use foundation::color::Rgba;
use scene::{Dataset, Record};

/// Category palette, assigned cyclically in first-seen category order.
pub const DEFAULT_PALETTE: [&str; 9] = [
    "#cf0808ff",
    "#FF6347",
    "#FF7F50",
    "#FF8C00",
    "#FFA500",
    "#FFB347",
    "#FF6A00",
    "#FF3300",
    "#ffbeb4ff",
];

/// Fill for a record whose category has no entry in the color table.
pub const UNKNOWN_CATEGORY_COLOR: Rgba = Rgba::WHITE;

/// Alpha for eruption codes outside [`ERUPTION_CODES`].
pub const DEFAULT_ALPHA: u8 = 150;

/// A `Last Known Eruption` code: more recent means more opaque.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EruptionCode {
    pub code: &'static str,
    pub alpha: u8,
    pub period: &'static str,
}

const fn code(code: &'static str, alpha: u8, period: &'static str) -> EruptionCode {
    EruptionCode {
        code,
        alpha,
        period,
    }
}

/// Fixed code table, in legend order.
pub const ERUPTION_CODES: [EruptionCode; 10] = [
    code("D1", 255, "1964 or later"),
    code("D2", 220, "1900–1963"),
    code("D3", 190, "1800–1899"),
    code("D4", 140, "1700–1799"),
    code("D5", 110, "1500–1699"),
    code("D6", 80, "1–1499 CE"),
    code("D7", 40, "Before the Common Era (Holocene)"),
    code("U", 120, "Undated (Holocene)"),
    code("Q", 100, "Quaternary hydrothermal"),
    code("?", 80, "Uncertain"),
];

pub fn default_palette() -> Vec<Rgba> {
    DEFAULT_PALETTE
        .iter()
        .filter_map(|hex| Rgba::from_hex(hex))
        .collect()
}

/// Category -> color, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    entries: Vec<(String, Rgba)>,
}

impl ColorTable {
    pub fn entries(&self) -> &[(String, Rgba)] {
        &self.entries
    }

    pub fn get(&self, category: &str) -> Option<Rgba> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, color)| *color)
    }

    /// Falls back to [`UNKNOWN_CATEGORY_COLOR`].
    pub fn color_for(&self, category: Option<&str>) -> Rgba {
        category
            .and_then(|c| self.get(c))
            .unwrap_or(UNKNOWN_CATEGORY_COLOR)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(c, _)| c.as_str())
    }
}

/// Assigns `palette[rank % palette.len()]` to each category by first-occurrence rank.
///
/// Deterministic: the same dataset and palette always yield the same table.
/// An empty palette leaves every category on the fallback color.
pub fn compute_color_table(dataset: &Dataset, palette: &[Rgba]) -> ColorTable {
    let entries = dataset
        .categories()
        .into_iter()
        .enumerate()
        .map(|(rank, cat)| {
            let color = if palette.is_empty() {
                UNKNOWN_CATEGORY_COLOR
            } else {
                palette[rank % palette.len()]
            };
            (cat.to_string(), color)
        })
        .collect();
    ColorTable { entries }
}

/// Eruption code -> alpha. Static, never derived from data.
#[derive(Debug, Clone, PartialEq)]
pub struct OpacityTable {
    entries: Vec<(&'static str, u8)>,
    default_alpha: u8,
}

impl OpacityTable {
    pub fn alpha_for(&self, code: &str) -> u8 {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, a)| *a)
            .unwrap_or(self.default_alpha)
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }
}

pub fn compute_opacity_table() -> OpacityTable {
    OpacityTable {
        entries: ERUPTION_CODES.iter().map(|e| (e.code, e.alpha)).collect(),
        default_alpha: DEFAULT_ALPHA,
    }
}

/// The full color/opacity scheme. Both views build it the same way from the
/// whole dataset, which is what keeps a record's fill identical across them.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbology {
    pub colors: ColorTable,
    pub opacity: OpacityTable,
}

impl Symbology {
    pub fn compute(dataset: &Dataset, palette: &[Rgba]) -> Self {
        Self {
            colors: compute_color_table(dataset, palette),
            opacity: compute_opacity_table(),
        }
    }

    /// Category color with the eruption alpha applied (the palette's own alpha is discarded).
    pub fn fill_for(&self, category: Option<&str>, eruption_code: &str) -> Rgba {
        self.colors
            .color_for(category)
            .with_alpha(self.opacity.alpha_for(eruption_code))
    }

    pub fn fill_for_record(&self, record: &Record<'_>) -> Rgba {
        self.fill_for(record.type_category(), record.last_eruption())
    }
}
