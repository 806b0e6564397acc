use std::collections::HashMap;

use foundation::math::Vec2;

pub const COL_NAME: &str = "Volcano Name";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";
pub const COL_ELEVATION: &str = "Elevation (m)";
pub const COL_TYPE_CATEGORY: &str = "TypeCategory";
pub const COL_LAST_ERUPTION: &str = "Last Known Eruption";

/// 0-based position of a record in the loaded sequence.
///
/// Only stable for a single load of a single source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub usize);

impl RowId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered table of volcano records with named, order-preserving columns.
///
/// All values are kept as text; numeric fields are coerced on access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    column_index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Rows shorter than the header are padded with empty values, longer rows are cut.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut column_index = HashMap::with_capacity(columns.len());
        for (i, c) in columns.iter().enumerate() {
            // First occurrence wins for duplicate headers.
            column_index.entry(c.clone()).or_insert(i);
        }
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, String::new());
                r
            })
            .collect();
        Self {
            columns,
            column_index,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn record(&self, id: RowId) -> Option<Record<'_>> {
        let values = self.rows.get(id.0)?;
        Some(Record {
            dataset: self,
            id,
            values,
        })
    }

    /// Records in dataset order.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        self.rows.iter().enumerate().map(|(i, values)| Record {
            dataset: self,
            id: RowId(i),
            values,
        })
    }

    /// Unique non-empty `TypeCategory` values in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for record in self.records() {
            if let Some(cat) = record.type_category()
                && !out.contains(&cat)
            {
                out.push(cat);
            }
        }
        out
    }
}

/// Borrowed view of one row.
#[derive(Debug, Copy, Clone)]
pub struct Record<'a> {
    dataset: &'a Dataset,
    id: RowId,
    values: &'a [String],
}

impl<'a> Record<'a> {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = *self.dataset.column_index.get(column)?;
        self.values.get(idx).map(String::as_str)
    }

    /// Value of `column`, empty when the column does not exist.
    pub fn text(&self, column: &str) -> &'a str {
        self.get(column).unwrap_or("")
    }

    pub fn name(&self) -> &'a str {
        self.text(COL_NAME)
    }

    pub fn latitude(&self) -> Option<f64> {
        parse_number(self.text(COL_LATITUDE))
    }

    pub fn longitude(&self) -> Option<f64> {
        parse_number(self.text(COL_LONGITUDE))
    }

    pub fn elevation(&self) -> Option<f64> {
        parse_number(self.text(COL_ELEVATION))
    }

    /// Elevation with the sign discarded; this is what drives marker size.
    pub fn abs_elevation(&self) -> Option<f64> {
        self.elevation().map(f64::abs)
    }

    /// `(longitude, latitude)` when both are numeric.
    pub fn lon_lat(&self) -> Option<Vec2> {
        Some(Vec2::new(self.longitude()?, self.latitude()?))
    }

    /// `None` for an empty category.
    pub fn type_category(&self) -> Option<&'a str> {
        let v = self.text(COL_TYPE_CATEGORY);
        (!v.is_empty()).then_some(v)
    }

    pub fn last_eruption(&self) -> &'a str {
        self.text(COL_LAST_ERUPTION)
    }

    /// `(column, value)` pairs in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.dataset
            .columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

/// Coerces a text field to a finite number; blanks and garbage yield `None`.
///
/// The whole trimmed field must parse: `"3295 m"` is `None`, not `3295`.
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::{Dataset, RowId, parse_number};
    use foundation::math::Vec2;
    use pretty_assertions::assert_eq;

    fn sample() -> Dataset {
        let columns = ["Volcano Name", "Latitude", "Longitude", "Elevation (m)", "TypeCategory", "Last Known Eruption", "Country"]
            .map(String::from)
            .to_vec();
        let rows = vec![
            vec!["Etna", "37.748", "14.999", "3295", "Stratovolcano", "D1", "Italy"],
            vec!["Nameless", "n/a", "10", "-120", "", "Q", "Nowhere"],
            vec!["Short"],
            vec!["Vesuvius", "40.821", "14.426", "1281", "Stratovolcano", "D2", "Italy"],
        ]
        .into_iter()
        .map(|r| r.into_iter().map(String::from).collect())
        .collect();
        Dataset::new(columns, rows)
    }

    #[test]
    fn row_ids_are_bounded() {
        let ds = sample();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.record(RowId(3)).map(|r| r.id()), Some(RowId(3)));
        assert!(ds.record(RowId(4)).is_none());
    }

    #[test]
    fn typed_accessors_coerce_numbers() {
        let ds = sample();
        let etna = ds.record(RowId(0)).expect("row 0");
        assert_eq!(etna.name(), "Etna");
        assert_eq!(etna.lon_lat(), Some(Vec2::new(14.999, 37.748)));
        assert_eq!(etna.elevation(), Some(3295.0));

        let nameless = ds.record(RowId(1)).expect("row 1");
        assert_eq!(nameless.latitude(), None);
        assert_eq!(nameless.lon_lat(), None);
        assert_eq!(nameless.abs_elevation(), Some(120.0));
        assert_eq!(nameless.type_category(), None);
    }

    #[test]
    fn short_rows_are_padded() {
        let ds = sample();
        let short = ds.record(RowId(2)).expect("row 2");
        assert_eq!(short.name(), "Short");
        assert_eq!(short.text("Country"), "");
        assert_eq!(short.fields().count(), 7);
    }

    #[test]
    fn categories_keep_first_seen_order_and_skip_blanks() {
        assert_eq!(sample().categories(), vec!["Stratovolcano"]);
    }

    #[test]
    fn fields_follow_header_order() {
        let ds = sample();
        let fields: Vec<(&str, &str)> = ds.record(RowId(3)).expect("row").fields().collect();
        assert_eq!(fields[0], ("Volcano Name", "Vesuvius"));
        assert_eq!(fields[6], ("Country", "Italy"));
    }

    #[test]
    fn number_coercion() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("Unknown"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("3295 m"), None);
    }
}
