use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use scene::Dataset;
use scene::dataset::{
    COL_ELEVATION, COL_LAST_ERUPTION, COL_LATITUDE, COL_LONGITUDE, COL_NAME, COL_TYPE_CATEGORY,
};

/// Columns a dataset must carry to be rendered. Any other column is passed through.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_NAME,
    COL_LATITUDE,
    COL_LONGITUDE,
    COL_ELEVATION,
    COL_TYPE_CATEGORY,
    COL_LAST_ERUPTION,
];

#[derive(Debug)]
pub enum TableError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Csv(csv::Error),
    MissingHeader,
    MissingColumn(&'static str),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Io { path, source } => {
                write!(f, "failed to read dataset {}: {source}", path.display())
            }
            TableError::Csv(err) => write!(f, "malformed dataset: {err}"),
            TableError::MissingHeader => write!(f, "dataset has no header row"),
            TableError::MissingColumn(name) => {
                write!(f, "dataset is missing required column {name:?}")
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io { source, .. } => Some(source),
            TableError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        TableError::Csv(err)
    }
}

pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, TableError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_dataset(file)
}

pub fn parse_dataset_str(payload: &str) -> Result<Dataset, TableError> {
    read_dataset(payload.as_bytes())
}

/// Reads a comma-separated table whose first row names the columns.
///
/// Values are kept verbatim (no trimming); ragged rows are accepted and
/// normalized to the header width. A header-only source is a valid empty dataset.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, TableError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if columns.iter().all(|c| c.trim().is_empty()) {
        return Err(TableError::MissingHeader);
    }
    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c == required) {
            return Err(TableError::MissingColumn(required));
        }
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Dataset::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::{TableError, load_dataset, parse_dataset_str};
    use pretty_assertions::assert_eq;
    use scene::RowId;

    const HEADER: &str =
        "Volcano Name,Country,Latitude,Longitude,Elevation (m),TypeCategory,Last Known Eruption";

    #[test]
    fn parses_header_and_rows_in_order() {
        let text = format!(
            "{HEADER}\nEtna,Italy,37.748,14.999,3295,Stratovolcano,D1\n\"Fuji, Mount\",Japan,35.361,138.728,3776,Stratovolcano,D3\n"
        );
        let ds = parse_dataset_str(&text).expect("dataset");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.columns()[1], "Country");
        let fuji = ds.record(RowId(1)).expect("row 1");
        assert_eq!(fuji.name(), "Fuji, Mount");
        assert_eq!(fuji.last_eruption(), "D3");
    }

    #[test]
    fn ragged_rows_are_accepted() {
        let text = format!("{HEADER}\nLonely,Nowhere\n");
        let ds = parse_dataset_str(&text).expect("dataset");
        let row = ds.record(RowId(0)).expect("row");
        assert_eq!(row.name(), "Lonely");
        assert_eq!(row.latitude(), None);
    }

    #[test]
    fn header_only_is_an_empty_dataset() {
        let ds = parse_dataset_str(HEADER).expect("dataset");
        assert!(ds.is_empty());
        assert_eq!(ds.columns().len(), 7);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let err = parse_dataset_str("Volcano Name,Latitude\nEtna,37\n").expect_err("must fail");
        assert!(matches!(err, TableError::MissingColumn("Longitude")));
        assert!(err.to_string().contains("Longitude"));
    }

    #[test]
    fn empty_source_has_no_header() {
        let err = parse_dataset_str("").expect_err("must fail");
        assert!(matches!(err, TableError::MissingHeader));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_dataset("/definitely/not/here/data.csv").expect_err("must fail");
        assert!(matches!(err, TableError::Io { .. }));
        assert!(err.to_string().contains("data.csv"));
    }
}
