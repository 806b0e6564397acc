use scene::RowId;

pub const MAP_PAGE: &str = "index.html";
pub const DETAIL_PAGE: &str = "detail.html";
/// Query parameter carrying the row index into the detail page.
pub const ID_PARAM: &str = "id";

/// A full page load requested by user input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Navigation {
    Detail(RowId),
    Map,
}

impl Navigation {
    pub fn href(&self) -> String {
        match self {
            Navigation::Detail(row) => format!("{DETAIL_PAGE}?{ID_PARAM}={row}"),
            Navigation::Map => MAP_PAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    Missing,
    NotANumber(String),
    OutOfRange { id: i64, len: usize },
}

impl DetailError {
    /// The only text the detail page shows for any bad identifier.
    pub fn user_message(&self) -> &'static str {
        "Volcano not found!"
    }
}

impl std::fmt::Display for DetailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailError::Missing => write!(f, "missing {ID_PARAM} parameter"),
            DetailError::NotANumber(raw) => write!(f, "{ID_PARAM} is not a number: {raw:?}"),
            DetailError::OutOfRange { id, len } => {
                write!(f, "{ID_PARAM} {id} is outside [0, {len})")
            }
        }
    }
}

impl std::error::Error for DetailError {}

/// Validates the raw `id` parameter against a dataset of `len` rows.
///
/// The whole trimmed value must be a base-10 integer: `"1.5"` and `"2abc"`
/// are rejected rather than truncated to a leading number.
pub fn parse_detail_id(raw: Option<&str>, len: usize) -> Result<RowId, DetailError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = raw else {
        return Err(DetailError::Missing);
    };
    let id: i64 = raw
        .parse()
        .map_err(|_| DetailError::NotANumber(raw.to_string()))?;
    if id < 0 || id as u64 >= len as u64 {
        return Err(DetailError::OutOfRange { id, len });
    }
    Ok(RowId(id as usize))
}

#[cfg(test)]
mod tests {
    use super::{DetailError, Navigation, parse_detail_id};
    use scene::RowId;

    #[test]
    fn hrefs() {
        assert_eq!(Navigation::Detail(RowId(12)).href(), "detail.html?id=12");
        assert_eq!(Navigation::Map.href(), "index.html");
    }

    #[test]
    fn accepts_ids_in_range() {
        for i in 0..5 {
            assert_eq!(parse_detail_id(Some(i.to_string().as_str()), 5), Ok(RowId(i)));
        }
        assert_eq!(parse_detail_id(Some(" 3 "), 5), Ok(RowId(3)));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(parse_detail_id(None, 5), Err(DetailError::Missing));
        assert_eq!(parse_detail_id(Some(""), 5), Err(DetailError::Missing));
        assert_eq!(
            parse_detail_id(Some("5"), 5),
            Err(DetailError::OutOfRange { id: 5, len: 5 })
        );
        assert_eq!(
            parse_detail_id(Some("-1"), 5),
            Err(DetailError::OutOfRange { id: -1, len: 5 })
        );
        assert!(matches!(
            parse_detail_id(Some("abc"), 5),
            Err(DetailError::NotANumber(_))
        ));
        assert!(matches!(
            parse_detail_id(Some("1.5"), 5),
            Err(DetailError::NotANumber(_))
        ));
        assert!(matches!(
            parse_detail_id(Some("2abc"), 5),
            Err(DetailError::NotANumber(_))
        ));
        assert_eq!(
            parse_detail_id(Some("0"), 0),
            Err(DetailError::OutOfRange { id: 0, len: 0 })
        );
    }

    #[test]
    fn every_error_shows_the_same_message() {
        assert_eq!(DetailError::Missing.user_message(), "Volcano not found!");
        assert_eq!(
            DetailError::OutOfRange { id: 9, len: 1 }.user_message(),
            "Volcano not found!"
        );
    }
}
