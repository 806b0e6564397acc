use foundation::bounds::{Aabb2, Interval};

use crate::dataset::Dataset;

/// Ranges derived from the full dataset at load time.
///
/// `geo` spans longitude on x and latitude on y over rows where both are
/// numeric. `elevation` spans `|elevation|` over rows with numeric elevation.
/// Either is `None` when no row qualifies.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DatasetExtent {
    pub geo: Option<Aabb2>,
    pub elevation: Option<Interval>,
}

impl DatasetExtent {
    pub fn compute(dataset: &Dataset) -> Self {
        Self {
            geo: Aabb2::covering(dataset.records().filter_map(|r| r.lon_lat())),
            elevation: Interval::covering(dataset.records().filter_map(|r| r.abs_elevation())),
        }
    }

    pub fn longitude(&self) -> Option<Interval> {
        self.geo.map(|b| b.x())
    }

    pub fn latitude(&self) -> Option<Interval> {
        self.geo.map(|b| b.y())
    }

    /// False when no row can be placed on the map.
    pub fn has_geo(&self) -> bool {
        self.geo.is_some()
    }
}
