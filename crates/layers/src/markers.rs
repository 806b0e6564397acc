use foundation::bounds::{Aabb2, Interval};
use foundation::color::Rgba;
use foundation::math::{Degenerate, LinearScale, Vec2};
use scene::{CircleTarget, Dataset, DatasetExtent, FilterState, RowId};

use crate::symbology::Symbology;

/// Linear lon/lat -> screen mapping over a plot rectangle.
///
/// Not a cartographic projection: longitude and latitude are scaled
/// independently from the dataset's bounding box. Screen Y grows downwards,
/// so the highest latitude lands on the plot's top edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapProjector {
    lon: LinearScale,
    lat: LinearScale,
}

impl MapProjector {
    /// `plot` is in screen pixels: `min` is the top-left corner, `max` the bottom-right.
    pub fn new(geo: Aabb2, plot: Aabb2) -> Self {
        Self {
            lon: LinearScale::new(geo.x(), Interval::new(plot.min[0], plot.max[0])),
            lat: LinearScale::new(geo.y(), Interval::new(plot.max[1], plot.min[1])),
        }
    }

    pub fn project(&self, lon_lat: Vec2) -> Vec2 {
        Vec2::new(self.lon.map(lon_lat.x), self.lat.map(lon_lat.y))
    }
}

pub fn project_point(lon_lat: Vec2, geo: Aabb2, plot: Aabb2) -> Vec2 {
    MapProjector::new(geo, plot).project(lon_lat)
}

/// `|elevation|` -> diameter in pixels. A zero-width domain yields the largest size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SizeScale(LinearScale);

impl SizeScale {
    pub fn new(elevation: Interval, diameter_px: Interval) -> Self {
        Self(LinearScale::new(elevation, diameter_px).with_degenerate(Degenerate::RangeMax))
    }

    pub fn diameter(&self, abs_elevation: f64) -> f64 {
        self.0.map(abs_elevation)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
    pub row: RowId,
    pub center: Vec2,
    pub diameter: f64,
    pub fill: Rgba,
}

impl Marker {
    pub fn target(&self) -> CircleTarget {
        CircleTarget {
            row: self.row,
            center: self.center,
            radius: self.diameter * 0.5,
        }
    }
}

/// Turns the dataset into map markers for the current filters and plot area.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerLayer {
    pub plot: Aabb2,
    pub diameter_px: Interval,
}

impl MarkerLayer {
    pub fn new(plot: Aabb2, diameter_px: Interval) -> Self {
        Self { plot, diameter_px }
    }

    /// Markers in dataset order (which is also paint order).
    ///
    /// A record is skipped when latitude, longitude or elevation is not
    /// numeric, or when `filters` does not admit it. With no geographic
    /// extent the result is empty.
    pub fn extract(
        &self,
        dataset: &Dataset,
        extent: &DatasetExtent,
        symbology: &Symbology,
        filters: &FilterState,
    ) -> Vec<Marker> {
        let (Some(geo), Some(elevation)) = (extent.geo, extent.elevation) else {
            return Vec::new();
        };
        let projector = MapProjector::new(geo, self.plot);
        let sizes = SizeScale::new(elevation, self.diameter_px);

        dataset
            .records()
            .filter_map(|record| {
                let lon_lat = record.lon_lat()?;
                let abs_elev = record.abs_elevation()?;
                if !filters.admits_record(&record) {
                    return None;
                }
                Some(Marker {
                    row: record.id(),
                    center: projector.project(lon_lat),
                    diameter: sizes.diameter(abs_elev),
                    fill: symbology.fill_for_record(&record),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{MapProjector, MarkerLayer, SizeScale, project_point};
    use crate::symbology::{ERUPTION_CODES, Symbology, default_palette};
    use foundation::bounds::{Aabb2, Interval};
    use foundation::math::Vec2;
    use scene::{DatasetExtent, FilterState, RowId};

    const HEADER: &str =
        "Volcano Name,Latitude,Longitude,Elevation (m),TypeCategory,Last Known Eruption\n";

    fn plot() -> Aabb2 {
        Aabb2::new([350.0, 220.0], [900.0, 600.0])
    }

    #[test]
    fn projection_maps_corners_and_flips_y() {
        let geo = Aabb2::new([-180.0, -60.0], [180.0, 80.0]);
        let p = MapProjector::new(geo, plot());
        assert_eq!(p.project(Vec2::new(-180.0, -60.0)), Vec2::new(350.0, 600.0));
        assert_eq!(p.project(Vec2::new(180.0, 80.0)), Vec2::new(900.0, 220.0));
        assert_eq!(
            project_point(Vec2::new(0.0, 10.0), geo, plot()),
            Vec2::new(625.0, 410.0)
        );
    }

    #[test]
    fn degenerate_geo_box_centers_points() {
        let geo = Aabb2::new([10.0, 20.0], [10.0, 20.0]);
        let p = MapProjector::new(geo, plot());
        assert_eq!(p.project(Vec2::new(10.0, 20.0)), Vec2::new(625.0, 410.0));
    }

    #[test]
    fn size_scale_guards_single_value_domain() {
        let s = SizeScale::new(Interval::point(1200.0), Interval::new(5.0, 80.0));
        assert_eq!(s.diameter(1200.0), 80.0);
        let s = SizeScale::new(Interval::new(0.0, 1000.0), Interval::new(5.0, 80.0));
        assert_eq!(s.diameter(500.0), 42.5);
    }

    fn extract(text: &str, filters: impl FnOnce(&mut FilterState)) -> Vec<super::Marker> {
        let ds = formats::parse_dataset_str(text).expect("dataset");
        let extent = DatasetExtent::compute(&ds);
        let symbology = Symbology::compute(&ds, &default_palette());
        let mut f = FilterState::new(
            symbology.colors.categories(),
            ERUPTION_CODES.iter().map(|e| e.code),
        );
        filters(&mut f);
        MarkerLayer::new(plot(), Interval::new(5.0, 80.0)).extract(&ds, &extent, &symbology, &f)
    }

    #[test]
    fn markers_stay_inside_plot_area() {
        let text = format!(
            "{HEADER}A,-40,-170,100,Shield,D1\nB,65,175,-4000,Caldera,D2\nC,12,30,2500,Shield,U\nD,bad,30,2500,Shield,U\nE,0,0,,Shield,D1\n"
        );
        let markers = extract(&text, |_| {});
        let rows: Vec<RowId> = markers.iter().map(|m| m.row).collect();
        assert_eq!(rows, vec![RowId(0), RowId(1), RowId(2)]);
        for m in &markers {
            assert!(plot().contains(m.center), "{m:?}");
            assert!(m.diameter >= 5.0 && m.diameter <= 80.0);
        }
        // Sign is discarded before sizing: B has the largest |elevation|.
        assert_eq!(markers[1].diameter, 80.0);
        assert_eq!(markers[0].diameter, 5.0);
    }

    #[test]
    fn filters_remove_and_restore_markers() {
        let text = format!("{HEADER}A,1,1,100,Shield,D1\nB,2,2,200,Caldera,D2\nC,3,3,300,,D1\n");
        assert_eq!(extract(&text, |_| {}).len(), 2);
        let hidden = extract(&text, |f| {
            f.set_category_visible("Shield", false);
        });
        assert_eq!(hidden.iter().map(|m| m.row).collect::<Vec<_>>(), vec![RowId(1)]);
        let hidden = extract(&text, |f| {
            f.set_eruption_visible("D2", false);
        });
        assert_eq!(hidden.iter().map(|m| m.row).collect::<Vec<_>>(), vec![RowId(0)]);
    }

    #[test]
    fn no_geo_rows_gives_no_markers() {
        let text = format!("{HEADER}A,,,100,Shield,D1\n");
        assert!(extract(&text, |_| {}).is_empty());
    }

    #[test]
    fn single_row_is_a_maximal_circle() {
        let text = format!("{HEADER}Solo,10,10,500,Shield,D1\n");
        let markers = extract(&text, |_| {});
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].diameter, 80.0);
        assert!(markers[0].center.is_finite());
    }
}
