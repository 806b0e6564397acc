use foundation::color::Rgba;
use foundation::math::Vec2;
use layers::{Legend, Marker, SizeScale, Symbology};
use render::RenderFrame;
use scene::{Dataset, Record, RowId};

use crate::config::ViewConfig;
use crate::navigation::{DetailError, Navigation, parse_detail_id};
use crate::Viewport;

pub const FALLBACK_TITLE: &str = "Volcano";
pub const DETAILS_HEADING: &str = "Volcano details";
pub const BACK_LABEL: &str = "← Back to map";

/// State of the single-volcano page.
///
/// Colors come from the same [`Symbology`] the map builds over the whole
/// dataset, so the circle here matches the one that was clicked.
#[derive(Debug, Clone)]
pub struct DetailView {
    dataset: Dataset,
    symbology: Symbology,
    legend: Legend,
    row: RowId,
    config: ViewConfig,
    viewport: Viewport,
}

impl DetailView {
    /// Validates the raw `id` parameter; any failure maps to the not-found page.
    pub fn open(
        dataset: Dataset,
        raw_id: Option<&str>,
        config: ViewConfig,
        viewport: Viewport,
    ) -> Result<Self, DetailError> {
        let row = parse_detail_id(raw_id, dataset.len())?;
        let symbology = Symbology::compute(&dataset, &config.palette_colors());
        let legend = Legend::from_symbology(&symbology);
        Ok(Self {
            dataset,
            symbology,
            legend,
            row,
            config,
            viewport,
        })
    }

    pub fn row(&self) -> RowId {
        self.row
    }

    pub fn record(&self) -> Option<Record<'_>> {
        self.dataset.record(self.row)
    }

    pub fn symbology(&self) -> &Symbology {
        &self.symbology
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    /// `Volcano Name`, or a generic title when blank.
    pub fn title(&self) -> &str {
        self.record()
            .map(|r| r.name())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(FALLBACK_TITLE)
    }

    /// Every `(column, value)` of the record, in header order.
    pub fn fields(&self) -> Vec<(String, String)> {
        self.record()
            .map(|r| {
                r.fields()
                    .map(|(c, v)| (c.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The enlarged circle, or `None` when the elevation is not numeric.
    pub fn marker(&self) -> Option<Marker> {
        let record = self.record()?;
        let abs_elev = record.abs_elevation()?;
        let sizes = SizeScale::new(
            self.config.detail_elevation_domain(),
            self.config.detail_marker_range(),
        );
        Some(Marker {
            row: self.row,
            center: Vec2::new(self.viewport.width / 2.0, self.viewport.height / 2.0 + 50.0),
            diameter: sizes.diameter(abs_elev),
            fill: self.symbology.fill_for_record(&record),
        })
    }

    pub fn back(&self) -> Navigation {
        Navigation::Map
    }

    pub fn frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport.width, self.viewport.height);
        frame.clear(Rgba::BLACK);
        if let Some(m) = self.marker() {
            frame.circle(m.center, m.diameter, m.fill);
        }
        frame
    }
}
