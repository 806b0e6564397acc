use foundation::color::Rgba;
use foundation::math::Vec2;
use layers::{Legend, Marker, MarkerLayer, Symbology, Tooltip, TooltipStyle};
use render::{RenderFrame, TextMeasure, TextStyle};
use scene::{CircleTarget, Dataset, DatasetExtent, FilterState, RowId, hit_test};

use crate::config::ViewConfig;
use crate::navigation::Navigation;
use crate::Viewport;

pub const HINT_COLOR: Rgba = Rgba::rgb(0xff, 0xb3, 0x47);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// State of the world map page, built once from the loaded dataset.
///
/// Markers are derived on demand from the current filters and viewport, so
/// a toggle or resize shows up on the very next frame, and a click is always
/// tested against exactly what that frame would paint.
#[derive(Debug, Clone)]
pub struct MapView {
    dataset: Dataset,
    extent: DatasetExtent,
    symbology: Symbology,
    legend: Legend,
    filters: FilterState,
    config: ViewConfig,
    viewport: Viewport,
    pointer: Option<Vec2>,
}

impl MapView {
    pub fn new(dataset: Dataset, config: ViewConfig, viewport: Viewport) -> Self {
        let extent = DatasetExtent::compute(&dataset);
        let symbology = Symbology::compute(&dataset, &config.palette_colors());
        let legend = Legend::from_symbology(&symbology);
        let filters =
            FilterState::new(symbology.colors.categories(), symbology.opacity.codes());
        Self {
            dataset,
            extent,
            symbology,
            legend,
            filters,
            config,
            viewport,
            pointer: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn extent(&self) -> &DatasetExtent {
        &self.extent
    }

    pub fn symbology(&self) -> &Symbology {
        &self.symbology
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Some(Vec2::new(x, y));
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Returns `false` if `category` has no legend entry.
    pub fn set_category_visible(&mut self, category: &str, visible: bool) -> bool {
        self.filters.set_category_visible(category, visible)
    }

    /// Returns `false` if `code` has no legend entry.
    pub fn set_eruption_visible(&mut self, code: &str, visible: bool) -> bool {
        self.filters.set_eruption_visible(code, visible)
    }

    /// Visible markers in paint order.
    pub fn markers(&self) -> Vec<Marker> {
        MarkerLayer::new(
            self.config.map_plot_area(self.viewport),
            self.config.map_marker_range(),
        )
        .extract(&self.dataset, &self.extent, &self.symbology, &self.filters)
    }

    pub fn hit_test(&self, point: Vec2) -> Option<RowId> {
        let targets: Vec<CircleTarget> = self.markers().iter().map(Marker::target).collect();
        hit_test(point, &targets)
    }

    pub fn hovered(&self) -> Option<RowId> {
        self.hit_test(self.pointer?)
    }

    pub fn cursor(&self) -> Cursor {
        if self.hovered().is_some() {
            Cursor::Pointer
        } else {
            Cursor::Default
        }
    }

    /// A press over a marker opens its detail page; a miss does nothing.
    pub fn pointer_pressed(&self, x: f64, y: f64) -> Option<Navigation> {
        self.hit_test(Vec2::new(x, y)).map(Navigation::Detail)
    }

    pub fn frame(&self, measure: &dyn TextMeasure) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport.width, self.viewport.height);
        frame.clear(Rgba::BLACK);
        self.draw_title(&mut frame);

        let markers = self.markers();
        for m in &markers {
            frame.circle(m.center, m.diameter, m.fill);
        }

        let hovered = self.pointer.and_then(|p| {
            let targets: Vec<CircleTarget> = markers.iter().map(Marker::target).collect();
            hit_test(p, &targets)
        });
        if let Some(row) = hovered
            && let Some(marker) = markers.iter().find(|m| m.row == row)
            && let Some(record) = self.dataset.record(row)
        {
            let offset = self.config.tooltip_offset;
            let origin = Vec2::new(marker.center.x + offset[0], marker.center.y + offset[1]);
            Tooltip::for_record(&record, origin, TooltipStyle::default(), measure)
                .draw(&mut frame);
        }
        frame
    }

    fn draw_title(&self, frame: &mut RenderFrame) {
        let cx = self.viewport.width / 2.0;
        frame.text(
            self.config.title.clone(),
            Vec2::new(cx, 40.0),
            TextStyle::new(48.0, Rgba::WHITE).bold().centered(),
        );
        frame.text(
            self.config.subtitle.clone(),
            Vec2::new(cx, 95.0),
            TextStyle::new(18.0, Rgba::WHITE).centered(),
        );
        frame.text(
            self.config.hint.clone(),
            Vec2::new(cx, 120.0),
            TextStyle::new(15.0, HINT_COLOR).centered(),
        );
    }
}
