use foundation::bounds::{Aabb2, Interval};
use foundation::color::Rgba;
use layers::DEFAULT_PALETTE;
use serde::{Deserialize, Serialize};

use crate::Viewport;

/// Layout and styling knobs shared by both views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Blank border around the map plot area.
    pub outer_margin: f64,
    /// Extra left inset reserved for the legend panel.
    pub map_left_inset: f64,
    /// Extra top inset reserved for the title block.
    pub map_top_inset: f64,
    pub map_marker_px: [f64; 2],
    pub detail_marker_px: [f64; 2],
    /// `|elevation|` domain of the detail circle; fixed, not derived from data.
    pub detail_elevation_domain: [f64; 2],
    /// Tooltip top-left relative to the hovered marker center.
    pub tooltip_offset: [f64; 2],
    pub palette: Vec<String>,
    pub title: String,
    pub subtitle: String,
    pub hint: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            outer_margin: 100.0,
            map_left_inset: 250.0,
            map_top_inset: 120.0,
            map_marker_px: [5.0, 80.0],
            detail_marker_px: [35.0, 560.0],
            detail_elevation_domain: [0.0, 5000.0],
            tooltip_offset: [15.0, -15.0],
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            title: "Volcanoes of the World".to_string(),
            subtitle: "Interactive map of the world's volcanoes by type, elevation and last eruption"
                .to_string(),
            hint: "Click a circle for details • Use the legend to filter".to_string(),
        }
    }
}

impl ViewConfig {
    /// Parses and validates a JSON config; missing keys take their defaults.
    pub fn from_json_str(payload: &str) -> Result<Self, String> {
        let cfg: ViewConfig = serde_json::from_str(payload).map_err(|e| format!("json: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        for hex in &self.palette {
            if Rgba::from_hex(hex).is_none() {
                return Err(format!("invalid palette color: {hex:?}"));
            }
        }
        let finite = [
            self.outer_margin,
            self.map_left_inset,
            self.map_top_inset,
            self.map_marker_px[0],
            self.map_marker_px[1],
            self.detail_marker_px[0],
            self.detail_marker_px[1],
            self.detail_elevation_domain[0],
            self.detail_elevation_domain[1],
            self.tooltip_offset[0],
            self.tooltip_offset[1],
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err("layout values must be finite".to_string());
        }
        Ok(())
    }

    /// Palette as colors; entries that fail to parse are skipped.
    pub fn palette_colors(&self) -> Vec<Rgba> {
        self.palette.iter().filter_map(|h| Rgba::from_hex(h)).collect()
    }

    /// Map plot rectangle: top-left in `min`, bottom-right in `max`.
    pub fn map_plot_area(&self, viewport: Viewport) -> Aabb2 {
        let m = self.outer_margin;
        Aabb2::new(
            [m + self.map_left_inset, m + self.map_top_inset],
            [viewport.width - m, viewport.height - m],
        )
    }

    pub fn map_marker_range(&self) -> Interval {
        Interval::new(self.map_marker_px[0], self.map_marker_px[1])
    }

    pub fn detail_marker_range(&self) -> Interval {
        Interval::new(self.detail_marker_px[0], self.detail_marker_px[1])
    }

    pub fn detail_elevation_domain(&self) -> Interval {
        Interval::new(self.detail_elevation_domain[0], self.detail_elevation_domain[1])
    }
}
