pub mod config;
pub mod detail_view;
pub mod map_view;
pub mod navigation;
pub mod panels;

pub use config::*;
pub use detail_view::*;
pub use map_view::*;
pub use navigation::*;

/// Drawing surface size in CSS pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}
