use crate::frame::TextStyle;

/// Width of a single line of text as the backend would lay it out.
pub trait TextMeasure {
    fn text_width(&self, text: &str, style: &TextStyle) -> f64;
}

/// Fixed advance per character, for backends with no font metrics (SVG, tests).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ApproxTextMeasure {
    /// Advance of one character as a fraction of the font size.
    pub char_width_em: f64,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self {
            char_width_em: 0.55,
        }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn text_width(&self, text: &str, style: &TextStyle) -> f64 {
        let em = if style.bold {
            self.char_width_em * 1.1
        } else {
            self.char_width_em
        };
        text.chars().count() as f64 * style.size_px * em
    }
}
