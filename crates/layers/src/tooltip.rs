use foundation::color::Rgba;
use foundation::math::Vec2;
use render::{RenderCommand, RenderFrame, Stroke, TextMeasure, TextStyle};
use scene::Record;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TooltipStyle {
    pub text_size_px: f64,
    pub padding: f64,
    pub line_height: f64,
    pub corner_radius: f64,
    pub fill: Rgba,
    pub stroke: Stroke,
    pub text_color: Rgba,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            text_size_px: 14.0,
            padding: 8.0,
            line_height: 18.0,
            corner_radius: 8.0,
            fill: Rgba::rgba(0, 0, 0, 180),
            stroke: Stroke {
                color: Rgba::WHITE,
                width: 1.5,
            },
            text_color: Rgba::WHITE,
        }
    }
}

/// One `column: value` line per column, in header order.
pub fn tooltip_lines(record: &Record<'_>) -> Vec<String> {
    record
        .fields()
        .map(|(column, value)| format!("{column}: {value}"))
        .collect()
}

/// Auto-sized text box anchored at a screen point (its top-left corner).
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub origin: Vec2,
    pub size: Vec2,
    pub lines: Vec<String>,
    pub style: TooltipStyle,
}

impl Tooltip {
    pub fn layout(
        lines: Vec<String>,
        origin: Vec2,
        style: TooltipStyle,
        measure: &dyn TextMeasure,
    ) -> Self {
        let text_style = Self::text_style(&style);
        let widest = lines
            .iter()
            .map(|l| measure.text_width(l, &text_style))
            .fold(0.0, f64::max);
        let size = Vec2::new(
            widest + style.padding * 2.0,
            lines.len() as f64 * style.line_height + style.padding * 2.0,
        );
        Self {
            origin,
            size,
            lines,
            style,
        }
    }

    pub fn for_record(
        record: &Record<'_>,
        origin: Vec2,
        style: TooltipStyle,
        measure: &dyn TextMeasure,
    ) -> Self {
        Self::layout(tooltip_lines(record), origin, style, measure)
    }

    pub fn draw(&self, frame: &mut RenderFrame) {
        frame.push(RenderCommand::RoundedRect {
            origin: self.origin,
            size: self.size,
            radius: self.style.corner_radius,
            fill: self.style.fill,
            stroke: Some(self.style.stroke),
        });
        let text_style = Self::text_style(&self.style);
        for (i, line) in self.lines.iter().enumerate() {
            let origin = Vec2::new(
                self.origin.x + self.style.padding,
                self.origin.y + self.style.padding + i as f64 * self.style.line_height,
            );
            frame.text(line.clone(), origin, text_style);
        }
    }

    fn text_style(style: &TooltipStyle) -> TextStyle {
        TextStyle::new(style.text_size_px, style.text_color)
    }
}
