use foundation::color::Rgba;
use foundation::math::Vec2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Text is anchored at its top edge; `align` picks the horizontal anchor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub size_px: f64,
    pub bold: bool,
    pub align: TextAlign,
    pub color: Rgba,
}

impl TextStyle {
    pub fn new(size_px: f64, color: Rgba) -> Self {
        Self {
            size_px,
            bold: false,
            align: TextAlign::Left,
            color,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Clear {
        color: Rgba,
    },
    Circle {
        center: Vec2,
        diameter: f64,
        fill: Rgba,
    },
    Text {
        text: String,
        origin: Vec2,
        style: TextStyle,
    },
    RoundedRect {
        origin: Vec2,
        size: Vec2,
        radius: f64,
        fill: Rgba,
        stroke: Option<Stroke>,
    },
}

/// Backend-neutral draw list for one frame, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<RenderCommand>,
}

impl RenderFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self, color: Rgba) {
        self.push(RenderCommand::Clear { color });
    }

    pub fn circle(&mut self, center: Vec2, diameter: f64, fill: Rgba) {
        self.push(RenderCommand::Circle {
            center,
            diameter,
            fill,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, origin: Vec2, style: TextStyle) {
        self.push(RenderCommand::Text {
            text: text.into(),
            origin,
            style,
        });
    }

    /// Circles as `(center, diameter, fill)`, in paint order.
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f64, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            RenderCommand::Circle {
                center,
                diameter,
                fill,
            } => Some((*center, *diameter, *fill)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            RenderCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderCommand, RenderFrame, TextAlign, TextStyle};
    use foundation::color::Rgba;
    use foundation::math::Vec2;

    #[test]
    fn frame_keeps_paint_order() {
        let mut frame = RenderFrame::new(100.0, 50.0);
        frame.clear(Rgba::BLACK);
        frame.circle(Vec2::new(1.0, 2.0), 10.0, Rgba::WHITE);
        frame.text("hi", Vec2::new(0.0, 0.0), TextStyle::new(12.0, Rgba::WHITE));
        assert!(matches!(
            frame.commands.as_slice(),
            [
                RenderCommand::Clear { .. },
                RenderCommand::Circle { .. },
                RenderCommand::Text { .. }
            ]
        ));
        assert_eq!(frame.circles().count(), 1);
        assert_eq!(frame.texts().collect::<Vec<_>>(), vec!["hi"]);
    }

    #[test]
    fn text_style_builders() {
        let s = TextStyle::new(48.0, Rgba::WHITE).bold().centered();
        assert!(s.bold);
        assert_eq!(s.align, TextAlign::Center);
    }
}
