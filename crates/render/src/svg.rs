use std::fmt::Write;

use foundation::color::Rgba;

use crate::frame::{RenderCommand, RenderFrame, TextAlign};

/// Serializes a frame as a standalone SVG document.
pub fn to_svg(frame: &RenderFrame) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(frame.width),
        h = num(frame.height),
    );
    for command in &frame.commands {
        write_command(&mut out, frame, command);
    }
    out.push_str("</svg>\n");
    out
}

fn write_command(out: &mut String, frame: &RenderFrame, command: &RenderCommand) {
    match command {
        RenderCommand::Clear { color } => {
            let _ = writeln!(
                out,
                r#"<rect x="0" y="0" width="{}" height="{}" {}/>"#,
                num(frame.width),
                num(frame.height),
                fill_attrs(*color),
            );
        }
        RenderCommand::Circle {
            center,
            diameter,
            fill,
        } => {
            let _ = writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
                num(center.x),
                num(center.y),
                num(diameter * 0.5),
                fill_attrs(*fill),
            );
        }
        RenderCommand::Text {
            text,
            origin,
            style,
        } => {
            let anchor = match style.align {
                TextAlign::Left => "start",
                TextAlign::Center => "middle",
            };
            let weight = if style.bold { "bold" } else { "normal" };
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" font-family="Helvetica, Arial, sans-serif" font-size="{}" font-weight="{weight}" text-anchor="{anchor}" dominant-baseline="hanging" {}>{}</text>"#,
                num(origin.x),
                num(origin.y),
                num(style.size_px),
                fill_attrs(style.color),
                escape(text),
            );
        }
        RenderCommand::RoundedRect {
            origin,
            size,
            radius,
            fill,
            stroke,
        } => {
            let stroke_attrs = stroke
                .map(|s| {
                    format!(
                        r#" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
                        s.color.to_hex_rgb(),
                        num(s.color.alpha_f64()),
                        num(s.width)
                    )
                })
                .unwrap_or_default();
            let _ = writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" {}{stroke_attrs}/>"#,
                num(origin.x),
                num(origin.y),
                num(size.x),
                num(size.y),
                num(*radius),
                fill_attrs(*fill),
            );
        }
    }
}

fn fill_attrs(color: Rgba) -> String {
    format!(
        r#"fill="{}" fill-opacity="{}""#,
        color.to_hex_rgb(),
        num(color.alpha_f64())
    )
}

fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        _ => s.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::to_svg;
    use crate::frame::{RenderFrame, Stroke, TextStyle};
    use foundation::color::Rgba;
    use foundation::math::Vec2;

    #[test]
    fn writes_circle_with_alpha() {
        let mut frame = RenderFrame::new(200.0, 100.0);
        frame.clear(Rgba::BLACK);
        frame.circle(Vec2::new(10.0, 20.5), 8.0, Rgba::rgba(255, 99, 71, 51));
        let svg = to_svg(&frame);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(
            r##"<circle cx="10" cy="20.5" r="4" fill="#ff6347" fill-opacity="0.2"/>"##
        ));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn escapes_text() {
        let mut frame = RenderFrame::new(10.0, 10.0);
        frame.text("A & <B>", Vec2::new(0.0, 0.0), TextStyle::new(12.0, Rgba::WHITE));
        let svg = to_svg(&frame);
        assert!(svg.contains("A &amp; &lt;B&gt;"));
        assert!(!svg.contains("<B>"));
    }

    #[test]
    fn writes_rounded_rect_with_stroke() {
        let mut frame = RenderFrame::new(10.0, 10.0);
        frame.push(crate::frame::RenderCommand::RoundedRect {
            origin: Vec2::new(1.0, 2.0),
            size: Vec2::new(30.0, 40.0),
            radius: 8.0,
            fill: Rgba::rgba(0, 0, 0, 180),
            stroke: Some(Stroke {
                color: Rgba::WHITE,
                width: 1.5,
            }),
        });
        let svg = to_svg(&frame);
        assert!(svg.contains(r#"rx="8""#));
        assert!(svg.contains(r#"stroke-width="1.5""#));
    }
}
