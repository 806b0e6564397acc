use std::f64::consts::TAU;

use foundation::color::Rgba;
use render::{RenderCommand, RenderFrame, TextAlign, TextMeasure, TextStyle};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

pub fn canvas_by_id(id: &str) -> Result<HtmlCanvasElement, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| JsValue::from_str(&format!("canvas #{id} not found")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not a canvas")))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas: missing 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("canvas: context is not 2d"))
}

/// Measures text with the canvas' own font metrics.
pub struct CanvasTextMeasure<'a> {
    pub ctx: &'a CanvasRenderingContext2d,
}

impl TextMeasure for CanvasTextMeasure<'_> {
    fn text_width(&self, text: &str, style: &TextStyle) -> f64 {
        self.ctx.set_font(&font(style));
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or(0.0)
    }
}

/// Replays a frame onto the 2D context, resizing the backing store if needed.
pub fn draw_frame(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    frame: &RenderFrame,
) -> Result<(), JsValue> {
    let (w, h) = (frame.width.round() as u32, frame.height.round() as u32);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }

    for command in &frame.commands {
        match command {
            RenderCommand::Clear { color } => {
                ctx_set_fill_style(ctx, &color.to_css());
                ctx.fill_rect(0.0, 0.0, frame.width, frame.height);
            }
            RenderCommand::Circle {
                center,
                diameter,
                fill,
            } => {
                ctx.begin_path();
                ctx.arc(center.x, center.y, diameter * 0.5, 0.0, TAU)?;
                ctx_set_fill_style(ctx, &fill.to_css());
                ctx.fill();
            }
            RenderCommand::Text {
                text,
                origin,
                style,
            } => {
                ctx.set_font(&font(style));
                ctx.set_text_baseline("top");
                ctx.set_text_align(match style.align {
                    TextAlign::Left => "left",
                    TextAlign::Center => "center",
                });
                ctx_set_fill_style(ctx, &style.color.to_css());
                ctx.fill_text(text, origin.x, origin.y)?;
            }
            RenderCommand::RoundedRect {
                origin,
                size,
                radius,
                fill,
                stroke,
            } => {
                rounded_rect_path(ctx, origin.x, origin.y, size.x, size.y, *radius)?;
                ctx_set_fill_style(ctx, &fill.to_css());
                ctx.fill();
                if let Some(stroke) = stroke {
                    ctx_set_stroke_style(ctx, &stroke.color.to_css());
                    ctx.set_line_width(stroke.width);
                    ctx.stroke();
                }
            }
        }
    }
    Ok(())
}

fn rounded_rect_path(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
) -> Result<(), JsValue> {
    let r = r.min(w * 0.5).min(h * 0.5).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}

fn font(style: &TextStyle) -> String {
    let weight = if style.bold { "bold " } else { "" };
    format!("{weight}{}px {FONT_FAMILY}", style.size_px)
}

pub fn css_color(c: Rgba) -> String {
    c.to_css()
}

fn ctx_set_fill_style(ctx: &CanvasRenderingContext2d, value: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(value),
    );
}

fn ctx_set_stroke_style(ctx: &CanvasRenderingContext2d, value: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(value),
    );
}
