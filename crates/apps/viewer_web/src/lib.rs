use console_error_panic_hook::set_once;
use gloo_net::http::Request;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use views::panels::map_legend_origin;
use views::{DetailView, ID_PARAM, MapView, ViewConfig, Viewport};

mod canvas;
mod dom;

use canvas::{CanvasTextMeasure, canvas_by_id, context_2d, draw_frame};

pub const CANVAS_ID: &str = "volcano-canvas";

/// Which page this module instance drives.
#[derive(Debug)]
enum Page {
    Loading,
    Map(MapView),
    Detail(DetailView),
    /// Load or id failure; the error text is on the page and nothing redraws.
    Halted,
}

#[derive(Debug)]
struct ViewerState {
    config: ViewConfig,
    viewport: Viewport,
    page: Page,
}

thread_local! {
    static STATE: RefCell<ViewerState> = RefCell::new(ViewerState {
        config: ViewConfig::default(),
        viewport: Viewport::default(),
        page: Page::Loading,
    });
}

pub(crate) fn log_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

fn render_page() -> Result<(), JsValue> {
    STATE.with(|state_ref| {
        let state = state_ref.borrow();
        if matches!(state.page, Page::Loading | Page::Halted) {
            return Ok(());
        }
        let canvas = canvas_by_id(CANVAS_ID)?;
        let ctx = context_2d(&canvas)?;
        match &state.page {
            Page::Map(view) => {
                let frame = view.frame(&CanvasTextMeasure { ctx: &ctx });
                draw_frame(&canvas, &ctx, &frame)?;
                dom::set_cursor(&canvas, view.cursor().css());
            }
            Page::Detail(view) => draw_frame(&canvas, &ctx, &view.frame())?,
            Page::Loading | Page::Halted => {}
        }
        Ok(())
    })
}

fn rerender() {
    if let Err(err) = render_page() {
        log_error(&format!("render error: {err:?}"));
    }
}

fn halt(log_message: &str, user_message: &str) {
    log_error(log_message);
    STATE.with(|state| state.borrow_mut().page = Page::Halted);
    if let Err(err) = dom::show_error(user_message) {
        log_error(&format!("cannot show error: {err:?}"));
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

/// Overrides the layout config; call before `start_*_view`.
#[wasm_bindgen]
pub fn set_view_config(json: &str) -> Result<(), JsValue> {
    let config = ViewConfig::from_json_str(json).map_err(|e| JsValue::from_str(&e))?;
    STATE.with(|state| state.borrow_mut().config = config);
    Ok(())
}

#[wasm_bindgen]
pub fn set_canvas_sizes(width: f64, height: f64) {
    STATE.with(|state| {
        let mut s = state.borrow_mut();
        s.viewport = Viewport::new(width, height);
        match &mut s.page {
            Page::Map(view) => view.resize(width, height),
            Page::Detail(view) => view.resize(width, height),
            Page::Loading | Page::Halted => {}
        }
    });
    rerender();
}

#[wasm_bindgen]
pub fn start_map_view(data_url: String) {
    spawn_local(async move {
        let dataset = match fetch_dataset(&data_url).await {
            Ok(ds) => ds,
            Err(msg) => {
                halt(&msg, &msg);
                return;
            }
        };
        log(&format!("loaded {} rows from {data_url}", dataset.len()));

        let (legend, filters, origin) = STATE.with(|state| {
            let mut s = state.borrow_mut();
            let view = MapView::new(dataset, s.config.clone(), s.viewport);
            let panels = (
                view.legend().clone(),
                view.filters().clone(),
                map_legend_origin(view.config()),
            );
            s.page = Page::Map(view);
            panels
        });
        if let Err(err) = dom::build_legend(&legend, Some(&filters), origin.y) {
            log_error(&format!("legend error: {err:?}"));
        }
        rerender();
    });
}

#[wasm_bindgen]
pub fn start_detail_view(data_url: String) {
    let raw_id = dom::query_param(ID_PARAM);
    spawn_local(async move {
        let dataset = match fetch_dataset(&data_url).await {
            Ok(ds) => ds,
            Err(msg) => {
                halt(&msg, &msg);
                return;
            }
        };

        let (config, viewport) = STATE.with(|state| {
            let s = state.borrow();
            (s.config.clone(), s.viewport)
        });
        let view = match DetailView::open(dataset, raw_id.as_deref(), config, viewport) {
            Ok(view) => view,
            Err(err) => {
                halt(&format!("detail view: {err}"), err.user_message());
                return;
            }
        };
        if let Err(err) = dom::build_detail_panels(&view) {
            log_error(&format!("detail panels error: {err:?}"));
        }
        STATE.with(|state| state.borrow_mut().page = Page::Detail(view));
        rerender();
    });
}

#[wasm_bindgen]
pub fn pointer_move(x: f64, y: f64) {
    let changed = STATE.with(|state| match &mut state.borrow_mut().page {
        Page::Map(view) => {
            let before = view.hovered();
            view.pointer_moved(x, y);
            before != view.hovered()
        }
        _ => false,
    });
    if changed {
        rerender();
    }
}

#[wasm_bindgen]
pub fn pointer_leave() {
    STATE.with(|state| {
        if let Page::Map(view) = &mut state.borrow_mut().page {
            view.pointer_left();
        }
    });
    rerender();
}

/// Opens the detail page of the marker under the pointer, if any.
#[wasm_bindgen]
pub fn pointer_down(x: f64, y: f64) {
    let target = STATE.with(|state| match &state.borrow().page {
        Page::Map(view) => view.pointer_pressed(x, y),
        _ => None,
    });
    if let Some(target) = target {
        dom::navigate(&target);
    }
}

#[wasm_bindgen]
pub fn set_category_visible(category: &str, visible: bool) -> bool {
    let known = STATE.with(|state| match &mut state.borrow_mut().page {
        Page::Map(view) => view.set_category_visible(category, visible),
        _ => false,
    });
    if known {
        rerender();
    }
    known
}

#[wasm_bindgen]
pub fn set_eruption_visible(code: &str, visible: bool) -> bool {
    let known = STATE.with(|state| match &mut state.borrow_mut().page {
        Page::Map(view) => view.set_eruption_visible(code, visible),
        _ => false,
    });
    if known {
        rerender();
    }
    known
}

async fn fetch_dataset(url: &str) -> Result<scene::Dataset, String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {url}: {e}"))?;
    if !resp.ok() {
        return Err(format!("Failed to fetch {url}: HTTP {}", resp.status()));
    }
    let text = resp
        .text()
        .await
        .map_err(|e| format!("Failed to read {url}: {e}"))?;
    formats::parse_dataset_str(&text).map_err(|e| format!("Failed to load dataset: {e}"))
}
