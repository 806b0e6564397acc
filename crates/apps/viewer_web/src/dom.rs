//! DOM side panels: the legend, the detail listing and error text.

use layers::{CATEGORY_HEADING, ERUPTION_HEADING, Legend, SIZE_NOTE};
use scene::FilterState;
use views::panels::DETAIL_LEGEND_ORIGIN;
use views::{BACK_LABEL, DETAILS_HEADING, DetailView, Navigation};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

use crate::canvas::css_color;

pub const LEGEND_ID: &str = "legend";
pub const INFO_ID: &str = "info";
pub const TITLE_ID: &str = "title";
pub const ERROR_ID: &str = "error";

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn element_by_id(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{id} not found")))
}

fn append_text(doc: &Document, parent: &Element, tag: &str, text: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    el.set_text_content(Some(text));
    parent.append_child(&el)?;
    Ok(el)
}

fn swatch(doc: &Document, color: &str) -> Result<Element, JsValue> {
    let el = doc.create_element("span")?;
    el.set_attribute("class", "swatch")?;
    if let Ok(html) = el.clone().dyn_into::<HtmlElement>() {
        html.style().set_property("background", color)?;
    }
    Ok(el)
}

enum Toggle {
    Category(String),
    Eruption(&'static str),
}

fn legend_row(
    doc: &Document,
    parent: &Element,
    color: &str,
    label: &str,
    toggle: Option<(Toggle, bool)>,
) -> Result<(), JsValue> {
    let row = doc.create_element("label")?;
    row.set_attribute("class", "legend-row")?;

    if let Some((toggle, checked)) = toggle {
        let input = doc
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| JsValue::from_str("input element"))?;
        input.set_type("checkbox");
        input.set_checked(checked);

        let on_change = Closure::wrap(Box::new(move |ev: Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let visible = input.checked();
            match &toggle {
                Toggle::Category(name) => crate::set_category_visible(name, visible),
                Toggle::Eruption(code) => crate::set_eruption_visible(code, visible),
            };
        }) as Box<dyn FnMut(Event)>);
        input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        // Lives as long as the page.
        on_change.forget();
        row.append_child(&input)?;
    }

    let dot = swatch(doc, color)?;
    row.append_child(&dot)?;
    append_text(doc, &row, "span", label)?;
    parent.append_child(&row)?;
    Ok(())
}

/// Fills the legend panel and places its top edge at `top` CSS pixels.
/// With `filters`, rows carry checkboxes that toggle map visibility;
/// without, the legend is static.
pub fn build_legend(
    legend: &Legend,
    filters: Option<&FilterState>,
    top: f64,
) -> Result<(), JsValue> {
    let doc = document()?;
    let panel = element_by_id(&doc, LEGEND_ID)?;
    panel.set_inner_html("");
    if let Ok(html) = panel.clone().dyn_into::<HtmlElement>() {
        html.style().set_property("top", &format!("{top}px"))?;
    }

    append_text(&doc, &panel, "h3", CATEGORY_HEADING)?;
    for entry in &legend.categories {
        let toggle = filters.map(|f| {
            let checked = f.category_visible(&entry.category).unwrap_or(true);
            (Toggle::Category(entry.category.clone()), checked)
        });
        legend_row(&doc, &panel, &css_color(entry.color), &entry.category, toggle)?;
    }

    append_text(&doc, &panel, "h3", ERUPTION_HEADING)?;
    for entry in &legend.eruptions {
        let toggle = filters.map(|f| {
            let checked = f.eruption_visible(entry.code).unwrap_or(true);
            (Toggle::Eruption(entry.code), checked)
        });
        legend_row(&doc, &panel, &css_color(entry.swatch), &entry.label(), toggle)?;
    }

    append_text(&doc, &panel, "p", SIZE_NOTE)?;
    Ok(())
}

/// Title, static legend, field listing and back control of the detail page.
pub fn build_detail_panels(view: &DetailView) -> Result<(), JsValue> {
    let doc = document()?;
    element_by_id(&doc, TITLE_ID)?.set_text_content(Some(view.title()));
    build_legend(view.legend(), None, DETAIL_LEGEND_ORIGIN.y)?;

    let info = element_by_id(&doc, INFO_ID)?;
    info.set_inner_html("");
    append_text(&doc, &info, "h3", DETAILS_HEADING)?;
    for (column, value) in view.fields() {
        let line = append_text(&doc, &info, "div", "")?;
        append_text(&doc, &line, "b", &format!("{column}: "))?;
        append_text(&doc, &line, "span", &value)?;
    }

    let back = append_text(&doc, &info, "button", BACK_LABEL)?;
    let target = view.back();
    let on_click = Closure::wrap(Box::new(move |_ev: Event| {
        navigate(&target);
    }) as Box<dyn FnMut(Event)>);
    back.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Replaces the page's error slot with red text.
pub fn show_error(message: &str) -> Result<(), JsValue> {
    let doc = document()?;
    let el = element_by_id(&doc, ERROR_ID)?;
    el.set_text_content(Some(message));
    if let Ok(html) = el.dyn_into::<HtmlElement>() {
        html.style().set_property("color", "red")?;
        html.style().set_property("display", "block")?;
    }
    Ok(())
}

pub fn set_cursor(el: &HtmlElement, css: &str) {
    let _ = el.style().set_property("cursor", css);
}

pub fn navigate(target: &Navigation) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(&target.href()) {
        crate::log_error(&format!("navigation failed: {err:?}"));
    }
}

/// A query parameter of the current page, if present.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}
