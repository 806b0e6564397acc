//! Canvas renditions of the page panels (legend, field listing, titles).
//!
//! The browser builds these as DOM elements; headless output (SVG snapshots)
//! draws them into the frame instead.

use foundation::color::Rgba;
use foundation::math::Vec2;
use layers::{CATEGORY_HEADING, ERUPTION_HEADING, Legend, SIZE_NOTE};
use render::{RenderFrame, TextMeasure, TextStyle};
use scene::FilterState;

use crate::config::ViewConfig;
use crate::detail_view::{BACK_LABEL, DETAILS_HEADING, DetailView};
use crate::map_view::{HINT_COLOR, MapView};

const LINE_HEIGHT: f64 = 20.0;
const SWATCH_PX: f64 = 15.0;

/// Draws the legend with its top-left at `origin`; returns the y below it.
///
/// With `filters`, each row gets a checkbox mark reflecting its state.
pub fn draw_legend(
    frame: &mut RenderFrame,
    legend: &Legend,
    origin: Vec2,
    filters: Option<&FilterState>,
) -> f64 {
    let heading = TextStyle::new(14.0, Rgba::WHITE).bold();
    let body = TextStyle::new(14.0, Rgba::WHITE);
    let mut y = origin.y;

    frame.text(CATEGORY_HEADING, Vec2::new(origin.x, y), heading);
    y += LINE_HEIGHT;
    for entry in &legend.categories {
        let checked = filters.and_then(|f| f.category_visible(&entry.category));
        legend_row(frame, origin.x, y, checked, entry.color, &entry.category, body);
        y += LINE_HEIGHT;
    }

    y += LINE_HEIGHT;
    frame.text(ERUPTION_HEADING, Vec2::new(origin.x, y), heading);
    y += LINE_HEIGHT;
    for entry in &legend.eruptions {
        let checked = filters.and_then(|f| f.eruption_visible(entry.code));
        legend_row(frame, origin.x, y, checked, entry.swatch, &entry.label(), body);
        y += LINE_HEIGHT;
    }

    y += LINE_HEIGHT;
    frame.text(SIZE_NOTE, Vec2::new(origin.x, y), TextStyle::new(13.0, Rgba::WHITE));
    y + LINE_HEIGHT
}

fn legend_row(
    frame: &mut RenderFrame,
    x: f64,
    y: f64,
    checked: Option<bool>,
    swatch: Rgba,
    label: &str,
    style: TextStyle,
) {
    let mut x = x;
    if let Some(checked) = checked {
        frame.text(if checked { "☑" } else { "☐" }, Vec2::new(x, y), style);
        x += 20.0;
    }
    frame.circle(Vec2::new(x + SWATCH_PX / 2.0, y + SWATCH_PX / 2.0), SWATCH_PX, swatch);
    frame.text(label, Vec2::new(x + SWATCH_PX + 6.0, y), style);
}

/// Top-left of the static legend on the detail page.
pub const DETAIL_LEGEND_ORIGIN: Vec2 = Vec2::new(60.0, 150.0);

/// Top-left of the interactive map legend; follows the configured margin.
pub fn map_legend_origin(config: &ViewConfig) -> Vec2 {
    Vec2::new(60.0, config.outer_margin + 20.0)
}

/// Map frame plus the legend panel, as the page shows it.
pub fn map_snapshot(view: &MapView, measure: &dyn TextMeasure) -> RenderFrame {
    let mut frame = view.frame(measure);
    let origin = map_legend_origin(view.config());
    draw_legend(&mut frame, view.legend(), origin, Some(view.filters()));
    frame
}

/// Detail frame plus title, static legend, field listing and back control.
pub fn detail_snapshot(view: &DetailView) -> RenderFrame {
    let mut frame = view.frame();
    let vp = view.viewport();
    frame.text(
        view.title(),
        Vec2::new(vp.width / 2.0, 30.0),
        TextStyle::new(38.0, HINT_COLOR).bold().centered(),
    );
    draw_legend(&mut frame, view.legend(), DETAIL_LEGEND_ORIGIN, None);

    let x = vp.width - 320.0;
    let mut y = 150.0;
    let body = TextStyle::new(13.0, Rgba::WHITE);
    frame.text(DETAILS_HEADING, Vec2::new(x, y), body.bold());
    y += 2.0 * 18.0;
    for (column, value) in view.fields() {
        frame.text(format!("{column}: {value}"), Vec2::new(x, y), body);
        y += 18.0;
    }
    y += 15.0;
    frame.text(BACK_LABEL, Vec2::new(x, y), TextStyle::new(13.0, HINT_COLOR));
    frame
}

#[cfg(test)]
mod tests {
    use super::{detail_snapshot, draw_legend, map_legend_origin, map_snapshot};
    use crate::config::ViewConfig;
    use crate::detail_view::DetailView;
    use crate::map_view::MapView;
    use crate::Viewport;
    use foundation::math::Vec2;
    use layers::CATEGORY_HEADING;
    use render::{ApproxTextMeasure, RenderCommand, RenderFrame};

    const CSV: &str = "Volcano Name,Latitude,Longitude,Elevation (m),TypeCategory,Last Known Eruption\n\
        Etna,37.748,14.999,3295,Stratovolcano,D1\n\
        Taal,14.002,120.993,311,Caldera,Q\n";

    #[test]
    fn map_snapshot_reflects_filter_state() {
        let ds = formats::parse_dataset_str(CSV).expect("dataset");
        let mut v = MapView::new(ds, ViewConfig::default(), Viewport::default());
        v.set_category_visible("Caldera", false);
        let frame = map_snapshot(&v, &ApproxTextMeasure::default());
        let texts: Vec<&str> = frame.texts().collect();
        assert!(texts.contains(&"Stratovolcano"));
        assert!(texts.contains(&"Caldera"));
        assert!(texts.contains(&"Q: Quaternary hydrothermal"));
        assert_eq!(texts.iter().filter(|t| **t == "☐").count(), 1);
        // One map marker plus 2 category and 10 eruption swatches.
        assert_eq!(frame.circles().count(), 1 + 2 + 10);
    }

    #[test]
    fn detail_snapshot_lists_fields() {
        let ds = formats::parse_dataset_str(CSV).expect("dataset");
        let v = DetailView::open(ds, Some("1"), ViewConfig::default(), Viewport::default())
            .expect("detail");
        let frame = detail_snapshot(&v);
        let texts: Vec<&str> = frame.texts().collect();
        assert_eq!(texts[0], "Taal");
        assert!(texts.contains(&"Volcano Name: Taal"));
        assert!(texts.contains(&"← Back to map"));
        assert!(!texts.contains(&"☑"));
    }

    #[test]
    fn map_legend_follows_configured_margin() {
        let ds = formats::parse_dataset_str(CSV).expect("dataset");
        let config = ViewConfig {
            outer_margin: 40.0,
            ..ViewConfig::default()
        };
        assert_eq!(map_legend_origin(&config), Vec2::new(60.0, 60.0));

        let v = MapView::new(ds, config, Viewport::default());
        let frame = map_snapshot(&v, &ApproxTextMeasure::default());
        let heading = frame.commands.iter().find_map(|c| match c {
            RenderCommand::Text { text, origin, .. } if text == CATEGORY_HEADING => Some(*origin),
            _ => None,
        });
        assert_eq!(heading, Some(Vec2::new(60.0, 60.0)));
    }

    #[test]
    fn legend_height_grows_with_categories() {
        let ds = formats::parse_dataset_str(CSV).expect("dataset");
        let v = MapView::new(ds, ViewConfig::default(), Viewport::default());
        let mut frame = RenderFrame::new(100.0, 100.0);
        let bottom = draw_legend(&mut frame, v.legend(), Vec2::new(0.0, 0.0), None);
        // heading + 2 categories + gap + heading + 10 codes + gap + note.
        assert_eq!(bottom, 20.0 * 17.0);
    }
}
