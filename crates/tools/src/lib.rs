//! Offline helpers behind the `volcanoes` CLI.

use std::path::PathBuf;

use foundation::bounds::Interval;
use layers::Symbology;
use scene::{Dataset, DatasetExtent};
use serde::Serialize;
use views::{DetailError, DetailView, ViewConfig, Viewport};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    /// `#rrggbb`; the drawn alpha comes from the eruption code.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: Vec<String>,
    pub longitude: Option<[f64; 2]>,
    pub latitude: Option<[f64; 2]>,
    pub elevation: Option<[f64; 2]>,
    pub categories: Vec<CategorySummary>,
    /// Rows missing a numeric latitude, longitude or elevation.
    pub excluded_from_map: usize,
}

fn pair(i: Option<Interval>) -> Option<[f64; 2]> {
    i.map(|i| [i.min, i.max])
}

pub fn summarize(dataset: &Dataset, config: &ViewConfig) -> DatasetSummary {
    let extent = DatasetExtent::compute(dataset);
    let symbology = Symbology::compute(dataset, &config.palette_colors());
    let categories = symbology
        .colors
        .entries()
        .iter()
        .map(|(category, color)| CategorySummary {
            category: category.clone(),
            color: color.to_hex_rgb(),
        })
        .collect();
    let excluded_from_map = dataset
        .records()
        .filter(|r| r.lon_lat().is_none() || r.elevation().is_none())
        .count();

    DatasetSummary {
        rows: dataset.len(),
        columns: dataset.columns().to_vec(),
        longitude: pair(extent.longitude()),
        latitude: pair(extent.latitude()),
        elevation: pair(extent.elevation),
        categories,
        excluded_from_map,
    }
}

impl DatasetSummary {
    pub fn to_text(&self) -> String {
        let range = |r: Option<[f64; 2]>| match r {
            Some([lo, hi]) => format!("{lo} .. {hi}"),
            None => "n/a".to_string(),
        };
        let mut out = format!(
            "rows: {}\ncolumns: {}\nlongitude: {}\nlatitude: {}\n|elevation| (m): {}\nexcluded from map: {}\ncategories:\n",
            self.rows,
            self.columns.join(", "),
            range(self.longitude),
            range(self.latitude),
            range(self.elevation),
            self.excluded_from_map,
        );
        for c in &self.categories {
            out.push_str(&format!("  {} {}\n", c.color, c.category));
        }
        out
    }
}

/// Title line followed by `column: value` lines, as the detail page lists them.
pub fn detail_listing(dataset: Dataset, raw_id: &str) -> Result<String, DetailError> {
    let view = DetailView::open(dataset, Some(raw_id), ViewConfig::default(), Viewport::default())?;
    let mut out = format!("{}\n", view.title());
    for (column, value) in view.fields() {
        out.push_str(&format!("{column}: {value}\n"));
    }
    Ok(out)
}

/// Flags shared by the `render-*` commands.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub config: Option<PathBuf>,
    pub hidden_categories: Vec<String>,
    pub hidden_eruptions: Vec<String>,
    pub pointer: Option<(f64, f64)>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        let vp = Viewport::default();
        Self {
            width: vp.width,
            height: vp.height,
            config: None,
            hidden_categories: Vec::new(),
            hidden_eruptions: Vec::new(),
            pointer: None,
        }
    }
}

impl RenderOptions {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Splits `args` into flags and positional arguments.
    pub fn parse(args: &[String]) -> Result<(Self, Vec<String>), String> {
        let mut opts = Self::default();
        let mut positional = Vec::new();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let mut value = || {
                i += 1;
                args.get(i)
                    .cloned()
                    .ok_or_else(|| format!("{flag} requires a value"))
            };
            match flag {
                "--width" => opts.width = parse_px(flag, &value()?)?,
                "--height" => opts.height = parse_px(flag, &value()?)?,
                "--config" => opts.config = Some(PathBuf::from(value()?)),
                "--hide-category" => opts.hidden_categories.push(value()?),
                "--hide-eruption" => opts.hidden_eruptions.push(value()?),
                "--pointer" => opts.pointer = Some(parse_pointer(&value()?)?),
                s if s.starts_with("--") => return Err(format!("unknown arg: {s}")),
                _ => positional.push(flag.to_string()),
            }
            i += 1;
        }
        Ok((opts, positional))
    }
}

fn parse_px(flag: &str, v: &str) -> Result<f64, String> {
    match v.parse::<f64>() {
        Ok(px) if px.is_finite() && px > 0.0 => Ok(px),
        _ => Err(format!("{flag}: expected a positive number, got {v:?}")),
    }
}

/// Parses `X,Y` in canvas pixels.
pub fn parse_pointer(v: &str) -> Result<(f64, f64), String> {
    let parsed = v
        .split_once(',')
        .and_then(|(x, y)| Some((x.trim().parse::<f64>().ok()?, y.trim().parse::<f64>().ok()?)));
    parsed.ok_or_else(|| format!("--pointer: expected X,Y, got {v:?}"))
}
