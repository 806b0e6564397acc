use std::env;
use std::fs;
use std::path::Path;

use render::ApproxTextMeasure;
use render::svg::to_svg;
use tools::{RenderOptions, detail_listing, summarize};
use views::panels::{detail_snapshot, map_snapshot};
use views::{DetailView, MapView, ViewConfig};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "summary" => cmd_summary(args),
        "detail" => cmd_detail(args),
        "render-map" => cmd_render_map(args),
        "render-detail" => cmd_render_detail(args),
        _ => Err(usage()),
    }
}

fn load(path: &str) -> Result<scene::Dataset, String> {
    formats::load_dataset(path).map_err(|e| e.to_string())
}

fn load_config(opts: &RenderOptions) -> Result<ViewConfig, String> {
    let Some(path) = &opts.config else {
        return Ok(ViewConfig::default());
    };
    let payload = fs::read_to_string(path).map_err(|e| format!("read {path:?}: {e}"))?;
    ViewConfig::from_json_str(&payload).map_err(|e| format!("{path:?}: {e}"))
}

fn write_svg(out: &Path, svg: String) -> Result<(), String> {
    fs::write(out, svg).map_err(|e| format!("write {out:?}: {e}"))?;
    eprintln!("wrote {out:?}");
    Ok(())
}

fn cmd_summary(args: Vec<String>) -> Result<(), String> {
    // volcanoes summary <data.csv> [--json]
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();
    let [path] = positional.as_slice() else {
        return Err(usage());
    };
    if let Some(unknown) = args.iter().find(|a| a.starts_with("--") && *a != "--json") {
        return Err(format!("unknown arg: {unknown}\n\n{}", usage()));
    }

    let summary = summarize(&load(path)?, &ViewConfig::default());
    if json {
        let payload = serde_json::to_string_pretty(&summary).map_err(|e| format!("json: {e}"))?;
        println!("{payload}");
    } else {
        print!("{}", summary.to_text());
    }
    Ok(())
}

fn cmd_detail(args: Vec<String>) -> Result<(), String> {
    // volcanoes detail <data.csv> <id>
    let [path, id] = args.as_slice() else {
        return Err(usage());
    };
    match detail_listing(load(path)?, id) {
        Ok(text) => {
            print!("{text}");
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            Err(err.user_message().to_string())
        }
    }
}

fn cmd_render_map(args: Vec<String>) -> Result<(), String> {
    // volcanoes render-map <data.csv> <out.svg> [flags]
    let (opts, positional) = RenderOptions::parse(&args)?;
    let [path, out] = positional.as_slice() else {
        return Err(usage());
    };
    let config = load_config(&opts)?;

    let mut view = MapView::new(load(path)?, config, opts.viewport());
    for c in &opts.hidden_categories {
        if !view.set_category_visible(c, false) {
            eprintln!("warning: no category {c:?}");
        }
    }
    for e in &opts.hidden_eruptions {
        if !view.set_eruption_visible(e, false) {
            eprintln!("warning: no eruption code {e:?}");
        }
    }
    if let Some((x, y)) = opts.pointer {
        view.pointer_moved(x, y);
        match view.hovered().and_then(|row| view.dataset().record(row)) {
            Some(record) => eprintln!("pointer over row {}: {}", record.id(), record.name()),
            None => eprintln!("pointer over no marker"),
        }
    }

    eprintln!("{} markers drawn", view.markers().len());
    let frame = map_snapshot(&view, &ApproxTextMeasure::default());
    write_svg(Path::new(out), to_svg(&frame))
}

fn cmd_render_detail(args: Vec<String>) -> Result<(), String> {
    // volcanoes render-detail <data.csv> <id> <out.svg> [--width W] [--height H] [--config cfg.json]
    let (opts, positional) = RenderOptions::parse(&args)?;
    let [path, id, out] = positional.as_slice() else {
        return Err(usage());
    };
    let config = load_config(&opts)?;

    let view = DetailView::open(load(path)?, Some(id.as_str()), config, opts.viewport())
        .map_err(|err| {
            eprintln!("{err}");
            err.user_message().to_string()
        })?;
    write_svg(Path::new(out), to_svg(&detail_snapshot(&view)))
}

fn usage() -> String {
    let exe = env::args().next().unwrap_or_else(|| "volcanoes".to_string());
    format!(
        "Usage:\n  {exe} summary <data.csv> [--json]\n  {exe} detail <data.csv> <id>\n  {exe} render-map <data.csv> <out.svg> [--width W] [--height H] [--config cfg.json] [--hide-category C]... [--hide-eruption E]... [--pointer X,Y]\n  {exe} render-detail <data.csv> <id> <out.svg> [--width W] [--height H] [--config cfg.json]\n\nNotes:\n- The dataset needs the columns Volcano Name, Latitude, Longitude, Elevation (m), TypeCategory and Last Known Eruption.\n- Rows without numeric coordinates or elevation are listed but not drawn.\n"
    )
}
