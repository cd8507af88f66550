// File: crates/demo/src/main.rs
// Summary: Demo loads series from CSV (plus optional JSON options), lays the chart out, draws
//          line series into the plot area, and writes PNG + SVG.
// Usage: chart-demo [data.csv] [options.json]
//        RUST_LOG=chart_core=debug shows the layout stages.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use chart_core::{
    run_layout, AxisRange, LegendOption, OutputFormat, RenderOptions, RenderResult, Series, TextMeasurer,
    TitleOption,
};
use chart_render_skia::SkiaRenderer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let mut args = std::env::args().skip(1);
    let data_path = args.next().map(PathBuf::from);
    let options_path = args.next().map(PathBuf::from);

    let mut opts = match &options_path {
        Some(p) => load_options(p).with_context(|| format!("failed to load options '{}'", p.display()))?,
        None => default_options(),
    };

    let (labels, series) = match &data_path {
        Some(p) => load_series_csv(p).with_context(|| format!("failed to load CSV '{}'", p.display()))?,
        None => sample_data(),
    };
    info!(series = series.len(), rows = labels.len(), "data loaded");
    if series.is_empty() {
        anyhow::bail!("no numeric columns found - expected a label column followed by value columns");
    }
    if opts.series.is_empty() {
        opts.series = series;
    }
    if opts.x_axis.labels.is_empty() {
        opts.x_axis.labels = labels;
    }

    let renderer = SkiaRenderer::new();
    let measurer: Rc<dyn TextMeasurer> = renderer.shaper();
    let (canvas, recorder) = opts.recording_canvas(measurer, OutputFormat::Png);
    let result = run_layout(&canvas, &opts).context("layout failed")?;
    info!(plot = ?result.plot.bounds(), axes = result.y_axis_ranges.len(), "layout done");
    draw_lines(&result, opts.stack_series);

    let stem = data_path
        .as_deref()
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("sample");
    let out_png = out_name(stem, "png")?;
    let commands = recorder.borrow().commands().to_vec();
    let png = renderer.render_png(&commands, opts.width, opts.height)?;
    std::fs::write(&out_png, png).with_context(|| format!("writing {}", out_png.display()))?;
    info!("Wrote {}", out_png.display());

    let out_svg = out_png.with_extension("svg");
    let svg = renderer.render_svg(&commands, opts.width, opts.height)?;
    std::fs::write(&out_svg, svg).with_context(|| format!("writing {}", out_svg.display()))?;
    info!("Wrote {}", out_svg.display());
    Ok(())
}

fn default_options() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.title = TitleOption::new("Constellation").with_subtext("layout demo");
    opts.legend = LegendOption::default().with_offset("right", "top");
    opts
}

fn load_options(path: &Path) -> Result<RenderOptions> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(serde_json::from_reader(file)?)
}

/// First column: x labels. Every other column with a header becomes a named series.
/// Cells that do not parse become gaps (NaN).
fn load_series_csv(path: &Path) -> Result<(Vec<String>, Vec<Series>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let mut series: Vec<Series> = headers.iter().skip(1).map(|h| Series::named(h.clone(), Vec::new())).collect();
    let mut labels = Vec::new();

    for rec in rdr.records() {
        let rec = rec?;
        labels.push(rec.get(0).unwrap_or_default().trim().to_string());
        for (i, s) in series.iter_mut().enumerate() {
            let v = rec.get(i + 1).and_then(|c| c.trim().parse::<f64>().ok()).unwrap_or(f64::NAN);
            s.values.push(v);
        }
    }
    let before = series.len();
    series.retain(|s| s.values.iter().any(|v| v.is_finite()));
    if series.len() < before {
        warn!(dropped = before - series.len(), "columns without numeric values skipped");
    }
    Ok((labels, series))
}

fn sample_data() -> (Vec<String>, Vec<Series>) {
    let labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].map(String::from).to_vec();
    let series = vec![
        Series::named("Email", vec![120.0, 132.0, 101.0, 134.0, 90.0, 230.0, 210.0]),
        Series::named("Search", vec![820.0, 932.0, 901.0, 934.0, 1290.0, 1330.0, 1320.0]),
    ];
    (labels, series)
}

// X pixel of category `i`: slot center with a boundary gap, otherwise the boundary itself.
fn x_of(range: &AxisRange, bounds: &[i32], i: usize) -> Option<f32> {
    if range.is_category() && range.labels().len() == range.divide_count() {
        Some((bounds.get(i)? + bounds.get(i + 1)?) as f32 / 2.0)
    } else {
        bounds.get(i).map(|&b| b as f32)
    }
}

fn draw_lines(result: &RenderResult, stacked: bool) {
    let plot = &result.plot;
    let bounds = result.x_axis_range.auto_divide();
    let mut totals: Vec<f64> = Vec::new();
    for (index, s) in result.series.iter().enumerate() {
        let Some(y_range) = result.y_axis_ranges.get(&s.y_axis_index) else { continue };
        let mut points = Vec::with_capacity(s.values.len());
        for (i, &v) in s.values.iter().enumerate() {
            let v = if stacked {
                if totals.len() <= i {
                    totals.resize(i + 1, 0.0);
                }
                if v.is_finite() {
                    totals[i] += v;
                }
                totals[i]
            } else {
                v
            };
            match (v.is_finite(), x_of(&result.x_axis_range, &bounds, i)) {
                (true, Some(x)) => points.push((x, y_range.rest_height_of(v) as f32)),
                // a gap ends the current segment
                _ => {
                    plot.polyline(&points, plot.theme().series_color(index), 2.0);
                    points.clear();
                }
            }
        }
        plot.polyline(&points, plot.theme().series_color(index), 2.0);
    }
}

/// Produce output file name like target/out/chart_<stem>.<ext>
fn out_name(stem: &str, ext: &str) -> Result<PathBuf> {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;
    Ok(out.join(format!("chart_{stem}.{ext}")))
}
