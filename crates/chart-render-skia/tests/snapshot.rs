// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Lays out a deterministic chart (approximate text metrics) and renders it without text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use std::rc::Rc;

use chart_core::{run_layout, ApproxTextMeasurer, OutputFormat, RenderOptions, Series, Theme, TitleOption};
use chart_render_skia::SkiaRenderer;

fn render_bytes() -> Vec<u8> {
    let mut opts = RenderOptions::new(vec![
        Series::named("a", vec![0.0, 1.0, 0.0, 1.5, 1.0]),
        Series::named("b", vec![10.0, 12.0, 9.0, 11.0, 14.0]).with_y_axis(1),
    ]);
    opts.width = 320;
    opts.height = 200;
    opts.theme = Some(Theme::light());
    opts.title = TitleOption::new("Snapshot");

    let (canvas, rec) = opts.recording_canvas(Rc::new(ApproxTextMeasurer), OutputFormat::Png);
    let result = run_layout(&canvas, &opts).expect("layout");

    // Draw series a as a polyline through its category slots.
    let plot = &result.plot;
    let y = &result.y_axis_ranges[&0];
    let slots = result.x_axis_range.auto_divide();
    let points: Vec<(f32, f32)> = result.series[0]
        .values
        .iter()
        .zip(slots.windows(2))
        .map(|(&v, w)| (((w[0] + w[1]) / 2) as f32, y.rest_height_of(v) as f32))
        .collect();
    plot.polyline(&points, plot.theme().series_color(0), 2.0);

    // avoid text nondeterminism across platforms
    let commands = rec.borrow().commands().to_vec();
    SkiaRenderer::new().without_text().render_png(&commands, opts.width, opts.height).expect("render png")
}

#[test]
fn golden_basic_chart() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn text_toggle_only_drops_glyphs() {
    // Same display list with and without text renders the same size image.
    let bytes = render_bytes();
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (320, 200));
    // background is the light theme's near-white
    let px = img.get_pixel(0, 0);
    assert_eq!(px.0[3], 255);
    assert!(px.0[0] > 200 && px.0[1] > 200 && px.0[2] > 200);
}
