// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Lay out a chart with Skia text metrics and encode it to PNG and SVG.

use std::rc::Rc;

use chart_core::{run_layout, LegendOption, OutputFormat, RenderOptions, Series, TextMeasurer, TitleOption};
use chart_render_skia::{render_svg, SkiaRenderer};

fn options() -> RenderOptions {
    let mut opts = RenderOptions::new(vec![
        Series::named("open", vec![1.0, 3.5, 2.0, 4.0]),
        Series::named("close", vec![2.0, 3.0, 2.5, 3.5]),
    ]);
    opts.width = 480;
    opts.height = 320;
    opts.title = TitleOption::new("Smoke");
    opts.legend = LegendOption::default().with_offset("left", "top");
    opts
}

#[test]
fn render_smoke_png() {
    let renderer = SkiaRenderer::new();
    let opts = options();
    let measurer: Rc<dyn TextMeasurer> = renderer.shaper();
    let (canvas, rec) = opts.recording_canvas(measurer, OutputFormat::Png);
    let result = run_layout(&canvas, &opts).expect("layout should succeed");
    assert!(result.plot.width() > 0);

    let bytes = renderer.render_png(rec.borrow().commands(), opts.width, opts.height).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (480, 320));
}

#[test]
fn render_smoke_svg() {
    let opts = options();
    let (canvas, rec) = opts.recording_canvas(Rc::new(chart_core::ApproxTextMeasurer), OutputFormat::Svg);
    run_layout(&canvas, &opts).expect("layout should succeed");
    let svg = render_svg(rec.borrow().commands(), opts.width, opts.height).expect("render svg");
    assert!(svg.contains("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
}
