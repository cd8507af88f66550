// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; axis-range computation and chart layout composition.

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod legend;
pub mod offset;
pub mod range;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod title;
pub mod types;

pub use axis::{AxisPosition, XAxisOption, YAxisOption};
pub use canvas::{Canvas, ChildBox, ValueFormatter};
pub use chart::RenderOptions;
pub use error::{LayoutError, LayoutResult, PositionError};
pub use geometry::RectI32;
pub use layout::{run_layout, RenderResult};
pub use legend::{LegendOption, Orientation};
pub use offset::{OffsetOption, Position};
pub use range::{compute_axis_range, friendly_round, pad_range, AxisRange, RangeKind};
pub use series::{MarkPoint, Series};
pub use surface::{DrawCommand, Recorder, Surface};
pub use text::{ApproxTextMeasurer, FontStyle, TextMeasurer};
pub use theme::{Color, Theme};
pub use title::TitleOption;
pub use types::{Insets, OutputFormat};
