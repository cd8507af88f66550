// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, output formats).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Padding box, in pixels.
/// Contract: negative fields are treated as zero when applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same padding on every side.
    pub const fn uniform(px: i32) -> Self {
        Self::new(px, px, px, px)
    }
    pub const fn bottom(px: i32) -> Self { Self::new(0, 0, 0, px) }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> i32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> i32 { self.top + self.bottom }
}

/// Chart padding used when the caller leaves it unset.
pub const DEFAULT_PADDING: Insets = Insets::new(20, 20, 20, 10);

/// Final serialization target of a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}
