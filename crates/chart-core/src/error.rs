// File: crates/chart-core/src/error.rs
// Summary: Layout error taxonomy; every variant aborts the current render call.

use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("error parsing legend position: {0}")]
    LegendPosition(#[source] PositionError),

    #[error("error parsing title position: {0}")]
    TitlePosition(#[source] PositionError),

    #[error("invalid axis configuration: {0}")]
    InvalidAxis(String),
}

/// An offset string that is neither a keyword, a pixel value, nor a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid offset `{value}`: expected {expected}, a pixel value, or a percentage")]
pub struct PositionError {
    pub value: String,
    pub expected: &'static str,
}
