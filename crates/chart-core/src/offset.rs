// File: crates/chart-core/src/offset.rs
// Summary: Legend/title placement strings: keywords, pixel values, and percentages.

use serde::{Deserialize, Serialize};

use crate::error::PositionError;

/// Where a component sits on its canvas. Empty strings defer to the component default.
///
/// `left`: `left | center | right | <px> | <pct>%`; `top`: `top | middle | bottom | <px> | <pct>%`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetOption {
    pub left: String,
    pub top: String,
}

impl OffsetOption {
    pub fn new(left: impl Into<String>, top: impl Into<String>) -> Self {
        Self { left: left.into(), top: top.into() }
    }

    pub fn horizontal(&self, default: Position) -> Result<Position, PositionError> {
        parse(&self.left, default, ["left", "center", "right"], "left/center/right")
    }

    pub fn vertical(&self, default: Position) -> Result<Position, PositionError> {
        parse(&self.top, default, ["top", "middle", "bottom"], "top/middle/bottom")
    }

    /// True when the top offset is a keyword (or unset), i.e. not caller-fixed.
    pub fn top_is_symbolic(&self) -> bool {
        matches!(self.vertical(Position::Start), Ok(p) if p.is_symbolic())
    }

    /// Bottom-edge placement by keyword.
    pub fn is_bottom(&self) -> bool {
        self.top.trim().eq_ignore_ascii_case("bottom")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    Start,
    Center,
    End,
    Pixels(i32),
    Percent(f64),
}

impl Position {
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Position::Start | Position::Center | Position::End)
    }

    /// Offset of an item `item` pixels long inside an `extent`-pixel span.
    pub fn resolve(&self, extent: i32, item: i32) -> i32 {
        match *self {
            Position::Start => 0,
            Position::Center => (extent - item) / 2,
            Position::End => extent - item,
            Position::Pixels(px) => px,
            Position::Percent(pct) => (extent as f64 * pct / 100.0).round() as i32,
        }
    }
}

fn parse(raw: &str, default: Position, keywords: [&str; 3], expected: &'static str) -> Result<Position, PositionError> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(default);
    }
    let lower = s.to_ascii_lowercase();
    if lower == keywords[0] {
        return Ok(Position::Start);
    }
    if lower == keywords[1] || lower == "center" || lower == "middle" {
        return Ok(Position::Center);
    }
    if lower == keywords[2] {
        return Ok(Position::End);
    }
    let err = || PositionError { value: raw.to_string(), expected };
    if let Some(pct) = s.strip_suffix('%') {
        let v: f64 = pct.trim().parse().map_err(|_| err())?;
        return if v.is_finite() { Ok(Position::Percent(v)) } else { Err(err()) };
    }
    let v: f64 = s.parse().map_err(|_| err())?;
    if !v.is_finite() {
        return Err(err());
    }
    Ok(Position::Pixels(v.round() as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords_pixels_and_percent() {
        let o = OffsetOption::new("right", "50");
        assert_eq!(o.horizontal(Position::Center), Ok(Position::End));
        assert_eq!(o.vertical(Position::Start), Ok(Position::Pixels(50)));
        assert!(!o.top_is_symbolic());

        let o = OffsetOption::new("25%", "");
        assert_eq!(o.horizontal(Position::Start), Ok(Position::Percent(25.0)));
        assert_eq!(o.vertical(Position::End), Ok(Position::End));
        assert!(o.top_is_symbolic());
        assert_eq!(Position::Percent(25.0).resolve(200, 10), 50);

        let o = OffsetOption::new("center", "1%");
        assert_eq!(o.vertical(Position::Start), Ok(Position::Percent(1.0)));
        assert!(!o.top_is_symbolic());
        assert_eq!(Position::Percent(1.0).resolve(610, 40), 6);
    }

    #[test]
    fn rejects_garbage() {
        let o = OffsetOption::new("leftish", "top");
        let err = o.horizontal(Position::Start).unwrap_err();
        assert_eq!(err.value, "leftish");
        assert!(OffsetOption::new("", "12px").vertical(Position::Start).is_err());
    }
}
