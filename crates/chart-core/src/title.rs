// File: crates/chart-core/src/title.rs
// Summary: Title options and painter (main text + subtext, multi-line).

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::canvas::Canvas;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::RectI32;
use crate::offset::{OffsetOption, Position};
use crate::text::FontStyle;
use crate::types::Insets;

const TITLE_PADDING: Insets = Insets::uniform(5);
const LINE_GAP: i32 = 2;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleOption {
    pub show: Option<bool>,
    /// Main text; `\n` starts a new line.
    pub text: String,
    pub subtext: String,
    /// Defaults to `left` / `top`.
    pub offset: OffsetOption,
    pub font: Option<FontStyle>,
    pub subtext_font: Option<FontStyle>,
}

impl TitleOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = subtext.into();
        self
    }

    pub fn with_offset(mut self, left: impl Into<String>, top: impl Into<String>) -> Self {
        self.offset = OffsetOption::new(left, top);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.show != Some(false) && !(self.text.is_empty() && self.subtext.is_empty())
    }
}

/// Draw the title and return its box (canvas-local), or `None` when hidden.
pub fn render_title(canvas: &Canvas, opt: &TitleOption) -> LayoutResult<Option<RectI32>> {
    if !opt.is_visible() {
        return Ok(None);
    }
    let theme = canvas.theme();
    let font = opt.font.clone().unwrap_or_else(|| theme.title_font());
    let sub_font = opt.subtext_font.clone().unwrap_or_else(|| theme.subtitle_font());

    let lines: Vec<(&str, &FontStyle, RectI32)> = opt
        .text
        .lines()
        .map(|l| (l, &font))
        .chain(opt.subtext.lines().map(|l| (l, &sub_font)))
        .map(|(l, f)| (l, f, canvas.measure_text(l, 0.0, f)))
        .collect();

    let content_w = lines.iter().map(|(_, _, r)| r.width()).max().unwrap_or(0);
    let content_h = lines.iter().map(|(_, _, r)| r.height()).sum::<i32>()
        + LINE_GAP * (lines.len() as i32 - 1).max(0);
    let box_w = content_w + TITLE_PADDING.hsum();
    let box_h = content_h + TITLE_PADDING.vsum();

    let horizontal = opt.offset.horizontal(Position::Start).map_err(LayoutError::TitlePosition)?;
    let left = horizontal.resolve(canvas.width(), box_w);
    let top = opt
        .offset
        .vertical(Position::Start)
        .map_err(LayoutError::TitlePosition)?
        .resolve(canvas.height(), box_h);

    let mut y = top + TITLE_PADDING.top;
    for (line, font, size) in &lines {
        // Lines follow the box alignment.
        let x = match horizontal {
            Position::Center => left + (box_w - size.width()) / 2,
            Position::End => left + box_w - TITLE_PADDING.right - size.width(),
            _ => left + TITLE_PADDING.left,
        };
        canvas.text(line, x, y, font, 0.0);
        y += size.height() + LINE_GAP;
    }

    let rect = RectI32::from_ltwh(left, top, box_w, box_h);
    trace!(?rect, "title rendered");
    Ok(Some(rect))
}
