// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming: colors, series palette, and typography defaults for layout.

use serde::{Deserialize, Serialize};

use crate::text::FontStyle;

/// Backend-neutral RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub split_line: Color,
    pub title: Color,
    pub legend_text: Color,
    /// Colors cycled through by series index.
    pub series: Vec<Color>,
    pub title_font_size: f32,
    pub subtitle_font_size: f32,
    pub legend_font_size: f32,
    pub axis_font_size: f32,
    /// Minimum height the x-axis strip reserves.
    pub x_axis_min_height: i32,
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

impl Theme {
    fn base(name: &str, background: Color, text: Color, muted: Color, grid: Color, series: Vec<Color>) -> Self {
        Self {
            name: name.to_string(),
            background,
            axis_line: muted,
            axis_label: text,
            split_line: grid,
            title: text,
            legend_text: text,
            series,
            title_font_size: 18.0,
            subtitle_font_size: 12.0,
            legend_font_size: 12.0,
            axis_font_size: 11.0,
            x_axis_min_height: 25,
        }
    }

    pub fn dark() -> Self {
        Self::base(
            "dark",
            Color::from_argb(255, 18, 18, 20),
            Color::from_argb(255, 235, 235, 245),
            Color::from_argb(255, 180, 180, 190),
            Color::from_argb(255, 40, 40, 45),
            vec![
                Color::rgb(64, 160, 255),
                Color::rgb(40, 200, 120),
                Color::rgb(220, 80, 80),
                Color::rgb(255, 230, 70),
                Color::rgb(170, 110, 240),
            ],
        )
    }

    pub fn light() -> Self {
        Self::base(
            "light",
            Color::from_argb(255, 250, 250, 252),
            Color::from_argb(255, 20, 20, 30),
            Color::from_argb(255, 60, 60, 70),
            Color::from_argb(255, 230, 230, 235),
            vec![
                Color::rgb(32, 120, 200),
                Color::rgb(20, 160, 90),
                Color::rgb(200, 60, 60),
                Color::rgb(230, 150, 20),
                Color::rgb(120, 70, 200),
            ],
        )
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self::base(
            "solarized-dark",
            Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            Color::from_argb(255, 0x93, 0xa1, 0xa1), // base1
            Color::from_argb(255, 0x07, 0x36, 0x42), // base02
            vec![
                Color::rgb(0x26, 0x8b, 0xd2), // blue
                Color::rgb(0x2a, 0xa1, 0x98), // cyan
                Color::rgb(0xdc, 0x32, 0x2f), // red
                Color::rgb(0xb5, 0x89, 0x00), // yellow
                Color::rgb(0x6c, 0x71, 0xc4), // violet
            ],
        )
    }

    pub fn solarized_light() -> Self {
        Self::base(
            "solarized-light",
            Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            Color::from_argb(255, 0x65, 0x7b, 0x83), // base00
            Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            vec![
                Color::rgb(0x26, 0x8b, 0xd2),
                Color::rgb(0x2a, 0xa1, 0x98),
                Color::rgb(0xdc, 0x32, 0x2f),
                Color::rgb(0xcb, 0x4b, 0x16),
                Color::rgb(0x6c, 0x71, 0xc4),
            ],
        )
    }

    pub fn high_contrast_dark() -> Self {
        Self::base(
            "high-contrast-dark",
            Color::from_argb(255, 0x00, 0x00, 0x00),
            Color::from_argb(255, 0xff, 0xff, 0xff),
            Color::from_argb(255, 0xff, 0xff, 0xff),
            Color::from_argb(255, 0x22, 0x22, 0x22),
            vec![
                Color::rgb(0x00, 0xff, 0xff),
                Color::rgb(0x00, 0xff, 0x00),
                Color::rgb(0xff, 0x00, 0x00),
                Color::rgb(0xff, 0xff, 0x00),
            ],
        )
    }

    /// Palette color for the series at `index`, cycling when the palette is short.
    pub fn series_color(&self, index: usize) -> Color {
        if self.series.is_empty() {
            return self.axis_label;
        }
        self.series[index % self.series.len()]
    }

    pub fn title_font(&self) -> FontStyle { FontStyle::new(self.title_font_size, self.title) }
    pub fn subtitle_font(&self) -> FontStyle { FontStyle::new(self.subtitle_font_size, self.title) }
    pub fn legend_font(&self) -> FontStyle { FontStyle::new(self.legend_font_size, self.legend_text) }
    pub fn axis_font(&self) -> FontStyle { FontStyle::new(self.axis_font_size, self.axis_label) }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
