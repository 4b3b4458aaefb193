//! Logo Templates - Fixed Layout Contracts
//!
//! Each style is a fixed set of shapes. Colors come from the palette,
//! coordinates never change.

use serde::{Deserialize, Serialize};

use crate::palette::Palette;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogoStyle {
    #[default]
    Main,
    Horizontal,
    Vertical,
    Icon,
}

impl LogoStyle {
    pub const ALL: [LogoStyle; 4] = [
        LogoStyle::Main,
        LogoStyle::Horizontal,
        LogoStyle::Vertical,
        LogoStyle::Icon,
    ];

    /// Unknown tags get the main layout.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "horizontal" => LogoStyle::Horizontal,
            "vertical" => LogoStyle::Vertical,
            "icon" => LogoStyle::Icon,
            _ => LogoStyle::Main,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            LogoStyle::Main => "main",
            LogoStyle::Horizontal => "horizontal",
            LogoStyle::Vertical => "vertical",
            LogoStyle::Icon => "icon",
        }
    }

    pub fn layout(self) -> &'static LogoLayout {
        match self {
            LogoStyle::Main => &MAIN,
            LogoStyle::Horizontal => &HORIZONTAL,
            LogoStyle::Vertical => &VERTICAL,
            LogoStyle::Icon => &ICON,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub cx: u32,
    pub cy: u32,
    pub r: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wordmark {
    pub x: u32,
    pub y: u32,
    pub font_size: u32,
    pub centered: bool,
}

/// Placement of the mark circle, its glyph, the wordmark and accent dots.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoLayout {
    pub mark: Dot,
    pub glyph_baseline: u32,
    pub glyph_size: u32,
    pub wordmark: Option<Wordmark>,
    pub accents: &'static [Dot],
}

static MAIN: LogoLayout = LogoLayout {
    mark: Dot { cx: 45, cy: 60, r: 38 },
    glyph_baseline: 78,
    glyph_size: 40,
    wordmark: Some(Wordmark { x: 100, y: 78, font_size: 52, centered: false }),
    accents: &[Dot { cx: 360, cy: 35, r: 4 }, Dot { cx: 370, cy: 85, r: 3 }],
};

static HORIZONTAL: LogoLayout = LogoLayout {
    mark: Dot { cx: 40, cy: 60, r: 35 },
    glyph_baseline: 75,
    glyph_size: 36,
    wordmark: Some(Wordmark { x: 90, y: 75, font_size: 48, centered: false }),
    accents: &[Dot { cx: 350, cy: 45, r: 4 }],
};

static VERTICAL: LogoLayout = LogoLayout {
    mark: Dot { cx: 200, cy: 40, r: 30 },
    glyph_baseline: 52,
    glyph_size: 28,
    wordmark: Some(Wordmark { x: 200, y: 100, font_size: 32, centered: true }),
    accents: &[Dot { cx: 280, cy: 25, r: 3 }],
};

static ICON: LogoLayout = LogoLayout {
    mark: Dot { cx: 60, cy: 60, r: 50 },
    glyph_baseline: 85,
    glyph_size: 64,
    wordmark: None,
    accents: &[Dot { cx: 95, cy: 25, r: 3 }, Dot { cx: 25, cy: 95, r: 2 }],
};

/// Build the SVG document for `text` in the given style.
///
/// The first character of `text` goes inside the mark circle, the rest
/// forms the wordmark. No bounds are checked on text or dimensions.
pub fn logo_svg(text: &str, width: u32, height: u32, style: LogoStyle, palette: &Palette) -> String {
    let layout = style.layout();
    let mut chars = text.chars();
    let mark: String = chars.next().map(String::from).unwrap_or_default();
    let rest: String = chars.collect();

    let (text_style, wordmark) = match layout.wordmark {
        Some(word) => {
            let anchor = if word.centered { r#" text-anchor="middle""# } else { "" };
            (
                format!(
                    "      .logo-text {{ font-family: 'Inter', sans-serif; font-weight: 700; font-size: {}px; }}\n",
                    word.font_size
                ),
                format!(
                    "  <text x=\"{}\" y=\"{}\"{anchor} fill=\"{}\" class=\"logo-text\">{}</text>\n",
                    word.x,
                    word.y,
                    palette.secondary,
                    escape_text(&rest),
                ),
            )
        }
        None => (String::new(), String::new()),
    };
    let accents: String = layout
        .accents
        .iter()
        .map(|dot| {
            format!(
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" />\n",
                dot.cx, dot.cy, dot.r, palette.accent
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <style>
{text_style}      .logo-mark {{ font-family: 'Inter', sans-serif; font-weight: 900; font-size: {glyph}px; }}
    </style>
  </defs>
  <circle cx="{cx}" cy="{cy}" r="{r}" fill="{primary}" />
  <text x="{cx}" y="{baseline}" text-anchor="middle" fill="{background}" class="logo-mark">{mark}</text>
{wordmark}{accents}</svg>
"#,
        glyph = layout.glyph_size,
        cx = layout.mark.cx,
        cy = layout.mark.cy,
        r = layout.mark.r,
        baseline = layout.glyph_baseline,
        primary = palette.primary,
        background = palette.background,
        mark = escape_text(&mark),
    )
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
