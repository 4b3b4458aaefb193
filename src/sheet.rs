//! Palette & Typography Reference Sheet

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::fonts::{FontBook, SizedFont, Typeface};
use crate::palette::{Palette, Role};
use crate::BRAND_NAME;

pub const SHEET_WIDTH: u32 = 800;
pub const SHEET_HEIGHT: u32 = 600;

const SWATCH: u32 = 80;
const SWATCH_TOP: i32 = 100;
const SWATCH_LEFT: i32 = 50;
const SWATCH_STRIDE: i32 = 140;

struct SheetFonts {
    title: Option<SizedFont>,
    label: Option<SizedFont>,
    code: Option<SizedFont>,
    heading_sample: Option<SizedFont>,
    body_sample: Option<SizedFont>,
    preview_mark: Option<SizedFont>,
}

impl SheetFonts {
    fn resolve(fonts: &FontBook) -> Self {
        let base = (
            fonts.load(Typeface::InterBold),
            fonts.load(Typeface::InterMedium),
            fonts.load(Typeface::InterRegular),
        );
        // All three base faces or none of them.
        let (title, label, code) = match base {
            (Some(bold), Some(medium), Some(regular)) => (
                Some(SizedFont { font: bold, px: 36, substituted: false }),
                Some(SizedFont { font: medium, px: 18, substituted: false }),
                Some(SizedFont { font: regular, px: 14, substituted: false }),
            ),
            _ => {
                tracing::debug!("Sheet base fonts incomplete; using default font");
                (fonts.default_font(36), fonts.default_font(18), fonts.default_font(14))
            }
        };

        let (heading_sample, body_sample) = match (
            fonts.load(Typeface::InterBold),
            fonts.load(Typeface::RobotoRegular),
        ) {
            (Some(inter), Some(roboto)) => (
                Some(SizedFont { font: inter, px: 24, substituted: false }),
                Some(SizedFont { font: roboto, px: 20, substituted: false }),
            ),
            _ => (title.clone(), label.clone()),
        };

        let preview_mark = fonts
            .load(Typeface::InterBlack)
            .map(|font| SizedFont { font, px: 16, substituted: false })
            .or_else(|| title.clone());

        Self { title, label, code, heading_sample, body_sample, preview_mark }
    }
}

fn draw_line(img: &mut RgbImage, text: &str, x: i32, y: i32, color: Rgb<u8>, font: Option<&SizedFont>) {
    match font {
        Some(f) => draw_text_mut(img, color, x, y, f.scale(), &f.font, text),
        None => tracing::debug!(text, "No font for sheet text; skipped"),
    }
}

/// Render the 800x600 palette and typography sheet.
pub fn render_palette_sheet(palette: &Palette, fonts: &FontBook) -> RgbImage {
    let mut img = RgbImage::from_pixel(SHEET_WIDTH, SHEET_HEIGHT, palette.background.to_rgb());
    let f = SheetFonts::resolve(fonts);
    let ink = palette.text.to_rgb();

    draw_line(&mut img, &format!("{BRAND_NAME} Brand Colors"), 50, 30, ink, f.title.as_ref());

    for (i, (role, color)) in palette.entries().enumerate() {
        let x = SWATCH_LEFT + i as i32 * SWATCH_STRIDE;
        let y = SWATCH_TOP;

        // Bounds are inclusive on both ends, so a swatch paints SWATCH + 1.
        if role == Role::Background {
            draw_filled_rect_mut(&mut img, Rect::at(x - 1, y - 1).of_size(SWATCH + 3, SWATCH + 3), ink);
        }
        draw_filled_rect_mut(&mut img, Rect::at(x, y).of_size(SWATCH + 1, SWATCH + 1), color.to_rgb());

        let below = y + SWATCH as i32;
        draw_line(&mut img, role.label(), x, below + 10, ink, f.label.as_ref());
        draw_line(&mut img, &color.to_string(), x, below + 35, ink, f.code.as_ref());
        draw_line(&mut img, palette.description(role), x, below + 55, ink, f.code.as_ref());
    }

    draw_line(&mut img, "Typography", 50, 300, ink, f.title.as_ref());
    draw_line(&mut img, "Inter - Primary Font (Headings)", 50, 350, ink, f.heading_sample.as_ref());
    draw_line(&mut img, "Roboto - Secondary Font (Body Text)", 50, 390, ink, f.body_sample.as_ref());

    draw_line(&mut img, BRAND_NAME, 50, 450, palette.secondary.to_rgb(), f.title.as_ref());
    draw_filled_circle_mut(&mut img, (55, 455), 10, palette.primary.to_rgb());
    draw_line(&mut img, "G", 50, 455, palette.background.to_rgb(), f.preview_mark.as_ref());

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_fonts() -> FontBook {
        FontBook::new("/nonexistent/fonts")
    }

    #[test]
    fn test_sheet_dimensions() {
        let img = render_palette_sheet(&Palette::brand(), &no_fonts());
        assert_eq!(img.dimensions(), (SHEET_WIDTH, SHEET_HEIGHT));
    }

    #[test]
    fn test_swatches_painted_in_role_order() {
        let palette = Palette::brand();
        let img = render_palette_sheet(&palette, &no_fonts());
        for (i, (_, color)) in palette.entries().enumerate() {
            let x = (SWATCH_LEFT + i as i32 * SWATCH_STRIDE + 40) as u32;
            assert_eq!(*img.get_pixel(x, 140), color.to_rgb());
        }
    }

    #[test]
    fn test_background_swatch_has_border() {
        let palette = Palette::brand();
        let img = render_palette_sheet(&palette, &no_fonts());
        // Background is the fourth swatch, left edge x = 470.
        assert_eq!(*img.get_pixel(469, 140), palette.text.to_rgb());
        assert_eq!(*img.get_pixel(470, 140), palette.background.to_rgb());
        assert_eq!(*img.get_pixel(551, 140), palette.text.to_rgb());
    }

    /// Non-background pixels in the title band above the swatches.
    fn title_ink(img: &RgbImage, palette: &Palette) -> usize {
        let bg = palette.background.to_rgb();
        (30..90)
            .flat_map(|y| (50..750).map(move |x| (x, y)))
            .filter(|&(x, y)| *img.get_pixel(x, y) != bg)
            .count()
    }

    #[test]
    fn test_text_skipped_without_fonts() {
        let palette = Palette::brand();
        let img = render_palette_sheet(&palette, &no_fonts());
        assert_eq!(title_ink(&img, &palette), 0);
    }

    #[test]
    fn test_title_drawn_with_default_font() {
        let db = crate::fonts::fixtures::installed();
        if db.is_empty() {
            return;
        }
        let palette = Palette::brand();
        let img = render_palette_sheet(&palette, &no_fonts().with_fallback_from(db));
        assert!(title_ink(&img, &palette) > 100);
    }

    #[test]
    fn test_title_drawn_with_preferred_fonts() {
        let dir = tempfile::tempdir().unwrap();
        if !crate::fonts::fixtures::populate_font_dir(dir.path()) {
            return;
        }
        let palette = Palette::brand();
        let img = render_palette_sheet(&palette, &FontBook::new(dir.path()));
        assert!(title_ink(&img, &palette) > 100);
    }

    #[test]
    fn test_preview_circle() {
        let palette = Palette::brand();
        let img = render_palette_sheet(&palette, &no_fonts());
        assert_eq!(*img.get_pixel(55, 455), palette.primary.to_rgb());
    }
}
