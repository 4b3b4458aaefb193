//! App Icon Renderer
//!
//! Draws the mark directly onto a square bitmap: a primary circle, the
//! centered glyph and one accent dot.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_text_mut, text_size};

use crate::fonts::{FontBook, Typeface};
use crate::palette::Palette;

pub const ICON_GLYPH: &str = "G";

/// Render the app icon at `size` x `size`.
pub fn render_app_icon(size: u32, palette: &Palette, fonts: &FontBook) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 0]));

    let margin = size / 8;
    let diameter = size - 2 * margin;
    let center = (margin + diameter / 2) as i32;
    draw_filled_circle_mut(&mut img, (center, center), (diameter / 2) as i32, palette.primary.to_rgba());

    match fonts.resolve(Typeface::InterBlack, size / 3, size / 4) {
        Some(font) => {
            if font.substituted {
                tracing::debug!(size, px = font.px, "Icon glyph drawn with default font");
            }
            let (text_w, text_h) = text_size(font.scale(), &font.font, ICON_GLYPH);
            let x = (size as i32 - text_w as i32) / 2;
            let y = (size as i32 - text_h as i32) / 2 - font.px as i32 / 8;
            draw_text_mut(
                &mut img,
                palette.background.to_rgba(),
                x,
                y,
                font.scale(),
                &font.font,
                ICON_GLYPH,
            );
        }
        None => tracing::warn!(size, "No font available; icon glyph skipped"),
    }

    let dot = size / 40;
    if dot > 0 {
        let x0 = size - margin / 2 - dot;
        let y0 = margin / 2;
        draw_filled_circle_mut(
            &mut img,
            ((x0 + dot / 2) as i32, (y0 + dot / 2) as i32),
            (dot / 2) as i32,
            palette.accent.to_rgba(),
        );
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_fonts() -> FontBook {
        FontBook::new("/nonexistent/fonts")
    }

    /// Near-white pixels inside the primary circle.
    fn glyph_pixels(img: &RgbaImage) -> usize {
        let size = img.width() as i64;
        let radius = (size - 2 * (size / 8)) / 2;
        let center = size / 2;
        img.enumerate_pixels()
            .filter(|(x, y, _)| {
                let (dx, dy) = (*x as i64 - center, *y as i64 - center);
                dx * dx + dy * dy < radius * radius
            })
            .filter(|(_, _, px)| px[0] > 230 && px[1] > 230 && px[2] > 230)
            .count()
    }

    #[test]
    fn test_square_output() {
        for size in [1024, 48, 32] {
            let img = render_app_icon(size, &Palette::brand(), &no_fonts());
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_corners_transparent_center_primary() {
        let palette = Palette::brand();
        let img = render_app_icon(192, &palette, &no_fonts());
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(191, 191)[3], 0);
        assert_eq!(*img.get_pixel(96, 96), palette.primary.to_rgba());
    }

    #[test]
    fn test_no_font_leaves_circle_plain() {
        let palette = Palette::brand();
        let img = render_app_icon(192, &palette, &no_fonts());
        assert_eq!(glyph_pixels(&img), 0);
    }

    #[test]
    fn test_glyph_drawn_with_preferred_font() {
        let dir = tempfile::tempdir().unwrap();
        if !crate::fonts::fixtures::populate_font_dir(dir.path()) {
            return;
        }
        let palette = Palette::brand();
        let img = render_app_icon(512, &palette, &FontBook::new(dir.path()));
        assert!(glyph_pixels(&img) > 100);
    }

    #[test]
    fn test_glyph_drawn_with_default_font() {
        let db = crate::fonts::fixtures::installed();
        if db.is_empty() {
            return;
        }
        let palette = Palette::brand();
        let fonts = no_fonts().with_fallback_from(db);
        let img = render_app_icon(512, &palette, &fonts);
        assert!(glyph_pixels(&img) > 100);
    }

    #[test]
    fn test_accent_dot_top_right() {
        let palette = Palette::brand();
        let img = render_app_icon(1024, &palette, &no_fonts());
        // margin 128, dot 25: bbox starts at (935, 64).
        assert_eq!(*img.get_pixel(935 + 12, 64 + 12), palette.accent.to_rgba());
    }
}
