//! SVG Rasterization
//!
//! Markup in, pixmap out. Parsing and font lookup go through usvg,
//! painting through resvg/tiny-skia.

use resvg::usvg::fontdb;
use resvg::{tiny_skia, usvg};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("SVG parse error: {0}")]
    Parse(#[from] usvg::Error),

    #[error("Cannot allocate a {0}x{1} pixmap")]
    InvalidSize(u32, u32),

    #[error("PNG encoding error: {0}")]
    Encode(String),
}

pub struct SvgRasterizer {
    options: usvg::Options<'static>,
}

impl SvgRasterizer {
    /// Rasterizer with an empty font database. Text elements render nothing.
    pub fn new() -> Self {
        Self {
            options: usvg::Options::default(),
        }
    }

    /// Rasterizer that resolves `font-family` against `fontdb`.
    pub fn with_fontdb(fontdb: Arc<fontdb::Database>) -> Self {
        Self {
            options: usvg::Options {
                fontdb,
                ..usvg::Options::default()
            },
        }
    }

    /// Render `markup`, scaled to `size` when given, otherwise at the
    /// document's own width and height.
    pub fn render(&self, markup: &str, size: Option<(u32, u32)>) -> Result<tiny_skia::Pixmap, RasterError> {
        let tree = usvg::Tree::from_str(markup, &self.options)?;
        let intrinsic = tree.size();
        let (width, height) = match size {
            Some(dims) => dims,
            None => {
                let int = intrinsic.to_int_size();
                (int.width(), int.height())
            }
        };

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RasterError::InvalidSize(width, height))?;
        let transform = tiny_skia::Transform::from_scale(
            width as f32 / intrinsic.width(),
            height as f32 / intrinsic.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());
        Ok(pixmap)
    }

    pub fn render_png(&self, markup: &str, size: Option<(u32, u32)>) -> Result<Vec<u8>, RasterError> {
        self.render(markup, size)?
            .encode_png()
            .map_err(|e| RasterError::Encode(e.to_string()))
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
