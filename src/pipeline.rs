//! Brand Pipeline - Single Entry Point
//!
//! template -> raster -> emission, once per manifest entry. A failed
//! rasterization skips that one output; any other error ends the run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::emit::{EmittedFile, Emitter};
use crate::fonts::{system_database, FontBook, DEFAULT_FONT_DIR};
use crate::hashing::compute_manifest_hash;
use crate::icon::render_app_icon;
use crate::manifest::{filename, BrandManifest, ExportFormat};
use crate::palette::Palette;
use crate::raster::SvgRasterizer;
use crate::sheet::render_palette_sheet;
use crate::templates::{logo_svg, LogoStyle};
use crate::{BRAND_NAME, ENGINE_VERSION};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported export format for bitmaps: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub out_dir: PathBuf,
    pub font_dir: PathBuf,
    /// Discover installed fonts for SVG text and the default face.
    pub system_fonts: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            font_dir: PathBuf::from(DEFAULT_FONT_DIR),
            system_fonts: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedAsset {
    pub filename: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    pub brand: String,
    pub engine_version: String,
    pub created_at: DateTime<Utc>,
    pub out_dir: PathBuf,
    pub manifest_hash: String,
    pub emitted: Vec<EmittedFile>,
    pub skipped: Vec<SkippedAsset>,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct BrandPipeline {
    config: PipelineConfig,
    palette: Palette,
    manifest: BrandManifest,
    rasterizer: SvgRasterizer,
    fonts: FontBook,
}

impl BrandPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let (rasterizer, fonts) = if config.system_fonts {
            let db = Arc::new(system_database());
            (
                SvgRasterizer::with_fontdb(Arc::clone(&db)),
                FontBook::new(&config.font_dir).with_fallback_from(&db),
            )
        } else {
            (SvgRasterizer::new(), FontBook::new(&config.font_dir))
        };
        Self {
            config,
            palette: Palette::brand(),
            manifest: BrandManifest::standard(),
            rasterizer,
            fonts,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Produce every manifest output.
    pub fn run(&self) -> Result<BuildReport, PipelineError> {
        tracing::info!(brand = BRAND_NAME, out_dir = %self.config.out_dir.display(), "Generating brand assets");

        let mut emitter = Emitter::new(&self.config.out_dir);
        let mut skipped = vec![];

        self.emit_logos(&mut emitter, &mut skipped)?;
        self.emit_monochrome(&mut emitter, &mut skipped)?;
        self.emit_icons(&mut emitter)?;
        self.emit_favicon(&mut emitter)?;
        self.emit_palette_sheet(&mut emitter)?;

        let emitted = emitter.into_written();
        let manifest_hash = compute_manifest_hash(&emitted)?;

        tracing::info!(emitted = emitted.len(), skipped = skipped.len(), "Brand package complete");

        Ok(BuildReport {
            brand: BRAND_NAME.to_string(),
            engine_version: ENGINE_VERSION.to_string(),
            created_at: Utc::now(),
            out_dir: self.config.out_dir.clone(),
            manifest_hash,
            emitted,
            skipped,
        })
    }

    fn emit_logos(&self, emitter: &mut Emitter, skipped: &mut Vec<SkippedAsset>) -> Result<(), PipelineError> {
        let scale = self.manifest.raster_scale;
        for logo in &self.manifest.logos {
            let svg = logo_svg(BRAND_NAME, logo.width, logo.height, logo.style, &self.palette);
            emitter.write_svg(&logo.name, &svg, [logo.width, logo.height])?;
            self.rasterize_or_skip(
                emitter,
                skipped,
                &logo.name,
                &svg,
                (logo.width * scale, logo.height * scale),
            )?;
        }
        Ok(())
    }

    fn emit_monochrome(&self, emitter: &mut Emitter, skipped: &mut Vec<SkippedAsset>) -> Result<(), PipelineError> {
        let main = self
            .manifest
            .logos
            .iter()
            .find(|l| l.style == LogoStyle::Main)
            .map_or((400, 120), |l| (l.width, l.height));

        for variant in &self.manifest.monochrome {
            let palette = self.palette.monochrome(variant.ink);
            let svg = logo_svg(BRAND_NAME, main.0, main.1, LogoStyle::Main, &palette);
            self.rasterize_or_skip(
                emitter,
                skipped,
                &variant.name,
                &svg,
                (variant.size[0], variant.size[1]),
            )?;
        }
        Ok(())
    }

    fn emit_icons(&self, emitter: &mut Emitter) -> Result<(), PipelineError> {
        for &size in &self.manifest.icon_sizes {
            let icon = render_app_icon(size, &self.palette, &self.fonts);
            emitter.write_image(&BrandManifest::icon_name(size), ExportFormat::Png, icon)?;
        }
        Ok(())
    }

    fn emit_favicon(&self, emitter: &mut Emitter) -> Result<(), PipelineError> {
        let icon = render_app_icon(self.manifest.favicon_size, &self.palette, &self.fonts);
        emitter.write_image(&self.manifest.favicon_name, ExportFormat::Ico, icon)?;
        Ok(())
    }

    fn emit_palette_sheet(&self, emitter: &mut Emitter) -> Result<(), PipelineError> {
        let sheet = render_palette_sheet(&self.palette, &self.fonts);
        emitter.write_image(&self.manifest.palette_sheet_name, ExportFormat::Png, sheet)?;
        Ok(())
    }

    /// Rasterize and write `name.png`. Rasterization errors are logged and
    /// recorded, write errors propagate.
    pub(crate) fn rasterize_or_skip(
        &self,
        emitter: &mut Emitter,
        skipped: &mut Vec<SkippedAsset>,
        name: &str,
        svg: &str,
        size: (u32, u32),
    ) -> Result<(), PipelineError> {
        match self.rasterizer.render_png(svg, Some(size)) {
            Ok(png) => {
                emitter.write_png_bytes(name, &png, [size.0, size.1])?;
            }
            Err(e) => {
                let file = filename(name, ExportFormat::Png);
                tracing::error!(file = %file, error = %e, "Rasterization failed; skipping");
                skipped.push(SkippedAsset { filename: file, reason: e.to_string() });
            }
        }
        Ok(())
    }
}

impl Default for BrandPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
