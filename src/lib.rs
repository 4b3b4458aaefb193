//! Brandkit Core - Brand Asset Generator
//!
//! Produces the brand package from fixed in-code parameters:
//! logo variants (SVG + PNG), monochrome logos, app icons, a favicon
//! and a palette/typography reference sheet.
//!
//! template -> raster -> emission, driven by a static manifest.

pub mod palette;
pub mod templates;
pub mod raster;
pub mod fonts;
pub mod icon;
pub mod sheet;
pub mod manifest;
pub mod emit;
pub mod hashing;
pub mod pipeline;

pub use palette::{HexColor, Palette, Role};
pub use templates::{logo_svg, LogoStyle};
pub use raster::{RasterError, SvgRasterizer};
pub use fonts::{system_database, FontBook, Typeface};
pub use icon::render_app_icon;
pub use sheet::render_palette_sheet;
pub use manifest::{AssetDescriptor, BrandManifest, ExportFormat};
pub use emit::{list_assets, EmittedFile, Emitter};
pub use hashing::{compute_manifest_hash, sha256_hex};
pub use pipeline::{BrandPipeline, BuildReport, PipelineConfig, PipelineError};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BRAND_NAME: &str = "GSHOP";
