//! Output Manifest - the fixed list of files a run produces

use serde::{Deserialize, Serialize};

use crate::palette::HexColor;
use crate::templates::LogoStyle;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Svg,
    Png,
    Ico,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
            ExportFormat::Ico => "ico",
        }
    }

    /// Extensions the completion summary lists.
    pub fn is_asset_extension(ext: &str) -> bool {
        ["svg", "png", "ico"].iter().any(|e| ext.eq_ignore_ascii_case(e))
    }
}

/// One logo variant, emitted as SVG and as a PNG at `raster_scale`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetDescriptor {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub style: LogoStyle,
}

impl AssetDescriptor {
    fn new(name: &str, width: u32, height: u32, style: LogoStyle) -> Self {
        Self { name: name.to_string(), width, height, style }
    }
}

/// Main logo rendered with primary and secondary replaced by `ink`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonochromeVariant {
    pub name: String,
    pub ink: HexColor,
    pub size: [u32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandManifest {
    pub logos: Vec<AssetDescriptor>,
    pub raster_scale: u32,
    pub monochrome: Vec<MonochromeVariant>,
    pub icon_sizes: Vec<u32>,
    pub favicon_name: String,
    pub favicon_size: u32,
    pub palette_sheet_name: String,
}

impl BrandManifest {
    pub const ICON_SIZES: [u32; 9] = [1024, 512, 192, 180, 152, 144, 96, 72, 48];

    pub fn standard() -> Self {
        Self {
            logos: vec![
                AssetDescriptor::new("main_logo", 400, 120, LogoStyle::Main),
                AssetDescriptor::new("horizontal_logo", 400, 120, LogoStyle::Horizontal),
                AssetDescriptor::new("vertical_logo", 300, 150, LogoStyle::Vertical),
                AssetDescriptor::new("icon_only", 120, 120, LogoStyle::Icon),
            ],
            raster_scale: 4,
            monochrome: vec![
                MonochromeVariant { name: "mono_black".into(), ink: HexColor::BLACK, size: [1600, 480] },
                MonochromeVariant { name: "mono_white".into(), ink: HexColor::WHITE, size: [1600, 480] },
            ],
            icon_sizes: Self::ICON_SIZES.to_vec(),
            favicon_name: "favicon".into(),
            favicon_size: 32,
            palette_sheet_name: "brand_palette".into(),
        }
    }

    pub fn icon_name(size: u32) -> String {
        format!("app_icon_{size}x{size}")
    }

    /// Every filename a fully successful run writes, in emission order.
    pub fn expected_files(&self) -> Vec<String> {
        let mut files = vec![];
        for logo in &self.logos {
            files.push(filename(&logo.name, ExportFormat::Svg));
            files.push(filename(&logo.name, ExportFormat::Png));
        }
        for mono in &self.monochrome {
            files.push(filename(&mono.name, ExportFormat::Png));
        }
        for &size in &self.icon_sizes {
            files.push(filename(&Self::icon_name(size), ExportFormat::Png));
        }
        files.push(filename(&self.favicon_name, ExportFormat::Ico));
        files.push(filename(&self.palette_sheet_name, ExportFormat::Png));
        files
    }
}

impl Default for BrandManifest {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn filename(name: &str, format: ExportFormat) -> String {
    format!("{}.{}", name, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_counts() {
        let m = BrandManifest::standard();
        assert_eq!(m.logos.len(), 4);
        assert_eq!(m.monochrome.len(), 2);
        assert_eq!(m.icon_sizes.len(), 9);
        // 4 x 2 logos + 2 mono + 9 icons + favicon + sheet
        assert_eq!(m.expected_files().len(), 21);
    }

    #[test]
    fn test_expected_names() {
        let files = BrandManifest::standard().expected_files();
        for name in [
            "main_logo.svg",
            "main_logo.png",
            "icon_only.png",
            "mono_white.png",
            "app_icon_1024x1024.png",
            "app_icon_48x48.png",
            "favicon.ico",
            "brand_palette.png",
        ] {
            assert!(files.iter().any(|f| f == name), "missing {name}");
        }
    }

    #[test]
    fn test_asset_extensions() {
        assert!(ExportFormat::is_asset_extension("PNG"));
        assert!(ExportFormat::is_asset_extension("ico"));
        assert!(!ExportFormat::is_asset_extension("json"));
    }
}
