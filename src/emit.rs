//! Emission - writes outputs and records what was written

use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::hashing::sha256_hex;
use crate::manifest::{filename, ExportFormat};
use crate::pipeline::PipelineError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmittedFile {
    pub name: String,
    pub filename: String,
    pub format: ExportFormat,
    pub size: [u32; 2],
    pub bytes: usize,
    pub hash: String,
}

pub struct Emitter {
    out_dir: PathBuf,
    written: Vec<EmittedFile>,
}

impl Emitter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: vec![],
        }
    }

    pub fn written(&self) -> &[EmittedFile] {
        &self.written
    }

    pub fn into_written(self) -> Vec<EmittedFile> {
        self.written
    }

    pub fn write_svg(&mut self, name: &str, markup: &str, size: [u32; 2]) -> Result<PathBuf, PipelineError> {
        self.write_bytes(name, ExportFormat::Svg, markup.as_bytes(), size)
    }

    /// Write an already-encoded PNG.
    pub fn write_png_bytes(&mut self, name: &str, png: &[u8], size: [u32; 2]) -> Result<PathBuf, PipelineError> {
        self.write_bytes(name, ExportFormat::Png, png, size)
    }

    pub fn write_image(
        &mut self,
        name: &str,
        format: ExportFormat,
        image: impl Into<DynamicImage>,
    ) -> Result<PathBuf, PipelineError> {
        let image: DynamicImage = image.into();
        let image_format = match format {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Ico => ImageFormat::Ico,
            ExportFormat::Svg => {
                return Err(PipelineError::UnsupportedFormat(format.extension().to_string()))
            }
        };
        let mut encoded = Cursor::new(Vec::new());
        image.write_to(&mut encoded, image_format)?;
        self.write_bytes(name, format, encoded.get_ref(), [image.width(), image.height()])
    }

    fn write_bytes(
        &mut self,
        name: &str,
        format: ExportFormat,
        data: &[u8],
        size: [u32; 2],
    ) -> Result<PathBuf, PipelineError> {
        let file = filename(name, format);
        let path = self.out_dir.join(&file);
        fs::write(&path, data)?;
        tracing::info!(path = %path.display(), "Created");

        self.written.push(EmittedFile {
            name: name.to_string(),
            filename: file,
            format,
            size,
            bytes: data.len(),
            hash: sha256_hex(data),
        });
        Ok(path)
    }
}

/// Asset files (`.svg`, `.png`, `.ico`) present in `dir`, sorted by name.
pub fn list_assets(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut files = vec![];
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_asset = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, ExportFormat::is_asset_extension);
        if is_asset {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push(name.to_string());
            }
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_write_svg_records_hash() {
        let dir = tempfile::tempdir().unwrap();
        let mut emitter = Emitter::new(dir.path());
        let path = emitter.write_svg("logo", "<svg/>", [10, 10]).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "<svg/>");
        let record = &emitter.written()[0];
        assert_eq!(record.filename, "logo.svg");
        assert_eq!(record.bytes, 6);
        assert_eq!(record.hash, sha256_hex(b"<svg/>"));
    }

    #[test]
    fn test_write_ico() {
        let dir = tempfile::tempdir().unwrap();
        let mut emitter = Emitter::new(dir.path());
        let img = RgbaImage::from_pixel(32, 32, Rgba([255, 0, 80, 255]));
        let path = emitter.write_image("favicon", ExportFormat::Ico, img).unwrap();

        let data = fs::read(path).unwrap();
        // ICONDIR: reserved 0, type 1, one image.
        assert_eq!(&data[..6], &[0, 0, 1, 0, 1, 0]);
        assert_eq!(emitter.written()[0].size, [32, 32]);
    }

    #[test]
    fn test_svg_is_not_an_image_format() {
        let dir = tempfile::tempdir().unwrap();
        let mut emitter = Emitter::new(dir.path());
        let img = RgbaImage::new(4, 4);
        assert!(emitter.write_image("x", ExportFormat::Svg, img).is_err());
        assert!(emitter.written().is_empty());
    }

    #[test]
    fn test_missing_dir_propagates_io_error() {
        let mut emitter = Emitter::new("/nonexistent/out/dir");
        let err = emitter.write_svg("logo", "<svg/>", [1, 1]).unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn test_list_assets_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.svg", "c.ico", "notes.txt", "report.json"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("d.png")).unwrap();
        assert_eq!(list_assets(dir.path()).unwrap(), vec!["a.svg", "b.png", "c.ico"]);
    }
}
