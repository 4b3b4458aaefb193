//! Font Resolution
//!
//! Preferred faces are plain files under a font root. When one is missing
//! the renderer substitutes a default face found among installed fonts.
//! The same installed face backs the generic `sans-serif` family used by
//! the SVG templates.

use ab_glyph::{FontArc, FontVec, PxScale};
use resvg::usvg::fontdb;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_FONT_DIR: &str = "/usr/share/fonts/truetype";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Typeface {
    InterBlack,
    InterBold,
    InterMedium,
    InterRegular,
    RobotoRegular,
}

impl Typeface {
    /// Location relative to the font root.
    pub fn relative_path(self) -> &'static str {
        match self {
            Typeface::InterBlack => "inter/Inter-Black.ttf",
            Typeface::InterBold => "inter/Inter-Bold.ttf",
            Typeface::InterMedium => "inter/Inter-Medium.ttf",
            Typeface::InterRegular => "inter/Inter-Regular.ttf",
            Typeface::RobotoRegular => "roboto/Roboto-Regular.ttf",
        }
    }
}

/// A loaded face paired with the pixel size to draw it at.
#[derive(Clone)]
pub struct SizedFont {
    pub font: FontArc,
    pub px: u32,
    /// True when this is the default face standing in for a missing one.
    pub substituted: bool,
}

impl SizedFont {
    pub fn scale(&self) -> PxScale {
        PxScale::from(self.px as f32)
    }
}

/// Installed fonts, with `sans-serif` pointed at a face that exists.
///
/// fontdb maps `sans-serif` to "Arial" out of the box, which most Linux
/// systems do not ship.
pub fn system_database() -> fontdb::Database {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let family = default_face(&db)
        .and_then(|id| db.face(id))
        .and_then(|f| f.families.first())
        .map(|(name, _)| name.clone());
    match family {
        Some(family) => {
            tracing::debug!(faces = db.len(), family = %family, "Loaded system fonts");
            db.set_sans_serif_family(family);
        }
        None => tracing::warn!("No installed fonts found; text will be skipped"),
    }
    db
}

/// Face used when a preferred one is missing: the configured `sans-serif`
/// family, else the first family named "... Sans ...", else any face.
pub fn default_face(db: &fontdb::Database) -> Option<fontdb::ID> {
    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..Default::default()
    };
    db.query(&query)
        .or_else(|| {
            db.faces()
                .find(|f| f.families.iter().any(|(name, _)| name.contains("Sans")))
                .map(|f| f.id)
        })
        .or_else(|| db.faces().next().map(|f| f.id))
}

fn load_face(db: &fontdb::Database, id: fontdb::ID) -> Option<FontArc> {
    db.with_face_data(id, |data, index| FontVec::try_from_vec_and_index(data.to_vec(), index))?
        .map(FontArc::new)
        .map_err(|e| tracing::warn!(error = %e, "Default font could not be parsed"))
        .ok()
}

pub struct FontBook {
    root: PathBuf,
    fallback: Option<FontArc>,
}

impl FontBook {
    /// Font book without a default face.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: None,
        }
    }

    /// Take the default face from an already loaded database.
    pub fn with_fallback_from(mut self, db: &fontdb::Database) -> Self {
        self.fallback = default_face(db).and_then(|id| load_face(db, id));
        if self.fallback.is_none() {
            tracing::warn!("No installed font usable as default; text may be skipped");
        }
        self
    }

    /// Load a preferred face. Missing or unreadable files yield `None`.
    pub fn load(&self, face: Typeface) -> Option<FontArc> {
        let path = self.root.join(face.relative_path());
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Preferred font unavailable");
                return None;
            }
        };
        match FontArc::try_from_vec(data) {
            Ok(font) => Some(font),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Preferred font is not a valid font file");
                None
            }
        }
    }

    /// `face` at `px`, or the default face at `fallback_px`.
    pub fn resolve(&self, face: Typeface, px: u32, fallback_px: u32) -> Option<SizedFont> {
        match self.load(face) {
            Some(font) => Some(SizedFont { font, px, substituted: false }),
            None => self.default_font(fallback_px),
        }
    }

    pub fn default_font(&self, px: u32) -> Option<SizedFont> {
        self.fallback.clone().map(|font| SizedFont {
            font,
            px,
            substituted: true,
        })
    }
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_DIR)
    }
}

/// Test fixtures backed by whatever fonts the machine has installed.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use std::path::Path;
    use std::sync::OnceLock;

    pub fn installed() -> &'static fontdb::Database {
        static DB: OnceLock<fontdb::Database> = OnceLock::new();
        DB.get_or_init(system_database)
    }

    /// Bytes of a single-face installed font, if there is one.
    pub fn face_bytes() -> Option<Vec<u8>> {
        let db = installed();
        let id = default_face(db)?;
        db.with_face_data(id, |data, index| (index == 0).then(|| data.to_vec()))
            .flatten()
            .filter(|data| FontArc::try_from_vec(data.clone()).is_ok())
    }

    /// Place an installed face under `root` as every preferred typeface.
    pub fn populate_font_dir(root: &Path) -> bool {
        let Some(data) = face_bytes() else {
            return false;
        };
        for face in [
            Typeface::InterBlack,
            Typeface::InterBold,
            Typeface::InterMedium,
            Typeface::InterRegular,
            Typeface::RobotoRegular,
        ] {
            let path = root.join(face.relative_path());
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, &data).unwrap();
        }
        true
    }
}
