//! Font lookup for the text glyph.

use rusttype::Font;
use std::path::{Path, PathBuf};

/// Bold sans-serif fonts first, generic bold sans after them.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/noto/NotoSans-Bold.ttf",
];

/// Font used to draw the text glyph.
#[derive(Clone)]
pub enum GlyphFont {
    TrueType { font: Font<'static>, path: PathBuf },
    Builtin,
}

impl GlyphFont {
    pub fn describe(&self) -> String {
        match self {
            GlyphFont::TrueType { path, .. } => path.display().to_string(),
            GlyphFont::Builtin => "built-in 5x7 bitmap font".to_string(),
        }
    }
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GlyphFont({})", self.describe())
    }
}

fn load_font(path: &Path) -> Option<Font<'static>> {
    let data = std::fs::read(path).ok()?;
    Font::try_from_vec(data)
}

/// Walk `candidates` in order and return the first font that loads.
///
/// Unreadable or unparsable files are skipped. When nothing loads, a warning
/// is printed and the built-in bitmap font is returned.
pub fn locate_font<P: AsRef<Path>>(candidates: &[P]) -> GlyphFont {
    for candidate in candidates {
        let path = candidate.as_ref();
        if let Some(font) = load_font(path) {
            return GlyphFont::TrueType {
                font,
                path: path.to_path_buf(),
            };
        }
    }

    eprintln!("⚠ No usable font found, falling back to the built-in bitmap font");
    GlyphFont::Builtin
}

/// Candidate list with an optional user-supplied font tried first.
pub fn candidate_paths(preferred: Option<&Path>) -> Vec<PathBuf> {
    preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(FONT_CANDIDATES.iter().map(PathBuf::from))
        .collect()
}
