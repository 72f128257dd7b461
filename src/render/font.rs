//! Font face resolution for captions
//!
//! A font name resolves, in order, to:
//! 1. an existing font file when the name is a path
//! 2. a face bundled into the binary
//! 3. a font file whose stem matches the name in the search directories
//!    (extra dirs first, then the user and system font directories)

use log::{debug, warn};
use rusttype::Font;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Faces compiled into the binary, keyed by name
const BUNDLED_FONTS: &[(&str, &[u8])] = &[(
    "DejaVuSans",
    include_bytes!("../../assets/fonts/DejaVuSans.ttf"),
)];

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Finds and parses font faces by name
#[derive(Debug, Clone, Default)]
pub struct FontResolver {
    search_dirs: Vec<PathBuf>,
}

impl FontResolver {
    /// Resolver that searches the user and system font directories
    pub fn new() -> Self {
        Self {
            search_dirs: system_font_dirs(),
        }
    }

    /// Resolver limited to paths and bundled faces
    pub fn bundled_only() -> Self {
        Self::default()
    }

    /// Search `dir` before any directory already registered
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.insert(0, dir.into());
        self
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Resolve `name` to a parsed face
    pub fn resolve(&self, name: &str) -> Result<Font<'static>> {
        let path = Path::new(name);
        if path.is_file() {
            return load_font_file(path);
        }

        let wanted = normalize(name);

        if let Some(&(bundled, bytes)) = BUNDLED_FONTS
            .iter()
            .find(|(bundled, _)| normalize(bundled) == wanted)
        {
            debug!("Using bundled font {}", bundled);
            return Font::try_from_bytes(bytes).ok_or_else(|| Error::InvalidFont {
                path: PathBuf::from(bundled),
            });
        }

        for dir in &self.search_dirs {
            if let Some(found) = find_font_file(dir, &wanted) {
                debug!("Resolved font '{}' to {}", name, found.display());
                return load_font_file(&found);
            }
        }

        Err(Error::FontNotFound(name.to_string()))
    }
}

/// Parse a font file from disk
fn load_font_file(path: &Path) -> Result<Font<'static>> {
    let bytes = fs::read(path).map_err(|source| Error::FontRead {
        path: path.to_path_buf(),
        source,
    })?;

    Font::try_from_vec(bytes).ok_or_else(|| Error::InvalidFont {
        path: path.to_path_buf(),
    })
}

/// First font file under `dir` whose normalized stem equals `wanted`
fn find_font_file(dir: &Path, wanted: &str) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }

    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(e) => {
                warn!("⚠️  Skipping font entry: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.to_string_lossy().to_lowercase())
                .is_some_and(|ext| FONT_EXTENSIONS.contains(&ext.as_str()))
        })
        .find(|path| {
            path.file_stem()
                .is_some_and(|stem| normalize(&stem.to_string_lossy()) == wanted)
        })
}

/// Case-insensitive comparison key ignoring spaces, dashes and dots
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// User font dir plus the usual platform locations
fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();

    if let Some(dir) = dirs::font_dir() {
        dirs.push(dir);
    }
    if let Some(home) = dirs::home_dir() {
        dirs.push(home.join(".fonts"));
    }

    for dir in [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/System/Library/Fonts",
        "/Library/Fonts",
        "C:\\Windows\\Fonts",
    ] {
        dirs.push(PathBuf::from(dir));
    }

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_font_resolves() {
        let resolver = FontResolver::bundled_only();
        assert!(resolver.resolve("DejaVuSans").is_ok());
        assert!(resolver.resolve("DejaVu Sans").is_ok());
        assert!(resolver.resolve("dejavu-sans").is_ok());
    }

    #[test]
    fn test_unknown_font_is_fatal() {
        let resolver = FontResolver::bundled_only();
        let err = resolver.resolve(".SFUIDisplay-Light").unwrap_err();
        assert!(matches!(err, Error::FontNotFound(name) if name == ".SFUIDisplay-Light"));
    }

    #[test]
    fn test_resolves_from_search_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("truetype");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Caption-Light.ttf"), BUNDLED_FONTS[0].1).unwrap();

        let resolver = FontResolver::bundled_only().with_dir(dir.path());
        assert!(resolver.resolve("Caption Light").is_ok());
        assert!(resolver.resolve("Caption").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_search_dir_skips_broken_links() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.ttf"), dir.path().join("Aaa.ttf")).unwrap();
        fs::write(dir.path().join("Caption.ttf"), BUNDLED_FONTS[0].1).unwrap();

        let resolver = FontResolver::bundled_only().with_dir(dir.path());
        assert!(resolver.resolve("Caption").is_ok());
        assert!(resolver.resolve("Aaa").is_err());
    }

    #[test]
    fn test_resolves_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.ttf");
        fs::write(&path, BUNDLED_FONTS[0].1).unwrap();

        let resolver = FontResolver::bundled_only();
        assert!(resolver.resolve(path.to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_invalid_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Broken.ttf");
        fs::write(&path, b"definitely not a font").unwrap();

        let resolver = FontResolver::bundled_only().with_dir(dir.path());
        assert!(matches!(
            resolver.resolve("Broken"),
            Err(Error::InvalidFont { .. })
        ));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(".SFUIDisplay-Light"), "sfuidisplaylight");
        assert_eq!(normalize("DejaVu Sans"), "dejavusans");
    }
}
