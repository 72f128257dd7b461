//! Batch driver: discover screenshots, frame each one, preview or save

use image::{ImageFormat, RgbaImage};
use log::{info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ScreenshotConfig;
use crate::device::DeviceCatalog;
use crate::error::{Error, Result};
use crate::render::{Compositor, FontResolver};
use crate::screenshot::Screenshot;

/// Input formats picked up from the screenshots directory
const SCREENSHOT_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Folder created inside the documents directory for saved output
const OUTPUT_DIR_NAME: &str = "ScreenshotCreator";

/// One framed screenshot
#[derive(Debug, Clone, PartialEq)]
pub struct Framed {
    pub identifier: String,
    pub image: RgbaImage,
}

/// Outcome of a save run
#[derive(Debug)]
pub struct SaveReport {
    pub destination: PathBuf,
    /// Files written, in discovery order
    pub written: Vec<PathBuf>,
    /// Screenshots whose output could not be written
    pub failed: Vec<(String, Error)>,
}

impl SaveReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Frames every screenshot in a directory
pub struct ScreenshotCreator {
    catalog: DeviceCatalog,
    screenshots_dir: PathBuf,
    fonts: FontResolver,
}

impl ScreenshotCreator {
    pub fn new(catalog: DeviceCatalog, screenshots_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            screenshots_dir: screenshots_dir.into(),
            fonts: FontResolver::new(),
        }
    }

    /// Use a custom font resolver
    pub fn with_fonts(mut self, fonts: FontResolver) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    pub fn screenshots_dir(&self) -> &Path {
        &self.screenshots_dir
    }

    /// Image files directly inside the screenshots directory, sorted by name
    ///
    /// A missing directory yields no files.
    pub fn discover(&self) -> Vec<PathBuf> {
        if !self.screenshots_dir.is_dir() {
            warn!(
                "⚠️  Screenshots directory {} not found",
                self.screenshots_dir.display()
            );
            return Vec::new();
        }

        WalkDir::new(&self.screenshots_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.into_path()),
                Err(e) => {
                    warn!("⚠️  Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|path| path.is_file() && has_screenshot_extension(path))
            .collect()
    }

    /// Decode all discovered screenshots, skipping undecodable files
    ///
    /// Only recoverable errors are skipped; anything else aborts the batch.
    pub fn load_screenshots(&self) -> Result<Vec<Screenshot>> {
        let mut screenshots = Vec::new();
        for path in self.discover() {
            match Screenshot::open(&path, &self.catalog) {
                Ok(screenshot) => screenshots.push(screenshot),
                Err(e) if e.is_recoverable() => {
                    warn!("⚠️  Skipping {}: {}", path.display(), e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(screenshots)
    }

    /// Frame every screenshot in discovery order without touching disk
    pub fn preview_all(&self, config: &ScreenshotConfig) -> Result<Vec<Framed>> {
        let compositor = Compositor::with_resolver(&self.catalog, config, &self.fonts)?;

        Ok(self
            .load_screenshots()?
            .iter()
            .map(|screenshot| Framed {
                identifier: screenshot.identifier().to_string(),
                image: compositor.render(screenshot),
            })
            .collect())
    }

    /// Frame every screenshot and write `<identifier>.png` into `destination`
    ///
    /// The directory is created if needed. A failed write is recorded in the
    /// report and the remaining screenshots are still written. When two
    /// inputs share a stem (`a.png`, `a.jpg`) only the first is written; the
    /// later one is reported as failed.
    pub fn save_all(&self, config: &ScreenshotConfig, destination: &Path) -> Result<SaveReport> {
        let compositor = Compositor::with_resolver(&self.catalog, config, &self.fonts)?;

        fs::create_dir_all(destination).map_err(|source| Error::CreateDir {
            path: destination.to_path_buf(),
            source,
        })?;

        let mut report = SaveReport {
            destination: destination.to_path_buf(),
            written: Vec::new(),
            failed: Vec::new(),
        };

        let mut taken: HashSet<PathBuf> = HashSet::new();

        for screenshot in self.load_screenshots()? {
            let path = destination.join(format!("{}.png", screenshot.identifier()));
            if taken.contains(&path) {
                let err = Error::OutputCollision { path };
                warn!("⚠️  Skipping {}: {}", screenshot.identifier(), err);
                report.failed.push((screenshot.identifier().to_string(), err));
                continue;
            }

            let framed = compositor.render(&screenshot);
            match framed.save_with_format(&path, ImageFormat::Png) {
                Ok(()) => {
                    info!("📸 Saved {}", path.display());
                    taken.insert(path.clone());
                    report.written.push(path);
                }
                Err(source) => {
                    warn!("⚠️  Failed to write {}: {}", path.display(), source);
                    report
                        .failed
                        .push((screenshot.identifier().to_string(), Error::Write { path, source }));
                }
            }
        }

        info!("$ open {}", destination.display());
        Ok(report)
    }
}

/// `<documents>/ScreenshotCreator`, falling back to the home directory
pub fn default_destination() -> Result<PathBuf> {
    let mut path = dirs::document_dir()
        .or_else(dirs::home_dir)
        .ok_or(Error::NoDocumentsDir)?;

    path.push(OUTPUT_DIR_NAME);
    Ok(path)
}

fn has_screenshot_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SCREENSHOT_EXTENSIONS.contains(&ext.as_str()))
}
