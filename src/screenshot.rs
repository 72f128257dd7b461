//! A raw screenshot and the canvas geometry derived from it

use image::RgbaImage;
use log::debug;
use std::path::Path;

use crate::device::{DeviceCatalog, DeviceClass};
use crate::error::{Error, Result};
use crate::layout::{Rect, Size, TITLE_BAND_FRACTION};

/// Geometry computed once when a screenshot is loaded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Raw image is taller than wide
    pub is_portrait: bool,
    pub device_class: DeviceClass,
    /// Output size: the device's native size, swapped for landscape shots
    pub canvas_size: Size,
    /// Strip across the top of the canvas reserved for the caption
    pub title_band: Rect,
}

impl Geometry {
    /// Derive geometry for an image of `width` x `height`
    pub fn compute(width: u32, height: u32, catalog: &DeviceCatalog) -> Self {
        let is_portrait = Size::from_pixels(width, height).is_portrait();
        let device_class = catalog.classify(width, height);

        let native = catalog.device(device_class).native_size();
        let canvas_size = if is_portrait { native } else { native.swapped() };

        let mut title_band = Rect::with_size(canvas_size);
        title_band.size.height = canvas_size.long_edge() * TITLE_BAND_FRACTION;

        Self {
            is_portrait,
            device_class,
            canvas_size,
            title_band,
        }
    }

    pub fn canvas_rect(&self) -> Rect {
        Rect::with_size(self.canvas_size)
    }

    /// Height of the caption band, also the downward offset of the device
    pub fn title_height(&self) -> f64 {
        self.title_band.size.height
    }
}

/// One input screenshot, immutable once constructed
#[derive(Debug, Clone)]
pub struct Screenshot {
    identifier: String,
    image: RgbaImage,
    geometry: Geometry,
}

impl Screenshot {
    pub fn new(identifier: impl Into<String>, image: RgbaImage, catalog: &DeviceCatalog) -> Self {
        let geometry = Geometry::compute(image.width(), image.height(), catalog);
        Self {
            identifier: identifier.into(),
            image,
            geometry,
        }
    }

    /// Decode a screenshot from disk
    pub fn open(path: &Path, catalog: &DeviceCatalog) -> Result<Self> {
        let image = image::open(path)
            .map_err(|source| Error::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let screenshot = Self::new(identifier_from_path(path), image, catalog);
        debug!(
            "Loaded {} ({}x{}, {}, {})",
            screenshot.identifier,
            screenshot.image.width(),
            screenshot.image.height(),
            screenshot.geometry.device_class,
            if screenshot.geometry.is_portrait { "portrait" } else { "landscape" },
        );
        Ok(screenshot)
    }

    /// File name without its extension; used for captions and output names
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Pixel size of the raw screenshot
    pub fn size(&self) -> Size {
        Size::from_pixels(self.image.width(), self.image.height())
    }
}

/// Final path component with exactly one trailing extension removed
pub fn identifier_from_path(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
