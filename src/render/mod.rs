/// Screenshot compositing
///
/// This module handles:
/// - Resolving the caption font (font.rs)
/// - Typesetting the caption (caption.rs)
/// - Drawing background, bezel, screenshot and caption onto a fresh canvas

pub mod caption;
pub mod font;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::debug;
use rusttype::Font;

use crate::config::ScreenshotConfig;
use crate::device::{Device, DeviceCatalog};
use crate::error::Result;
use crate::layout::{Placement, Transform, DEVICE_SCALE};
use crate::screenshot::{Geometry, Screenshot};

pub use font::FontResolver;

/// Renders framed screenshots for one configuration
///
/// The font is resolved once on construction, so [`Compositor::render`]
/// cannot fail. Rendering with another configuration means building
/// another compositor.
pub struct Compositor<'a> {
    catalog: &'a DeviceCatalog,
    config: &'a ScreenshotConfig,
    font: Font<'static>,
}

impl<'a> Compositor<'a> {
    /// Validate `config` and resolve its font from the system font dirs
    pub fn new(catalog: &'a DeviceCatalog, config: &'a ScreenshotConfig) -> Result<Self> {
        Self::with_resolver(catalog, config, &FontResolver::new())
    }

    pub fn with_resolver(
        catalog: &'a DeviceCatalog,
        config: &'a ScreenshotConfig,
        resolver: &FontResolver,
    ) -> Result<Self> {
        config.validate()?;
        let font = resolver.resolve(&config.font_name)?;
        Ok(Self {
            catalog,
            config,
            font,
        })
    }

    pub fn config(&self) -> &ScreenshotConfig {
        self.config
    }

    /// Frame one screenshot
    ///
    /// Draw order: background, bezel, screenshot, caption. The result is
    /// a new buffer of the screenshot's canvas size.
    pub fn render(&self, screenshot: &Screenshot) -> RgbaImage {
        let geometry = screenshot.geometry();
        let (width, height) = geometry.canvas_size.to_pixels();

        let mut canvas = RgbaImage::from_pixel(width, height, self.config.background_color.rgba_pixel());

        let device = self.catalog.device(geometry.device_class);
        let device_at = device_placement(geometry, device);
        draw_image(&mut canvas, &device.bezel, &device_at);

        let screen_at = screenshot_placement(screenshot);
        draw_image(&mut canvas, screenshot.image(), &screen_at);

        let title = self.config.title(screenshot.identifier());
        let font_px = (geometry.canvas_size.long_edge() * self.config.font_size_scale) as f32;
        caption::draw_in_band(
            &mut canvas,
            &self.font,
            font_px,
            geometry.title_band,
            self.config.text_color,
            title,
        );

        debug!(
            "Rendered {} as {}x{}: device {:?}, screen {:?}, caption \"{}\" at {:.1}px",
            screenshot.identifier(),
            width,
            height,
            device_at.rect,
            screen_at.rect,
            title,
            font_px
        );

        canvas
    }
}

/// Bezel footprint: scaled, centered, pushed below the title band
///
/// Landscape canvases take the portrait artwork turned a quarter
/// counter-clockwise so its long edge follows the canvas's long edge.
pub fn device_placement(geometry: &Geometry, device: &Device) -> Placement {
    let transform = if geometry.is_portrait {
        Transform::Identity
    } else {
        Transform::QuarterTurnCcw
    };

    Placement::centered(
        geometry.canvas_rect(),
        device.bezel_size(),
        DEVICE_SCALE,
        transform,
        geometry.title_height(),
    )
}

/// Screenshot footprint: same scale, center and drop as the bezel
///
/// The scale applies to the screenshot's own size, so it only approximately
/// lines up with the bezel's screen cutout.
pub fn screenshot_placement(screenshot: &Screenshot) -> Placement {
    let geometry = screenshot.geometry();
    Placement::centered(
        geometry.canvas_rect(),
        screenshot.size(),
        DEVICE_SCALE,
        Transform::Identity,
        geometry.title_height(),
    )
}

/// Scale and orient `source` per `placement`, then alpha-blend it onto the canvas
///
/// `source` is never modified; parts outside the canvas are clipped.
pub fn draw_image(canvas: &mut RgbaImage, source: &RgbaImage, placement: &Placement) {
    let target = placement.rect.to_pixels();

    let oriented = match placement.transform {
        Transform::Identity => imageops::resize(source, target.width, target.height, FilterType::Lanczos3),
        Transform::QuarterTurnCcw => {
            let scaled = imageops::resize(source, target.height, target.width, FilterType::Lanczos3);
            imageops::rotate270(&scaled)
        }
    };

    imageops::overlay(canvas, &oriented, target.x, target.y);
}
