//! Frames raw app screenshots for app-store listings
//!
//! Each screenshot is drawn onto a canvas the size of its device's screen,
//! on top of a scaled device bezel, below a caption band:
//!
//! ```text
//! Screenshots/*.png ─┐
//!                    ├─► Screenshot ─► Compositor ─► <identifier>.png
//! Devices/*.png ─────┘   (geometry)    (bg, bezel, screen, caption)
//! ```
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Styling: colors, caption font and size, titles |
//! | [`device`] | Phone/tablet bezels and screenshot classification |
//! | [`screenshot`] | A loaded screenshot and its canvas geometry |
//! | [`layout`] | Rects, sizes and the placement transform |
//! | [`render`] | Font lookup, caption typesetting and compositing |
//! | [`creator`] | Batch discovery, preview and save |

pub mod color;
pub mod config;
pub mod creator;
pub mod device;
pub mod error;
pub mod layout;
pub mod render;
pub mod screenshot;

pub use color::Color;
pub use config::ScreenshotConfig;
pub use creator::{default_destination, Framed, SaveReport, ScreenshotCreator};
pub use device::{Device, DeviceCatalog, DeviceClass, DeviceSpec};
pub use error::{Error, Result};
pub use render::{Compositor, FontResolver};
pub use screenshot::Screenshot;
