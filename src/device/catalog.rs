use image::RgbaImage;
use log::{debug, info};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::layout::Size;

/// Which preset a screenshot is framed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Phone,
    Tablet,
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceClass::Phone => write!(f, "phone"),
            DeviceClass::Tablet => write!(f, "tablet"),
        }
    }
}

/// Where to find a device's artwork and how large its screen is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSpec {
    /// Artwork file name inside the devices directory
    pub artwork: String,
    /// Portrait (width, height) of the screen region, in pixels
    pub native_size: (u32, u32),
}

impl DeviceSpec {
    /// iPhone 7 Plus, 1242x2208
    pub fn phone() -> Self {
        Self {
            artwork: "Apple iPhone 7 Plus Silver.png".to_string(),
            native_size: (1242, 2208),
        }
    }

    /// iPad Pro 12.9", 2048x2732
    pub fn tablet() -> Self {
        Self {
            artwork: "Apple iPad Pro Silver.png".to_string(),
            native_size: (2048, 2732),
        }
    }
}

/// One catalog entry: bezel artwork plus its native screen size
#[derive(Debug, Clone)]
pub struct Device {
    pub class: DeviceClass,
    /// Portrait screen size in pixels
    pub native_size: (u32, u32),
    /// Decorative frame artwork, portrait orientation
    pub bezel: RgbaImage,
}

impl Device {
    pub fn new(class: DeviceClass, native_size: (u32, u32), bezel: RgbaImage) -> Self {
        Self {
            class,
            native_size,
            bezel,
        }
    }

    /// Decode the artwork named by `spec` from `dir`
    pub fn load(class: DeviceClass, spec: &DeviceSpec, dir: &Path) -> Result<Self> {
        let path: PathBuf = dir.join(&spec.artwork);
        let bezel = image::open(&path)
            .map_err(|source| Error::MissingBezel {
                class,
                path: path.clone(),
                source,
            })?
            .to_rgba8();

        debug!(
            "Loaded {} bezel {}x{} from {}",
            class,
            bezel.width(),
            bezel.height(),
            path.display()
        );

        Ok(Self::new(class, spec.native_size, bezel))
    }

    pub fn native_size(&self) -> Size {
        Size::from_pixels(self.native_size.0, self.native_size.1)
    }

    /// Intrinsic size of the bezel artwork
    pub fn bezel_size(&self) -> Size {
        Size::from_pixels(self.bezel.width(), self.bezel.height())
    }
}

/// The fixed set of devices screenshots are framed with
///
/// Built once per run and shared by reference; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct DeviceCatalog {
    phone: Device,
    tablet: Device,
}

impl DeviceCatalog {
    pub fn new(phone: Device, tablet: Device) -> Self {
        Self { phone, tablet }
    }

    /// Load the default phone and tablet artwork from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with(dir, &DeviceSpec::phone(), &DeviceSpec::tablet())
    }

    /// Load custom artwork from `dir`; any missing bezel is fatal
    pub fn load_with(dir: &Path, phone: &DeviceSpec, tablet: &DeviceSpec) -> Result<Self> {
        let phone = Device::load(DeviceClass::Phone, phone, dir)?;
        let tablet = Device::load(DeviceClass::Tablet, tablet, dir)?;
        info!("📱 Device catalog loaded from {}", dir.display());
        Ok(Self::new(phone, tablet))
    }

    /// Phone-class when the longer dimension fits the phone's longer
    /// native dimension (ties favor phone), tablet-class otherwise
    pub fn classify(&self, width: u32, height: u32) -> DeviceClass {
        let threshold = self.phone.native_size.0.max(self.phone.native_size.1);
        if width.max(height) <= threshold {
            DeviceClass::Phone
        } else {
            DeviceClass::Tablet
        }
    }

    pub fn device(&self, class: DeviceClass) -> &Device {
        match class {
            DeviceClass::Phone => &self.phone,
            DeviceClass::Tablet => &self.tablet,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::Rgba;

    /// Small catalog with solid-color bezels and the default native sizes
    pub(crate) fn test_catalog() -> DeviceCatalog {
        let phone = RgbaImage::from_pixel(60, 120, Rgba([10, 10, 10, 255]));
        let tablet = RgbaImage::from_pixel(90, 120, Rgba([20, 20, 20, 255]));
        DeviceCatalog::new(
            Device::new(DeviceClass::Phone, DeviceSpec::phone().native_size, phone),
            Device::new(DeviceClass::Tablet, DeviceSpec::tablet().native_size, tablet),
        )
    }

    #[test]
    fn test_classify_threshold() {
        let catalog = test_catalog();
        assert_eq!(catalog.classify(750, 1334), DeviceClass::Phone);
        assert_eq!(catalog.classify(1242, 2208), DeviceClass::Phone);
        assert_eq!(catalog.classify(2208, 1242), DeviceClass::Phone);
        assert_eq!(catalog.classify(1242, 2209), DeviceClass::Tablet);
        assert_eq!(catalog.classify(2732, 2048), DeviceClass::Tablet);
    }

    #[test]
    fn test_classify_uses_phone_spec() {
        let small = RgbaImage::new(4, 4);
        let catalog = DeviceCatalog::new(
            Device::new(DeviceClass::Phone, (100, 200), small.clone()),
            Device::new(DeviceClass::Tablet, (300, 400), small),
        );
        assert_eq!(catalog.classify(200, 10), DeviceClass::Phone);
        assert_eq!(catalog.classify(201, 10), DeviceClass::Tablet);
    }

    #[test]
    fn test_device_lookup() {
        let catalog = test_catalog();
        assert_eq!(catalog.device(DeviceClass::Phone).native_size, (1242, 2208));
        assert_eq!(catalog.device(DeviceClass::Tablet).native_size, (2048, 2732));
        assert_eq!(
            catalog.device(DeviceClass::Tablet).bezel_size(),
            Size::new(90.0, 120.0)
        );
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::new(30, 60)
            .save(dir.path().join("phone.png"))
            .unwrap();
        RgbaImage::new(40, 60)
            .save(dir.path().join("pad.png"))
            .unwrap();

        let phone = DeviceSpec { artwork: "phone.png".into(), ..DeviceSpec::phone() };
        let tablet = DeviceSpec { artwork: "pad.png".into(), ..DeviceSpec::tablet() };
        let catalog = DeviceCatalog::load_with(dir.path(), &phone, &tablet).unwrap();

        assert_eq!(catalog.device(DeviceClass::Phone).bezel.dimensions(), (30, 60));
        assert_eq!(catalog.device(DeviceClass::Tablet).bezel.dimensions(), (40, 60));
    }

    #[test]
    fn test_missing_bezel_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = DeviceCatalog::load(dir.path()).unwrap_err();
        match err {
            Error::MissingBezel { class, path, .. } => {
                assert_eq!(class, DeviceClass::Phone);
                assert!(path.ends_with("Apple iPhone 7 Plus Silver.png"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
