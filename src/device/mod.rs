/// Device bezel catalog
///
/// This module handles:
/// - The two device classes (phone, tablet) and their native screen sizes
/// - Loading bezel artwork from the devices directory
/// - Classifying screenshots into a device class

pub mod catalog;

pub use catalog::{Device, DeviceCatalog, DeviceClass, DeviceSpec};
