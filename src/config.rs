/// Styling for framed screenshots
///
/// The configuration is built programmatically (or loaded from a JSON file by
/// the CLI) and stays immutable for the duration of a batch.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};

/// Caption used when a screenshot has no entry in `titles`
pub const UNTITLED: &str = "Untitled";

/// Font used when none is configured (bundled into the binary)
pub const DEFAULT_FONT: &str = "DejaVuSans";

/// All styling parameters for a framing run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScreenshotConfig {
    /// Canvas fill behind the device
    pub background_color: Color,

    /// Caption color
    pub text_color: Color,

    /// Caption font size as a fraction of the canvas long edge
    pub font_size_scale: f64,

    /// Font face name, or a path to a font file
    pub font_name: String,

    /// Captions keyed by screenshot identifier (file name without extension)
    pub titles: BTreeMap<String, String>,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            background_color: Color::GRAY,
            text_color: Color::WHITE,
            font_size_scale: 0.04,
            font_name: DEFAULT_FONT.to_string(),
            titles: BTreeMap::new(),
        }
    }
}

impl ScreenshotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caption for a screenshot, falling back to "Untitled"
    pub fn title(&self, identifier: &str) -> &str {
        self.titles
            .get(identifier)
            .map(String::as_str)
            .unwrap_or(UNTITLED)
    }

    /// Builder-style caption registration
    pub fn with_title(mut self, identifier: impl Into<String>, title: impl Into<String>) -> Self {
        self.titles.insert(identifier.into(), title.into());
        self
    }

    /// Check the invariants a render relies on
    pub fn validate(&self) -> Result<()> {
        if !self.font_size_scale.is_finite() || self.font_size_scale <= 0.0 {
            return Err(Error::Config(format!(
                "font_size_scale must be a positive number, got {}",
                self.font_size_scale
            )));
        }
        if self.font_name.trim().is_empty() {
            return Err(Error::Config("font_name must not be empty".into()));
        }
        Ok(())
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON string; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScreenshotConfig::default();
        assert_eq!(config.background_color, Color::GRAY);
        assert_eq!(config.text_color, Color::WHITE);
        assert!(config.font_size_scale > 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_title_lookup() {
        let config = ScreenshotConfig::new().with_title("a", "Hello");
        assert_eq!(config.title("a"), "Hello");
        assert_eq!(config.title("b"), "Untitled");
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let mut config = ScreenshotConfig::default();
        config.font_size_scale = 0.0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.font_size_scale = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r##"{
            "background_color": "#767A85",
            "font_size_scale": 0.05,
            "titles": { "edhita1": "Text Editing" }
        }"##;
        let config = ScreenshotConfig::from_json(json).unwrap();

        assert_eq!(config.background_color, Color::opaque(118, 122, 133));
        assert_eq!(config.text_color, Color::WHITE);
        assert_eq!(config.font_name, DEFAULT_FONT);
        assert_eq!(config.title("edhita1"), "Text Editing");
    }

    #[test]
    fn test_json_rejects_invalid_values() {
        assert!(ScreenshotConfig::from_json(r#"{ "font_size_scale": -1.0 }"#).is_err());
        assert!(ScreenshotConfig::from_json(r#"{ "text_color": "white" }"#).is_err());
    }

    #[test]
    fn test_serialization() {
        let config = ScreenshotConfig::new().with_title("shot", "Live Preview");
        let json = config.to_json().unwrap();
        let restored = ScreenshotConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_load_demo_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/config.json");
        let config = ScreenshotConfig::load(&path).unwrap();
        assert_eq!(config.font_size_scale, 0.05);
        assert_eq!(config.title("edhita4"), "Live Preview");
        assert_eq!(config.title("edhita5"), UNTITLED);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScreenshotConfig::load(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
