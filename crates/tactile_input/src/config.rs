//! Input configuration (input.toml)
//!
//! ```toml
//! [postproc]
//! double_tap_time = 250      # milliseconds
//! double_tap_distance = 20   # thousandths of the normalized range
//!
//! [screen]
//! width = 800
//! height = 600
//! rotation = 0
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::motion::{MotionEvent, Rotation};

/// Top-level input configuration
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default)]
    pub postproc: PostprocConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
}

/// Post-processing thresholds
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PostprocConfig {
    /// Maximum delay between two taps, in milliseconds
    #[serde(default = "default_double_tap_time")]
    pub double_tap_time: u32,
    /// Maximum distance between two taps, in thousandths of the normalized
    /// range
    #[serde(default = "default_double_tap_distance")]
    pub double_tap_distance: u32,
}

fn default_double_tap_time() -> u32 {
    250
}

fn default_double_tap_distance() -> u32 {
    20
}

impl Default for PostprocConfig {
    fn default() -> Self {
        Self {
            double_tap_time: default_double_tap_time(),
            double_tap_distance: default_double_tap_distance(),
        }
    }
}

impl PostprocConfig {
    pub fn double_tap_time_secs(&self) -> f64 {
        f64::from(self.double_tap_time) / 1000.0
    }

    pub fn double_tap_distance_normalized(&self) -> f64 {
        f64::from(self.double_tap_distance) / 1000.0
    }
}

/// Window surface that events are projected onto
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScreenConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Rotation in degrees: 0, 90, 180 or 270
    #[serde(default)]
    pub rotation: u32,
    /// Optional factor applied to the normalized depth
    #[serde(default)]
    pub depth: Option<f64>,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            rotation: 0,
            depth: None,
        }
    }
}

impl ScreenConfig {
    pub fn rotation(&self) -> Result<Rotation, ConfigError> {
        Ok(Rotation::try_from(self.rotation)?)
    }

    /// Project `event` onto this surface
    pub fn project(&self, event: &mut MotionEvent) -> Result<(), ConfigError> {
        let rotation = self.rotation()?;
        event.scale_for_screen(
            f64::from(self.width),
            f64::from(self.height),
            self.depth,
            rotation,
        );
        Ok(())
    }
}

impl InputConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: InputConfig = toml::from_str(content)?;
        // reject bad rotations at load time rather than on the first event
        config.screen.rotation()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded input config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
