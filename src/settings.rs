//! Interaction settings.
//!
//! Mirrors the handful of configuration values the geometry core consumes:
//! whether targets are clamped to the display, whether debug click-to-shoot
//! is active, the display extent and the resampling filter used when an
//! image region is rendered at a size other than its native one.

use crate::constants::{DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH};
use crate::error::TargetResult;
use crate::types::Size;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Filter used when resampling an image region for alpha testing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    #[default]
    Nearest,
    Smooth,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Smooth => FilterType::Triangle,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Keep newly added targets inside the display extent
    pub bounds_clamping: bool,
    /// Shift/Control clicks are reserved for click-to-shoot testing
    pub debug_mode: bool,
    pub display_width: f64,
    pub display_height: f64,
    pub resample_filter: ResampleFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounds_clamping: false,
            debug_mode: false,
            display_width: DEFAULT_DISPLAY_WIDTH,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            resample_filter: ResampleFilter::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> TargetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> TargetResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&contents)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded settings");
        Ok(settings)
    }

    /// Container extent used for bounds clamping.
    pub fn extent(&self) -> Size {
        Size::new(self.display_width, self.display_height)
    }
}
