//! Carousel configuration.
//!
//! One options value covers every page layout the handler has been used
//! with: vertical or horizontal swipes, arrows on or off, keyboard on or
//! off. Every field has a default so a TOML file only lists overrides.

use std::path::Path;

use serde::Deserialize;

use crate::error::CarouselError;
use crate::gesture::{SwipeAxis, SWIPE_THRESHOLD};

/// When the arrow elements are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowVisibility {
    Always,
    /// Only with a hover-capable fine pointer (mouse-like device)
    #[default]
    PointerCapable,
}

/// Marker classes of the page's DOM contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub container: String,
    pub section: String,
    pub dot: String,
    pub arrow_left: String,
    pub arrow_right: String,
    /// Class toggled on the active section and dot
    pub active: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            container: "swipe-container".into(),
            section: "carousel-section".into(),
            dot: "swipe-dot".into(),
            arrow_left: "swipe-arrow-left".into(),
            arrow_right: "swipe-arrow-right".into(),
            active: "active".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    pub enable_arrows: bool,
    pub enable_keyboard: bool,
    pub enable_mouse_drag: bool,
    pub arrow_visibility: ArrowVisibility,
    pub swipe_axis: SwipeAxis,
    pub swipe_threshold: f32,
    pub selectors: Selectors,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            enable_arrows: true,
            enable_keyboard: true,
            enable_mouse_drag: true,
            arrow_visibility: ArrowVisibility::PointerCapable,
            swipe_axis: SwipeAxis::Horizontal,
            swipe_threshold: SWIPE_THRESHOLD,
            selectors: Selectors::default(),
        }
    }
}

impl CarouselOptions {
    pub fn from_toml(contents: &str) -> Result<Self, CarouselError> {
        let options: CarouselOptions = toml::from_str(contents)
            .map_err(|e| CarouselError::new("options-parse", e.to_string()))?;
        if !options.swipe_threshold.is_finite() || options.swipe_threshold < 0.0 {
            return Err(CarouselError::new(
                "options-parse",
                format!("swipe_threshold must be a non-negative number, got {}", options.swipe_threshold),
            ));
        }
        Ok(options)
    }
}

/// Read options from a TOML file.
pub fn load_options(path: &Path) -> Result<CarouselOptions, CarouselError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CarouselError::new("options-read", format!("{}: {}", path.display(), e))
    })?;
    CarouselOptions::from_toml(&contents)
}
