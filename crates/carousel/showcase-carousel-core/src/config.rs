//! Core configuration for showcase-carousel-core.

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Controller configuration. Every field has a default so adapters can pass
/// partial JSON objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Duration the surface should use for animated slide transitions.
    pub transition_ms: u32,
    /// When false, `SurfaceEvent::Key` is ignored.
    pub keyboard_navigation: bool,
    /// Maximum events retained between drains; the oldest are dropped first.
    pub max_events: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transition_ms: 500,
            keyboard_navigation: true,
            max_events: 64,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON config object.
    pub fn from_json(s: &str) -> Result<Self, CarouselError> {
        serde_json::from_str(s).map_err(|e| CarouselError::ConfigParse(e.to_string()))
    }
}
