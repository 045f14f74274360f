//! Input contracts for the controller.
//!
//! Adapters translate host events (DOM pointer/touch/key/transitionend, Bevy
//! input) into these and pass them to `Carousel::handle`.

use serde::{Deserialize, Serialize};

/// Keys the controller reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => NavKey::ArrowLeft,
            "ArrowRight" | "Right" => NavKey::ArrowRight,
            _ => NavKey::Other,
        }
    }
}

/// Events reported by the presentation surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceEvent {
    /// Pointer down / touch start at horizontal coordinate `x`.
    PointerDown { x: f32 },
    /// Pointer move / touch move; `width` is the surface width in the same units as `x`.
    PointerMove { x: f32, width: f32 },
    /// Pointer up / touch end.
    PointerUp,
    /// The surface finished its animated transition.
    TransitionEnd,
    Key { key: NavKey },
    /// Pagination dot clicked; `index` is a real index.
    IndicatorClick { index: usize },
    PrevButton,
    NextButton,
}
