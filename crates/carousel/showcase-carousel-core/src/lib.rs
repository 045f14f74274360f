//! Showcase Carousel Core (surface-agnostic)
//!
//! Owns the state of an infinite project-card carousel: the circularly padded
//! slide sequence, position/offset bookkeeping, drag translation and the
//! wrap-around correction applied when a transition settles. Rendering and
//! event capture belong to adapters (web/Bevy), which feed [`SurfaceEvent`]s in
//! and read [`RenderFrame`]s back.

pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod inputs;
pub mod outputs;
pub mod sequence;
pub mod state;

// Re-exports for consumers (adapters)
pub use carousel::{Carousel, DRAG_COMMIT_THRESHOLD_PERCENT};
pub use config::Config;
pub use content::{parse_content_json, ContentRecord, ContentSet};
pub use error::CarouselError;
pub use inputs::{NavKey, SurfaceEvent};
pub use outputs::{CarouselEvent, Indicator, NavigationKind, Outputs, RenderFrame};
pub use sequence::{ExtendedSequence, Slide};
pub use state::CarouselState;
