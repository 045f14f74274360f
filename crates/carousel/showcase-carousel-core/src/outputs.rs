//! Output contracts from the controller.
//!
//! A [`RenderFrame`] carries everything the surface needs to position the
//! track; [`CarouselEvent`]s are semantic signals (slide changes, rejected
//! requests) for hosts that want them.

use serde::{Deserialize, Serialize};

/// Which navigation a request or transition came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    Advance,
    Retreat,
    Jump,
    Drag,
}

/// Discrete signals emitted by controller operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum CarouselEvent {
    /// A navigation was accepted; `from`/`to` are extended positions.
    TransitionStarted {
        from: usize,
        to: usize,
        kind: NavigationKind,
    },
    /// A transition settled on a different real slide.
    SlideChanged { from: usize, to: usize },
    /// Settled on a ghost and silently moved to the matching real slide.
    WrapCorrected {
        from_position: usize,
        to_position: usize,
    },
    /// Request dropped because a transition or drag was in progress.
    NavigationRejected { kind: NavigationKind },
    /// A drag ended below the commit threshold.
    SnappedBack,
}

/// What the surface should render this frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Extended position.
    pub position: usize,
    /// Real index for indicator display.
    pub real_index: usize,
    /// Horizontal translation as a percentage of one slide width.
    pub offset_percent: f32,
    /// Whether the move to `offset_percent` should be animated.
    pub animated: bool,
    pub transition_ms: u32,
}

/// One pagination dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Returned by `Carousel::handle`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    pub frame: RenderFrame,
    #[serde(default)]
    pub events: Vec<CarouselEvent>,
}

impl Outputs {
    pub(crate) fn new(frame: RenderFrame) -> Self {
        Self {
            frame,
            events: Vec::new(),
        }
    }

    /// Push an event, dropping the oldest once `cap` is reached.
    #[inline]
    pub(crate) fn push_event(&mut self, event: CarouselEvent, cap: usize) {
        if cap == 0 {
            return;
        }
        let excess = (self.events.len() + 1).saturating_sub(cap);
        self.events.drain(..excess);
        self.events.push(event);
    }
}
