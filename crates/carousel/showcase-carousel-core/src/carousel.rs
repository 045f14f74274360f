//! Carousel controller: state ownership and every transition rule.
//!
//! Methods:
//! - advance, retreat, jump_to (guarded by `transition_in_flight` and `drag_active`)
//! - on_transition_settled (wrap correction off the ghost slots)
//! - begin_drag, update_drag, end_drag (drag-to-offset and snap/commit)
//! - handle (dispatch one `SurfaceEvent` and return the frame + events)

use log::{debug, warn};

use crate::config::Config;
use crate::content::ContentSet;
use crate::inputs::{NavKey, SurfaceEvent};
use crate::outputs::{CarouselEvent, Indicator, NavigationKind, Outputs, RenderFrame};
use crate::sequence::{real_index_for, ExtendedSequence, Slide};
use crate::state::CarouselState;

/// Drag distance, in percent of one slide width, beyond which releasing the
/// pointer commits a step. Symmetric in both directions.
pub const DRAG_COMMIT_THRESHOLD_PERCENT: f32 = 10.0;

#[derive(Clone, Debug)]
pub struct Carousel {
    cfg: Config,
    sequence: ExtendedSequence,
    state: CarouselState,
    outputs: Outputs,
}

impl Carousel {
    /// Build a controller resting on the first real slide.
    pub fn new(content: ContentSet, cfg: Config) -> Self {
        let state = CarouselState::initial();
        let frame = RenderFrame {
            position: state.position,
            real_index: 0,
            offset_percent: state.offset_percent,
            animated: state.animated,
            transition_ms: cfg.transition_ms,
        };
        Self {
            cfg,
            sequence: ExtendedSequence::new(content),
            state,
            outputs: Outputs::new(frame),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn content(&self) -> &ContentSet {
        self.sequence.content()
    }

    pub fn sequence(&self) -> &ExtendedSequence {
        &self.sequence
    }

    /// The extended sequence, left to right, as the surface should lay it out.
    pub fn slides(&self) -> impl Iterator<Item = Slide<'_>> {
        self.sequence.iter()
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Number of real slides (N).
    #[inline]
    pub fn real_len(&self) -> usize {
        self.sequence.real_len()
    }

    /// Real index for indicator display. Ghost 0 maps to N-1, ghost N+1 to 0.
    #[inline]
    pub fn current_real_index(&self) -> usize {
        real_index_for(self.state.position, self.real_len())
    }

    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            position: self.state.position,
            real_index: self.current_real_index(),
            offset_percent: self.state.offset_percent,
            animated: self.state.animated,
            transition_ms: self.cfg.transition_ms,
        }
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        let active = self.current_real_index();
        (0..self.real_len())
            .map(|index| Indicator {
                index,
                active: index == active,
            })
            .collect()
    }

    /// Take all events buffered since the last drain or `handle` call.
    pub fn drain_events(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.outputs.events)
    }

    /// Step one slide forward. Returns false if a transition or drag is in progress.
    pub fn advance(&mut self) -> bool {
        let target = self.state.position + 1;
        self.navigate(target, NavigationKind::Advance)
    }

    /// Step one slide back. Returns false if a transition or drag is in progress.
    pub fn retreat(&mut self) -> bool {
        let target = self.state.position.saturating_sub(1);
        self.navigate(target, NavigationKind::Retreat)
    }

    /// Jump straight to a real slide. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, real_index: usize) -> bool {
        if real_index >= self.real_len() {
            warn!(
                "carousel: jump_to({real_index}) ignored, only {} slides",
                self.real_len()
            );
            return false;
        }
        self.navigate(real_index + 1, NavigationKind::Jump)
    }

    fn navigate(&mut self, target: usize, kind: NavigationKind) -> bool {
        if self.state.transition_in_flight || self.state.drag_active {
            debug!("carousel: {kind:?} rejected, transition or drag in progress");
            self.emit(CarouselEvent::NavigationRejected { kind });
            return false;
        }
        let from = self.state.position;
        self.state.origin_real_index = Some(self.current_real_index());
        self.state.transition_in_flight = true;
        self.state.animated = true;
        self.state.rest_at(target);
        self.emit(CarouselEvent::TransitionStarted {
            from,
            to: target,
            kind,
        });
        true
    }

    /// Called by the surface once the animated transition has finished.
    ///
    /// Clears the in-flight flag, then moves off a ghost slot (if parked on
    /// one) onto the matching real slide with animation disabled.
    pub fn on_transition_settled(&mut self) {
        let was_in_flight = std::mem::replace(&mut self.state.transition_in_flight, false);
        let n = self.real_len();
        let from = self.state.position;
        let corrected = if from == 0 {
            Some(n)
        } else if from == n + 1 {
            Some(1)
        } else {
            None
        };
        if let Some(to) = corrected {
            self.state.rest_at(to);
            self.state.animated = false;
            debug!("carousel: wrap correction {from} -> {to}");
            self.emit(CarouselEvent::WrapCorrected {
                from_position: from,
                to_position: to,
            });
        }

        let origin = self.state.origin_real_index.take();
        if let (true, Some(origin)) = (was_in_flight, origin) {
            let to = self.current_real_index();
            if origin != to {
                self.emit(CarouselEvent::SlideChanged { from: origin, to });
            }
        }
    }

    /// Pointer down / touch start. Ignored while a transition is in flight or
    /// a drag is already active.
    pub fn begin_drag(&mut self, pointer: f32) -> bool {
        if self.state.transition_in_flight || self.state.drag_active {
            debug!("carousel: drag start ignored");
            self.emit(CarouselEvent::NavigationRejected {
                kind: NavigationKind::Drag,
            });
            return false;
        }
        self.state.drag_active = true;
        self.state.drag_start_coordinate = pointer;
        self.state.animated = false;
        true
    }

    /// Pointer move. The track follows the pointer without animation.
    ///
    /// A zero, negative or non-finite `surface_width` skips the update.
    pub fn update_drag(&mut self, pointer: f32, surface_width: f32) -> bool {
        if !self.state.drag_active {
            return false;
        }
        if !surface_width.is_finite() || surface_width <= 0.0 {
            debug!("carousel: drag update skipped, surface width {surface_width}");
            return false;
        }
        let diff = pointer - self.state.drag_start_coordinate;
        let drag_percent = diff * 100.0 / surface_width;
        self.state.offset_percent = self.state.committed_offset_percent + drag_percent;
        self.state.animated = false;
        true
    }

    /// Pointer up. Commits a step when the drag passed the threshold,
    /// otherwise snaps back. Returns true if a step was committed.
    pub fn end_drag(&mut self) -> bool {
        if !self.state.drag_active {
            return false;
        }
        self.state.drag_active = false;
        self.state.animated = true;
        let delta = self.state.offset_percent - self.state.committed_offset_percent;

        let committed = if delta > DRAG_COMMIT_THRESHOLD_PERCENT {
            self.retreat()
        } else if delta < -DRAG_COMMIT_THRESHOLD_PERCENT {
            self.advance()
        } else {
            false
        };
        if !committed {
            self.state.offset_percent = self.state.committed_offset_percent;
            self.emit(CarouselEvent::SnappedBack);
        }
        committed
    }

    /// Dispatch one surface event and return this step's outputs.
    ///
    /// Events buffered by earlier direct method calls are discarded.
    pub fn handle(&mut self, event: SurfaceEvent) -> &Outputs {
        self.outputs.events.clear();
        match event {
            SurfaceEvent::PointerDown { x } => {
                self.begin_drag(x);
            }
            SurfaceEvent::PointerMove { x, width } => {
                self.update_drag(x, width);
            }
            SurfaceEvent::PointerUp => {
                self.end_drag();
            }
            SurfaceEvent::TransitionEnd => self.on_transition_settled(),
            SurfaceEvent::Key { key } => self.on_key(key),
            SurfaceEvent::IndicatorClick { index } => {
                self.jump_to(index);
            }
            SurfaceEvent::PrevButton => {
                self.retreat();
            }
            SurfaceEvent::NextButton => {
                self.advance();
            }
        }
        self.outputs.frame = self.frame();
        &self.outputs
    }

    fn on_key(&mut self, key: NavKey) {
        if !self.cfg.keyboard_navigation {
            return;
        }
        match key {
            NavKey::ArrowLeft => {
                self.retreat();
            }
            NavKey::ArrowRight => {
                self.advance();
            }
            NavKey::Other => {}
        }
    }

    fn emit(&mut self, event: CarouselEvent) {
        self.outputs.push_event(event, self.cfg.max_events);
    }
}
