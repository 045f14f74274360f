use bevy::prelude::*;
use showcase_carousel_core::{Carousel, CarouselEvent, SurfaceEvent};

#[derive(Resource)]
pub struct CarouselResource(pub Carousel);

/// Surface events from host code (pointer drags, buttons, pagination clicks).
#[derive(Event, Debug, Clone)]
pub struct CarouselSurfaceEvent(pub SurfaceEvent);

/// Controller events re-published for host systems.
#[derive(Event, Debug, Clone)]
pub struct CarouselNotification(pub CarouselEvent);

/// Offset currently displayed by the track, in percent of one slide width,
/// and the animated move toward the controller's offset.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TrackTween {
    pub displayed: f32,
    pub from: f32,
    pub to: f32,
    pub elapsed: f32,
    pub active: bool,
}

impl TrackTween {
    pub fn resting_at(offset_percent: f32) -> Self {
        Self {
            displayed: offset_percent,
            from: offset_percent,
            to: offset_percent,
            elapsed: 0.0,
            active: false,
        }
    }

    pub(crate) fn start(&mut self, to: f32) {
        self.from = self.displayed;
        self.to = to;
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Jump without animation.
    pub(crate) fn snap(&mut self, to: f32) {
        *self = Self::resting_at(to);
    }

    /// Advance by `dt` seconds over `duration`; returns true when it finishes.
    pub(crate) fn step(&mut self, dt: f32, duration: f32) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed += dt;
        let t = if duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / duration).min(1.0)
        };
        self.displayed = self.from + (self.to - self.from) * ease_out_cubic(t);
        if t >= 1.0 {
            self.displayed = self.to;
            self.active = false;
            return true;
        }
        false
    }
}

#[inline]
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
