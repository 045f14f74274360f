//! Mutable carousel state. Only the controller writes it; surfaces read it
//! through the accessors.

use serde::Serialize;

/// Offset (in percent of one slide width) that rests on `position`.
#[inline]
pub(crate) fn offset_for(position: usize) -> f32 {
    -(position as f32) * 100.0
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarouselState {
    pub(crate) position: usize,
    pub(crate) offset_percent: f32,
    pub(crate) committed_offset_percent: f32,
    pub(crate) drag_active: bool,
    pub(crate) drag_start_coordinate: f32,
    pub(crate) transition_in_flight: bool,
    pub(crate) animated: bool,
    /// Real index shown when the in-flight transition was requested.
    #[serde(skip)]
    pub(crate) origin_real_index: Option<usize>,
}

impl CarouselState {
    /// Resting on the first real slide.
    pub(crate) fn initial() -> Self {
        Self {
            position: 1,
            offset_percent: offset_for(1),
            committed_offset_percent: offset_for(1),
            drag_active: false,
            drag_start_coordinate: 0.0,
            transition_in_flight: false,
            animated: true,
            origin_real_index: None,
        }
    }

    /// Park on `position` with both offsets aligned.
    pub(crate) fn rest_at(&mut self, position: usize) {
        self.position = position;
        self.offset_percent = offset_for(position);
        self.committed_offset_percent = self.offset_percent;
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn offset_percent(&self) -> f32 {
        self.offset_percent
    }

    #[inline]
    pub fn committed_offset_percent(&self) -> f32 {
        self.committed_offset_percent
    }

    #[inline]
    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Only meaningful while [`Self::drag_active`] is true.
    #[inline]
    pub fn drag_start_coordinate(&self) -> Option<f32> {
        self.drag_active.then_some(self.drag_start_coordinate)
    }

    #[inline]
    pub fn transition_in_flight(&self) -> bool {
        self.transition_in_flight
    }

    #[inline]
    pub fn animated(&self) -> bool {
        self.animated
    }
}
