use bevy::prelude::*;

/// Entity holding the row of slides. Its `Transform.translation.x` follows the
/// carousel offset, scaled by `slide_width` world units per slide.
#[derive(Component, Debug, Clone)]
pub struct CarouselTrack {
    pub slide_width: f32,
}
