//! Bevy surface for the showcase carousel.
//!
//! The controller lives in [`CarouselResource`]. Keyboard input and
//! [`CarouselSurfaceEvent`]s are fed into it, a tween moves every
//! [`CarouselTrack`] toward the controller's offset, and the tween's completion
//! plays the role of the browser's `transitionend`.

use bevy::prelude::*;
use showcase_carousel_core::{Carousel, Config, ContentSet};

pub mod components;
pub mod resources;
pub mod systems;

pub use components::CarouselTrack;
pub use resources::{CarouselNotification, CarouselResource, CarouselSurfaceEvent, TrackTween};

/// Systems run in this order every `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarouselSystems {
    Input,
    Dispatch,
    Animate,
}

pub struct ShowcaseCarouselPlugin {
    pub content: ContentSet,
    pub config: Config,
}

impl ShowcaseCarouselPlugin {
    pub fn new(content: ContentSet) -> Self {
        Self {
            content,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

impl Plugin for ShowcaseCarouselPlugin {
    fn build(&self, app: &mut App) {
        let carousel = Carousel::new(self.content.clone(), self.config.clone());
        let tween = TrackTween::resting_at(carousel.frame().offset_percent);

        app.insert_resource(CarouselResource(carousel))
            .insert_resource(tween)
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<CarouselSurfaceEvent>()
            .add_event::<CarouselNotification>()
            .configure_sets(
                Update,
                (
                    CarouselSystems::Input,
                    CarouselSystems::Dispatch,
                    CarouselSystems::Animate,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    systems::keyboard_input_system.in_set(CarouselSystems::Input),
                    systems::dispatch_surface_events_system.in_set(CarouselSystems::Dispatch),
                    systems::animate_track_system.in_set(CarouselSystems::Animate),
                ),
            );
    }
}
