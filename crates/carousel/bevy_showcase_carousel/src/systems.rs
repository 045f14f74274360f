use bevy::log::debug;
use bevy::prelude::*;
use showcase_carousel_core::{NavKey, SurfaceEvent};

use crate::components::CarouselTrack;
use crate::resources::{CarouselNotification, CarouselResource, CarouselSurfaceEvent, TrackTween};

const OFFSET_EPS: f32 = 1e-3;

/// Arrow keys become `SurfaceEvent::Key`; the controller applies its own guard.
pub fn keyboard_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut out: EventWriter<CarouselSurfaceEvent>,
) {
    if keys.just_pressed(KeyCode::ArrowLeft) {
        out.send(CarouselSurfaceEvent(SurfaceEvent::Key {
            key: NavKey::ArrowLeft,
        }));
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        out.send(CarouselSurfaceEvent(SurfaceEvent::Key {
            key: NavKey::ArrowRight,
        }));
    }
}

/// Feed queued surface events to the controller in delivery order and
/// re-publish whatever it reports.
pub fn dispatch_surface_events_system(
    mut carousel: ResMut<CarouselResource>,
    mut events: EventReader<CarouselSurfaceEvent>,
    mut notes: EventWriter<CarouselNotification>,
) {
    for ev in events.read() {
        carousel.0.handle(ev.0.clone());
        for e in carousel.0.drain_events() {
            notes.send(CarouselNotification(e));
        }
    }
}

/// Move the track toward the controller's offset. Unanimated frames (drags,
/// wrap corrections) snap; animated ones tween over `transition_ms`, and the
/// tween finishing settles the controller.
pub fn animate_track_system(
    time: Res<Time>,
    mut carousel: ResMut<CarouselResource>,
    mut tween: ResMut<TrackTween>,
    mut notes: EventWriter<CarouselNotification>,
    mut tracks: Query<(&CarouselTrack, &mut Transform)>,
) {
    let frame = carousel.0.frame();
    let in_flight = carousel.0.state().transition_in_flight();

    if !frame.animated {
        tween.snap(frame.offset_percent);
    } else {
        let retarget = (frame.offset_percent - tween.to).abs() > OFFSET_EPS;
        let idle_but_pending = !tween.active
            && (in_flight || (frame.offset_percent - tween.displayed).abs() > OFFSET_EPS);
        if retarget || idle_but_pending {
            tween.start(frame.offset_percent);
        }
    }

    let duration = frame.transition_ms as f32 / 1000.0;
    if tween.step(time.delta_seconds(), duration) && in_flight {
        carousel.0.on_transition_settled();
        for e in carousel.0.drain_events() {
            notes.send(CarouselNotification(e));
        }
        let settled = carousel.0.frame();
        if !settled.animated {
            debug!("carousel track wrapped to {}", settled.offset_percent);
            tween.snap(settled.offset_percent);
        }
    }

    for (track, mut tf) in tracks.iter_mut() {
        tf.translation.x = tween.displayed / 100.0 * track.slide_width;
    }
}
