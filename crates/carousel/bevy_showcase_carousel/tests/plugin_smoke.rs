use std::time::Duration;

use bevy::prelude::*;
use bevy_showcase_carousel::{
    CarouselNotification, CarouselResource, CarouselSurfaceEvent, CarouselSystems, CarouselTrack,
    ShowcaseCarouselPlugin, TrackTween,
};
use showcase_carousel_core::{parse_content_json, CarouselEvent, ContentSet, SurfaceEvent};

fn portfolio() -> ContentSet {
    let json = showcase_test_fixtures::content::json("portfolio").expect("portfolio fixture");
    parse_content_json(&json).expect("portfolio parses")
}

fn mk_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(ShowcaseCarouselPlugin::new(portfolio()));
    let track = app
        .world_mut()
        .spawn((CarouselTrack { slide_width: 400.0 }, Transform::default()))
        .id();
    (app, track)
}

/// Run Update once after advancing the clock by `ms`.
fn tick(app: &mut App, ms: u64) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(ms));
    app.world_mut().run_schedule(Update);
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    tick(app, 0);
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

fn track_x(app: &App, track: Entity) -> f32 {
    app.world()
        .get::<Transform>(track)
        .expect("track transform")
        .translation
        .x
}

#[test]
fn plugin_inserts_controller_resource() {
    let (app, _) = mk_app();
    let res = app.world().get_resource::<CarouselResource>();
    assert!(res.is_some());
    assert_eq!(res.unwrap().0.state().position(), 1);
    assert_eq!(
        app.world().resource::<TrackTween>(),
        &TrackTween::resting_at(-100.0)
    );
}

#[test]
fn track_rests_on_first_slide() {
    let (mut app, track) = mk_app();
    tick(&mut app, 16);
    assert!((track_x(&app, track) + 400.0).abs() < 1e-3);
}

#[test]
fn arrow_right_animates_then_settles() {
    let (mut app, track) = mk_app();
    press(&mut app, KeyCode::ArrowRight);
    {
        let c = &app.world().resource::<CarouselResource>().0;
        assert!(c.state().transition_in_flight());
        assert_eq!(c.state().position(), 2);
    }

    tick(&mut app, 250);
    let x = track_x(&app, track);
    assert!(x < -400.0 && x > -800.0, "mid-transition x={x}");

    for _ in 0..4 {
        tick(&mut app, 100);
    }
    let c = &app.world().resource::<CarouselResource>().0;
    assert!(!c.state().transition_in_flight());
    assert_eq!(c.current_real_index(), 1);
    assert!((track_x(&app, track) + 800.0).abs() < 1e-3);
}

#[test]
fn arrow_left_wraps_to_last_slide() {
    let (mut app, track) = mk_app();
    press(&mut app, KeyCode::ArrowLeft);
    for _ in 0..6 {
        tick(&mut app, 100);
    }
    let c = &app.world().resource::<CarouselResource>().0;
    assert_eq!(c.state().position(), 4);
    assert_eq!(c.current_real_index(), 3);
    assert!((track_x(&app, track) + 1600.0).abs() < 1e-3);
}

#[test]
fn surface_drag_events_commit_and_notify() {
    let (mut app, _track) = mk_app();

    #[derive(Resource, Default)]
    struct Seen(Vec<CarouselEvent>);
    fn record(mut seen: ResMut<Seen>, mut notes: EventReader<CarouselNotification>) {
        seen.0.extend(notes.read().map(|n| n.0.clone()));
    }
    app.init_resource::<Seen>();
    app.add_systems(Update, record.after(CarouselSystems::Animate));

    for ev in [
        SurfaceEvent::PointerDown { x: 0.0 },
        SurfaceEvent::PointerMove {
            x: -80.0,
            width: 400.0,
        },
        SurfaceEvent::PointerUp,
    ] {
        app.world_mut().send_event(CarouselSurfaceEvent(ev));
    }
    tick(&mut app, 0);
    for _ in 0..6 {
        tick(&mut app, 100);
    }

    let c = &app.world().resource::<CarouselResource>().0;
    assert_eq!(c.current_real_index(), 1);
    assert!(!c.state().transition_in_flight());

    let seen = &app.world().resource::<Seen>().0;
    assert!(seen
        .iter()
        .any(|e| matches!(e, CarouselEvent::TransitionStarted { .. })));
    assert_eq!(
        seen.iter()
            .filter(|e| matches!(e, CarouselEvent::SlideChanged { from: 0, to: 1 }))
            .count(),
        1
    );
}
