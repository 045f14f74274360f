#![cfg(target_arch = "wasm32")]
use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use serde_wasm_bindgen as swb;
use showcase_carousel_wasm::{abi_version, ShowcaseCarousel};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn projects_json(n: u32) -> JsValue {
    let projects: Vec<_> = (0..n)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Project {id}"),
                "description": "demo",
                "imageRef": format!("image/{id}.png"),
                "technologies": ["Rust", "wasm"],
                "link": format!("https://example.invalid/{id}")
            })
        })
        .collect();
    js(&json!({ "projects": projects }))
}

/// JSON objects become plain JS objects (not ES Maps), as page code would pass them.
fn js(v: &JsonValue) -> JsValue {
    v.serialize(&swb::Serializer::json_compatible()).unwrap()
}

fn get(obj: &JsValue, key: &str) -> JsValue {
    Reflect::get(obj, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_default_config() {
    let c = ShowcaseCarousel::new(projects_json(3), JsValue::UNDEFINED);
    assert!(c.is_ok());
}

#[wasm_bindgen_test]
fn empty_content_is_rejected() {
    let empty = js(&json!([]));
    assert!(ShowcaseCarousel::new(empty, JsValue::NULL).is_err());
    assert!(ShowcaseCarousel::new(JsValue::NULL, JsValue::NULL).is_err());
}

#[wasm_bindgen_test]
fn config_object_sets_transition_speed() {
    let cfg = js(&json!({ "transition_ms": 250 }));
    let c = ShowcaseCarousel::new(projects_json(2), cfg).unwrap();
    let frame = c.frame().unwrap();
    assert_eq!(get(&frame, "transition_ms").as_f64(), Some(250.0));
    assert_eq!(get(&frame, "offset_percent").as_f64(), Some(-100.0));
}

#[wasm_bindgen_test]
fn slides_include_ghost_clones() {
    let c = ShowcaseCarousel::new(projects_json(4), JsValue::UNDEFINED).unwrap();
    let slides = Array::from(&c.slides().unwrap());
    assert_eq!(slides.length(), 6);
    let first = slides.get(0);
    assert_eq!(get(&first, "ghost").as_bool(), Some(true));
    let record = get(&first, "record");
    assert_eq!(get(&record, "id").as_f64(), Some(3.0));
}

#[wasm_bindgen_test]
fn keyboard_and_transition_end_wrap_around() {
    let mut c = ShowcaseCarousel::new(projects_json(4), JsValue::UNDEFINED).unwrap();
    assert!(c.key_down("ArrowLeft".into()));
    assert!(c.is_transitioning());
    assert!(!c.key_down("ArrowLeft".into()));
    assert!(!c.key_down("Enter".into()));
    c.on_transition_settled();
    assert_eq!(c.current_real_index(), 3);
    assert_eq!(c.transform_css(), "translateX(-400%)");
    let frame = c.frame().unwrap();
    assert_eq!(get(&frame, "animated").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn drag_through_methods_commits_advance() {
    let mut c = ShowcaseCarousel::new(projects_json(4), JsValue::UNDEFINED).unwrap();
    assert!(c.begin_drag(0.0));
    assert!(c.update_drag(-15.0, 100.0));
    assert_eq!(c.transform_css(), "translateX(-115%)");
    assert!(c.end_drag());
    assert!(c.is_transitioning());
    assert_eq!(c.current_real_index(), 1);
}

#[wasm_bindgen_test]
fn handle_returns_frame_and_events() {
    let mut c = ShowcaseCarousel::new(projects_json(4), JsValue::UNDEFINED).unwrap();
    let ev = js(&json!({ "type": "indicator_click", "index": 2 }));
    let out = c.handle(ev).unwrap();
    let frame = get(&out, "frame");
    assert_eq!(get(&frame, "position").as_f64(), Some(3.0));
    let events = Array::from(&get(&out, "events"));
    assert_eq!(events.length(), 1);
    assert_eq!(
        get(&events.get(0), "type").as_string().as_deref(),
        Some("transition_started")
    );

    let bad = js(&json!({ "type": "teleport" }));
    assert!(c.handle(bad).is_err());
}

#[wasm_bindgen_test]
fn indicators_mark_active_slide() {
    let mut c = ShowcaseCarousel::new(projects_json(3), JsValue::UNDEFINED).unwrap();
    c.jump_to(1);
    c.on_transition_settled();
    let indicators = Array::from(&c.indicators().unwrap());
    assert_eq!(indicators.length(), 3);
    let second = Object::from(indicators.get(1));
    assert_eq!(get(&second, "active").as_bool(), Some(true));
    let events = Array::from(&c.drain_events().unwrap());
    assert!(events.length() >= 2);
}

#[wasm_bindgen_test]
fn handle_discards_events_from_direct_calls() {
    let types = |events: &JsValue| -> Vec<String> {
        Array::from(events)
            .iter()
            .filter_map(|e| get(&e, "type").as_string())
            .collect()
    };
    let settle = || js(&json!({ "type": "transition_end" }));

    // Drained first: the direct call's event is kept.
    let mut c = ShowcaseCarousel::new(projects_json(3), JsValue::UNDEFINED).unwrap();
    assert!(c.advance());
    assert_eq!(types(&c.drain_events().unwrap()), vec!["transition_started"]);
    let out = c.handle(settle()).unwrap();
    assert_eq!(types(&get(&out, "events")), vec!["slide_changed"]);

    // Not drained: `handle` only reports its own step.
    let mut c = ShowcaseCarousel::new(projects_json(3), JsValue::UNDEFINED).unwrap();
    assert!(c.advance());
    let out = c.handle(settle()).unwrap();
    assert_eq!(types(&get(&out, "events")), vec!["slide_changed"]);
    assert_eq!(Array::from(&c.drain_events().unwrap()).length(), 0);
}
