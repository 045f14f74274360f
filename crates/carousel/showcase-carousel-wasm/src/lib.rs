use js_sys::JSON;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use showcase_carousel_core::{
    parse_content_json, Carousel, Config, NavKey, RenderFrame, SurfaceEvent,
};

/// DOM-facing wrapper around the carousel controller.
///
/// The page owns the markup; it lays out `slides()` left to right, applies
/// `transform_css()` to the track (with a CSS transition only when
/// `frame().animated` is true) and forwards pointer/touch/key/transitionend
/// events to the matching methods.
#[wasm_bindgen]
pub struct ShowcaseCarousel {
    core: Carousel,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<JsValue, JsError> {
    // Plain objects rather than ES Maps so page code can use dot access.
    let serializer = swb::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

/// CSS `transform` value for a frame.
fn translate_css(frame: &RenderFrame) -> String {
    format!("translateX({}%)", frame.offset_percent)
}

#[wasm_bindgen]
impl ShowcaseCarousel {
    /// Create a carousel from content records and an optional config object.
    /// `content` is an array of records or `{ projects: [...] }`.
    /// Example:
    ///   new ShowcaseCarousel(projects, { transition_ms: 400 })
    #[wasm_bindgen(constructor)]
    pub fn new(content: JsValue, config: JsValue) -> Result<ShowcaseCarousel, JsError> {
        console_error_panic_hook::set_once();

        if jsvalue_is_undefined_or_null(&content) {
            return Err(JsError::new("content is null/undefined"));
        }
        // Stringify so the core parser handles both accepted shapes.
        let s = JSON::stringify(&content)
            .map_err(|e| JsError::new(&format!("content stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("content stringify produced non-string"))?;
        let set = parse_content_json(&s).map_err(|e| JsError::new(&e.to_string()))?;

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(ShowcaseCarousel {
            core: Carousel::new(set, cfg),
        })
    }

    pub fn advance(&mut self) -> bool {
        self.core.advance()
    }

    pub fn retreat(&mut self) -> bool {
        self.core.retreat()
    }

    #[wasm_bindgen(js_name = jump_to)]
    pub fn jump_to(&mut self, real_index: u32) -> bool {
        self.core.jump_to(real_index as usize)
    }

    /// Wire to the track's `transitionend` listener.
    #[wasm_bindgen(js_name = on_transition_settled)]
    pub fn on_transition_settled(&mut self) {
        self.core.on_transition_settled();
    }

    #[wasm_bindgen(js_name = begin_drag)]
    pub fn begin_drag(&mut self, x: f32) -> bool {
        self.core.begin_drag(x)
    }

    #[wasm_bindgen(js_name = update_drag)]
    pub fn update_drag(&mut self, x: f32, surface_width: f32) -> bool {
        self.core.update_drag(x, surface_width)
    }

    #[wasm_bindgen(js_name = end_drag)]
    pub fn end_drag(&mut self) -> bool {
        self.core.end_drag()
    }

    /// Forward a `KeyboardEvent.key`. Returns true if a navigation started.
    #[wasm_bindgen(js_name = key_down)]
    pub fn key_down(&mut self, key: String) -> bool {
        let before = self.core.state().transition_in_flight();
        match NavKey::from_key_name(&key) {
            NavKey::Other => false,
            nav => {
                self.core.handle(SurfaceEvent::Key { key: nav });
                !before && self.core.state().transition_in_flight()
            }
        }
    }

    /// Dispatch a tagged event object, e.g. `{ type: "pointer_move", x, width }`.
    /// Returns `{ frame, events }`.
    ///
    /// `events` only covers this call: anything buffered by earlier direct
    /// calls (`advance()`, `end_drag()`, ...) and not yet taken with
    /// `drain_events()` is discarded.
    pub fn handle(&mut self, event: JsValue) -> Result<JsValue, JsError> {
        let event: SurfaceEvent =
            swb::from_value(event).map_err(|e| JsError::new(&format!("event error: {e}")))?;
        let out = self.core.handle(event);
        to_js(out, "outputs")
    }

    pub fn frame(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.frame(), "frame")
    }

    #[wasm_bindgen(js_name = transform_css)]
    pub fn transform_css(&self) -> String {
        translate_css(&self.core.frame())
    }

    /// The extended sequence (ghost clones included) in layout order.
    pub fn slides(&self) -> Result<JsValue, JsError> {
        let slides: Vec<_> = self.core.slides().collect();
        to_js(&slides, "slides")
    }

    pub fn indicators(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.indicators(), "indicators")
    }

    #[wasm_bindgen(js_name = current_real_index)]
    pub fn current_real_index(&self) -> u32 {
        self.core.current_real_index() as u32
    }

    #[wasm_bindgen(js_name = is_transitioning)]
    pub fn is_transitioning(&self) -> bool {
        self.core.state().transition_in_flight()
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(self.core.state(), "state")
    }

    #[wasm_bindgen(js_name = drain_events)]
    pub fn drain_events(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.core.drain_events(), "events")
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
