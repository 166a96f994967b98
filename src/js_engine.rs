//! Browser binding to the compiled engine module.
//!
//! The engine's JS glue is imported by the bare specifier `canvas-engine`;
//! the page maps it (import map or bundler alias) to the engine package.
//! Every engine method is declared with `catch`: an exception comes back as
//! `Err(JsValue)` and is rethrown with `throw_val` once the caller has
//! released its borrows.

use gloo_utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::engine::{CanvasEngine, EngineFault, ShapeHandle};
use crate::error::BootError;
use crate::geometry::Point;
use crate::style::{Pivot, ShapeStyle};

#[wasm_bindgen(raw_module = "canvas-engine")]
extern "C" {
    type Canvas;

    #[wasm_bindgen(constructor, catch)]
    fn new(id: &str, background_color: &str) -> Result<Canvas, JsValue>;

    #[wasm_bindgen(method)]
    fn get_js_canvas(this: &Canvas) -> Option<HtmlCanvasElement>;

    #[wasm_bindgen(method, catch)]
    fn add_circle(this: &Canvas, center_x: f64, center_y: f64, radius: f64, style: &JsValue)
    -> Result<NodeRef, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn add_rect(this: &Canvas, x: f64, y: f64, width: f64, height: f64, style: &JsValue) -> Result<NodeRef, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn add_text(this: &Canvas, text: &str, x: f64, y: f64, style: &JsValue) -> Result<NodeRef, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn on_mouse_move(this: &Canvas, x: f64, y: f64, ts: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn on_mouse_down(this: &Canvas, x: f64, y: f64, ts: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn on_mouse_up(this: &Canvas, x: f64, y: f64, ts: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn on_key_down(this: &Canvas, key: &str, ts: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn on_key_up(this: &Canvas, key: &str, ts: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn on_key_press(this: &Canvas, key: &str, ts: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn render(this: &Canvas) -> Result<(), JsValue>;

    type NodeRef;

    #[wasm_bindgen(method, catch)]
    fn translate(this: &NodeRef, x: f64, y: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn rotation(this: &NodeRef, degrees: f64, pivot: &str) -> Result<(), JsValue>;
}

impl EngineFault for JsValue {
    fn raise(self) {
        wasm_bindgen::throw_val(self);
    }
}

/// Style record as a plain JS object. On a conversion failure the engine gets
/// `undefined`, which it treats as "all defaults".
fn style_value(style: &ShapeStyle) -> JsValue {
    match JsValue::from_serde(style) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("style {style:?} not converted, using engine defaults: {err}");
            JsValue::UNDEFINED
        }
    }
}

/// Engine canvas handle bound to a DOM element id.
pub struct JsEngine {
    inner: Canvas,
}

impl JsEngine {
    /// Construct the engine for the canvas element `id`.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the engine constructor throws.
    pub fn new(id: &str, background: &str) -> Result<Self, BootError> {
        let inner = Canvas::new(id, background)?;
        Ok(Self { inner })
    }

    /// The canvas element the engine resolved, if any.
    #[must_use]
    pub fn surface(&self) -> Option<HtmlCanvasElement> {
        self.inner.get_js_canvas()
    }
}

/// Shape handle returned by the engine.
pub struct JsShape(NodeRef);

impl ShapeHandle for JsShape {
    type Fault = JsValue;

    fn translate(&self, x: f64, y: f64) -> Result<(), JsValue> {
        self.0.translate(x, y)
    }

    fn rotation(&self, degrees: f64, pivot: Pivot) -> Result<(), JsValue> {
        self.0.rotation(degrees, pivot.code())
    }
}

impl CanvasEngine for JsEngine {
    type Fault = JsValue;
    type Shape = JsShape;

    fn add_circle(&mut self, center: Point, radius: f64, style: &ShapeStyle) -> Result<JsShape, JsValue> {
        self.inner
            .add_circle(center.x, center.y, radius, &style_value(style))
            .map(JsShape)
    }

    fn add_rect(&mut self, origin: Point, width: f64, height: f64, style: &ShapeStyle) -> Result<JsShape, JsValue> {
        self.inner
            .add_rect(origin.x, origin.y, width, height, &style_value(style))
            .map(JsShape)
    }

    fn add_text(&mut self, content: &str, at: Point, style: &ShapeStyle) -> Result<JsShape, JsValue> {
        self.inner.add_text(content, at.x, at.y, &style_value(style)).map(JsShape)
    }

    fn on_mouse_move(&mut self, x: f64, y: f64, timestamp_ms: f64) -> Result<(), JsValue> {
        self.inner.on_mouse_move(x, y, timestamp_ms)
    }

    fn on_mouse_down(&mut self, x: f64, y: f64, timestamp_ms: f64) -> Result<(), JsValue> {
        self.inner.on_mouse_down(x, y, timestamp_ms)
    }

    fn on_mouse_up(&mut self, x: f64, y: f64, timestamp_ms: f64) -> Result<(), JsValue> {
        self.inner.on_mouse_up(x, y, timestamp_ms)
    }

    fn on_key_down(&mut self, key: &str, timestamp_ms: f64) -> Result<(), JsValue> {
        self.inner.on_key_down(key, timestamp_ms)
    }

    fn on_key_up(&mut self, key: &str, timestamp_ms: f64) -> Result<(), JsValue> {
        self.inner.on_key_up(key, timestamp_ms)
    }

    fn on_key_press(&mut self, key: &str, timestamp_ms: f64) -> Result<(), JsValue> {
        self.inner.on_key_press(key, timestamp_ms)
    }

    fn render(&mut self) -> Result<(), JsValue> {
        self.inner.render()
    }
}
