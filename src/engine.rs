//! Capability surface of the external rendering engine.
//!
//! The engine is a separately compiled module; this crate only ever talks to
//! it through these traits. The browser implementation lives in
//! [`crate::js_engine`]; tests substitute a recording double.
//!
//! Every engine call returns its failure as a value instead of throwing
//! through Rust frames. Callers release their `RefCell` borrows first and only
//! then hand the failure back to the host with [`EngineFault::raise`], so one
//! failed callback never wedges the next one.

use crate::geometry::Point;
use crate::style::{Pivot, ShapeStyle};

/// A failure reported by the engine.
pub trait EngineFault: std::fmt::Debug {
    /// Hand the failure to the host's error channel.
    ///
    /// Must only be called once no borrows are held.
    fn raise(self);
}

/// A drawable primitive owned by a canvas handle.
pub trait ShapeHandle {
    type Fault: EngineFault;

    /// Move the shape so its anchor sits at `(x, y)`.
    fn translate(&self, x: f64, y: f64) -> Result<(), Self::Fault>;

    /// Set the shape's rotation in degrees around `pivot`.
    fn rotation(&self, degrees: f64, pivot: Pivot) -> Result<(), Self::Fault>;
}

/// A drawable surface and the shapes it contains.
pub trait CanvasEngine {
    type Fault: EngineFault;
    type Shape: ShapeHandle<Fault = Self::Fault>;

    // --- Scene content ---

    fn add_circle(&mut self, center: Point, radius: f64, style: &ShapeStyle) -> Result<Self::Shape, Self::Fault>;

    fn add_rect(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        style: &ShapeStyle,
    ) -> Result<Self::Shape, Self::Fault>;

    fn add_text(&mut self, content: &str, at: Point, style: &ShapeStyle) -> Result<Self::Shape, Self::Fault>;

    // --- Input events ---

    fn on_mouse_move(&mut self, x: f64, y: f64, timestamp_ms: f64) -> Result<(), Self::Fault>;

    fn on_mouse_down(&mut self, x: f64, y: f64, timestamp_ms: f64) -> Result<(), Self::Fault>;

    fn on_mouse_up(&mut self, x: f64, y: f64, timestamp_ms: f64) -> Result<(), Self::Fault>;

    fn on_key_down(&mut self, key: &str, timestamp_ms: f64) -> Result<(), Self::Fault>;

    fn on_key_up(&mut self, key: &str, timestamp_ms: f64) -> Result<(), Self::Fault>;

    fn on_key_press(&mut self, key: &str, timestamp_ms: f64) -> Result<(), Self::Fault>;

    // --- Render ---

    /// Draw the current scene to the underlying surface.
    fn render(&mut self) -> Result<(), Self::Fault>;
}
