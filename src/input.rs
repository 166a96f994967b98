//! Input events and their forwarding to the engine.
//!
//! The binder turns each DOM event into an [`InputEvent`] (pointer events
//! already translated to canvas-local space) and hands it to a [`Forwarder`],
//! which stamps it and calls the matching engine method. Nothing else happens
//! locally; hit-testing, dragging and key repeat are the engine's business.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::engine::CanvasEngine;
use crate::geometry::Point;

/// Pointer event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Move,
    Down,
    Up,
}

impl Pointer {
    pub const ALL: [Self; 3] = [Self::Move, Self::Down, Self::Up];

    /// DOM event type this phase is subscribed under.
    #[must_use]
    pub fn dom_type(self) -> &'static str {
        match self {
            Self::Move => "mousemove",
            Self::Down => "mousedown",
            Self::Up => "mouseup",
        }
    }
}

/// Keyboard event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Up,
    Press,
}

impl KeyPhase {
    pub const ALL: [Self; 3] = [Self::Down, Self::Up, Self::Press];

    #[must_use]
    pub fn dom_type(self) -> &'static str {
        match self {
            Self::Down => "keydown",
            Self::Up => "keyup",
            Self::Press => "keypress",
        }
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"a"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// One input event, ready to forward.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer event in canvas-local coordinates.
    Pointer(Pointer, Point),
    Key(KeyPhase, Key),
}

/// Source of wall-clock time in milliseconds since the epoch.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// Stamps events and forwards them to the engine in arrival order.
///
/// Timestamps never go backwards: if the clock steps back (system time
/// adjustment), the previous stamp is reused.
#[derive(Debug)]
pub struct Forwarder<C> {
    clock: C,
    last_ms: f64,
}

impl<C: Clock> Forwarder<C> {
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self { clock, last_ms: f64::NEG_INFINITY }
    }

    fn stamp(&mut self) -> f64 {
        self.last_ms = self.last_ms.max(self.clock.now_ms());
        self.last_ms
    }

    /// Forward one event. Returns the timestamp it was sent with, or the
    /// engine's failure. The timestamp is consumed either way.
    ///
    /// # Errors
    ///
    /// Returns whatever the engine method failed with.
    pub fn forward<E: CanvasEngine>(&mut self, engine: &mut E, event: &InputEvent) -> Result<f64, E::Fault> {
        let ts = self.stamp();
        match event {
            InputEvent::Pointer(phase, at) => {
                log::trace!("{} ({}, {}) @ {ts}", phase.dom_type(), at.x, at.y);
                match phase {
                    Pointer::Move => engine.on_mouse_move(at.x, at.y, ts)?,
                    Pointer::Down => engine.on_mouse_down(at.x, at.y, ts)?,
                    Pointer::Up => engine.on_mouse_up(at.x, at.y, ts)?,
                }
            }
            InputEvent::Key(phase, Key(key)) => {
                log::trace!("{} {key:?} @ {ts}", phase.dom_type());
                match phase {
                    KeyPhase::Down => engine.on_key_down(key, ts)?,
                    KeyPhase::Up => engine.on_key_up(key, ts)?,
                    KeyPhase::Press => engine.on_key_press(key, ts)?,
                }
            }
        }
        Ok(ts)
    }
}
