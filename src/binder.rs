//! Wires document input and the render loop to one engine instance.
//!
//! ARCHITECTURE
//! ============
//! [`Binding`] is the browser-independent core: it owns the engine and the
//! event [`Forwarder`], and can seed the scene and start the frame loop on any
//! [`FrameScheduler`]. [`bind`] builds a `Binding` around the real engine,
//! subscribes the six document listeners and returns a [`Session`] that keeps
//! everything alive. Dropping the session removes the listeners and cancels
//! the loop.
//!
//! Engine failures surface as `Err` values. Every `RefCell` guard is dropped
//! before a failure is raised to the host, so the next event or frame finds
//! the engine free.

#[cfg(test)]
#[path = "binder_test.rs"]
mod binder_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use crate::engine::{CanvasEngine, EngineFault};
use crate::error::BootError;
use crate::frame_loop::{self, AnimationFrames, FrameScheduler, LoopHandle};
use crate::geometry::{Point, to_canvas_local};
use crate::input::{Clock, Forwarder, InputEvent, Key, KeyPhase, Pointer, WallClock};
use crate::js_engine::JsEngine;
use crate::scene::Scene;

/// Engine plus forwarder, shared by every listener and the frame closure.
pub struct Binding<E, C> {
    engine: Rc<RefCell<E>>,
    forwarder: Rc<RefCell<Forwarder<C>>>,
}

impl<E, C> Clone for Binding<E, C> {
    fn clone(&self) -> Self {
        Self { engine: Rc::clone(&self.engine), forwarder: Rc::clone(&self.forwarder) }
    }
}

impl<E, C> Binding<E, C>
where
    E: CanvasEngine + 'static,
    C: Clock,
{
    #[must_use]
    pub fn new(engine: E, clock: C) -> Self {
        Self {
            engine: Rc::new(RefCell::new(engine)),
            forwarder: Rc::new(RefCell::new(Forwarder::new(clock))),
        }
    }

    /// Forward one event to the engine. Returns its timestamp.
    ///
    /// # Errors
    ///
    /// Returns the engine's failure. No borrow is held once this returns.
    pub fn dispatch(&self, event: &InputEvent) -> Result<f64, E::Fault> {
        let mut engine = self.engine.borrow_mut();
        let mut forwarder = self.forwarder.borrow_mut();
        forwarder.forward(&mut *engine, event)
    }

    /// [`Binding::dispatch`] for listener callbacks: a failure is raised to
    /// the host after the borrows are gone.
    fn deliver(&self, event: &InputEvent) {
        if let Err(fault) = self.dispatch(event) {
            log::debug!("engine rejected {event:?}: {fault:?}");
            fault.raise();
        }
    }

    /// Seed the scene and start rendering it once per frame.
    ///
    /// # Errors
    ///
    /// Returns `Engine` if seeding fails, or an error if the first frame
    /// cannot be scheduled.
    pub fn start_rendering<S>(&self, scheduler: Rc<S>) -> Result<LoopHandle, BootError>
    where
        S: FrameScheduler + 'static,
    {
        let seeded = Scene::seed(&mut *self.engine.borrow_mut());
        let mut scene = seeded.map_err(|fault| BootError::Engine(format!("{fault:?}")))?;
        let engine = Rc::clone(&self.engine);
        frame_loop::start(scheduler, move || scene.frame(&mut *engine.borrow_mut()))
    }
}

/// A DOM event subscription, removed again on drop.
pub struct Listener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Subscribe `handler` to `event_type` on `target`.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the browser rejects the subscription.
    pub fn attach<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self, BootError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event_type, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("failed to detach {} listener: {err:?}", self.event_type);
        }
    }
}

/// Everything a running demo holds on to.
pub struct Session {
    listeners: Vec<Listener>,
    frame_loop: LoopHandle,
}

impl Session {
    /// Keep an extra listener alive for the lifetime of the session.
    pub fn keep(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.frame_loop.cancel();
        log::info!(
            "session stopped after {} frames; detaching {} listeners",
            self.frame_loop.frames(),
            self.listeners.len()
        );
    }
}

/// Top-left of the canvas bounding box in client coordinates, or `None`
/// while the canvas is not attached to the document.
fn rect_origin(canvas: &HtmlCanvasElement) -> Option<Point> {
    if !canvas.is_connected() {
        return None;
    }
    let rect = canvas.get_bounding_client_rect();
    Some(Point::new(rect.x(), rect.y()))
}

fn pointer_listener<E>(
    document: &Document,
    phase: Pointer,
    canvas: HtmlCanvasElement,
    binding: Binding<E, WallClock>,
) -> Result<Listener, BootError>
where
    E: CanvasEngine + 'static,
{
    Listener::attach(document, phase.dom_type(), move |event: Event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let page = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        let local = to_canvas_local(page, rect_origin(&canvas));
        binding.deliver(&InputEvent::Pointer(phase, local));
    })
}

fn key_listener<E>(document: &Document, phase: KeyPhase, binding: Binding<E, WallClock>) -> Result<Listener, BootError>
where
    E: CanvasEngine + 'static,
{
    Listener::attach(document, phase.dom_type(), move |event: Event| {
        let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        binding.deliver(&InputEvent::Key(phase, Key(keyboard.key())));
    })
}

/// Construct the engine for `canvas_id`, subscribe input and start rendering.
///
/// # Errors
///
/// Returns `SurfaceUnavailable` if the engine cannot resolve its canvas,
/// `Dom` if the engine constructor throws or a subscription fails, `Engine`
/// if the scene cannot be seeded.
pub fn bind(canvas_id: &str, background: &str, window: &Window, document: &Document) -> Result<Session, BootError> {
    let engine = JsEngine::new(canvas_id, background)?;
    let canvas = engine
        .surface()
        .ok_or_else(|| BootError::SurfaceUnavailable(canvas_id.to_owned()))?;
    let binding = Binding::new(engine, WallClock);

    let mut listeners = Vec::with_capacity(Pointer::ALL.len() + KeyPhase::ALL.len());
    for phase in Pointer::ALL {
        listeners.push(pointer_listener(document, phase, canvas.clone(), binding.clone())?);
    }
    for phase in KeyPhase::ALL {
        listeners.push(key_listener(document, phase, binding.clone())?);
    }

    let frame_loop = binding.start_rendering(Rc::new(AnimationFrames::new(window.clone())))?;
    log::info!("canvas #{canvas_id} bound with {} listeners", listeners.len());
    Ok(Session { listeners, frame_loop })
}
