//! Self-rescheduling render loop on top of `requestAnimationFrame`.
//!
//! Each frame runs to completion and only then asks for the next one, so at
//! most one frame request is outstanding. The loop checks its cancellation
//! flag before running a frame and again before re-scheduling.
//!
//! A frame that fails is still followed by the next request; its fault is
//! raised last, after the loop's own state is settled.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::engine::EngineFault;
use crate::error::BootError;

/// Something that runs a callback on the next display refresh.
pub trait FrameScheduler {
    /// Queue `callback` for the next animation frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the request.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), BootError>;
}

/// Browser animation-frame scheduler.
#[derive(Debug, Clone)]
pub struct AnimationFrames {
    window: Window,
}

impl AnimationFrames {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), BootError> {
        let cb = Closure::once_into_js(move || callback());
        self.window.request_animation_frame(cb.unchecked_ref())?;
        Ok(())
    }
}

/// Shared view of a running loop: cancel it or read its frame count.
#[derive(Debug, Clone, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl LoopHandle {
    /// Stop the loop. The pending frame, if any, becomes a no-op.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Frames run so far, failed ones included.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

/// Start running `frame` once per animation frame until the returned handle
/// is cancelled. A frame's `Err` does not stop the loop.
///
/// # Errors
///
/// Returns an error if the first frame cannot be scheduled. Later scheduling
/// failures end the loop and are logged.
pub fn start<S, F, X>(scheduler: Rc<S>, frame: F) -> Result<LoopHandle, BootError>
where
    S: FrameScheduler + 'static,
    F: FnMut() -> Result<(), X> + 'static,
    X: EngineFault + 'static,
{
    let handle = LoopHandle::default();
    schedule(scheduler, Rc::new(RefCell::new(frame)), handle.clone())?;
    Ok(handle)
}

fn schedule<S, F, X>(scheduler: Rc<S>, frame: Rc<RefCell<F>>, handle: LoopHandle) -> Result<(), BootError>
where
    S: FrameScheduler + 'static,
    F: FnMut() -> Result<(), X> + 'static,
    X: EngineFault + 'static,
{
    let next = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move || {
        if handle.is_cancelled() {
            return;
        }
        let outcome = (frame.borrow_mut())();
        handle.frames.set(handle.frames.get() + 1);
        if !handle.is_cancelled()
            && let Err(err) = schedule(next, frame, handle.clone())
        {
            log::warn!("render loop stopped after {} frames: {err}", handle.frames());
        }
        if let Err(fault) = outcome {
            log::debug!("frame {} failed: {fault:?}", handle.frames());
            fault.raise();
        }
    }))
}
