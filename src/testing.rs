//! Test doubles shared by the unit test modules.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::engine::{CanvasEngine, EngineFault, ShapeHandle};
use crate::error::BootError;
use crate::frame_loop::FrameScheduler;
use crate::geometry::Point;
use crate::input::{Clock, KeyPhase, Pointer};
use crate::style::{Pivot, ShapeStyle};

/// One call observed by [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AddCircle { center: Point, radius: f64, style: ShapeStyle },
    AddRect { origin: Point, width: f64, height: f64, style: ShapeStyle },
    AddText { content: String, at: Point, style: ShapeStyle },
    Translate { shape: usize, x: f64, y: f64 },
    Rotate { shape: usize, degrees: f64, pivot: Pivot },
    Mouse { phase: Pointer, x: f64, y: f64, ts: f64 },
    Key { phase: KeyPhase, key: String, ts: f64 },
    Render,
}

type CallLog = Rc<RefCell<Vec<Call>>>;

/// Failure returned by [`RecordingEngine`] when a call is set up to fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFault(pub String);

impl EngineFault for TestFault {
    fn raise(self) {
        log::debug!("engine fault raised: {}", self.0);
    }
}

/// Call log plus the one-shot failure switch, shared by the engine and every
/// shape it hands out.
#[derive(Debug, Default, Clone)]
struct Recorder {
    calls: CallLog,
    fail_next: Rc<Cell<bool>>,
}

impl Recorder {
    /// Record `call`, unless the failure switch is armed: then the call is
    /// dropped, the switch resets and the caller gets a fault.
    fn record(&self, call: Call) -> Result<(), TestFault> {
        if self.fail_next.replace(false) {
            return Err(TestFault(format!("{call:?} failed")));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

/// Engine double that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    recorder: Recorder,
    shapes: usize,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.recorder.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.recorder.calls.borrow_mut().clear();
    }

    /// Make the next engine or shape call fail without being recorded.
    pub fn fail_next_call(&self) {
        self.recorder.fail_next.set(true);
    }

    fn next_shape(&mut self) -> RecordedShape {
        let id = self.shapes;
        self.shapes += 1;
        RecordedShape { id, recorder: self.recorder.clone() }
    }
}

/// Shape handle issued by [`RecordingEngine`]; ids count up from zero in
/// creation order.
#[derive(Debug)]
pub struct RecordedShape {
    pub id: usize,
    recorder: Recorder,
}

impl ShapeHandle for RecordedShape {
    type Fault = TestFault;

    fn translate(&self, x: f64, y: f64) -> Result<(), TestFault> {
        self.recorder.record(Call::Translate { shape: self.id, x, y })
    }

    fn rotation(&self, degrees: f64, pivot: Pivot) -> Result<(), TestFault> {
        self.recorder.record(Call::Rotate { shape: self.id, degrees, pivot })
    }
}

impl CanvasEngine for RecordingEngine {
    type Fault = TestFault;
    type Shape = RecordedShape;

    fn add_circle(&mut self, center: Point, radius: f64, style: &ShapeStyle) -> Result<RecordedShape, TestFault> {
        self.recorder.record(Call::AddCircle { center, radius, style: style.clone() })?;
        Ok(self.next_shape())
    }

    fn add_rect(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        style: &ShapeStyle,
    ) -> Result<RecordedShape, TestFault> {
        self.recorder.record(Call::AddRect { origin, width, height, style: style.clone() })?;
        Ok(self.next_shape())
    }

    fn add_text(&mut self, content: &str, at: Point, style: &ShapeStyle) -> Result<RecordedShape, TestFault> {
        self.recorder.record(Call::AddText { content: content.to_owned(), at, style: style.clone() })?;
        Ok(self.next_shape())
    }

    fn on_mouse_move(&mut self, x: f64, y: f64, ts: f64) -> Result<(), TestFault> {
        self.recorder.record(Call::Mouse { phase: Pointer::Move, x, y, ts })
    }

    fn on_mouse_down(&mut self, x: f64, y: f64, ts: f64) -> Result<(), TestFault> {
        self.recorder.record(Call::Mouse { phase: Pointer::Down, x, y, ts })
    }

    fn on_mouse_up(&mut self, x: f64, y: f64, ts: f64) -> Result<(), TestFault> {
        self.recorder.record(Call::Mouse { phase: Pointer::Up, x, y, ts })
    }

    fn on_key_down(&mut self, key: &str, ts: f64) -> Result<(), TestFault> {
        self.recorder.record(Call::Key { phase: KeyPhase::Down, key: key.to_owned(), ts })
    }

    fn on_key_up(&mut self, key: &str, ts: f64) -> Result<(), TestFault> {
        self.recorder.record(Call::Key { phase: KeyPhase::Up, key: key.to_owned(), ts })
    }

    fn on_key_press(&mut self, key: &str, ts: f64) -> Result<(), TestFault> {
        self.recorder.record(Call::Key { phase: KeyPhase::Press, key: key.to_owned(), ts })
    }

    fn render(&mut self) -> Result<(), TestFault> {
        self.recorder.record(Call::Render)
    }
}

/// Clock that replays a fixed sequence of readings, repeating the last one.
#[derive(Debug)]
pub struct ScriptedClock {
    readings: RefCell<VecDeque<f64>>,
    last: Cell<f64>,
}

impl ScriptedClock {
    pub fn new(readings: &[f64]) -> Self {
        Self { readings: RefCell::new(readings.iter().copied().collect()), last: Cell::new(0.0) }
    }
}

impl Clock for ScriptedClock {
    fn now_ms(&self) -> f64 {
        if let Some(next) = self.readings.borrow_mut().pop_front() {
            self.last.set(next);
        }
        self.last.get()
    }
}

type FrameCallback = Box<dyn FnOnce()>;

/// Frame scheduler that queues callbacks until the test ticks them.
#[derive(Default)]
pub struct ManualFrames {
    queue: RefCell<VecDeque<FrameCallback>>,
    requests: Cell<usize>,
    refuse: Cell<bool>,
}

impl ManualFrames {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Callbacks waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Total successful `request_frame` calls so far.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    /// Make subsequent `request_frame` calls fail.
    pub fn refuse_requests(&self) {
        self.refuse.set(true);
    }

    /// Run every callback queued before this tick. Returns how many ran.
    pub fn tick(&self) -> usize {
        let due: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        let ran = due.len();
        for callback in due {
            callback();
        }
        ran
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), BootError> {
        if self.refuse.get() {
            return Err(BootError::Dom("requestAnimationFrame refused".to_owned()));
        }
        self.requests.set(self.requests.get() + 1);
        self.queue.borrow_mut().push_back(callback);
        Ok(())
    }
}
