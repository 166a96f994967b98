//! Demo scene: the seeded shapes and the per-frame update.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::consts::{TEXT_BASE_OFFSET, TEXT_ROTATION_DEG};
use crate::engine::{CanvasEngine, ShapeHandle};
use crate::geometry::Point;
use crate::style::{Pivot, ShapeStyle};

/// Offset accumulators applied to the text node each frame.
///
/// Nothing advances them; the text stays put.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Where the text node is translated to for this offset.
    #[must_use]
    pub fn text_position(self) -> Point {
        Point::new(self.x + TEXT_BASE_OFFSET.0, self.y + TEXT_BASE_OFFSET.1)
    }
}

/// Shapes created once at startup and kept for the session.
pub struct Scene<S> {
    pub circle: S,
    pub left_rect: S,
    pub right_rect: S,
    pub label: S,
    offset: PointerOffset,
}

impl<S: ShapeHandle> Scene<S> {
    /// Create the demo shapes on `engine`.
    ///
    /// # Errors
    ///
    /// Returns the first engine failure; shapes created before it stay on
    /// the engine.
    pub fn seed<E>(engine: &mut E) -> Result<Self, S::Fault>
    where
        E: CanvasEngine<Shape = S, Fault = S::Fault>,
    {
        let circle = engine.add_circle(
            Point::new(500.0, 100.0),
            50.0,
            &ShapeStyle::new().fill("red").stroke(5.0, "blue"),
        )?;
        let left_rect = engine.add_rect(Point::new(100.0, 100.0), 15.0, 100.0, &ShapeStyle::new().fill("white"))?;
        let right_rect = engine.add_rect(Point::new(400.0, 100.0), 15.0, 100.0, &ShapeStyle::new().fill("white"))?;
        let label = engine.add_text(
            "Hello World",
            Point::new(431.0, 503.0),
            &ShapeStyle::new().font_size(20.0).fill("white"),
        )?;
        log::debug!("scene seeded with 4 shapes");
        Ok(Self { circle, left_rect, right_rect, label, offset: PointerOffset::default() })
    }

    /// Reposition and rotate the label, then render.
    ///
    /// # Errors
    ///
    /// Stops at the first engine failure; later steps of this frame are skipped.
    pub fn frame<E>(&mut self, engine: &mut E) -> Result<(), S::Fault>
    where
        E: CanvasEngine<Shape = S, Fault = S::Fault>,
    {
        let at = self.offset.text_position();
        self.label.translate(at.x, at.y)?;
        self.label.rotation(TEXT_ROTATION_DEG, Pivot::TopLeft)?;
        engine.render()
    }
}
