//! Page-to-canvas coordinate translation and viewport sizing.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in either page (client) or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer pixel dimensions of a canvas backing store or viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Shrink both axes by `margin`, stopping at zero.
    #[must_use]
    pub fn inset(self, margin: u32) -> Self {
        Self {
            width: self.width.saturating_sub(margin),
            height: self.height.saturating_sub(margin),
        }
    }
}

/// Convert a page-space point to canvas-local space.
///
/// `origin` is the top-left corner of the canvas bounding rectangle. When the
/// rectangle is unavailable the page point is passed through unchanged.
#[must_use]
pub fn to_canvas_local(page: Point, origin: Option<Point>) -> Point {
    match origin {
        Some(origin) => Point::new(page.x - origin.x, page.y - origin.y),
        None => page,
    }
}

/// Convert a CSS viewport measurement (as reported by `innerWidth` /
/// `innerHeight`) to whole pixels. Non-finite or negative values map to zero.
#[must_use]
pub fn viewport_px(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let px = value.min(f64::from(u32::MAX)) as u32;
    px
}

/// Canvas size for a viewport: each axis reduced by `margin`.
#[must_use]
pub fn fit_viewport(viewport: Size, margin: u32) -> Size {
    viewport.inset(margin)
}
