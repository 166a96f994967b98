//! Shape style records and rotation pivots, as the engine expects them.
//!
//! The engine reads styles as plain JS objects with optional keys. Absent keys
//! fall back to engine defaults, so `None` fields are omitted entirely rather
//! than serialized as `null`.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::Serialize;

/// Style configuration attached to a shape at creation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShapeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl ShapeStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fill(mut self, color: &str) -> Self {
        self.fill_color = Some(color.to_owned());
        self
    }

    #[must_use]
    pub fn stroke(mut self, width: f64, color: &str) -> Self {
        self.stroke_width = Some(width);
        self.stroke_color = Some(color.to_owned());
        self
    }

    #[must_use]
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }
}

/// Named anchor a rotation is applied around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivot {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl Pivot {
    /// Two-letter code understood by the engine.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopRight => "tr",
            Self::BottomLeft => "bl",
            Self::BottomRight => "br",
            Self::Center => "c",
        }
    }
}
