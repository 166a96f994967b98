//! Boot-time failures.
//!
//! Everything that can go wrong before the render loop starts: a missing
//! mount point, a rejected DOM call or an engine that fails while the scene
//! is seeded. The entry point logs these and returns; nothing is surfaced to
//! the user. Engine failures after boot are not modeled here: they are raised
//! to the host's error channel as they happen.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("canvas element not found: #{0}")]
    CanvasMissing(String),
    #[error("engine could not resolve a drawing surface for #{0}")]
    SurfaceUnavailable(String),
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("engine call failed: {0}")]
    Engine(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl BootError {
    /// Stable short code included in boot failure log lines.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoWindow => "E_NO_WINDOW",
            Self::NoDocument => "E_NO_DOCUMENT",
            Self::NoBody => "E_NO_BODY",
            Self::CanvasMissing(_) => "E_CANVAS_MISSING",
            Self::SurfaceUnavailable(_) => "E_SURFACE_UNAVAILABLE",
            Self::Dom(_) => "E_DOM",
            Self::Engine(_) => "E_ENGINE",
            Self::Config(_) => "E_CONFIG",
        }
    }
}

impl From<JsValue> for BootError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
