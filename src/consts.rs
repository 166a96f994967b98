//! Shared constants for the demo harness.

// ── Mounting ────────────────────────────────────────────────────

/// Id of the container element the canvas is injected into.
pub const HOST_ID: &str = "app";

/// Id given to the injected canvas element.
pub const CANVAS_ID: &str = "canvas";

/// Nominal canvas size written into the injected markup, before the first
/// frame resizes it to the viewport.
pub const NOMINAL_SIZE_PX: u32 = 500;

/// Margin subtracted from each viewport axis when sizing the canvas.
pub const VIEWPORT_MARGIN_PX: u32 = 20;

/// Background color handed to the engine.
pub const BACKGROUND: &str = "black";

// ── Scene ───────────────────────────────────────────────────────

/// Fixed offset added to the pointer accumulators when placing the text node.
pub const TEXT_BASE_OFFSET: (f64, f64) = (100.0, 50.0);

/// Rotation applied to the text node every frame, in degrees.
pub const TEXT_ROTATION_DEG: f64 = 25.0;
