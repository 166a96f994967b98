//! Canvas demo harness.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It mounts a
//! canvas, instantiates the external rendering engine on it, forwards
//! document mouse and keyboard events to the engine, seeds a handful of
//! shapes and renders them once per animation frame. Shape storage, drawing
//! and hit-testing all live in the engine; this crate is the glue around it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bootstrap`] | Inject and size the canvas, own the running session |
//! | [`binder`] | Engine + input listeners + render loop for one canvas |
//! | [`engine`] | Capability traits the engine is used through |
//! | [`js_engine`] | `wasm-bindgen` binding to the compiled engine module |
//! | [`input`] | Input event types and timestamped forwarding |
//! | [`scene`] | Seeded shapes and the per-frame label update |
//! | [`frame_loop`] | Cancellable `requestAnimationFrame` loop |
//! | [`geometry`] | Page-to-canvas translation and viewport sizing |
//! | [`style`] | Shape style records and rotation pivots |
//! | [`config`] | Runtime configuration |
//! | [`error`] | Boot failures |
//! | [`consts`] | Shared constants |

pub mod binder;
pub mod bootstrap;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod frame_loop;
pub mod geometry;
pub mod input;
pub mod js_engine;
pub mod scene;
pub mod style;

#[cfg(test)]
mod testing;

use wasm_bindgen::prelude::*;

use crate::config::DemoConfig;

fn init_logging(level: log::Level) {
    if console_log::init_with_level(level).is_err() {
        // Already installed by an earlier start; just move the level.
        log::set_max_level(level.to_level_filter());
    }
}

/// Page entry point. Call once after the module loads.
///
/// `config` is an optional JSON object; see [`config`] for the fields.
/// Boot failures are logged to the console and otherwise ignored.
#[wasm_bindgen]
pub fn start(config: Option<String>) {
    console_error_panic_hook::set_once();

    let parsed = DemoConfig::from_json(config.as_deref());
    init_logging(parsed.as_ref().map_or(log::Level::Info, DemoConfig::log_level));

    if let Err(err) = parsed.and_then(bootstrap::boot) {
        log::warn!("canvas demo not started [{}]: {err}", err.code());
    }
}

/// Stop the render loop and remove all input listeners.
///
/// Returns `false` if nothing was running.
#[wasm_bindgen]
pub fn stop() -> bool {
    bootstrap::shutdown()
}
