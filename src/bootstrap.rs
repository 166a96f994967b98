//! Page bootstrap: inject the canvas, size it on the first frame, bind it.
//!
//! The running [`Session`] is parked in a thread-local so it lives as long as
//! the page. Booting again replaces (and tears down) the previous session.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::binder::{self, Listener, Session};
use crate::config::DemoConfig;
use crate::error::BootError;
use crate::frame_loop::{AnimationFrames, FrameScheduler};
use crate::geometry::{Size, fit_viewport, viewport_px};

thread_local! {
    static ACTIVE: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// An element whose drawing-buffer size can be set.
pub trait MountPoint {
    fn resize(&self, size: Size);
}

impl MountPoint for HtmlCanvasElement {
    fn resize(&self, size: Size) {
        self.set_width(size.width);
        self.set_height(size.height);
    }
}

/// Size the located canvas to the viewport and hand it to `bind`.
///
/// `bind` is not called when `found` is `None`.
///
/// # Errors
///
/// Returns `CanvasMissing` when no canvas was found, or whatever `bind` fails with.
pub fn prepare<M, T, F>(found: Option<M>, viewport: Size, config: &DemoConfig, bind: F) -> Result<T, BootError>
where
    M: MountPoint,
    F: FnOnce(&M) -> Result<T, BootError>,
{
    let canvas = found.ok_or_else(|| BootError::CanvasMissing(config.canvas_id.clone()))?;
    let size = fit_viewport(viewport, config.viewport_margin);
    canvas.resize(size);
    log::debug!("canvas #{} sized to {}x{}", config.canvas_id, size.width, size.height);
    bind(&canvas)
}

/// Current `innerWidth` x `innerHeight`.
fn viewport_size(window: &Window) -> Result<Size, BootError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Size::new(viewport_px(width), viewport_px(height)))
}

/// Find (or create) the host element and replace its content with the canvas.
///
/// # Errors
///
/// Returns `NoBody` if the host has to be created and there is no `<body>`.
pub fn mount_host(document: &Document, config: &DemoConfig) -> Result<(), BootError> {
    let host = match document.get_element_by_id(&config.host_id) {
        Some(host) => host,
        None => {
            let body = document.body().ok_or(BootError::NoBody)?;
            let host = document.create_element("div")?;
            host.set_id(&config.host_id);
            body.append_child(&host)?;
            log::debug!("created host element #{}", config.host_id);
            host
        }
    };
    host.set_inner_html(&config.canvas_markup());
    Ok(())
}

fn resize_listener(window: &Window, canvas: &HtmlCanvasElement, margin: u32) -> Result<Listener, BootError> {
    let win = window.clone();
    let canvas = canvas.clone();
    Listener::attach(window, "resize", move |_| match viewport_size(&win) {
        Ok(viewport) => canvas.resize(fit_viewport(viewport, margin)),
        Err(err) => log::debug!("resize skipped: {err}"),
    })
}

fn on_first_frame(window: &Window, config: &DemoConfig) -> Result<Session, BootError> {
    let document = window.document().ok_or(BootError::NoDocument)?;
    let found = document
        .get_element_by_id(&config.canvas_id)
        .and_then(|el| el.dyn_ref::<HtmlCanvasElement>().cloned());
    let viewport = viewport_size(window)?;

    prepare(found, viewport, config, |canvas| {
        let mut session = binder::bind(&config.canvas_id, &config.background, window, &document)?;
        if config.track_resize {
            session.keep(resize_listener(window, canvas, config.viewport_margin)?);
        }
        Ok(session)
    })
}

fn install(session: Session) {
    log::info!("demo running ({} listeners)", session.listener_count());
    let previous = ACTIVE.with(|slot| slot.replace(Some(session)));
    drop(previous);
}

/// Tear down the running session. Returns whether there was one.
pub fn shutdown() -> bool {
    ACTIVE.with(RefCell::take).is_some()
}

/// Inject the canvas now and bind it on the next animation frame.
///
/// Failures after the first frame are logged, not returned.
///
/// # Errors
///
/// Returns an error if the page has no window/document, the host cannot be
/// mounted, or the first frame cannot be requested.
pub fn boot(config: DemoConfig) -> Result<(), BootError> {
    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoDocument)?;
    mount_host(&document, &config)?;

    let frames = AnimationFrames::new(window.clone());
    frames.request_frame(Box::new(move || match on_first_frame(&window, &config) {
        Ok(session) => install(session),
        Err(err) => log::warn!("canvas not started [{}]: {err}", err.code()),
    }))
}
