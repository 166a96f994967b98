use std::cell::Cell;

use super::*;

#[derive(Default)]
struct FakeCanvas {
    size: Cell<Option<Size>>,
}

impl MountPoint for FakeCanvas {
    fn resize(&self, size: Size) {
        self.size.set(Some(size));
    }
}

impl MountPoint for &FakeCanvas {
    fn resize(&self, size: Size) {
        (**self).resize(size);
    }
}

#[test]
fn prepare_sizes_canvas_to_viewport_minus_margin() {
    let canvas = FakeCanvas::default();
    let config = DemoConfig::default();

    prepare(Some(&canvas), Size::new(1920, 1080), &config, |_| Ok(())).expect("prepare");

    assert_eq!(canvas.size.get(), Some(Size::new(1900, 1060)));
}

#[test]
fn prepare_honors_configured_margin() {
    let canvas = FakeCanvas::default();
    let config = DemoConfig { viewport_margin: 0, ..Default::default() };

    prepare(Some(&canvas), Size::new(800, 600), &config, |_| Ok(())).expect("prepare");

    assert_eq!(canvas.size.get(), Some(Size::new(800, 600)));
}

#[test]
fn prepare_resizes_before_binding() {
    let canvas = FakeCanvas::default();
    let config = DemoConfig::default();

    let seen = prepare(Some(&canvas), Size::new(100, 100), &config, |c| Ok(c.size.get())).expect("prepare");

    assert_eq!(seen, Some(Size::new(80, 80)));
}

#[test]
fn missing_canvas_never_binds() {
    let config = DemoConfig::default();
    let binds = Cell::new(0);

    let result = prepare(None::<FakeCanvas>, Size::new(800, 600), &config, |_| {
        binds.set(binds.get() + 1);
        Ok(())
    });

    assert_eq!(binds.get(), 0);
    match result {
        Err(BootError::CanvasMissing(id)) => assert_eq!(id, "canvas"),
        other => panic!("expected CanvasMissing, got {other:?}"),
    }
}

#[test]
fn bind_failure_propagates() {
    let canvas = FakeCanvas::default();
    let config = DemoConfig::default();

    let result: Result<(), BootError> = prepare(Some(&canvas), Size::new(100, 100), &config, |_| {
        Err(BootError::SurfaceUnavailable("canvas".to_owned()))
    });

    assert!(matches!(result, Err(BootError::SurfaceUnavailable(_))));
}

#[test]
fn shutdown_without_session_reports_nothing_to_stop() {
    assert!(!shutdown());
}
