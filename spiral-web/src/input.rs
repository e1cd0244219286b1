/// DOM event wiring for the orientation sensor and pointer-drag rotation
use spiral_core::OrientationState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DeviceOrientationEvent, Event, EventTarget, HtmlCanvasElement, PointerEvent};

use crate::app::{dispatch, SharedApp};
use crate::error::ViewerError;

/// Attach every listener. Closures live for the lifetime of the page.
pub fn attach(app: &SharedApp, canvas: &HtmlCanvasElement) -> Result<(), ViewerError> {
    let window =
        web_sys::window().ok_or_else(|| ViewerError::Js("no window available".into()))?;

    let handle = app.clone();
    listen(&window, "deviceorientation", move |event: Event| {
        let Some(event) = event.dyn_ref::<DeviceOrientationEvent>() else {
            return;
        };
        let orientation = OrientationState::from_sensor(event.alpha(), event.beta(), event.gamma());
        dispatch(&handle, |app| {
            app.viewer.set_orientation(orientation);
            Ok(true)
        });
    })?;

    let handle = app.clone();
    listen(canvas, "pointerdown", move |event: Event| {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        dispatch(&handle, |app| {
            if let Some((x, y)) = pointer_position(app.canvas(), event) {
                // Keep receiving moves after the pointer leaves the canvas
                let _ = app.canvas().set_pointer_capture(event.pointer_id());
                app.viewer.trackball_mut().begin(x, y);
            }
            Ok(false)
        });
    })?;

    let handle = app.clone();
    listen(canvas, "pointermove", move |event: Event| {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        dispatch(&handle, |app| {
            if !app.viewer.trackball().is_dragging() {
                return Ok(false);
            }
            Ok(pointer_position(app.canvas(), event)
                .map(|(x, y)| app.viewer.trackball_mut().drag(x, y))
                .unwrap_or(false))
        });
    })?;

    let handle = app.clone();
    listen(canvas, "dblclick", move |_: Event| {
        dispatch(&handle, |app| {
            app.viewer.reset_view();
            Ok(true)
        });
    })?;

    for kind in ["pointerup", "pointercancel"] {
        let handle = app.clone();
        listen(canvas, kind, move |_: Event| {
            dispatch(&handle, |app| {
                app.viewer.trackball_mut().end();
                Ok(false)
            });
        })?;
    }

    tracing::debug!("input listeners attached");
    Ok(())
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), ViewerError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn pointer_position(canvas: &HtmlCanvasElement, event: &PointerEvent) -> Option<(f32, f32)> {
    let rect = canvas.get_bounding_client_rect();
    normalize_pointer(
        event.client_x() as f64,
        event.client_y() as f64,
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    )
}

/// Map client coordinates to `[-1, 1]` over the element box, +y up.
fn normalize_pointer(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Option<(f32, f32)> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let x = 2.0 * (client_x - left) / width - 1.0;
    let y = 1.0 - 2.0 * (client_y - top) / height;
    Some((x as f32, y as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_corners_map_to_unit_square() {
        assert_eq!(
            normalize_pointer(10.0, 20.0, 10.0, 20.0, 200.0, 100.0),
            Some((-1.0, 1.0))
        );
        assert_eq!(
            normalize_pointer(210.0, 120.0, 10.0, 20.0, 200.0, 100.0),
            Some((1.0, -1.0))
        );
        assert_eq!(
            normalize_pointer(110.0, 70.0, 10.0, 20.0, 200.0, 100.0),
            Some((0.0, 0.0))
        );
    }

    #[test]
    fn empty_box_has_no_position() {
        assert_eq!(normalize_pointer(5.0, 5.0, 0.0, 0.0, 0.0, 100.0), None);
        assert_eq!(normalize_pointer(5.0, 5.0, 0.0, 0.0, 100.0, f64::NAN), None);
    }
}
