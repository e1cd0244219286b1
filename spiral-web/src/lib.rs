/// Spiral Web - WebGL viewer for the conical spiral surface
///
/// Binds the core scene to a browser canvas: shader program and buffers,
/// the surface texture, device-orientation and pointer input, and the
/// JavaScript-facing `SpiralViewer` handle.

pub mod app;
pub mod config;
pub mod error;
pub mod gl;
pub mod input;
pub mod logging;
pub mod shaders;
pub mod texture;

use std::cell::RefCell;
use std::rc::Rc;

use spiral_core::OrientationState;
use wasm_bindgen::prelude::*;

use app::{dispatch, with_app, App, SharedApp};
pub use config::ViewerConfig;
pub use error::ViewerError;

#[wasm_bindgen]
pub struct SpiralViewer {
    app: SharedApp,
}

#[wasm_bindgen]
impl SpiralViewer {
    /// Set up the WebGL context on `canvas_id` and draw the first frame.
    ///
    /// On failure the canvas holder element shows the reason and the
    /// controls are hidden; the error is also returned to the caller.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<SpiralViewer, JsValue> {
        let config =
            ViewerConfig::from_json(config_json.as_deref()).map_err(ViewerError::from)?;
        logging::init(config.level());
        tracing::info!(canvas_id, "starting spiral viewer");

        let app = match App::create(canvas_id, &config) {
            Ok(app) => app,
            Err(err) => {
                tracing::error!(%err, "viewer initialisation failed");
                report_fatal(&config, &err);
                return Err(err.into());
            }
        };
        let canvas = app.canvas().clone();
        let app: SharedApp = Rc::new(RefCell::new(app));

        input::attach(&app, &canvas)?;

        let handle = app.clone();
        texture::load_image(&config.texture_url, move |image| {
            dispatch(&handle, |app| {
                app.apply_texture(&image)?;
                Ok(true)
            });
        })?;

        dispatch(&app, |_| Ok(true));
        Ok(SpiralViewer { app })
    }

    /// Flip between the filled surface and the wireframe, then redraw.
    /// Returns whether the wireframe is now shown.
    #[wasm_bindgen(js_name = "toggleFrame")]
    pub fn toggle_frame(&self) -> Result<bool, JsValue> {
        let is_frame = with_app(&self.app, |app| {
            let mode = app.viewer.toggle_mode();
            app.draw()?;
            Ok(mode.is_frame())
        })?;
        Ok(is_frame)
    }

    #[wasm_bindgen(js_name = "isFrame")]
    pub fn is_frame(&self) -> Result<bool, JsValue> {
        Ok(with_app(&self.app, |app| Ok(app.viewer.mode().is_frame()))?)
    }

    /// Orientation in degrees; missing angles count as zero.
    #[wasm_bindgen(js_name = "setOrientation")]
    pub fn set_orientation(
        &self,
        alpha: Option<f64>,
        beta: Option<f64>,
        gamma: Option<f64>,
    ) -> Result<(), JsValue> {
        with_app(&self.app, |app| {
            app.viewer
                .set_orientation(OrientationState::from_sensor(alpha, beta, gamma));
            app.draw()
        })?;
        Ok(())
    }

    /// Zoom; the field of view becomes `PI / distance`.
    #[wasm_bindgen(js_name = "setDistance")]
    pub fn set_distance(&self, distance: f64) -> Result<(), JsValue> {
        with_app(&self.app, |app| {
            app.viewer.set_distance(distance)?;
            app.draw()
        })?;
        Ok(())
    }

    /// Drop the pointer-drag rotation and redraw.
    #[wasm_bindgen(js_name = "resetView")]
    pub fn reset_view(&self) -> Result<(), JsValue> {
        with_app(&self.app, |app| {
            app.viewer.reset_view();
            app.draw()
        })?;
        Ok(())
    }

    /// Whether the surface image has replaced the placeholder texture.
    #[wasm_bindgen(js_name = "textureLoaded")]
    pub fn texture_loaded(&self) -> Result<bool, JsValue> {
        let status = with_app(&self.app, |app| Ok(app.viewer.texture_status()))?;
        Ok(status.is_loaded())
    }

    pub fn redraw(&self) -> Result<(), JsValue> {
        with_app(&self.app, |app| app.draw())?;
        Ok(())
    }
}

/// Text shown in place of the canvas when rendering cannot start
fn fatal_message(err: &ViewerError) -> String {
    match err {
        ViewerError::NoContext => "Sorry, could not get a WebGL graphics context.".to_string(),
        other => format!("Sorry, could not initialize the WebGL graphics context: {other}"),
    }
}

fn report_fatal(config: &ViewerConfig, err: &ViewerError) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(holder) = document.get_element_by_id(&config.canvas_holder_id) {
        holder.set_inner_html(&format!("<p>{}</p>", fatal_message(err)));
    }
    if let Some(controls) = document
        .get_element_by_id(&config.controls_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        controls.set_hidden(true);
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Setup panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_context_message() {
        assert_eq!(
            fatal_message(&ViewerError::NoContext),
            "Sorry, could not get a WebGL graphics context."
        );
    }

    #[test]
    fn shader_failure_message_carries_log() {
        let err = ViewerError::ShaderCompile {
            stage: "fragment",
            log: "0:4: 'u_colour' undeclared".into(),
        };
        assert_eq!(
            fatal_message(&err),
            "Sorry, could not initialize the WebGL graphics context: \
             Error in fragment shader:  0:4: 'u_colour' undeclared"
        );
    }
}
