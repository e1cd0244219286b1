/// Shared application state and the single redraw path
use std::cell::RefCell;
use std::rc::Rc;

use spiral_core::Viewer;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlImageElement, WebGlRenderingContext as GL, WebGlTexture};

use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::gl::WebGlBackend;
use crate::texture;

pub type SharedApp = Rc<RefCell<App>>;

pub struct App {
    pub viewer: Viewer,
    backend: WebGlBackend,
    canvas: HtmlCanvasElement,
    texture: WebGlTexture,
}

impl App {
    pub fn create(canvas_id: &str, config: &ViewerConfig) -> Result<Self, ViewerError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ViewerError::Js("no document available".into()))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| ViewerError::ElementNotFound(canvas_id.to_string()))?
            .dyn_into()
            .map_err(|_| ViewerError::ElementNotFound(canvas_id.to_string()))?;

        let gl: GL = canvas
            .get_context("webgl")
            .ok()
            .flatten()
            .ok_or(ViewerError::NoContext)?
            .dyn_into()
            .map_err(|_| ViewerError::NoContext)?;

        let backend = WebGlBackend::new(gl)?;
        let texture = texture::create_placeholder(backend.context())?;
        let viewer = Viewer::new(&config.scene)?;

        Ok(Self {
            viewer,
            backend,
            canvas,
            texture,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Size the canvas to its layout box, then draw a full frame.
    pub fn draw(&mut self) -> Result<(), ViewerError> {
        let pixel_ratio = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let rect = self.canvas.get_bounding_client_rect();

        if self
            .viewer
            .resize_target(rect.width(), rect.height(), pixel_ratio)?
        {
            let target = self.viewer.target();
            self.canvas.set_width(target.width);
            self.canvas.set_height(target.height);
        }

        self.viewer.render(&mut self.backend)?;
        Ok(())
    }

    pub fn apply_texture(&mut self, image: &HtmlImageElement) -> Result<(), ViewerError> {
        texture::upload_image(self.backend.context(), &self.texture, image)?;
        self.viewer
            .texture_loaded(image.natural_width(), image.natural_height());
        Ok(())
    }
}

/// Run `f` with exclusive access, failing with [`ViewerError::Busy`] when
/// called from inside another access (e.g. mid-frame).
pub fn with_app<R>(
    app: &SharedApp,
    f: impl FnOnce(&mut App) -> Result<R, ViewerError>,
) -> Result<R, ViewerError> {
    let mut app = app.try_borrow_mut().map_err(|_| ViewerError::Busy)?;
    f(&mut app)
}

/// Entry point for event handlers: apply an update and redraw when it
/// reports a visible change. Failures are logged, never thrown.
pub fn dispatch(app: &SharedApp, update: impl FnOnce(&mut App) -> Result<bool, ViewerError>) {
    let result = with_app(app, |app| {
        if update(app)? {
            app.draw()?;
        }
        Ok(())
    });

    match result {
        Ok(()) => {}
        Err(ViewerError::Busy) => tracing::warn!("redraw requested during a frame, dropped"),
        Err(err) => tracing::error!(%err, "redraw failed"),
    }
}
