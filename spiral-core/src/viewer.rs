/// Application state for the spiral viewer
use crate::backend::RenderBackend;
use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::projection::Camera;
use crate::scene::{Frame, RenderMode, Scene};
use crate::target::RenderTarget;
use crate::trackball::Trackball;
use crate::transform::OrientationState;

/// RGBA bytes of the 1×1 texture shown until the real image arrives
pub const PLACEHOLDER_PIXEL: [u8; 4] = [0, 0, 255, 255];

/// Which image currently backs the surface texture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextureStatus {
    #[default]
    Placeholder,
    Loaded { width: u32, height: u32 },
}

impl TextureStatus {
    pub fn is_loaded(self) -> bool {
        matches!(self, TextureStatus::Loaded { .. })
    }
}

/// Owns all state that persists between frames.
///
/// Mutation goes through the setters; each one leaves redrawing to the
/// caller so a host can funnel every trigger through one render path.
#[derive(Debug, Clone)]
pub struct Viewer {
    scene: Scene,
    camera: Camera,
    orientation: OrientationState,
    mode: RenderMode,
    trackball: Trackball,
    use_trackball: bool,
    texture: TextureStatus,
    target: RenderTarget,
    frames_drawn: u64,
}

impl Viewer {
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        Ok(Self {
            scene: Scene::new(config),
            camera: Camera::new(&config.camera),
            orientation: OrientationState::default(),
            mode: RenderMode::default(),
            trackball: Trackball::new(),
            use_trackball: config.use_trackball,
            texture: TextureStatus::default(),
            target: RenderTarget::default(),
            frames_drawn: 0,
        })
    }

    pub fn orientation(&self) -> OrientationState {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: OrientationState) {
        self.orientation = orientation;
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Flip between filled and wireframe drawing, returning the new mode.
    pub fn toggle_mode(&mut self) -> RenderMode {
        self.mode = self.mode.toggled();
        tracing::info!(mode = ?self.mode, "render mode changed");
        self.mode
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_distance(&mut self, distance: f64) -> Result<(), SceneError> {
        self.camera.set_distance(distance)
    }

    pub fn trackball(&self) -> &Trackball {
        &self.trackball
    }

    pub fn trackball_mut(&mut self) -> &mut Trackball {
        &mut self.trackball
    }

    /// Drop any pointer-driven rotation.
    pub fn reset_view(&mut self) {
        self.trackball.reset();
        tracing::debug!("trackball rotation reset");
    }

    pub fn texture_status(&self) -> TextureStatus {
        self.texture
    }

    pub fn texture_loaded(&mut self, width: u32, height: u32) {
        tracing::info!(width, height, "surface texture loaded");
        self.texture = TextureStatus::Loaded { width, height };
    }

    pub fn target(&self) -> RenderTarget {
        self.target
    }

    /// See [`RenderTarget::resize_to_display`].
    pub fn resize_target(
        &mut self,
        logical_width: f64,
        logical_height: f64,
        pixel_ratio: f64,
    ) -> Result<bool, SceneError> {
        self.target
            .resize_to_display(logical_width, logical_height, pixel_ratio)
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn frame(&self) -> Frame {
        Frame {
            target: self.target,
            camera: self.camera,
            orientation: self.orientation,
            mode: self.mode,
            trackball: self.use_trackball.then(|| self.trackball.rotation()),
        }
    }

    /// Draw one complete frame from the current state.
    pub fn render<B: RenderBackend>(&mut self, backend: &mut B) -> Result<(), SceneError> {
        self.scene.draw_frame(&self.frame(), backend)?;
        self.frames_drawn += 1;
        tracing::trace!(frame = self.frames_drawn, "frame drawn");
        Ok(())
    }
}
