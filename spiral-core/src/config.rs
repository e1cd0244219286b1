/// Scene configuration.
///
/// Every section carries `#[serde(default)]`, so a partial JSON document
/// (or none at all) yields the stock conical spiral scene.

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Largest resolution whose vertex count still fits 16-bit indices.
pub const MAX_RESOLUTION: u32 = 255;

/// Shape constants and angular resolution of the conical spiral
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub resolution: u32,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            a: 0.20,
            b: 0.20,
            c: 0.20,
            resolution: 80,
        }
    }
}

impl SurfaceParams {
    pub fn new(a: f64, b: f64, c: f64, resolution: u32) -> Self {
        Self {
            a,
            b,
            c,
            resolution,
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.resolution == 0 || self.resolution > MAX_RESOLUTION {
            return Err(SceneError::InvalidResolution(self.resolution));
        }
        Ok(())
    }
}

/// Perspective camera settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Zoom-like parameter; the field of view is `PI / distance`.
    pub distance: f64,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Z offset applied to the model before projection.
    pub model_offset_z: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 7.0,
            aspect: 2.0,
            near: 2.0,
            far: 12.0,
            model_offset_z: -10.0,
        }
    }
}

/// Full scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub surface: SurfaceParams,
    pub camera: CameraConfig,
    pub surface_color: [f32; 4],
    pub axis_line_width: f32,
    /// Compose the pointer-drag rotation into the model transform.
    pub use_trackball: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceParams::default(),
            camera: CameraConfig::default(),
            surface_color: [0.1, 0.2, 0.7, 1.0],
            axis_line_width: 4.0,
            use_trackball: false,
        }
    }
}

impl SceneConfig {
    /// Parse a JSON document and validate the result.
    pub fn from_json(input: &str) -> Result<Self, SceneError> {
        let config: Self =
            serde_json::from_str(input).map_err(|e| SceneError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        self.surface.validate()?;
        validate_distance(self.camera.distance)?;
        if !(self.camera.aspect > 0.0) {
            return Err(SceneError::Config(format!(
                "aspect ratio must be positive, got {}",
                self.camera.aspect
            )));
        }
        if !(self.camera.near > 0.0 && self.camera.far > self.camera.near) {
            return Err(SceneError::Config(format!(
                "clip planes must satisfy 0 < near < far (near = {}, far = {})",
                self.camera.near, self.camera.far
            )));
        }
        if !(self.axis_line_width > 0.0) {
            return Err(SceneError::Config(format!(
                "axis line width must be positive, got {}",
                self.axis_line_width
            )));
        }
        Ok(())
    }
}

/// The field of view is `PI / distance`, so anything at or below 1 would
/// open it to a half turn or more.
pub(crate) fn validate_distance(distance: f64) -> Result<(), SceneError> {
    if distance.is_finite() && distance > 1.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidDistance(distance))
    }
}
