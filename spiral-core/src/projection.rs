/// Camera and projection utilities
use nalgebra::Matrix4;

use crate::config::{validate_distance, CameraConfig};
use crate::error::SceneError;
use crate::transform::Transform;

/// Perspective camera looking down -Z at a model pushed away from the eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Zoom-like parameter; larger values narrow the field of view.
    pub distance: f64,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub model_offset_z: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            distance: config.distance,
            aspect: config.aspect,
            near: config.near,
            far: config.far,
            model_offset_z: config.model_offset_z,
        }
    }

    /// Change the zoom distance, rejecting values that would make the
    /// field of view non-finite.
    pub fn set_distance(&mut self, distance: f64) -> Result<(), SceneError> {
        validate_distance(distance)?;
        self.distance = distance;
        Ok(())
    }

    /// Vertical field of view in radians
    pub fn fov(&self) -> f32 {
        (std::f64::consts::PI / self.distance) as f32
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov(), self.near, self.far)
    }

    /// Translation that places the model in front of the camera
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Transform::translation_matrix(0.0, 0.0, self.model_offset_z)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
