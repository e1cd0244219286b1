/// Virtual-sphere rotation driven by pointer drags
use nalgebra::{Matrix4, UnitQuaternion, Vector3};

/// Accumulates a rotation from drag gestures.
///
/// Pointer positions are expected in normalised device coordinates,
/// `[-1, 1]` on both axes with +y pointing up.
#[derive(Debug, Clone)]
pub struct Trackball {
    rotation: UnitQuaternion<f32>,
    anchor: Option<Vector3<f32>>,
}

impl Trackball {
    pub fn new() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            anchor: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.anchor = Some(project_to_sphere(x, y));
    }

    /// Rotate by the arc between the previous and current pointer position.
    /// Returns `false` when no drag is in progress or the pointer did not move.
    pub fn drag(&mut self, x: f32, y: f32) -> bool {
        let Some(from) = self.anchor else {
            return false;
        };
        let to = project_to_sphere(x, y);
        self.anchor = Some(to);

        match UnitQuaternion::rotation_between(&from, &to) {
            Some(delta) if delta.angle() > f32::EPSILON => {
                self.rotation = delta * self.rotation;
                true
            }
            _ => false,
        }
    }

    pub fn end(&mut self) {
        self.anchor = None;
    }

    pub fn reset(&mut self) {
        self.rotation = UnitQuaternion::identity();
        self.anchor = None;
    }

    pub fn rotation(&self) -> Matrix4<f32> {
        self.rotation.to_homogeneous()
    }
}

impl Default for Trackball {
    fn default() -> Self {
        Self::new()
    }
}

fn project_to_sphere(x: f32, y: f32) -> Vector3<f32> {
    let d2 = x * x + y * y;
    if d2 <= 1.0 {
        Vector3::new(x, y, (1.0 - d2).sqrt())
    } else {
        Vector3::new(x, y, 0.0).normalize()
    }
}
