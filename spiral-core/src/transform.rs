/// Device orientation state and the matrices built from it
use nalgebra::{Matrix4, Vector3};

const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Device orientation angles (in degrees)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationState {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl OrientationState {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Build from sensor readings; missing or non-finite angles count as zero.
    pub fn from_sensor(alpha: Option<f64>, beta: Option<f64>, gamma: Option<f64>) -> Self {
        Self {
            alpha: reading(alpha),
            beta: reading(beta),
            gamma: reading(gamma),
        }
    }

    /// Rotation coefficients, row-major (`R[i][j]` at `4 * i + j`).
    ///
    /// This is a fixed composition of the three angles, not one of the
    /// canonical Euler orders; beta drives x, gamma drives y, alpha drives z.
    pub fn rotation_array(&self) -> [f32; 16] {
        let (x2, x1) = (self.beta * DEG_TO_RAD).sin_cos();
        let (y2, y1) = (self.gamma * DEG_TO_RAD).sin_cos();
        let (z2, z1) = (self.alpha * DEG_TO_RAD).sin_cos();

        let m11 = z1 * y1 - z2 * x2 * y2;
        let m12 = -x1 * z2;
        let m13 = y1 * z2 * x2 + z1 * y2;

        let m21 = y1 * z2 + z1 * x2 * y2;
        let m22 = z1 * x1;
        let m23 = z2 * y2 - z1 * y1 * x2;

        let m31 = -x1 * y2;
        let m32 = x2;
        let m33 = x1 * y1;

        #[rustfmt::skip]
        let coefficients = [
            m11 as f32, m12 as f32, m13 as f32, 0.0,
            m21 as f32, m22 as f32, m23 as f32, 0.0,
            m31 as f32, m32 as f32, m33 as f32, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        coefficients
    }

    /// The rotation as seen by the GPU.
    ///
    /// Uniform matrices are read column-major, so the row-major coefficient
    /// array lands transposed; this returns exactly that matrix.
    pub fn rotation_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_column_slice(&self.rotation_array())
    }
}

fn reading(angle: Option<f64>) -> f64 {
    angle.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a translation matrix
    pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Create a model-view-projection matrix
    pub fn mvp_matrix(
        model: &Matrix4<f32>,
        view: &Matrix4<f32>,
        projection: &Matrix4<f32>,
    ) -> Matrix4<f32> {
        projection * view * model
    }
}
