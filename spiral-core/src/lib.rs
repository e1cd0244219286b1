/// Spiral Core Library - geometry, transforms and frame composition
///
/// This library holds the backend-agnostic part of the conical spiral
/// viewer: the parametric mesh, the orientation rotation, the camera, and
/// the ordered draw submissions issued against a `RenderBackend`.

pub mod backend;
pub mod config;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod scene;
pub mod target;
pub mod trackball;
pub mod transform;
pub mod viewer;

// Re-export commonly used types
pub use backend::{Primitive, RenderBackend, BLEND_FLAT, BLEND_TEXTURED};
pub use config::{CameraConfig, SceneConfig, SurfaceParams};
pub use error::SceneError;
pub use geometry::{axis_lines, AxisLine, SurfaceMesh};
pub use projection::Camera;
pub use scene::{Frame, RenderMode, Scene};
pub use target::RenderTarget;
pub use trackball::Trackball;
pub use transform::{OrientationState, Transform};
pub use viewer::{TextureStatus, Viewer, PLACEHOLDER_PIXEL};
