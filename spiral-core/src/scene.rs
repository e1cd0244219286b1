/// Frame composition: transforms plus the ordered draw submissions
use nalgebra::Matrix4;

use crate::backend::{Primitive, RenderBackend, BLEND_FLAT, BLEND_TEXTURED};
use crate::config::{SceneConfig, SurfaceParams};
use crate::error::SceneError;
use crate::geometry::{axis_lines, SurfaceMesh};
use crate::projection::Camera;
use crate::target::RenderTarget;
use crate::transform::{OrientationState, Transform};

const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const DEFAULT_LINE_WIDTH: f32 = 1.0;

/// How the surface is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Filled, textured triangles
    #[default]
    Surface,
    /// Untextured wireframe lines
    Frame,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Surface => RenderMode::Frame,
            RenderMode::Frame => RenderMode::Surface,
        }
    }

    pub fn is_frame(self) -> bool {
        self == RenderMode::Frame
    }
}

/// Everything that varies between frames
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub target: RenderTarget,
    pub camera: Camera,
    pub orientation: OrientationState,
    pub mode: RenderMode,
    /// Extra pointer-driven rotation applied after the orientation
    pub trackball: Option<Matrix4<f32>>,
}

/// Draws the spiral and its axis markers
#[derive(Debug, Clone)]
pub struct Scene {
    surface: SurfaceParams,
    surface_color: [f32; 4],
    axis_line_width: f32,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            surface: config.surface,
            surface_color: config.surface_color,
            axis_line_width: config.axis_line_width,
        }
    }

    /// projection · translation · rotation
    pub fn model_view_projection(frame: &Frame) -> Matrix4<f32> {
        let mut rotation = frame.orientation.rotation_matrix();
        if let Some(trackball) = frame.trackball {
            rotation *= trackball;
        }
        Transform::mvp_matrix(
            &rotation,
            &frame.camera.view_matrix(),
            &frame.camera.projection_matrix(),
        )
    }

    /// Issue a full redraw. The mesh is regenerated on every call.
    pub fn draw_frame<B: RenderBackend>(
        &self,
        frame: &Frame,
        backend: &mut B,
    ) -> Result<(), SceneError> {
        let mesh = SurfaceMesh::conical_spiral(&self.surface)?;

        backend.set_viewport(frame.target.width, frame.target.height);
        backend.clear(CLEAR_COLOR);

        backend.set_transform(&Self::model_view_projection(frame));
        backend.set_texture_unit(0);

        self.draw_surface(&mesh, frame.mode, backend);
        self.draw_axes(backend);

        Ok(())
    }

    fn draw_surface<B: RenderBackend>(
        &self,
        mesh: &SurfaceMesh,
        mode: RenderMode,
        backend: &mut B,
    ) {
        backend.set_color(self.surface_color);
        backend.set_blend_coefficient(BLEND_TEXTURED);

        backend.upload_positions(&mesh.vertices);
        backend.upload_indices(&mesh.indices);

        match mode {
            RenderMode::Frame => {
                backend.disable_tex_coords();
                backend.set_blend_coefficient(BLEND_FLAT);
                backend.draw_elements(Primitive::Lines, mesh.indices.len());
            }
            RenderMode::Surface => {
                backend.enable_tex_coords(&mesh.tex_coords);
                backend.draw_elements(Primitive::Triangles, mesh.indices.len());
            }
        }
    }

    fn draw_axes<B: RenderBackend>(&self, backend: &mut B) {
        backend.set_line_width(self.axis_line_width);
        for axis in axis_lines() {
            backend.set_color(axis.color);
            backend.upload_positions(&axis.vertices);
            backend.disable_tex_coords();
            backend.set_blend_coefficient(BLEND_FLAT);
            backend.draw_arrays(Primitive::Lines, axis.vertices.len() / 3);
        }
        backend.set_line_width(DEFAULT_LINE_WIDTH);
    }
}
