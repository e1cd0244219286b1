/// Geometry for the conical spiral surface and the axis markers
use nalgebra::{Point2, Point3};
use std::f64::consts::PI;

use crate::config::SurfaceParams;
use crate::error::SceneError;

/// Triangulated parametric surface, laid out for direct GPU upload
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    /// Flat xyz triples, row-major over (radial i, angular j)
    pub vertices: Vec<f32>,
    /// Flat uv pairs, one per vertex
    pub tex_coords: Vec<f32>,
    /// Two triangles per grid quad
    pub indices: Vec<u16>,
}

impl SurfaceMesh {
    /// Sample the conical spiral
    ///
    /// ```text
    /// x =  a·u·sin(u)·cos(v)
    /// y =  b·u·cos(u)·cos(v)
    /// z = -c·u·sin(v)
    /// ```
    ///
    /// with `u, v` spanning `[0, 2π]` in `resolution` steps each.
    pub fn conical_spiral(params: &SurfaceParams) -> Result<Self, SceneError> {
        params.validate()?;

        let n = params.resolution as usize;
        let side = n + 1;
        let nf = params.resolution as f64;

        let mut vertices = Vec::with_capacity(3 * side * side);
        let mut tex_coords = Vec::with_capacity(2 * side * side);

        for i in 0..=n {
            let l = i as f64 / nf;
            for j in 0..=n {
                let k = j as f64 / nf;
                let u = l * PI * 2.0;
                let v = k * PI * 2.0;

                let x = params.a * u * u.sin() * v.cos();
                let y = params.b * u * u.cos() * v.cos();
                let z = -params.c * u * v.sin();

                vertices.extend_from_slice(&[x as f32, y as f32, z as f32]);
                tex_coords.extend_from_slice(&[k as f32, l as f32]);
            }
        }

        let mesh = Self {
            vertices,
            tex_coords,
            indices: grid_indices(n),
        };

        tracing::debug!(
            resolution = n,
            vertices = mesh.vertex_count(),
            indices = mesh.indices.len(),
            "generated conical spiral mesh"
        );

        Ok(mesh)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn vertex(&self, index: usize) -> Option<Point3<f32>> {
        let v = self.vertices.get(3 * index..3 * index + 3)?;
        Some(Point3::new(v[0], v[1], v[2]))
    }

    pub fn tex_coord(&self, index: usize) -> Option<Point2<f32>> {
        let t = self.tex_coords.get(2 * index..2 * index + 2)?;
        Some(Point2::new(t[0], t[1]))
    }
}

/// Index list for an `n × n` quad grid with `n + 1` vertices per row.
fn grid_indices(n: usize) -> Vec<u16> {
    let side = n + 1;
    let mut indices = Vec::with_capacity(6 * n * n);

    for j in 0..n {
        for i in 0..n {
            let index1 = (j * side + i) as u16;
            let index2 = index1 + side as u16;
            indices.extend_from_slice(&[
                index1,
                index2,
                index1 + 1,
                index1 + 1,
                index2,
                index2 + 1,
            ]);
        }
    }

    indices
}

/// A flat-colored line segment through the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLine {
    pub vertices: [f32; 6],
    pub color: [f32; 4],
}

/// X, Y and Z markers, colored red, green and blue
pub fn axis_lines() -> [AxisLine; 3] {
    [
        AxisLine {
            vertices: [-2.0, 0.0, 0.0, 2.0, 0.0, 0.0],
            color: [1.0, 0.0, 0.0, 1.0],
        },
        AxisLine {
            vertices: [0.0, -2.0, 0.0, 0.0, 2.0, 0.0],
            color: [0.0, 1.0, 0.0, 1.0],
        },
        AxisLine {
            vertices: [0.0, 0.0, -2.0, 0.0, 0.0, 2.0],
            color: [0.0, 0.0, 1.0, 1.0],
        },
    ]
}
