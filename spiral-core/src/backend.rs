/// The immediate-mode drawing surface the scene is submitted to.
///
/// The shader behind a backend mixes a texture sample with a flat color:
/// `mix(texture, color, coefficient)`. Untextured draws pin the texture
/// coordinate to `(0, 0)` and use [`BLEND_FLAT`].

use nalgebra::Matrix4;

/// Pure texture sample
pub const BLEND_TEXTURED: f32 = 0.0;
/// Pure flat color
pub const BLEND_FLAT: f32 = 1.0;

/// Primitive topology for a draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    Lines,
}

pub trait RenderBackend {
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Clear color and depth buffers
    fn clear(&mut self, color: [f32; 4]);

    fn set_transform(&mut self, matrix: &Matrix4<f32>);

    fn set_texture_unit(&mut self, unit: i32);

    fn set_color(&mut self, color: [f32; 4]);

    fn set_blend_coefficient(&mut self, coefficient: f32);

    /// Upload xyz positions and bind them to the vertex attribute
    fn upload_positions(&mut self, data: &[f32]);

    fn upload_indices(&mut self, data: &[u16]);

    /// Upload uv pairs and enable the texture-coordinate attribute
    fn enable_tex_coords(&mut self, data: &[f32]);

    /// Disable the texture-coordinate attribute, leaving it constant at `(0, 0)`
    fn disable_tex_coords(&mut self);

    fn set_line_width(&mut self, width: f32);

    /// Draw `count` indices from the bound index buffer
    fn draw_elements(&mut self, primitive: Primitive, count: usize);

    /// Draw `count` vertices from the bound position buffer
    fn draw_arrays(&mut self, primitive: Primitive, count: usize);
}
