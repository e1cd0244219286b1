/// WebGL 1 implementation of the core render backend
use js_sys::{Float32Array, Uint16Array};
use nalgebra::Matrix4;
use spiral_core::{Primitive, RenderBackend};
use web_sys::{
    WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader, WebGlUniformLocation,
};

use crate::error::ViewerError;
use crate::shaders;

pub struct WebGlBackend {
    gl: GL,
    position_attrib: u32,
    tex_coord_attrib: u32,
    mvp_uniform: WebGlUniformLocation,
    color_uniform: WebGlUniformLocation,
    blend_uniform: WebGlUniformLocation,
    texture_uniform: WebGlUniformLocation,
    position_buffer: WebGlBuffer,
    index_buffer: WebGlBuffer,
    tex_coord_buffer: WebGlBuffer,
}

impl WebGlBackend {
    /// Compile and link the viewer program, look up its inputs and
    /// allocate the stream buffers.
    pub fn new(gl: GL) -> Result<Self, ViewerError> {
        let program = link_program(&gl, shaders::VERTEX_SHADER, shaders::FRAGMENT_SHADER)?;
        gl.use_program(Some(&program));

        let backend = Self {
            position_attrib: attrib_location(&gl, &program, shaders::A_POSITION)?,
            tex_coord_attrib: attrib_location(&gl, &program, shaders::A_TEX_COORD)?,
            mvp_uniform: uniform_location(&gl, &program, shaders::U_MVP)?,
            color_uniform: uniform_location(&gl, &program, shaders::U_COLOR)?,
            blend_uniform: uniform_location(&gl, &program, shaders::U_BLEND)?,
            texture_uniform: uniform_location(&gl, &program, shaders::U_TEXTURE)?,
            position_buffer: create_buffer(&gl)?,
            index_buffer: create_buffer(&gl)?,
            tex_coord_buffer: create_buffer(&gl)?,
            gl,
        };

        backend.gl.enable(GL::DEPTH_TEST);
        tracing::info!("webgl program ready");
        Ok(backend)
    }

    pub fn context(&self) -> &GL {
        &self.gl
    }

    fn upload_floats(&self, buffer: &WebGlBuffer, attrib: u32, size: i32, data: &[f32]) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
        self.gl.buffer_data_with_array_buffer_view(
            GL::ARRAY_BUFFER,
            &Float32Array::from(data),
            GL::STREAM_DRAW,
        );
        self.gl
            .vertex_attrib_pointer_with_i32(attrib, size, GL::FLOAT, false, 0, 0);
        self.gl.enable_vertex_attrib_array(attrib);
    }
}

impl RenderBackend for WebGlBackend {
    fn set_viewport(&mut self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.gl.clear_color(color[0], color[1], color[2], color[3]);
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn set_transform(&mut self, matrix: &Matrix4<f32>) {
        self.gl
            .uniform_matrix4fv_with_f32_array(Some(&self.mvp_uniform), false, matrix.as_slice());
    }

    fn set_texture_unit(&mut self, unit: i32) {
        self.gl.uniform1i(Some(&self.texture_uniform), unit);
    }

    fn set_color(&mut self, color: [f32; 4]) {
        self.gl
            .uniform4fv_with_f32_array(Some(&self.color_uniform), &color);
    }

    fn set_blend_coefficient(&mut self, coefficient: f32) {
        self.gl.uniform1f(Some(&self.blend_uniform), coefficient);
    }

    fn upload_positions(&mut self, data: &[f32]) {
        self.upload_floats(&self.position_buffer, self.position_attrib, 3, data);
    }

    fn upload_indices(&mut self, data: &[u16]) {
        self.gl
            .bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&self.index_buffer));
        self.gl.buffer_data_with_array_buffer_view(
            GL::ELEMENT_ARRAY_BUFFER,
            &Uint16Array::from(data),
            GL::STREAM_DRAW,
        );
    }

    fn enable_tex_coords(&mut self, data: &[f32]) {
        self.upload_floats(&self.tex_coord_buffer, self.tex_coord_attrib, 2, data);
    }

    fn disable_tex_coords(&mut self) {
        self.gl.disable_vertex_attrib_array(self.tex_coord_attrib);
        self.gl.vertex_attrib2f(self.tex_coord_attrib, 0.0, 0.0);
    }

    fn set_line_width(&mut self, width: f32) {
        self.gl.line_width(width);
    }

    fn draw_elements(&mut self, primitive: Primitive, count: usize) {
        self.gl
            .draw_elements_with_i32(mode(primitive), count as i32, GL::UNSIGNED_SHORT, 0);
    }

    fn draw_arrays(&mut self, primitive: Primitive, count: usize) {
        self.gl.draw_arrays(mode(primitive), 0, count as i32);
    }
}

fn mode(primitive: Primitive) -> u32 {
    match primitive {
        Primitive::Triangles => GL::TRIANGLES,
        Primitive::Lines => GL::LINES,
    }
}

fn compile_shader(
    gl: &GL,
    stage: &'static str,
    kind: u32,
    src: &str,
) -> Result<WebGlShader, ViewerError> {
    let shader = gl
        .create_shader(kind)
        .ok_or(ViewerError::ResourceCreation("shader"))?;
    gl.shader_source(&shader, src);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        Err(ViewerError::ShaderCompile {
            stage,
            log: gl.get_shader_info_log(&shader).unwrap_or_default(),
        })
    }
}

fn link_program(gl: &GL, vert_src: &str, frag_src: &str) -> Result<WebGlProgram, ViewerError> {
    let vert = compile_shader(gl, "vertex", GL::VERTEX_SHADER, vert_src)?;
    let frag = compile_shader(gl, "fragment", GL::FRAGMENT_SHADER, frag_src)?;

    let program = gl
        .create_program()
        .ok_or(ViewerError::ResourceCreation("program"))?;
    gl.attach_shader(&program, &vert);
    gl.attach_shader(&program, &frag);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        Err(ViewerError::ProgramLink(
            gl.get_program_info_log(&program).unwrap_or_default(),
        ))
    }
}

fn attrib_location(
    gl: &GL,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<u32, ViewerError> {
    u32::try_from(gl.get_attrib_location(program, name))
        .map_err(|_| ViewerError::ShaderInput(name))
}

fn uniform_location(
    gl: &GL,
    program: &WebGlProgram,
    name: &'static str,
) -> Result<WebGlUniformLocation, ViewerError> {
    gl.get_uniform_location(program, name)
        .ok_or(ViewerError::ShaderInput(name))
}

fn create_buffer(gl: &GL) -> Result<WebGlBuffer, ViewerError> {
    gl.create_buffer()
        .ok_or(ViewerError::ResourceCreation("buffer"))
}
