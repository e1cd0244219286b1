/// GLSL ES 1.0 sources for the single program used by the viewer.
///
/// The fragment stage mixes the texture sample with the flat color:
/// a coefficient of 0 shows the texture, 1 shows the color.

pub const A_POSITION: &str = "a_position";
pub const A_TEX_COORD: &str = "a_tex_coord";
pub const U_MVP: &str = "u_model_view_projection";
pub const U_COLOR: &str = "u_color";
pub const U_BLEND: &str = "u_color_blend";
pub const U_TEXTURE: &str = "u_texture";

pub const VERTEX_SHADER: &str = r#"
attribute vec3 a_position;
attribute vec2 a_tex_coord;
uniform mat4 u_model_view_projection;
varying vec2 v_tex_coord;

void main() {
    v_tex_coord = a_tex_coord;
    gl_Position = u_model_view_projection * vec4(a_position, 1.0);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"
#ifdef GL_FRAGMENT_PRECISION_HIGH
precision highp float;
#else
precision mediump float;
#endif

uniform vec4 u_color;
uniform float u_color_blend;
uniform sampler2D u_texture;
varying vec2 v_tex_coord;

void main() {
    vec4 sampled = texture2D(u_texture, v_tex_coord);
    gl_FragColor = mix(sampled, u_color, u_color_blend);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_declare_every_input() {
        for name in [A_POSITION, A_TEX_COORD, U_MVP] {
            assert!(VERTEX_SHADER.contains(name), "{name}");
        }
        for name in [U_COLOR, U_BLEND, U_TEXTURE] {
            assert!(FRAGMENT_SHADER.contains(name), "{name}");
        }
    }
}
