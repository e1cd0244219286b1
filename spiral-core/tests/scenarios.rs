use nalgebra::Matrix4;
use spiral_core::{
    OrientationState, Primitive, RenderBackend, RenderMode, RenderTarget, SceneConfig,
    SurfaceMesh, SurfaceParams, Viewer, BLEND_FLAT, BLEND_TEXTURED,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Viewport(u32, u32),
    Clear([f32; 4]),
    Transform(Vec<f32>),
    TextureUnit(i32),
    Color([f32; 4]),
    Blend(f32),
    Positions(usize),
    Indices(usize),
    TexCoords(usize),
    NoTexCoords,
    LineWidth(f32),
    DrawElements(Primitive, usize),
    DrawArrays(Primitive, usize),
}

#[derive(Default)]
struct RecordingBackend {
    calls: Vec<Call>,
}

impl RenderBackend for RecordingBackend {
    fn set_viewport(&mut self, width: u32, height: u32) {
        self.calls.push(Call::Viewport(width, height));
    }
    fn clear(&mut self, color: [f32; 4]) {
        self.calls.push(Call::Clear(color));
    }
    fn set_transform(&mut self, matrix: &Matrix4<f32>) {
        self.calls.push(Call::Transform(matrix.as_slice().to_vec()));
    }
    fn set_texture_unit(&mut self, unit: i32) {
        self.calls.push(Call::TextureUnit(unit));
    }
    fn set_color(&mut self, color: [f32; 4]) {
        self.calls.push(Call::Color(color));
    }
    fn set_blend_coefficient(&mut self, coefficient: f32) {
        self.calls.push(Call::Blend(coefficient));
    }
    fn upload_positions(&mut self, data: &[f32]) {
        self.calls.push(Call::Positions(data.len()));
    }
    fn upload_indices(&mut self, data: &[u16]) {
        self.calls.push(Call::Indices(data.len()));
    }
    fn enable_tex_coords(&mut self, data: &[f32]) {
        self.calls.push(Call::TexCoords(data.len()));
    }
    fn disable_tex_coords(&mut self) {
        self.calls.push(Call::NoTexCoords);
    }
    fn set_line_width(&mut self, width: f32) {
        self.calls.push(Call::LineWidth(width));
    }
    fn draw_elements(&mut self, primitive: Primitive, count: usize) {
        self.calls.push(Call::DrawElements(primitive, count));
    }
    fn draw_arrays(&mut self, primitive: Primitive, count: usize) {
        self.calls.push(Call::DrawArrays(primitive, count));
    }
}

fn small_viewer(resolution: u32) -> Viewer {
    let mut config = SceneConfig::default();
    config.surface.resolution = resolution;
    Viewer::new(&config).unwrap()
}

fn render(viewer: &mut Viewer) -> Vec<Call> {
    let mut backend = RecordingBackend::default();
    viewer.render(&mut backend).unwrap();
    backend.calls
}

#[test]
fn origin_vertex_of_unit_spiral_is_zero() {
    let params = SurfaceParams::new(1.0, 1.0, 1.0, 2);
    let mesh = SurfaceMesh::conical_spiral(&params).unwrap();
    assert_eq!(&mesh.vertices[..3], &[0.0, 0.0, 0.0]);
}

#[test]
fn zero_angles_give_identity_rotation() {
    let r = OrientationState::new(0.0, 0.0, 0.0).rotation_array();
    for row in 0..4 {
        for col in 0..4 {
            let want = if row == col { 1.0 } else { 0.0 };
            assert_eq!(r[4 * row + col], want);
        }
    }
}

#[test]
fn resize_then_resize_again_is_noop() {
    let mut target = RenderTarget::new(300, 150);
    assert!(target.resize_to_display(100.0, 100.0, 2.0).unwrap());
    assert_eq!((target.width, target.height), (200, 200));
    assert!(!target.resize_to_display(100.0, 100.0, 2.0).unwrap());
    assert_eq!((target.width, target.height), (200, 200));
}

#[test]
fn single_quad_index_list() {
    let params = SurfaceParams::new(0.2, 0.2, 0.2, 1);
    let mesh = SurfaceMesh::conical_spiral(&params).unwrap();
    assert_eq!(mesh.indices, vec![0, 2, 1, 1, 2, 3]);
}

#[test]
fn surface_frame_draw_sequence() {
    let mut viewer = small_viewer(4);
    viewer.resize_target(320.0, 240.0, 1.0).unwrap();
    let calls = render(&mut viewer);

    let vertex_floats = 3 * 25;
    let index_count = 6 * 16;
    assert_eq!(calls[0], Call::Viewport(320, 240));
    assert_eq!(calls[1], Call::Clear([0.0, 0.0, 0.0, 1.0]));
    assert!(matches!(calls[2], Call::Transform(_)));
    assert_eq!(calls[3], Call::TextureUnit(0));
    assert_eq!(
        &calls[4..10],
        &[
            Call::Color([0.1, 0.2, 0.7, 1.0]),
            Call::Blend(BLEND_TEXTURED),
            Call::Positions(vertex_floats),
            Call::Indices(index_count),
            Call::TexCoords(2 * 25),
            Call::DrawElements(Primitive::Triangles, index_count),
        ]
    );
    assert_eq!(calls[10], Call::LineWidth(4.0));
    assert_eq!(calls.last(), Some(&Call::LineWidth(1.0)));
}

#[test]
fn wireframe_draws_lines_without_texture() {
    let mut viewer = small_viewer(3);
    viewer.toggle_mode();
    let calls = render(&mut viewer);

    let index_count = 6 * 9;
    assert_eq!(
        &calls[7..11],
        &[
            Call::Indices(index_count),
            Call::NoTexCoords,
            Call::Blend(BLEND_FLAT),
            Call::DrawElements(Primitive::Lines, index_count),
        ]
    );
    assert!(!calls.iter().any(|c| matches!(c, Call::TexCoords(_))));
}

#[test]
fn axis_markers_are_flat_red_green_blue() {
    let mut viewer = small_viewer(2);
    let calls = render(&mut viewer);

    let axes: Vec<&[Call]> = calls.split(|c| matches!(c, Call::DrawArrays(..))).collect();
    // three axis draws split the sequence into four pieces
    assert_eq!(axes.len(), 4);

    let colors: Vec<[f32; 4]> = calls
        .iter()
        .skip_while(|c| !matches!(c, Call::LineWidth(_)))
        .filter_map(|c| match c {
            Call::Color(color) => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(
        colors,
        vec![[1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]]
    );

    let draws: Vec<&Call> = calls
        .iter()
        .filter(|c| matches!(c, Call::DrawArrays(..)))
        .collect();
    assert!(draws
        .iter()
        .all(|c| **c == Call::DrawArrays(Primitive::Lines, 2)));

    for piece in &axes[..3] {
        assert!(piece.contains(&Call::NoTexCoords));
        assert!(piece.contains(&Call::Blend(BLEND_FLAT)));
    }
}

#[test]
fn redraw_with_unchanged_state_is_identical() {
    let mut viewer = small_viewer(8);
    viewer.set_orientation(OrientationState::new(15.0, -30.0, 45.0));
    let first = render(&mut viewer);
    let second = render(&mut viewer);
    assert_eq!(first, second);
    assert_eq!(viewer.frames_drawn(), 2);
}

#[test]
fn toggling_twice_restores_draw_path() {
    let mut viewer = small_viewer(5);
    let before = render(&mut viewer);
    assert_eq!(viewer.toggle_mode(), RenderMode::Frame);
    let wire = render(&mut viewer);
    assert_eq!(viewer.toggle_mode(), RenderMode::Surface);
    let after = render(&mut viewer);
    assert_ne!(before, wire);
    assert_eq!(before, after);
}

#[test]
fn orientation_changes_transform_only() {
    let mut viewer = small_viewer(4);
    let rest = render(&mut viewer);
    viewer.set_orientation(OrientationState::from_sensor(Some(90.0), None, None));
    let turned = render(&mut viewer);

    assert_ne!(rest[2], turned[2]);
    assert_eq!(&rest[3..], &turned[3..]);
}

#[test]
fn zoom_narrows_projection() {
    let mut viewer = small_viewer(4);
    let wide = render(&mut viewer);
    viewer.set_distance(14.0).unwrap();
    let narrow = render(&mut viewer);
    assert_ne!(wide[2], narrow[2]);
}
