//! Shader sources for 3D visualization

/// Point sprites: one instance per point, six vertices per instance
///
/// Each instance is expanded in clip space into a square of `point_size`
/// pixels, so points keep a constant on-screen size at every zoom level.
pub const POINT_SPRITE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    viewport: vec2<f32>,
    point_size: f32,
    _padding: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct PointInstance {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32, point: PointInstance) -> VertexOutput {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, 1.0),
    );
    let corner = corners[vertex_index];

    let center = uniforms.view_proj * vec4<f32>(point.position, 1.0);
    let offset = corner * uniforms.point_size / uniforms.viewport * center.w;

    var out: VertexOutput;
    out.clip_position = vec4<f32>(center.xy + offset, center.zw);
    out.color = point.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color, 1.0);
}
"#;

/// Vertices emitted per point sprite (two triangles)
pub const SPRITE_VERTEX_COUNT: u32 = 6;
