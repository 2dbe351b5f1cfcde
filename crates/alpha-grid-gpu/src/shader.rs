/// Grid-blend fragment shader.
///
/// Expects the vertex stage to provide a texture coordinate at
/// `@location(0)`; the fragment position comes from `@builtin(position)`.
/// Writes one `vec4<f32>` to `@location(0)`. Tile size and gray levels are
/// `override` constants, see [`crate::interface::pipeline_constants`].
pub const GRID_BLEND_WGSL: &str = include_str!("../shaders/grid_blend.wgsl");

pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Descriptor for the host to create the shader module from.
pub fn shader_module_descriptor() -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some("grid_blend"),
        source: wgpu::ShaderSource::Wgsl(GRID_BLEND_WGSL.into()),
    }
}
