use std::collections::HashMap;

use alpha_grid_core::GridStyle;

// binding 0 : image texture (filterable float, 2D)
// binding 1 : filtering sampler
pub const IMAGE_BINDING: u32 = 0;
pub const SAMPLER_BINDING: u32 = 1;

pub const CELL_SIZE_CONSTANT: &str = "cell_size";
pub const LIGHT_LEVEL_CONSTANT: &str = "light_level";
pub const DARK_LEVEL_CONSTANT: &str = "dark_level";

/// Bind group 0 layout the shader expects the host to bind.
pub fn bind_group_layout_entries() -> [wgpu::BindGroupLayoutEntry; 2] {
    [
        wgpu::BindGroupLayoutEntry {
            binding: IMAGE_BINDING,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        },
        wgpu::BindGroupLayoutEntry {
            binding: SAMPLER_BINDING,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        },
    ]
}

/// Override values for `PipelineCompilationOptions::constants`.
///
/// Leaving the map empty compiles the shader with the default style.
pub fn pipeline_constants(style: &GridStyle) -> HashMap<String, f64> {
    log::debug!(
        "grid-blend constants: cell_size={} light={} dark={}",
        style.cell_size,
        style.light,
        style.dark
    );
    HashMap::from([
        (CELL_SIZE_CONSTANT.to_string(), f64::from(style.cell_size)),
        (LIGHT_LEVEL_CONSTANT.to_string(), f64::from(style.light)),
        (DARK_LEVEL_CONSTANT.to_string(), f64::from(style.dark)),
    ])
}
