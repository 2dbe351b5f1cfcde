//! wgpu-facing half of alpha-grid: the grid-blend WGSL fragment shader and
//! the bindings and override constants a host needs to drive it.

pub mod interface;
pub mod shader;


pub use interface::{bind_group_layout_entries, pipeline_constants};
pub use shader::{shader_module_descriptor, FRAGMENT_ENTRY, GRID_BLEND_WGSL};
