//! CPU reference for the alpha-grid fragment shader: a checkerboard drawn
//! behind a texture, blended by the texture's alpha.

pub mod blend;
pub mod error;
pub mod grid;
pub mod shade;
pub mod style;
pub mod texture;

pub use blend::blend_over;
pub use error::{StyleError, TexelError};
pub use grid::{cell_flags, grid_color, parity};
pub use shade::GridBlend;
pub use style::GridStyle;
pub use texture::{from_rgba8, to_rgba8, AddressMode, Sample2d, SolidColor, TexelImage};

pub use glam::{BVec2, Vec2, Vec4};
