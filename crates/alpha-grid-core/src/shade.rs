use glam::{Vec2, Vec4};

use crate::blend::blend_over;
use crate::grid::grid_color;
use crate::style::GridStyle;
use crate::texture::Sample2d;

/// CPU version of the grid-blend fragment shader.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridBlend {
    pub style: GridStyle,
}

impl GridBlend {
    pub fn new(style: GridStyle) -> Self {
        Self { style }
    }

    /// Shade one fragment: sample, pick the tile color, blend by alpha.
    pub fn shade<S: Sample2d + ?Sized>(&self, texture: &S, uv: Vec2, frag_pos: Vec2) -> Vec4 {
        let color = texture.sample(uv);
        blend_over(grid_color(&self.style, frag_pos), color)
    }

    /// Shade every pixel of a `width`×`height` target, row-major.
    ///
    /// Fragments sit at pixel centers and the texture is stretched over the
    /// whole target, which is what a rasterizer drawing one covering
    /// primitive with uv (0,0) at the top-left produces.
    pub fn render<S: Sample2d + ?Sized>(&self, texture: &S, width: u32, height: u32) -> Vec<Vec4> {
        let size = Vec2::new(width as f32, height as f32);
        let mut out = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let frag_pos = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                out.push(self.shade(texture, frag_pos / size, frag_pos));
            }
        }
        out
    }
}
