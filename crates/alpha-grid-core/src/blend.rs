use glam::Vec4;

/// Blend `color` over `grid` using `color.w` as the weight.
///
/// All four channels are blended, alpha included. Written as the explicit
/// convex combination (not `grid + (color - grid) * a`) so a weight of 0 or 1
/// returns one input exactly.
pub fn blend_over(grid: Vec4, color: Vec4) -> Vec4 {
    let a = color.w;
    grid * (1.0 - a) + color * a
}
