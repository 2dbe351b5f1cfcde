use glam::{BVec2, Vec2, Vec4};

use crate::style::GridStyle;

/// Per-axis "first half of the period" flags for a fragment position.
///
/// Uses the floored modulo, so negative coordinates continue the pattern
/// instead of mirroring it around zero.
pub fn cell_flags(style: &GridStyle, frag_pos: Vec2) -> BVec2 {
    let period = style.period();
    BVec2::new(
        frag_pos.x.rem_euclid(period) < style.cell_size,
        frag_pos.y.rem_euclid(period) < style.cell_size,
    )
}

/// True when exactly one axis flag is set.
pub fn parity(style: &GridStyle, frag_pos: Vec2) -> bool {
    let flags = cell_flags(style, frag_pos);
    flags.x != flags.y
}

/// Tile color under `frag_pos`: light on odd parity, dark otherwise.
pub fn grid_color(style: &GridStyle, frag_pos: Vec2) -> Vec4 {
    if parity(style, frag_pos) {
        style.light_color()
    } else {
        style.dark_color()
    }
}
