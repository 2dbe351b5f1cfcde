use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::error::StyleError;

pub const DEFAULT_CELL_SIZE: f32 = 12.0;
pub const DEFAULT_LIGHT_LEVEL: f32 = 0.9;
pub const DEFAULT_DARK_LEVEL: f32 = 0.5;

// ---------------------------------------------------------------------------
// GridStyle
// ---------------------------------------------------------------------------

/// Tile size and the two gray levels of the transparency checkerboard.
///
/// A level is splatted over all four channels, alpha included, so the default
/// tiles are `(0.9, 0.9, 0.9, 0.9)` and `(0.5, 0.5, 0.5, 0.5)`.
///
/// Loaded from TOML; any missing key keeps its default:
///
/// ```toml
/// cell_size = 12.0
/// light = 0.9
/// dark = 0.5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    /// Edge length of one tile, in pixels.
    pub cell_size: f32,
    /// Level used where exactly one of the x/y cell flags is set.
    pub light: f32,
    /// Level used everywhere else.
    pub dark: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            light: DEFAULT_LIGHT_LEVEL,
            dark: DEFAULT_DARK_LEVEL,
        }
    }
}

impl GridStyle {
    /// Parse and validate a style from TOML text.
    pub fn from_toml_str(src: &str) -> Result<Self, StyleError> {
        let style: GridStyle = toml::from_str(src)?;
        style.validate()?;
        log::debug!(
            "grid style loaded: cell_size={} light={} dark={}",
            style.cell_size,
            style.light,
            style.dark
        );
        Ok(style)
    }

    pub fn to_toml_string(&self) -> Result<String, StyleError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(StyleError::InvalidCellSize(self.cell_size));
        }
        for (name, value) in [("light", self.light), ("dark", self.dark)] {
            if !value.is_finite() {
                return Err(StyleError::InvalidLevel { name, value });
            }
        }
        Ok(())
    }

    /// Distance after which the pattern repeats on either axis.
    pub fn period(&self) -> f32 {
        2.0 * self.cell_size
    }

    pub fn light_color(&self) -> Vec4 {
        Vec4::splat(self.light)
    }

    pub fn dark_color(&self) -> Vec4 {
        Vec4::splat(self.dark)
    }
}
