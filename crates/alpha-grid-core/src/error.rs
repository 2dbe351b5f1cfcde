use thiserror::Error;

/// Errors while loading or validating a [`GridStyle`](crate::GridStyle).
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to parse grid style: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize grid style: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("cell_size must be a finite, positive pixel count, got {0}")]
    InvalidCellSize(f32),

    #[error("{name} level must be finite, got {value}")]
    InvalidLevel { name: &'static str, value: f32 },
}

/// Errors while building a [`TexelImage`](crate::TexelImage).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TexelError {
    #[error("texel image must be at least 1x1, got {width}x{height}")]
    Empty { width: u32, height: u32 },

    #[error("{width}x{height} image needs {expected} texels, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
