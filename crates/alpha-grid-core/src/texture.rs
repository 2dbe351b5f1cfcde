use glam::{Vec2, Vec4};

use crate::error::TexelError;

// ---------------------------------------------------------------------------
// Sample2d — the texture-sampling seam
// ---------------------------------------------------------------------------

/// Something that returns a color for a normalized texture coordinate.
///
/// Filtering and wrap behavior belong to the implementor, the same way a GPU
/// sampler owns them. `Sync` so a host can shade rows from several threads.
pub trait Sample2d: Sync {
    fn sample(&self, uv: Vec2) -> Vec4;
}

impl<F> Sample2d for F
where
    F: Fn(Vec2) -> Vec4 + Sync,
{
    fn sample(&self, uv: Vec2) -> Vec4 {
        self(uv)
    }
}

/// The same color for every coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor(pub Vec4);

impl Sample2d for SolidColor {
    fn sample(&self, _uv: Vec2) -> Vec4 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// TexelImage
// ---------------------------------------------------------------------------

/// How out-of-range texel indices are folded back into the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressMode {
    #[default]
    ClampToEdge,
    Repeat,
    MirrorRepeat,
}

impl AddressMode {
    fn resolve(self, i: i64, n: u32) -> u32 {
        let n = i64::from(n);
        let folded = match self {
            AddressMode::ClampToEdge => i.clamp(0, n - 1),
            AddressMode::Repeat => i.rem_euclid(n),
            AddressMode::MirrorRepeat => {
                let m = i.rem_euclid(2 * n);
                if m < n {
                    m
                } else {
                    2 * n - 1 - m
                }
            }
        };
        folded as u32
    }
}

/// Row-major RGBA float image sampled with nearest filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct TexelImage {
    width: u32,
    height: u32,
    texels: Vec<Vec4>,
    address_mode: AddressMode,
}

impl TexelImage {
    pub fn new(width: u32, height: u32, texels: Vec<Vec4>) -> Result<Self, TexelError> {
        if width == 0 || height == 0 {
            return Err(TexelError::Empty { width, height });
        }
        let expected = width as usize * height as usize;
        if texels.len() != expected {
            return Err(TexelError::SizeMismatch {
                width,
                height,
                expected,
                actual: texels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            texels,
            address_mode: AddressMode::default(),
        })
    }

    /// Decode 8-bit unorm RGBA texels.
    pub fn from_rgba8(width: u32, height: u32, texels: &[[u8; 4]]) -> Result<Self, TexelError> {
        Self::new(width, height, texels.iter().copied().map(from_rgba8).collect())
    }

    pub fn with_address_mode(mut self, address_mode: AddressMode) -> Self {
        self.address_mode = address_mode;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn address_mode(&self) -> AddressMode {
        self.address_mode
    }

    /// Texel at integer coordinates, folded by the address mode.
    pub fn texel(&self, x: i64, y: i64) -> Vec4 {
        let x = self.address_mode.resolve(x, self.width);
        let y = self.address_mode.resolve(y, self.height);
        self.texels[y as usize * self.width as usize + x as usize]
    }
}

impl Sample2d for TexelImage {
    fn sample(&self, uv: Vec2) -> Vec4 {
        let x = (uv.x * self.width as f32).floor() as i64;
        let y = (uv.y * self.height as f32).floor() as i64;
        self.texel(x, y)
    }
}

// ---------------------------------------------------------------------------
// 8-bit unorm conversion
// ---------------------------------------------------------------------------

pub fn from_rgba8(texel: [u8; 4]) -> Vec4 {
    Vec4::new(
        texel[0] as f32,
        texel[1] as f32,
        texel[2] as f32,
        texel[3] as f32,
    ) / 255.0
}

/// Clamp to [0, 1] and round to the nearest 8-bit step.
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    let c = (color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}
