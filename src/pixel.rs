/// Pixel memory layout of a decoded BMP.
///
/// Pixels keep the on-disk channel order; nothing is swizzled.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 3 channels, 8-bit BGR (24 bits per pixel).
    Bgr8,
    /// 4 channels, 8-bit BGRA (32 bits per pixel).
    Bgra8,
}

impl PixelLayout {
    /// Layout for a BMP `biBitCount`, if supported.
    pub fn from_bit_count(bits: u16) -> Option<Self> {
        match bits {
            24 => Some(Self::Bgr8),
            32 => Some(Self::Bgra8),
            _ => None,
        }
    }

    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Bgr8 => 3,
            Self::Bgra8 => 4,
        }
    }

    /// Whether the fourth byte of each pixel is an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Bgra8)
    }
}
