use std::io;

/// Broad classification of a [`BmpError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file is not a BMP this crate can decode.
    Format,
    /// The file could not be opened or ended early.
    Io,
}

/// Errors from BMP decoding and rendering.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("unrecognized file format")]
    UnrecognizedFormat,

    #[error("missing bit mask information")]
    MissingBitMasks,

    #[error("unexpected color mask format: pixel data must be BGRA")]
    UnexpectedColorMask,

    #[error("unexpected color space type {0:#010x}: expected sRGB")]
    UnexpectedColorSpace(u32),

    #[error("compressed images not supported (compression {0})")]
    Compressed(u32),

    #[error("BMP bit depth {0} unsupported")]
    UnsupportedBitDepth(u16),

    #[error("negative image width ({0})")]
    NegativeWidth(i32),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("i/o error: {0}")]
    Io(#[source] io::Error),
}

impl BmpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedEof | Self::Io(_) => ErrorKind::Io,
            _ => ErrorKind::Format,
        }
    }
}

impl From<io::Error> for BmpError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            BmpError::UnexpectedEof
        } else {
            BmpError::Io(e)
        }
    }
}
