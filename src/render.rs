//! Text rendering of decoded BMP pixels, one glyph per pixel.

use std::io::Write;

use crate::decode::DecodedImage;
use crate::error::BmpError;

/// The four classes a pixel can fall into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Black,
    White,
    /// Anything that is neither pure black nor pure white.
    Grey,
    /// 32-bit pixel with a zero alpha byte.
    Transparent,
}

impl Symbol {
    /// Classify raw BGR or BGRA pixel bytes.
    ///
    /// Bytes are packed little-endian, so the alpha byte of a 4-byte pixel
    /// ends up in the top 8 bits.
    pub fn classify(pixel: &[u8]) -> Symbol {
        let mut raw = [0u8; 4];
        let n = pixel.len().min(4);
        raw[..n].copy_from_slice(&pixel[..n]);
        let value = u32::from_le_bytes(raw);

        if n == 4 && value & 0xFF00_0000 == 0 {
            return Symbol::Transparent;
        }
        match value & 0x00FF_FFFF {
            0 => Symbol::Black,
            0x00FF_FFFF => Symbol::White,
            _ => Symbol::Grey,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Symbol::Black => 'B',
            Symbol::White => 'W',
            Symbol::Grey => '?',
            Symbol::Transparent => '-',
        }
    }
}

/// Rendering settings shared by every image in a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Follow every glyph with a space, doubling the line width.
    pub space_between_characters: bool,
}

impl RenderOptions {
    pub fn with_spaces(mut self, enabled: bool) -> Self {
        self.space_between_characters = enabled;
        self
    }
}

/// Render one row of `bytes_per_pixel`-sized pixels as a line of text.
pub fn render_row<W: Write>(
    row: &[u8],
    bytes_per_pixel: usize,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), BmpError> {
    if bytes_per_pixel == 0 {
        return Ok(());
    }
    let step = if options.space_between_characters { 2 } else { 1 };
    let mut line = String::with_capacity(row.len() / bytes_per_pixel * step + 1);
    for pixel in row.chunks_exact(bytes_per_pixel) {
        line.push(Symbol::classify(pixel).glyph());
        if options.space_between_characters {
            line.push(' ');
        }
    }
    line.push('\n');
    out.write_all(line.as_bytes())?;
    Ok(())
}

/// Render every row of `image`, top row first.
///
/// An empty buffer writes nothing.
pub fn render_image<W: Write>(
    image: &DecodedImage,
    options: RenderOptions,
    out: &mut W,
) -> Result<(), BmpError> {
    if image.pixels.is_empty() || image.pixels.stride() == 0 {
        return Ok(());
    }
    let bytes_per_pixel = image.layout.bytes_per_pixel;
    for row in image.pixels.rows() {
        render_row(row, bytes_per_pixel, options, out)?;
    }
    Ok(())
}

/// Write an empty separator line.
pub fn append_blank_line<W: Write>(out: &mut W) -> Result<(), BmpError> {
    out.write_all(b"\n")?;
    Ok(())
}
