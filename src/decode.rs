use std::io::{Read, Seek};

use crate::bmp::{BmpHeaders, BmpLayout};
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Decoded pixel rows, top row first, without row padding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    stride: usize,
    height: usize,
}

impl PixelBuffer {
    pub(crate) fn new(data: Vec<u8>, stride: usize, height: usize) -> Self {
        Self {
            data,
            stride,
            height,
        }
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Row `y`, or an empty slice when the row lies outside the buffer.
    pub fn row(&self, y: usize) -> &[u8] {
        slide(&self.data, y.saturating_mul(self.stride), self.stride)
    }

    /// Rows top to bottom, ending at the first row that is out of range.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height)
            .map(|y| self.row(y))
            .take_while(|row| !row.is_empty())
    }

    /// Raw bytes of the pixel at `(x, y)`, or an empty slice if out of range.
    pub fn pixel(&self, x: usize, y: usize, bytes_per_pixel: usize) -> &[u8] {
        slide(self.row(y), x.saturating_mul(bytes_per_pixel), bytes_per_pixel)
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

/// `data[offset..offset + len]`, or empty instead of out of bounds.
fn slide(data: &[u8], offset: usize, len: usize) -> &[u8] {
    match offset.checked_add(len) {
        Some(end) if end <= data.len() => &data[offset..end],
        _ => &[],
    }
}

/// A fully decoded BMP: validated headers, derived layout, and pixels.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub headers: BmpHeaders,
    pub layout: BmpLayout,
    pub pixels: PixelBuffer,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    pub fn height(&self) -> u32 {
        self.layout.height
    }

    pub fn pixel_layout(&self) -> PixelLayout {
        self.headers.layout()
    }
}

/// Builder for decoding a BMP from a seekable stream.
pub struct DecodeRequest<'a, R> {
    reader: R,
    limits: Option<&'a Limits>,
}

impl<'a, R: Read + Seek> DecodeRequest<'a, R> {
    /// The stream must be positioned at the start of the BMP file.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self) -> Result<DecodedImage, BmpError> {
        crate::bmp::decode(self.reader, self.limits)
    }
}

/// Decode a BMP from a seekable stream with no limits.
pub fn decode_bmp<R: Read + Seek>(reader: R) -> Result<DecodedImage, BmpError> {
    DecodeRequest::new(reader).decode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_out_of_range_is_empty() {
        let buf = PixelBuffer::new(vec![1, 2, 3, 4, 5, 6], 3, 2);
        assert_eq!(buf.row(0), &[1, 2, 3]);
        assert_eq!(buf.row(1), &[4, 5, 6]);
        assert!(buf.row(2).is_empty());
        assert!(buf.row(usize::MAX).is_empty());
    }

    #[test]
    fn rows_stop_at_short_buffer() {
        // Declared height larger than the data holds.
        let buf = PixelBuffer::new(vec![0; 6], 3, 5);
        assert_eq!(buf.rows().count(), 2);
    }

    #[test]
    fn zero_stride_has_no_rows() {
        let buf = PixelBuffer::new(Vec::new(), 0, 4);
        assert!(buf.is_empty());
        assert_eq!(buf.rows().count(), 0);
    }

    #[test]
    fn pixel_slice() {
        let buf = PixelBuffer::new((0u8..8).collect(), 8, 1);
        assert_eq!(buf.pixel(1, 0, 4), &[4, 5, 6, 7]);
        assert!(buf.pixel(2, 0, 4).is_empty());
    }
}
