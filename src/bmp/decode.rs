//! Uncompressed 24/32-bit pixel decoding.
//!
//! Rows land in the buffer top-to-bottom whatever the on-disk order, and
//! the 4-byte row padding is consumed from the stream but never stored.

use std::io::{Read, Seek};

use log::trace;

use super::header::{BmpHeaders, ColorHeader, FileHeader, InfoHeader};
use super::reader::ByteReader;
use crate::decode::PixelBuffer;
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Row geometry and header bookkeeping derived from validated headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpLayout {
    pub width: u32,
    /// Absolute row count.
    pub height: u32,
    /// Rows are stored first-row-first on disk (negative declared height).
    pub top_down: bool,
    pub bytes_per_pixel: usize,
    /// Bytes per row without padding.
    pub row_stride: usize,
    /// Bytes per row on disk, aligned up to 4.
    pub padded_stride: usize,
    /// Padding bytes after each on-disk row.
    pub padding: usize,
    /// Canonical `biSize` for this bit depth.
    pub header_size: u32,
    /// Canonical `bfOffBits` for this bit depth.
    pub pixel_offset: u64,
    /// Canonical `bfSize`: headers, pixel data, and all row padding.
    pub file_size: u64,
}

impl BmpLayout {
    pub fn from_headers(headers: &BmpHeaders) -> Result<Self, BmpError> {
        let info = &headers.info;
        if info.width < 0 {
            return Err(BmpError::NegativeWidth(info.width));
        }
        let width = info.width.unsigned_abs();
        let height = info.height.unsigned_abs();
        let too_large = BmpError::DimensionsTooLarge { width, height };

        let bytes_per_pixel = PixelLayout::from_bit_count(info.bit_count)
            .ok_or(BmpError::UnsupportedBitDepth(info.bit_count))?
            .bytes_per_pixel();
        let row_stride = (width as usize)
            .checked_mul(bytes_per_pixel)
            .ok_or(too_large)?;
        let padded_stride = row_stride
            .checked_next_multiple_of(4)
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;
        let padding = padded_stride - row_stride;

        let header_size = match headers.color {
            Some(_) => (InfoHeader::SIZE + ColorHeader::SIZE) as u32,
            None => InfoHeader::SIZE as u32,
        };
        let pixel_offset = FileHeader::SIZE as u64 + u64::from(header_size);
        let file_size = (padded_stride as u64)
            .saturating_mul(u64::from(height))
            .saturating_add(pixel_offset);

        Ok(Self {
            width,
            height,
            top_down: info.is_top_down(),
            bytes_per_pixel,
            row_stride,
            padded_stride,
            padding,
            header_size,
            pixel_offset,
            file_size,
        })
    }

    /// Size of the decoded (unpadded) buffer.
    pub fn buffer_len(&self) -> Result<usize, BmpError> {
        self.row_stride
            .checked_mul(self.height as usize)
            .ok_or(BmpError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Buffer row that on-disk row `disk_row` is stored in.
    pub fn buffer_row(&self, disk_row: usize) -> usize {
        if self.top_down {
            disk_row
        } else {
            self.height as usize - disk_row - 1
        }
    }
}

/// Read all pixel rows. The stream must be at the pixel data offset.
pub(crate) fn decode_pixels<R: Read + Seek>(
    bytes: &mut ByteReader<R>,
    layout: &BmpLayout,
    limits: Option<&Limits>,
) -> Result<PixelBuffer, BmpError> {
    if let Some(limits) = limits {
        limits.check_layout(layout)?;
    }
    let len = layout.buffer_len()?;

    // Declared sizes are untrusted; the stream must hold every padded row.
    let needed = (layout.padded_stride as u64).saturating_mul(u64::from(layout.height));
    let available = bytes.remaining()?;
    if needed > available {
        trace!("Pixel data needs {needed} bytes, stream has {available}");
        return Err(BmpError::UnexpectedEof);
    }

    trace!(
        "Row stride: {}, padded: {}, top-down: {}",
        layout.row_stride, layout.padded_stride, layout.top_down
    );

    let mut data = vec![0u8; len];
    let stride = layout.row_stride;

    if layout.padding == 0 && layout.top_down {
        bytes.read_exact_bytes(&mut data)?;
    } else if stride > 0 {
        for disk_row in 0..layout.height as usize {
            let start = layout.buffer_row(disk_row) * stride;
            bytes.read_exact_bytes(&mut data[start..start + stride])?;
            bytes.skip(layout.padding)?;
        }
    }

    Ok(PixelBuffer::new(data, stride, layout.height as usize))
}
