//! Uncompressed BMP decoder (24-bit BGR and 32-bit BGRA).

mod decode;
mod header;
mod reader;

pub use decode::BmpLayout;
pub use header::{
    BMP_SIGNATURE, BmpHeaders, COLOR_SPACE_SRGB, COLOR_SPACE_WINDOWS, COMPRESSION_BITFIELDS,
    COMPRESSION_RGB, ChannelMasks, ColorHeader, EXPECTED_MASKS, FileHeader, InfoHeader,
    parse_headers,
};

use std::io::{Read, Seek};

use crate::decode::DecodedImage;
use crate::error::BmpError;
use crate::limits::Limits;

/// Parse headers, then read the pixel rows into a top-down buffer.
pub(crate) fn decode<R: Read + Seek>(
    reader: R,
    limits: Option<&Limits>,
) -> Result<DecodedImage, BmpError> {
    let mut bytes = reader::ByteReader::new(reader);
    let headers = header::read_headers(&mut bytes)?;
    let layout = BmpLayout::from_headers(&headers)?;
    let pixels = decode::decode_pixels(&mut bytes, &layout, limits)?;
    Ok(DecodedImage {
        headers,
        layout,
        pixels,
    })
}
