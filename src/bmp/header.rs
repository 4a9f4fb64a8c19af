//! BMP file, info, and color-mask headers.
//!
//! Each header is parsed from a fixed-size little-endian byte array, so the
//! in-memory struct layout never has to match the on-disk one.

use std::io::{Read, Seek};

use log::{trace, warn};

use super::reader::ByteReader;
use crate::error::BmpError;
use crate::pixel::PixelLayout;

/// `"BM"` read as a little-endian `u16`.
pub const BMP_SIGNATURE: u16 = 0x4D42;

/// `BI_RGB`: no compression.
pub const COMPRESSION_RGB: u32 = 0;
/// `BI_BITFIELDS`: uncompressed, channel layout given by masks.
pub const COMPRESSION_BITFIELDS: u32 = 3;

/// `LCS_sRGB`.
pub const COLOR_SPACE_SRGB: u32 = 0x7352_4742;
/// `LCS_WINDOWS_COLOR_SPACE` (`"Win "`), accepted as an sRGB equivalent.
pub const COLOR_SPACE_WINDOWS: u32 = 0x5769_6E20;

/// The only channel masks a 32-bit image may declare.
pub const EXPECTED_MASKS: ChannelMasks = ChannelMasks {
    red: 0x00FF_0000,
    green: 0x0000_FF00,
    blue: 0x0000_00FF,
    alpha: 0xFF00_0000,
};

fn u16_le(b: &[u8]) -> u16 {
    u16::from_le_bytes([b[0], b[1]])
}

fn u32_le(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

fn i32_le(b: &[u8]) -> i32 {
    i32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

/// `BITMAPFILEHEADER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset of the pixel data from the start of the file.
    pub pixel_offset: u32,
}

impl FileHeader {
    pub const SIZE: usize = 14;
}

impl From<[u8; FileHeader::SIZE]> for FileHeader {
    fn from(b: [u8; FileHeader::SIZE]) -> Self {
        Self {
            signature: u16_le(&b[0..2]),
            file_size: u32_le(&b[2..6]),
            reserved1: u16_le(&b[6..8]),
            reserved2: u16_le(&b[8..10]),
            pixel_offset: u32_le(&b[10..14]),
        }
    }
}

/// `BITMAPINFOHEADER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    /// Declared header size. Larger values mean extended headers follow.
    pub header_size: u32,
    pub width: i32,
    /// Negative for top-down images.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub const SIZE: usize = 40;

    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }
}

impl From<[u8; InfoHeader::SIZE]> for InfoHeader {
    fn from(b: [u8; InfoHeader::SIZE]) -> Self {
        Self {
            header_size: u32_le(&b[0..4]),
            width: i32_le(&b[4..8]),
            height: i32_le(&b[8..12]),
            planes: u16_le(&b[12..14]),
            bit_count: u16_le(&b[14..16]),
            compression: u32_le(&b[16..20]),
            image_size: u32_le(&b[20..24]),
            x_pixels_per_meter: i32_le(&b[24..28]),
            y_pixels_per_meter: i32_le(&b[28..32]),
            colors_used: u32_le(&b[32..36]),
            colors_important: u32_le(&b[36..40]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelMasks {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub alpha: u32,
}

/// Color masks and colorspace from a V5 header, following the info header.
///
/// Endpoints, gamma, intent, and profile fields are read but not kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorHeader {
    pub masks: ChannelMasks,
    pub color_space: u32,
}

impl ColorHeader {
    /// Four masks, the colorspace tag, and sixteen unused words.
    pub const SIZE: usize = 84;

    /// Reject anything but BGRA masks in an sRGB colorspace.
    pub fn validate(&self) -> Result<(), BmpError> {
        if self.masks != EXPECTED_MASKS {
            return Err(BmpError::UnexpectedColorMask);
        }
        if self.color_space != COLOR_SPACE_SRGB && self.color_space != COLOR_SPACE_WINDOWS {
            return Err(BmpError::UnexpectedColorSpace(self.color_space));
        }
        Ok(())
    }
}

impl From<[u8; ColorHeader::SIZE]> for ColorHeader {
    fn from(b: [u8; ColorHeader::SIZE]) -> Self {
        Self {
            masks: ChannelMasks {
                red: u32_le(&b[0..4]),
                green: u32_le(&b[4..8]),
                blue: u32_le(&b[8..12]),
                alpha: u32_le(&b[12..16]),
            },
            color_space: u32_le(&b[16..20]),
        }
    }
}

/// The validated headers of one BMP file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeaders {
    pub file: FileHeader,
    pub info: InfoHeader,
    /// Present for 32-bit images only.
    pub color: Option<ColorHeader>,
}

impl BmpHeaders {
    pub fn layout(&self) -> PixelLayout {
        // validated in read_headers
        if self.info.bit_count == 32 {
            PixelLayout::Bgra8
        } else {
            PixelLayout::Bgr8
        }
    }
}

/// Parse and validate all headers, leaving the stream at the pixel data.
pub fn parse_headers<R: Read + Seek>(reader: &mut R) -> Result<BmpHeaders, BmpError> {
    read_headers(&mut ByteReader::new(reader))
}

pub(crate) fn read_headers<R: Read + Seek>(
    bytes: &mut ByteReader<R>,
) -> Result<BmpHeaders, BmpError> {
    let file = FileHeader::from(bytes.read_fixed_bytes::<{ FileHeader::SIZE }>()?);
    if file.signature != BMP_SIGNATURE {
        return Err(BmpError::UnrecognizedFormat);
    }

    let info = InfoHeader::from(bytes.read_fixed_bytes::<{ InfoHeader::SIZE }>()?);
    trace!("Header size: {}", info.header_size);
    trace!("Width: {}", info.width);
    trace!("Height: {}", info.height);
    trace!("Bit depth: {}", info.bit_count);
    trace!("Compression: {}", info.compression);

    let mut color = None;
    if info.bit_count == 32 {
        if (info.header_size as usize) < InfoHeader::SIZE + ColorHeader::SIZE {
            return Err(BmpError::MissingBitMasks);
        }
        let header = ColorHeader::from(bytes.read_fixed_bytes::<{ ColorHeader::SIZE }>()?);
        trace!("Color masks: {:08x?}", header.masks);
        header.validate()?;
        color = Some(header);
    } else if (info.header_size as usize) < InfoHeader::SIZE {
        warn!(
            "Info header declares {} bytes, expected at least {}",
            info.header_size,
            InfoHeader::SIZE
        );
    }

    let headers_end = FileHeader::SIZE as u64
        + InfoHeader::SIZE as u64
        + if color.is_some() { ColorHeader::SIZE as u64 } else { 0 };
    if u64::from(file.pixel_offset) > headers_end {
        warn!(
            "Skipping {} bytes before pixel data",
            u64::from(file.pixel_offset) - headers_end
        );
    }
    bytes.set_position(u64::from(file.pixel_offset))?;

    if info.compression != COMPRESSION_RGB && info.compression != COMPRESSION_BITFIELDS {
        return Err(BmpError::Compressed(info.compression));
    }
    if PixelLayout::from_bit_count(info.bit_count).is_none() {
        return Err(BmpError::UnsupportedBitDepth(info.bit_count));
    }
    if info.width < 0 {
        return Err(BmpError::NegativeWidth(info.width));
    }

    Ok(BmpHeaders { file, info, color })
}
