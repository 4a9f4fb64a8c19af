//! In-memory BMP construction for tests.

#![allow(dead_code)]

pub const BLACK: [u8; 3] = [0, 0, 0];
pub const WHITE: [u8; 3] = [0xFF, 0xFF, 0xFF];
pub const GREY: [u8; 3] = [0x80, 0x80, 0x80];

pub const BGRA_MASKS: [u32; 4] = [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000];
pub const RGBA_MASKS: [u32; 4] = [0xFF00_0000, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF];
pub const LCS_SRGB: u32 = 0x7352_4742;
pub const LCS_WINDOWS: u32 = 0x5769_6E20;

/// Padding byte written after each on-disk row; never zero so it shows up
/// if it leaks into decoded pixels.
pub const PAD: u8 = 0xEE;

#[derive(Clone, Debug)]
pub struct TestBmp {
    pub signature: [u8; 2],
    pub width: i32,
    /// Negative for top-down.
    pub height: i32,
    pub bit_count: u16,
    pub compression: u32,
    /// Declared `biSize`.
    pub header_size: u32,
    pub masks: [u32; 4],
    pub color_space: u32,
    /// Extra bytes between the headers and the pixel data.
    pub gap: usize,
    /// Unpadded rows, top row first.
    pub rows: Vec<Vec<u8>>,
}

impl TestBmp {
    pub fn bgr(width: i32, height: i32, rows: Vec<Vec<u8>>) -> Self {
        Self {
            signature: *b"BM",
            width,
            height,
            bit_count: 24,
            compression: 0,
            header_size: 40,
            masks: BGRA_MASKS,
            color_space: LCS_SRGB,
            gap: 0,
            rows,
        }
    }

    pub fn bgra(width: i32, height: i32, rows: Vec<Vec<u8>>) -> Self {
        Self {
            bit_count: 32,
            compression: 3,
            header_size: 124,
            ..Self::bgr(width, height, rows)
        }
    }

    pub fn padded_stride(&self) -> usize {
        (self.width.unsigned_abs() as usize * usize::from(self.bit_count / 8)).div_ceil(4) * 4
    }

    pub fn encode(&self) -> Vec<u8> {
        let info_len = (self.header_size as usize).max(40);
        let pixel_offset = 14 + info_len + self.gap;
        let stride = self.padded_stride();
        let file_size = pixel_offset + stride * self.rows.len();

        let mut out = Vec::with_capacity(file_size);
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&(file_size as u32).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&(pixel_offset as u32).to_le_bytes());

        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&((stride * self.rows.len()) as u32).to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());

        if info_len > 40 {
            let mut extra = Vec::with_capacity(info_len - 40);
            for mask in self.masks {
                extra.extend_from_slice(&mask.to_le_bytes());
            }
            extra.extend_from_slice(&self.color_space.to_le_bytes());
            extra.resize(info_len - 40, 0);
            out.extend_from_slice(&extra);
        }
        out.resize(pixel_offset, 0);

        let disk_rows: Vec<&Vec<u8>> = if self.height < 0 {
            self.rows.iter().collect()
        } else {
            self.rows.iter().rev().collect()
        };
        for row in disk_rows {
            out.extend_from_slice(row);
            out.resize(out.len() + stride - row.len(), PAD);
        }
        out
    }
}

pub fn row24(pixels: &[[u8; 3]]) -> Vec<u8> {
    pixels.concat()
}

pub fn row32(pixels: &[[u8; 4]]) -> Vec<u8> {
    pixels.concat()
}

pub fn opaque(bgr: [u8; 3]) -> [u8; 4] {
    [bgr[0], bgr[1], bgr[2], 0xFF]
}
