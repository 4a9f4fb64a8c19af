//! # bmptext
//!
//! Uncompressed BMP decoder that renders images as text, one glyph per pixel.
//!
//! ## Supported Formats
//!
//! - 24-bit BGR, `BI_RGB`
//! - 32-bit BGRA with a V5 header, `BI_RGB` or `BI_BITFIELDS`, masks
//!   exactly `00FF0000/0000FF00/000000FF/FF000000`, sRGB colorspace
//! - Bottom-up (positive height) and top-down (negative height) row order
//!
//! Decoded rows are always stored top-to-bottom with row padding removed.
//!
//! ## Rendering
//!
//! | pixel                          | glyph |
//! |--------------------------------|-------|
//! | 32-bit, alpha `0`              | `-`   |
//! | BGR `000000`                   | `B`   |
//! | BGR `FFFFFF`                   | `W`   |
//! | anything else                  | `?`   |
//!
//! ## Non-Goals
//!
//! - RLE, JPEG, or PNG compressed BMPs
//! - Palettes and bit depths other than 24/32
//! - Encoding
//!
//! ## Usage
//!
//! ```no_run
//! use bmptext::{BmpViewer, RenderOptions};
//!
//! let mut viewer = BmpViewer::new(RenderOptions::default().with_spaces(true));
//! let mut out = std::io::stdout();
//! viewer.open("image.bmp")?;
//! viewer.display(&mut out)?;
//! viewer.close();
//! # Ok::<(), bmptext::BmpError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod limits;
mod pixel;

pub mod bmp;

mod decode;
mod render;
mod viewer;

// Re-exports
pub use bmp::{BmpHeaders, BmpLayout, parse_headers};
pub use decode::{DecodeRequest, DecodedImage, PixelBuffer, decode_bmp};
pub use error::{BmpError, ErrorKind};
pub use limits::Limits;
pub use pixel::PixelLayout;
pub use render::{RenderOptions, Symbol, append_blank_line, render_image, render_row};
pub use viewer::BmpViewer;
