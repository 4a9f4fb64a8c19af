use crate::bmp::BmpLayout;
use crate::error::BmpError;

/// Caps applied to a BMP's declared geometry before any pixel memory is
/// allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded pixel buffer in bytes.
    pub max_memory_bytes: Option<u64>,
}

fn within(what: &str, value: u64, max: Option<u64>) -> Result<(), BmpError> {
    match max {
        Some(max) if value > max => Err(BmpError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check the image geometry, then the unpadded buffer size.
    pub(crate) fn check_layout(&self, layout: &BmpLayout) -> Result<(), BmpError> {
        let width = u64::from(layout.width);
        let height = u64::from(layout.height);
        within("width", width, self.max_width)?;
        within("height", height, self.max_height)?;
        within("pixel count", width.saturating_mul(height), self.max_pixels)?;
        let bytes = (layout.row_stride as u64).saturating_mul(height);
        within("buffer size", bytes, self.max_memory_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: u32, height: u32) -> BmpLayout {
        BmpLayout {
            width,
            height,
            top_down: false,
            bytes_per_pixel: 4,
            row_stride: width as usize * 4,
            padded_stride: width as usize * 4,
            padding: 0,
            header_size: 124,
            pixel_offset: 138,
            file_size: 0,
        }
    }

    #[test]
    fn default_is_unlimited() {
        assert!(Limits::default().check_layout(&layout(1 << 20, 1 << 20)).is_ok());
    }

    #[test]
    fn pixel_count_limit() {
        let limits = Limits {
            max_pixels: Some(100),
            ..Limits::default()
        };
        assert!(limits.check_layout(&layout(10, 10)).is_ok());
        assert!(matches!(
            limits.check_layout(&layout(10, 11)),
            Err(BmpError::LimitExceeded(_))
        ));
    }

    #[test]
    fn memory_limit_counts_bytes_per_pixel() {
        let limits = Limits {
            max_memory_bytes: Some(400),
            ..Limits::default()
        };
        assert!(limits.check_layout(&layout(10, 10)).is_ok());
        let err = limits.check_layout(&layout(11, 10)).unwrap_err();
        assert!(err.to_string().contains("buffer size 440"));
    }
}
