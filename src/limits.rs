use crate::error::BmpError;
use crate::info::ImageInfo;

/// Caps on what a decode may produce, checked after the header is parsed
/// and before the output buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    /// Maximum row count (`|height|`).
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * rows).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded RGB buffer (`width * rows * 3`).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a header read by [`ImageInfo::from_bytes`] against these limits.
    pub fn check_info(&self, info: &ImageInfo) -> Result<(), BmpError> {
        self.check(info.width, info.height)
    }

    /// Check the dimensions and decoded size of a `width` x `rows` image.
    pub(crate) fn check(&self, width: u32, rows: u32) -> Result<(), BmpError> {
        let pixels = u64::from(width) * u64::from(rows);
        let caps = [
            ("width", u64::from(width), self.max_width),
            ("row count", u64::from(rows), self.max_height),
            ("pixel count", pixels, self.max_pixels),
            ("decoded size in bytes", pixels * 3, self.max_memory_bytes),
        ];
        for (what, value, cap) in caps {
            match cap {
                Some(max) if value > max => {
                    return Err(BmpError::LimitExceeded(alloc::format!(
                        "{what} {value} exceeds limit {max} for {width}x{rows} BMP"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
