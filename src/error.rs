use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("truncated header: need {needed} bytes, got {actual}")]
    TruncatedHeader { needed: usize, actual: usize },

    #[error("invalid signature: expected \"BM\", got {0:02x?}")]
    InvalidSignature([u8; 2]),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(Unsupported),

    #[error("truncated pixel data: need {needed} bytes, got {actual}")]
    TruncatedPixelData { needed: u64, actual: usize },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}

impl From<Unsupported> for BmpError {
    fn from(u: Unsupported) -> Self {
        BmpError::UnsupportedFormat(u)
    }
}

/// Header value outside the supported subset (uncompressed 24-bit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Unsupported {
    #[error("width {0} (must be positive)")]
    Width(i32),

    #[error("height of zero")]
    ZeroHeight,

    #[error("{0} bits per pixel (only 24 is supported)")]
    BitDepth(u16),

    #[error("compression method {0} (only uncompressed is supported)")]
    Compression(u32),
}
