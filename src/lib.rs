//! # zenbmp
//!
//! Decoder for uncompressed 24-bit Windows BMP images.
//!
//! Takes the bytes of a `.bmp` file and returns an owned, row-major,
//! top-down pixel buffer in RGB (or native BGR) order. Every header field is
//! read at its fixed offset and validated before any pixel is touched; a
//! malformed or truncated file is reported as a [`BmpError`], never as a
//! partially filled image.
//!
//! ## Supported
//!
//! - BITMAPINFOHEADER (and larger) files with 24 bits per pixel, `BI_RGB`
//! - Bottom-up (positive height) and top-down (negative height) row order
//! - Any pixel data offset, rows padded to 4 bytes
//!
//! ## Non-Goals
//!
//! - Encoding
//! - RLE, bitfields, palettes, 1/2/4/8/16/32-bit depths
//! - ICC profiles and color management
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Read the header without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} top_down={}", info.width, info.height, info.top_down);
//!
//! // Decode to RGB
//! let decoded = zenbmp::decode_bmp(data, Unstoppable)?;
//! assert_eq!(decoded.pixels().len(), info.width as usize * info.height as usize * 3);
//! let rgb: Vec<u8> = decoded.into_pixels();
//! # let _ = rgb;
//! # Ok::<(), zenbmp::BmpError>(())
//! ```
//!
//! ## Features
//!
//! - `rgb`: typed views (`RGB8`, `BGR8`) of decoded pixels
//! - `imgref`: `ImgRef`/`ImgVec` views (implies `rgb`)
//! - `log`: header diagnostics through the `log` facade
//! - `std`: link the standard library (the crate is `no_std` + `alloc` otherwise)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod diag;
mod error;
mod info;
mod limits;
mod pixel;

mod bmp;
mod decode;

// Re-exports
pub use bmp::Strictness;
pub use decode::{DecodeOutput, DecodeRequest};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::{BmpError, Unsupported};
pub use info::ImageInfo;
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::PixelLayout;

/// Decode a 24-bit BMP to top-down RGB.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, BmpError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode a 24-bit BMP to top-down BGR, the file's own channel order.
pub fn decode_bmp_native(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, BmpError> {
    DecodeRequest::new(data)
        .with_layout(PixelLayout::Bgr8)
        .decode(stop)
}
