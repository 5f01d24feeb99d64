//! Uncompressed 24-bit BMP decoder (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::DecodeRequest`], etc.

mod decode;
mod header;

pub use header::Strictness;
pub(crate) use header::{BmpHeader, parse_header};

use crate::decode::DecodeOutput;
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use enough::Stop;

/// Decode BMP data into `layout` (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    layout: PixelLayout,
    strictness: Strictness,
    stop: &dyn Stop,
) -> Result<DecodeOutput, BmpError> {
    let header = parse_header(data, strictness)?;
    header.check_pixel_data(data.len())?;
    check_limits(limits, &header)?;
    stop.check()?;
    let pixels = decode::decode_pixels(data, &header, layout, stop)?;
    Ok(DecodeOutput::new(pixels, header.width, header.height, layout))
}

fn check_limits(limits: Option<&Limits>, header: &BmpHeader) -> Result<(), BmpError> {
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }
    Ok(())
}
