//! 24-bit pixel array decoding: row flip, stride skip, channel order.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use super::header::BmpHeader;
use crate::error::BmpError;
use crate::pixel::PixelLayout;

/// Decode the pixel array described by `header` into a top-down buffer.
///
/// `data` must already have passed [`BmpHeader::check_pixel_data`].
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &BmpHeader,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BmpError> {
    let w = header.width as usize;
    let h = header.height as usize;
    let row_bytes = w * 3;
    let stride = header.row_stride() as usize;
    let start = header.data_offset as usize;
    let pixel_data = &data[start..start + stride * h];

    let mut out = vec![0u8; row_bytes * h];

    for (y, dst_row) in out.chunks_exact_mut(row_bytes).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        let src_y = if header.top_down { y } else { h - 1 - y };
        let src_start = src_y * stride;
        let src_row = &pixel_data[src_start..src_start + row_bytes];

        match layout {
            PixelLayout::Bgr8 => dst_row.copy_from_slice(src_row),
            PixelLayout::Rgb8 => {
                for (s, d) in src_row.chunks_exact(3).zip(dst_row.chunks_exact_mut(3)) {
                    d[0] = s[2];
                    d[1] = s[1];
                    d[2] = s[0];
                }
            }
        }
    }

    Ok(out)
}
