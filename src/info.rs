use crate::bmp::{Strictness, parse_header};
use crate::error::BmpError;
use crate::pixel::PixelLayout;

/// Header information, available without decoding pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    /// Number of rows (absolute value of the header height).
    pub height: u32,
    /// Rows are stored top-down (negative header height).
    pub top_down: bool,
    pub bits_per_pixel: u16,
    /// Offset of the pixel array from the start of the file.
    pub data_offset: u32,
    /// Padded bytes per stored row.
    pub row_stride: u64,
    /// File size as declared in the header (may be 0 or wrong).
    pub file_size: u32,
    /// Pixel array size as declared in the header (may be 0).
    pub image_size: u32,
    /// Channel order stored in the file.
    pub native_layout: PixelLayout,
}

impl ImageInfo {
    /// Read a BMP header. Pixel data need not be present.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let header = parse_header(data, Strictness::Standard)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            top_down: header.top_down,
            bits_per_pixel: header.bits_per_pixel,
            data_offset: header.data_offset,
            row_stride: header.row_stride(),
            file_size: header.file_size,
            image_size: header.image_size,
            native_layout: PixelLayout::Bgr8,
        })
    }

    /// Bytes a full decode would allocate.
    pub fn output_len(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height) * 3
    }
}
