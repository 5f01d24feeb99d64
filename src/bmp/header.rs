//! BMP file header + BITMAPINFOHEADER parsing.
//!
//! Every field is read as a little-endian integer at its fixed offset, each
//! read bounds-checked against the input.

use crate::diag::{log_trace, log_warn};
use crate::error::{BmpError, Unsupported};

// ── Layout ──────────────────────────────────────────────────────────

/// BITMAPFILEHEADER length.
pub(crate) const FILE_HEADER_LEN: usize = 14;
/// BITMAPINFOHEADER length. The fields read here all lie inside it.
pub(crate) const INFO_HEADER_LEN: u32 = 40;
/// File header + BITMAPINFOHEADER.
pub(crate) const MIN_HEADER_LEN: usize = 54;

const SIGNATURE: [u8; 2] = *b"BM";

const OFF_FILE_SIZE: usize = 2;
const OFF_DATA_OFFSET: usize = 10;
const OFF_INFO_SIZE: usize = 14;
const OFF_WIDTH: usize = 18;
const OFF_HEIGHT: usize = 22;
const OFF_PLANES: usize = 26;
const OFF_BPP: usize = 28;
const OFF_COMPRESSION: usize = 30;
const OFF_IMAGE_SIZE: usize = 34;

const BI_RGB: u32 = 0;
const SUPPORTED_BPP: u16 = 24;

// ── Strictness ──────────────────────────────────────────────────────

/// Controls how the decoder treats header fields that do not affect
/// pixel decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Reject inconsistent bookkeeping fields as well: info header size
    /// below 40, planes != 1, file size field not matching the input
    /// length, pixel data offset overlapping the headers, image size
    /// field smaller than the rows.
    Strict,

    /// Validate only what decoding depends on (signature, dimensions,
    /// depth, compression, data bounds). Other inconsistencies are
    /// logged and ignored.
    #[default]
    Standard,
}

// ── Little-endian reads ─────────────────────────────────────────────

fn field<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], BmpError> {
    let end = offset + N;
    data.get(offset..end)
        .and_then(|s| <[u8; N]>::try_from(s).ok())
        .ok_or(BmpError::TruncatedHeader {
            needed: end,
            actual: data.len(),
        })
}

fn read_u16_le(data: &[u8], offset: usize) -> Result<u16, BmpError> {
    field::<2>(data, offset).map(u16::from_le_bytes)
}

fn read_u32_le(data: &[u8], offset: usize) -> Result<u32, BmpError> {
    field::<4>(data, offset).map(u32::from_le_bytes)
}

fn read_i32_le(data: &[u8], offset: usize) -> Result<i32, BmpError> {
    field::<4>(data, offset).map(i32::from_le_bytes)
}

// ── Parsed header ───────────────────────────────────────────────────

/// Validated header of a 24-bit uncompressed BMP.
#[derive(Clone, Debug)]
pub(crate) struct BmpHeader {
    pub file_size: u32,
    pub data_offset: u32,
    pub info_size: u32,
    pub width: u32,
    /// Row count, `|height|`.
    pub height: u32,
    pub top_down: bool,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub image_size: u32,
}

impl BmpHeader {
    /// Bytes per source row, padded to a multiple of 4.
    pub fn row_stride(&self) -> u64 {
        (u64::from(self.width) * 3 + 3) & !3
    }

    /// Bytes of source pixel data the header declares.
    pub fn pixel_data_len(&self) -> u64 {
        self.row_stride() * u64::from(self.height)
    }

    /// Ensure the declared pixel data lies inside `data_len` bytes.
    pub fn check_pixel_data(&self, data_len: usize) -> Result<(), BmpError> {
        let needed = u64::from(self.data_offset) + self.pixel_data_len();
        if needed > data_len as u64 {
            return Err(BmpError::TruncatedPixelData {
                needed,
                actual: data_len,
            });
        }
        Ok(())
    }
}

/// Parse and validate the fixed 54-byte header.
pub(crate) fn parse_header(data: &[u8], strictness: Strictness) -> Result<BmpHeader, BmpError> {
    if data.len() < MIN_HEADER_LEN {
        return Err(BmpError::TruncatedHeader {
            needed: MIN_HEADER_LEN,
            actual: data.len(),
        });
    }

    let signature: [u8; 2] = field(data, 0)?;
    if signature != SIGNATURE {
        return Err(BmpError::InvalidSignature(signature));
    }

    let file_size = read_u32_le(data, OFF_FILE_SIZE)?;
    let data_offset = read_u32_le(data, OFF_DATA_OFFSET)?;
    let info_size = read_u32_le(data, OFF_INFO_SIZE)?;
    let width = read_i32_le(data, OFF_WIDTH)?;
    let height = read_i32_le(data, OFF_HEIGHT)?;
    let planes = read_u16_le(data, OFF_PLANES)?;
    let bits_per_pixel = read_u16_le(data, OFF_BPP)?;
    let compression = read_u32_le(data, OFF_COMPRESSION)?;
    let image_size = read_u32_le(data, OFF_IMAGE_SIZE)?;

    log_trace!("BMP width: {width}, height: {height}");
    log_trace!("BMP depth: {bits_per_pixel}, compression: {compression}, info header: {info_size}");

    if width <= 0 {
        return Err(Unsupported::Width(width).into());
    }
    if height == 0 {
        return Err(Unsupported::ZeroHeight.into());
    }
    if bits_per_pixel != SUPPORTED_BPP {
        return Err(Unsupported::BitDepth(bits_per_pixel).into());
    }
    if compression != BI_RGB {
        return Err(Unsupported::Compression(compression).into());
    }

    let header = BmpHeader {
        file_size,
        data_offset,
        info_size,
        width: width.unsigned_abs(),
        height: height.unsigned_abs(),
        top_down: height < 0,
        planes,
        bits_per_pixel,
        image_size,
    };

    log_trace!(
        "BMP stride: {}, rows stored {}",
        header.row_stride(),
        if header.top_down { "top-down" } else { "bottom-up" }
    );

    check_bookkeeping(&header, data.len(), strictness)?;
    Ok(header)
}

/// Fields that do not influence decoding: rejected in strict mode,
/// logged otherwise.
fn check_bookkeeping(
    header: &BmpHeader,
    data_len: usize,
    strictness: Strictness,
) -> Result<(), BmpError> {
    let strict = strictness == Strictness::Strict;

    if header.info_size < INFO_HEADER_LEN {
        let msg = alloc::format!(
            "info header size {} (expected at least {INFO_HEADER_LEN})",
            header.info_size
        );
        if strict {
            return Err(BmpError::InvalidHeader(msg));
        }
        log_warn!("{msg}");
    }

    if header.planes != 1 {
        let msg = alloc::format!("planes is {} (expected 1)", header.planes);
        if strict {
            return Err(BmpError::InvalidHeader(msg));
        }
        log_warn!("{msg}");
    }

    if header.file_size != 0 && header.file_size as usize != data_len {
        let msg = alloc::format!(
            "file size field {} does not match data length {data_len}",
            header.file_size
        );
        if strict {
            return Err(BmpError::InvalidHeader(msg));
        }
        log_warn!("{msg}");
    }

    let headers_end = FILE_HEADER_LEN as u64 + u64::from(header.info_size.max(INFO_HEADER_LEN));
    if u64::from(header.data_offset) < headers_end {
        let msg = alloc::format!(
            "pixel data offset {} overlaps headers ending at {headers_end}",
            header.data_offset
        );
        if strict {
            return Err(BmpError::InvalidHeader(msg));
        }
        log_warn!("{msg}");
    }

    if header.image_size != 0 && u64::from(header.image_size) < header.pixel_data_len() {
        let msg = alloc::format!(
            "image size field {} smaller than row data {}",
            header.image_size,
            header.pixel_data_len()
        );
        if strict {
            return Err(BmpError::InvalidHeader(msg));
        }
        log_warn!("{msg}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(width: i32, height: i32) -> [u8; MIN_HEADER_LEN] {
        let mut h = [0u8; MIN_HEADER_LEN];
        h[0..2].copy_from_slice(b"BM");
        h[OFF_DATA_OFFSET..OFF_DATA_OFFSET + 4].copy_from_slice(&54u32.to_le_bytes());
        h[OFF_INFO_SIZE..OFF_INFO_SIZE + 4].copy_from_slice(&40u32.to_le_bytes());
        h[OFF_WIDTH..OFF_WIDTH + 4].copy_from_slice(&width.to_le_bytes());
        h[OFF_HEIGHT..OFF_HEIGHT + 4].copy_from_slice(&height.to_le_bytes());
        h[OFF_PLANES..OFF_PLANES + 2].copy_from_slice(&1u16.to_le_bytes());
        h[OFF_BPP..OFF_BPP + 2].copy_from_slice(&24u16.to_le_bytes());
        h
    }

    #[test]
    fn stride_pads_to_four() {
        for (width, stride) in [(1, 4), (2, 8), (3, 12), (4, 12), (5, 16)] {
            let header = parse_header(&header_bytes(width, 1), Strictness::Standard).unwrap();
            assert_eq!(header.row_stride(), stride, "width {width}");
        }
    }

    #[test]
    fn negative_height_is_top_down() {
        let header = parse_header(&header_bytes(3, -7), Strictness::Standard).unwrap();
        assert_eq!(header.height, 7);
        assert!(header.top_down);

        let header = parse_header(&header_bytes(3, 7), Strictness::Standard).unwrap();
        assert_eq!(header.height, 7);
        assert!(!header.top_down);
    }

    #[test]
    fn min_height_does_not_overflow() {
        let header = parse_header(&header_bytes(i32::MAX, i32::MIN), Strictness::Standard).unwrap();
        assert_eq!(header.height, 1 << 31);
        assert!(header.check_pixel_data(MIN_HEADER_LEN).is_err());
    }

    #[test]
    fn info_header_size_is_bookkeeping() {
        let mut bytes = header_bytes(2, 2);
        bytes[OFF_INFO_SIZE..OFF_INFO_SIZE + 4].copy_from_slice(&0u32.to_le_bytes());
        let header = parse_header(&bytes, Strictness::Standard).unwrap();
        assert_eq!(header.info_size, 0);
        assert!(matches!(
            parse_header(&bytes, Strictness::Strict),
            Err(BmpError::InvalidHeader(_))
        ));
    }

    #[test]
    fn reads_are_little_endian() {
        let data = [0x01, 0x02, 0x03, 0x04, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(read_u16_le(&data, 0).unwrap(), 0x0201);
        assert_eq!(read_u32_le(&data, 0).unwrap(), 0x0403_0201);
        assert_eq!(read_i32_le(&data, 4).unwrap(), -1);
        assert!(matches!(
            read_u32_le(&data, 6),
            Err(BmpError::TruncatedHeader { needed: 10, actual: 8 })
        ));
    }
}
