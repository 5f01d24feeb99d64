//! Shared fixtures: a reference 24-bit BMP writer and header patching.
#![allow(dead_code)]

/// Header field offsets, for patching fixtures.
pub const OFF_FILE_SIZE: usize = 2;
pub const OFF_DATA_OFFSET: usize = 10;
pub const OFF_INFO_SIZE: usize = 14;
pub const OFF_WIDTH: usize = 18;
pub const OFF_HEIGHT: usize = 22;
pub const OFF_PLANES: usize = 26;
pub const OFF_BPP: usize = 28;
pub const OFF_COMPRESSION: usize = 30;
pub const OFF_IMAGE_SIZE: usize = 34;

pub fn stride(width: usize) -> usize {
    (width * 3 + 3) & !3
}

/// Write top-down RGB `pixels` as an uncompressed 24-bit BMP.
///
/// Rows are stored bottom-up unless `top_down` is set. `gap` extra bytes
/// are inserted between the headers and the pixel array.
pub fn encode_rgb(pixels: &[u8], width: usize, height: usize, top_down: bool, gap: usize) -> Vec<u8> {
    assert_eq!(pixels.len(), width * height * 3);
    let row_stride = stride(width);
    let pixel_data_size = row_stride * height;
    let data_offset = 54 + gap;
    let file_size = data_offset + pixel_data_size;

    let mut out = Vec::with_capacity(file_size);
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(data_offset as u32).to_le_bytes());

    // BITMAPINFOHEADER (40 bytes)
    let signed_height = if top_down {
        -(height as i32)
    } else {
        height as i32
    };
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&signed_height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // 72 DPI
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    out.extend(std::iter::repeat_n(0xAAu8, gap));

    let pad_bytes = row_stride - width * 3;
    let stored_rows: Vec<usize> = if top_down {
        (0..height).collect()
    } else {
        (0..height).rev().collect()
    };
    for row in stored_rows {
        for col in 0..width {
            let off = (row * width + col) * 3;
            out.push(pixels[off + 2]);
            out.push(pixels[off + 1]);
            out.push(pixels[off]);
        }
        // Non-zero padding so a decoder reading it would show up in pixels.
        out.extend(std::iter::repeat_n(0xEEu8, pad_bytes));
    }

    assert_eq!(out.len(), file_size);
    out
}

pub fn set_u16(buf: &mut [u8], offset: usize, v: u16) {
    buf[offset..offset + 2].copy_from_slice(&v.to_le_bytes());
}

pub fn set_u32(buf: &mut [u8], offset: usize, v: u32) {
    buf[offset..offset + 4].copy_from_slice(&v.to_le_bytes());
}

pub fn set_i32(buf: &mut [u8], offset: usize, v: i32) {
    buf[offset..offset + 4].copy_from_slice(&v.to_le_bytes());
}

pub fn checkerboard(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 3;
            if (x + y) % 2 == 0 {
                pixels[off..off + 3].copy_from_slice(&[200, 220, 240]);
            } else {
                pixels[off..off + 3].copy_from_slice(&[10, 40, 70]);
            }
        }
    }
    pixels
}

pub fn noise_pattern(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 3];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

/// Each pixel encodes its own coordinates: (x, y, x ^ y).
pub fn coordinate_pattern(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(w * h * 3);
    for y in 0..h {
        for x in 0..w {
            pixels.extend_from_slice(&[x as u8, y as u8, (x ^ y) as u8]);
        }
    }
    pixels
}
