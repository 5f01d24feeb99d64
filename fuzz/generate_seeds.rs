#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp24(width: i32, height: i32, offset: u32, pixel_bytes: usize) -> Vec<u8> {
    let file_size = offset as usize + pixel_bytes;
    let mut bmp = vec![0u8; file_size];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(file_size as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&offset.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&(pixel_bytes as u32).to_le_bytes()); // image size
    for (i, b) in bmp[offset as usize..].iter_mut().enumerate() {
        *b = (i * 37) as u8;
    }
    bmp
}

fn main() {
    use std::fs;
    for target in ["fuzz_decode", "fuzz_layouts"] {
        let dir = format!("fuzz/corpus/{target}");
        fs::create_dir_all(&dir).unwrap();

        // 1x1 bottom-up: 3 bytes + 1 padding
        fs::write(format!("{dir}/bmp_1x1.bmp"), bmp24(1, 1, 54, 4)).unwrap();
        // 2x2 bottom-up: rows of 6 padded to 8
        fs::write(format!("{dir}/bmp_2x2.bmp"), bmp24(2, 2, 54, 16)).unwrap();
        // 3x2 top-down with a gap before the pixel array
        fs::write(format!("{dir}/bmp_3x2_topdown.bmp"), bmp24(3, -2, 64, 24)).unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
        let mut truncated = bmp24(4, 4, 54, 48);
        truncated.truncate(80);
        fs::write(format!("{dir}/bmp_truncated.bmp"), truncated).unwrap();
        let mut indexed = bmp24(2, 2, 54, 16);
        indexed[28] = 8;
        fs::write(format!("{dir}/bmp_8bit.bmp"), indexed).unwrap();
    }

    println!("Generated seed corpora in fuzz/corpus/");
}
