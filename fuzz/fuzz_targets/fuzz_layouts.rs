#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::*;

fuzz_target!(|data: &[u8]| {
    // If it decodes, the native and RGB outputs must agree up to channel order
    let Ok(rgb) = decode_bmp(data, enough::Unstoppable) else {
        return;
    };
    let Ok(bgr) = decode_bmp_native(data, enough::Unstoppable) else {
        panic!("native decode failed where RGB decode succeeded");
    };

    assert_eq!(rgb.width, bgr.width);
    assert_eq!(rgb.height, bgr.height);
    assert_eq!(
        rgb.pixels().len(),
        rgb.width as usize * rgb.height as usize * 3
    );
    for (a, b) in rgb.pixels().chunks_exact(3).zip(bgr.pixels().chunks_exact(3)) {
        assert_eq!(a, [b[2], b[1], b[0]], "channel swap mismatch");
    }
});
