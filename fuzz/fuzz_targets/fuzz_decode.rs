#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the header claims
    let _ = zenbmp::ImageInfo::from_bytes(data);
    let _ = zenbmp::decode_bmp(data, enough::Unstoppable);
    let _ = zenbmp::DecodeRequest::new(data)
        .with_strictness(zenbmp::Strictness::Strict)
        .decode(enough::Unstoppable);
});
