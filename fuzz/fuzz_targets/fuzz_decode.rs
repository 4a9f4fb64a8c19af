#![no_main]
use std::io::Cursor;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = bmptext::Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };
    // Must never panic, whatever the header claims
    let _ = bmptext::parse_headers(&mut Cursor::new(data));
    // Unlimited decode must reject short streams before allocating
    let _ = bmptext::decode_bmp(Cursor::new(data));
    let _ = bmptext::DecodeRequest::new(Cursor::new(data))
        .with_limits(&limits)
        .decode();
});
