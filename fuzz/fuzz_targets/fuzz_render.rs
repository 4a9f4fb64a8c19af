#![no_main]
use std::io::Cursor;

use bmptext::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_memory_bytes: Some(16 << 20),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(Cursor::new(data))
        .with_limits(&limits)
        .decode()
    else {
        return;
    };

    let mut out = Vec::new();
    render_image(&decoded, RenderOptions::default(), &mut out).expect("render to Vec");

    // One line per row, one glyph per pixel
    if decoded.pixels.is_empty() {
        assert!(out.is_empty());
        return;
    }
    let text = String::from_utf8(out).expect("ascii output");
    assert_eq!(text.lines().count(), decoded.height() as usize);
    for line in text.lines() {
        assert_eq!(line.len(), decoded.width() as usize);
    }
});
