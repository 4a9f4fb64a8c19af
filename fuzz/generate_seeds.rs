#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, bpp: u16, header_size: u32) -> Vec<u8> {
    let stride = (width.unsigned_abs() as usize * usize::from(bpp / 8)).div_ceil(4) * 4;
    let offset = 14 + header_size as usize;
    let size = offset + stride * height.unsigned_abs() as usize;
    let mut out = vec![0u8; size];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&(size as u32).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&(offset as u32).to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&header_size.to_le_bytes()); // DIB header size
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&bpp.to_le_bytes());
    if bpp == 32 {
        out[30..34].copy_from_slice(&3u32.to_le_bytes()); // BI_BITFIELDS
        out[54..58].copy_from_slice(&0x00ff_0000u32.to_le_bytes());
        out[58..62].copy_from_slice(&0x0000_ff00u32.to_le_bytes());
        out[62..66].copy_from_slice(&0x0000_00ffu32.to_le_bytes());
        out[66..70].copy_from_slice(&0xff00_0000u32.to_le_bytes());
        out[70..74].copy_from_slice(&0x7352_4742u32.to_le_bytes()); // sRGB
    }
    for (i, b) in out[offset..].iter_mut().enumerate() {
        *b = (i * 37) as u8;
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bgr_3x2.bmp"), bmp(3, 2, 24, 40)).unwrap();
    fs::write(format!("{dir}/bgr_4x2_topdown.bmp"), bmp(4, -2, 24, 40)).unwrap();
    fs::write(format!("{dir}/bgra_2x2.bmp"), bmp(2, 2, 32, 124)).unwrap();
    fs::write(format!("{dir}/bgra_3x1_topdown.bmp"), bmp(3, -1, 32, 124)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut v4 = bmp(2, 2, 32, 108);
    v4.truncate(70);
    fs::write(format!("{dir}/bgra_v4_header.bin"), v4).unwrap();

    println!("Generated seed corpus in {dir}/");
}
