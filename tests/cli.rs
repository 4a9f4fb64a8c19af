mod common;

use std::path::PathBuf;
use std::process::Command;

use common::*;

fn fixtures(dir: &tempfile::TempDir) -> (PathBuf, PathBuf) {
    let good = dir.path().join("good.bmp");
    let bmp = TestBmp::bgra(
        2,
        2,
        vec![
            row32(&[[0, 0, 0, 0], opaque(GREY)]),
            row32(&[opaque(BLACK), opaque(WHITE)]),
        ],
    );
    std::fs::write(&good, bmp.encode()).unwrap();

    let bad = dir.path().join("bad.bmp");
    std::fs::write(&bad, b"not a bitmap at all").unwrap();
    (good, bad)
}

#[test]
fn prints_each_file_with_separators() {
    let dir = tempfile::tempdir().unwrap();
    let (good, _) = fixtures(&dir);

    let output = Command::new(env!("CARGO_BIN_EXE_bmptext"))
        .arg("--spaces")
        .arg(&good)
        .arg(&good)
        .output()
        .expect("spawn bmptext");

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text, "- ? \nB W \n\n\n- ? \nB W \n\n\n");
}

#[test]
fn leading_one_enables_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let (good, _) = fixtures(&dir);

    let output = Command::new(env!("CARGO_BIN_EXE_bmptext"))
        .arg("1")
        .arg(&good)
        .output()
        .expect("spawn bmptext");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "- ? \nB W \n\n\n");
}

#[test]
fn bad_file_is_reported_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let (good, bad) = fixtures(&dir);

    let output = Command::new(env!("CARGO_BIN_EXE_bmptext"))
        .arg(&bad)
        .arg(&good)
        .output()
        .expect("spawn bmptext");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "\n\n-?\nBW\n\n\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized file format"), "{stderr}");
}

#[test]
fn no_files_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_bmptext"))
        .output()
        .expect("spawn bmptext");
    assert_eq!(output.status.code(), Some(2));
}
