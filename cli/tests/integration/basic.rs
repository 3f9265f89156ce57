//! Basic functionality integration tests for the see CLI.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_stdin_echo() {
    let mut cmd = cargo_bin_cmd!("see");
    cmd.write_stdin("hello\nworld\n")
        .assert()
        .success()
        .stdout("hello\nworld\n")
        .stderr("");
}

#[test]
fn test_empty_stdin_produces_empty_output() {
    let mut cmd = cargo_bin_cmd!("see");
    cmd.write_stdin("").assert().success().stdout("").stderr("");
}

#[test]
fn test_stdin_binary_passthrough() {
    // Non-UTF8 bytes, embedded NULs, CR/LF pairs: nothing may be translated
    let data: Vec<u8> = vec![0x00, 0xff, 0xfe, 0x0d, 0x0a, 0x00, 0x1a, 0x80];

    let output = cargo_bin_cmd!("see")
        .write_stdin(data.clone())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, data);
}

#[test]
fn test_single_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("test.txt"), "hello world").unwrap();

    let mut cmd = cargo_bin_cmd!("see");
    cmd.arg(dir.path().join("test.txt"))
        .assert()
        .success()
        .stdout("hello world")
        .stderr("");
}

#[test]
fn test_empty_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();

    let mut cmd = cargo_bin_cmd!("see");
    cmd.arg(dir.path().join("empty.txt"))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_files_concatenated_in_argument_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "first\n").unwrap();
    fs::write(dir.path().join("b.txt"), "second\n").unwrap();
    fs::write(dir.path().join("c.txt"), "third\n").unwrap();

    let mut cmd = cargo_bin_cmd!("see");
    cmd.arg(dir.path().join("c.txt"))
        .arg(dir.path().join("a.txt"))
        .arg(dir.path().join("b.txt"))
        .assert()
        .success()
        .stdout("third\nfirst\nsecond\n");
}

#[test]
fn test_binary_files_concatenated_byte_exact() {
    let dir = TempDir::new().unwrap();
    let part1: Vec<u8> = (0..=255u8).collect();
    let part2: Vec<u8> = vec![0x00; 1000];
    fs::write(dir.path().join("p1.bin"), &part1).unwrap();
    fs::write(dir.path().join("p2.bin"), &part2).unwrap();

    let mut expected = part1;
    expected.extend_from_slice(&part2);

    let output = cargo_bin_cmd!("see")
        .arg(dir.path().join("p1.bin"))
        .arg(dir.path().join("p2.bin"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, expected);
}

#[test]
fn test_dash_mixes_stdin_with_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("head.txt"), "HEAD|").unwrap();
    fs::write(dir.path().join("tail.txt"), "|TAIL").unwrap();

    let mut cmd = cargo_bin_cmd!("see");
    cmd.arg(dir.path().join("head.txt"))
        .arg("-")
        .arg(dir.path().join("tail.txt"))
        .write_stdin("MIDDLE")
        .assert()
        .success()
        .stdout("HEAD|MIDDLE|TAIL");
}

#[test]
fn test_file_larger_than_transfer_buffer() {
    let dir = TempDir::new().unwrap();
    // Several 64 KiB chunks plus an uneven tail
    let data: Vec<u8> = (0..300_000u32).map(|i| (i % 253) as u8).collect();
    fs::write(dir.path().join("big.bin"), &data).unwrap();

    let output = cargo_bin_cmd!("see")
        .arg(dir.path().join("big.bin"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, data);
}

#[test]
fn test_idempotent_on_immutable_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stable.txt"), "same every time\n").unwrap();

    let first = cargo_bin_cmd!("see")
        .arg(dir.path().join("stable.txt"))
        .output()
        .unwrap();
    let second = cargo_bin_cmd!("see")
        .arg(dir.path().join("stable.txt"))
        .output()
        .unwrap();

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_same_file_listed_twice() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("twice.txt"), "ab").unwrap();

    let mut cmd = cargo_bin_cmd!("see");
    cmd.arg(dir.path().join("twice.txt"))
        .arg(dir.path().join("twice.txt"))
        .assert()
        .success()
        .stdout("abab");
}
