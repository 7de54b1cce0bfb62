//! Tests for reading files through the outcome chain.

use std::fs;
use std::io;
use std::path::PathBuf;

use pho::result::Outcome;
use read_file::read_relative;
use rstest::rstest;

fn scratch_directory(name: &str) -> PathBuf {
    let directory = std::env::temp_dir().join("pho-read-file-sample").join(name);
    fs::create_dir_all(&directory).expect("create scratch directory");
    directory
}

#[rstest]
fn reads_file_relative_to_directory() {
    let directory = scratch_directory("present");
    fs::write(directory.join("file.txt"), "hello\n").expect("write file");

    let text = read_relative(Outcome::ok(directory), "file.txt");
    assert_eq!(text.must_unwrap(), "hello\n");
}

#[rstest]
fn missing_file_is_an_io_error() {
    let directory = scratch_directory("missing");

    let failed = read_relative(Outcome::ok(directory), "not-there.txt").into_result();
    let error = failed.expect_err("missing file must fail");
    let io_error = error.downcast_ref::<io::Error>().expect("io error");
    assert_eq!(io_error.kind(), io::ErrorKind::NotFound);
}

#[rstest]
fn directory_error_short_circuits() {
    let unavailable = Outcome::err(io::Error::other("no working directory"));

    let failed = read_relative(unavailable, "file.txt").into_result();
    assert_eq!(
        failed.expect_err("directory error must propagate").to_string(),
        "no working directory"
    );
}

#[rstest]
fn invalid_utf8_is_a_decoding_error() {
    let directory = scratch_directory("binary");
    fs::write(directory.join("file.bin"), [0xff, 0xfe]).expect("write file");

    let failed = read_relative(Outcome::ok(directory), "file.bin").into_result();
    let error = failed.expect_err("invalid UTF-8 must fail");
    assert!(error.downcast_ref::<std::string::FromUtf8Error>().is_some());
}
