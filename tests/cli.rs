extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn writes_a_ppm_next_to_the_base_name() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("small");

    Command::cargo_bin("mandel")
        .unwrap()
        .arg("--output")
        .arg(&base)
        .args(&["--size", "8x6", "--iterations", "20"])
        .assert()
        .success();

    let written = fs::read(dir.path().join("small.ppm")).unwrap();
    let header = b"P6\n8 6\n255\n";
    assert_eq!(&written[..header.len()], &header[..]);
    assert_eq!(written.len(), header.len() + 8 * 6 * 3);
}

#[test]
fn custom_viewport_with_negative_corners() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("zoom");

    Command::cargo_bin("mandel")
        .unwrap()
        .arg("-o")
        .arg(&base)
        .args(&["-s", "4x4", "-l", "-2,-1.5", "-r", "1,1.5", "-i", "10"])
        .assert()
        .success();

    assert!(dir.path().join("zoom.ppm").exists());
}

#[test]
fn one_pixel_wide_image_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("thin");

    Command::cargo_bin("mandel")
        .unwrap()
        .arg("-o")
        .arg(&base)
        .args(&["-s", "1x5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid resolution"));

    assert!(!dir.path().join("thin.ppm").exists());
}

#[test]
fn inverted_viewport_is_refused() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("mandel")
        .unwrap()
        .arg("-o")
        .arg(dir.path().join("flipped"))
        .args(&["-s", "4x4", "-l", "1,1", "-r", "-1,-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid viewport"));
}

#[test]
fn zero_iterations_is_a_usage_error() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-i", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid iteration budget 0"));
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("mandel")
        .unwrap()
        .arg("-o")
        .arg(dir.path().join("missing").join("image"))
        .args(&["-s", "4x4", "-i", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not write image"));
}
