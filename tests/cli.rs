// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn renders_a_julia_set_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("julia.png");
    Command::cargo_bin("juliabrot")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "64x36", "-i", "64", "-t", "1"])
        .args(&["-c", "-0.8,0.156"])
        .assert()
        .success();
    let img = image::open(&out).unwrap().to_rgb();
    assert_eq!(img.dimensions(), (64, 36));
}

#[test]
fn renders_a_mandelbrot_set_to_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mandel.ppm");
    Command::cargo_bin("juliabrot")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "32x18", "-m", "mandelbrot"])
        .args(&["-z", "2", "--offset", "-0.5,0.25", "-t", "1"])
        .assert()
        .success();
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"P6"));
}

#[test]
fn refuses_an_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mandel.gif");
    Command::cargo_bin("juliabrot")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "8x8", "-t", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format"));
    assert!(!out.exists());
}

#[test]
fn refuses_a_non_positive_zoom() {
    Command::cargo_bin("juliabrot")
        .unwrap()
        .args(&["-o", "never.png", "-z", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Zoom must be a positive number"));
}

#[test]
fn refuses_a_malformed_size() {
    Command::cargo_bin("juliabrot")
        .unwrap()
        .args(&["-o", "never.png", "-s", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn requires_an_output_file() {
    Command::cargo_bin("juliabrot").unwrap().assert().failure();
}
