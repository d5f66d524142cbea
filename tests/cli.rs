use assert_cmd::Command;
use image::{ImageBuffer, Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

// A 6x4 image: dark everywhere except a bright vertical band in columns
// 3 and 4.
fn banded() -> RgbaImage {
    ImageBuffer::from_fn(6, 4, |x, _| {
        if x == 3 || x == 4 {
            Rgba([250, 250, 250, 255])
        } else {
            Rgba([20, 20, 20, 255])
        }
    })
}

fn write_input(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("in.png");
    banded().save(&path).unwrap();
    path
}

fn read(path: &Path) -> RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

fn seamcarve() -> Command {
    Command::cargo_bin("seamcarve").unwrap()
}

#[test]
fn reduce_shrinks_both_axes() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("out.png");

    seamcarve()
        .arg("reduce")
        .arg(&input)
        .arg(&output)
        .args(["--width", "2", "--height", "1"])
        .assert()
        .success();

    let carved = read(&output);
    assert_eq!(carved.dimensions(), (4, 3));
    // The band is what the carver should keep.
    for y in 0..3 {
        let bright = (0..4)
            .filter(|x| carved.get_pixel(*x, y)[0] == 250)
            .count();
        assert_eq!(bright, 2);
    }
}

#[test]
fn reduce_without_deltas_copies_the_image() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("same.png");

    seamcarve()
        .arg("reduce")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(read(&output), banded());
}

#[test]
fn reduce_refuses_the_whole_width() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("never.png");

    seamcarve()
        .arg("reduce")
        .arg(&input)
        .arg(&output)
        .args(["--width", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot remove 6 pixels from a width of 6"));

    assert!(!output.exists());
}

#[test]
fn energy_map_is_grayscale_and_full_range() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("energy.png");

    seamcarve()
        .arg("energy")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let energy = read(&output);
    assert_eq!(energy.dimensions(), (6, 4));
    assert!(energy.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
    assert!(energy.pixels().any(|p| p[0] == 255));
    // Columns 0 and 1 only ever see the flat dark area.
    assert_eq!(energy.get_pixel(0, 0)[0], 0);
}

#[test]
fn seam_is_painted_red() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("seam.png");

    seamcarve()
        .arg("seam")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let painted = read(&output);
    for y in 0..4 {
        let red = (0..6)
            .filter(|x| *painted.get_pixel(*x, y) == Rgba([255, 0, 0, 255]))
            .count();
        assert_eq!(red, 1);
    }
}

#[test]
fn horizontal_seam_crosses_every_column() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("hseam.png");

    seamcarve()
        .args(["seam", "--horizontal"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let painted = read(&output);
    for x in 0..6 {
        let red = (0..4)
            .filter(|y| *painted.get_pixel(x, *y) == Rgba([255, 0, 0, 255]))
            .count();
        assert_eq!(red, 1);
    }
}

#[test]
fn negative_inverts_colors() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("negative.png");

    seamcarve()
        .arg("negative")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let negative = read(&output);
    assert_eq!(*negative.get_pixel(0, 0), Rgba([235, 235, 235, 255]));
    assert_eq!(*negative.get_pixel(3, 0), Rgba([5, 5, 5, 255]));
}

#[test]
fn missing_input_fails_cleanly() {
    let dir = TempDir::new().unwrap();

    seamcarve()
        .arg("energy")
        .arg(dir.path().join("nothing.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("seamcarve:"));
}
