use assert_cmd::Command;
use image::{ImageBuffer, Rgb, RgbImage};
use predicates::prelude::*;
use std::fs;

fn gradient(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let r = ((x * 255) / width) as u8;
        let g = ((y * 255) / height) as u8;
        let b = (((x + y) * 127) / (width + height)) as u8;
        Rgb([r, g, b])
    })
}

fn recarve() -> Command {
    Command::cargo_bin("recarve").unwrap()
}

#[test]
fn carves_to_the_requested_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    gradient(8, 6).save(&input).unwrap();
    let output = dir.path().join("out.png");

    recarve()
        .arg(&input)
        .arg("5")
        .arg("4")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgb8();
    assert_eq!(carved.dimensions(), (5, 4));
}

#[test]
fn default_output_lands_beside_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    gradient(7, 5).save(&input).unwrap();

    recarve().arg(&input).arg("6").arg("5").assert().success();

    let derived = dir.path().join("carved_image.jpeg");
    let carved = image::open(&derived).unwrap().to_rgb8();
    assert_eq!(carved.dimensions(), (6, 5));
}

#[test]
fn dump_seams_writes_one_marked_frame_per_removal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    gradient(8, 6).save(&input).unwrap();
    let output = dir.path().join("out.png");
    let seams = dir.path().join("seams");

    recarve()
        .arg(&input)
        .arg("6")
        .arg("6")
        .arg("-o")
        .arg(&output)
        .arg("--dump-seams")
        .arg(&seams)
        .assert()
        .success();

    let first = image::open(seams.join("seam-0000.png")).unwrap().to_rgb8();
    assert_eq!(first.dimensions(), (8, 6));
    let second = image::open(seams.join("seam-0001.png")).unwrap().to_rgb8();
    assert_eq!(second.dimensions(), (7, 6));
    assert_eq!(fs::read_dir(&seams).unwrap().count(), 2);
}

#[test]
fn rejects_a_zero_target() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    gradient(4, 4).save(&input).unwrap();

    recarve()
        .arg(&input)
        .arg("0")
        .arg("4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn rejects_a_non_numeric_target() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    gradient(4, 4).save(&input).unwrap();

    recarve()
        .arg(&input)
        .arg("4")
        .arg("tall")
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn rejects_targets_larger_than_the_source() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    gradient(8, 6).save(&input).unwrap();

    recarve()
        .arg(&input)
        .arg("10")
        .arg("6")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot enlarge"));
}

#[test]
fn reports_undecodable_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("not_an_image.png");
    fs::write(&input, "this is prose, not pixels").unwrap();

    recarve()
        .arg(&input)
        .arg("2")
        .arg("2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load image"));
}
