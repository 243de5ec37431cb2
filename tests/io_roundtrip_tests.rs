#![cfg(feature = "cli")]

use fauxtoshop::io::{load_grid, save_grid};
use fauxtoshop::params::{BlurParams, EdgeParams, GreenScreenParams, Point};
use fauxtoshop::pixel::{BLACK, GREEN, WHITE};
use fauxtoshop::{apply_batch, Filter, FilterOutput, PixelGrid};
use pretty_assertions::assert_eq;

fn sample_grid() -> PixelGrid {
    PixelGrid::from_rows(&[
        vec![0xFF0000, 0x00FF00, 0x0000FF],
        vec![0x123456, WHITE, BLACK],
    ])
    .unwrap()
}

#[test]
fn test_png_round_trip_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.png");

    let grid = sample_grid();
    save_grid(&grid, &path).unwrap();
    let loaded = load_grid(&path).unwrap();

    assert_eq!(loaded, grid);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.png");
    assert!(save_grid(&sample_grid(), &path).is_err());
}

#[test]
fn test_filter_chain_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let background_path = dir.path().join("background.png");
    let sticker_path = dir.path().join("sticker.png");

    save_grid(&PixelGrid::filled(4, 4, WHITE), &background_path).unwrap();
    let sticker = PixelGrid::from_rows(&[vec![GREEN, 0xFF0000], vec![0x00FFFF, GREEN]]).unwrap();
    save_grid(&sticker, &sticker_path).unwrap();

    let background = load_grid(&background_path).unwrap();
    let filter = Filter::GreenScreen {
        sticker: load_grid(&sticker_path).unwrap(),
        params: GreenScreenParams::new(Point::new(1, 1), 10).unwrap(),
    };
    let composite = filter.apply(&background).into_image().unwrap();

    let mut expected = PixelGrid::filled(4, 4, WHITE);
    expected.set(1, 2, 0xFF0000);
    expected.set(2, 1, 0x00FFFF);
    assert_eq!(composite, expected);

    let out_path = dir.path().join("composite.png");
    save_grid(&composite, &out_path).unwrap();
    assert_eq!(load_grid(&out_path).unwrap(), expected);
}

#[test]
fn test_batch_over_loaded_images() {
    let dir = tempfile::tempdir().unwrap();
    let mut images = Vec::new();
    for (i, color) in [0x336699u32, 0xABCDEF, 0x000000].into_iter().enumerate() {
        let path = dir.path().join(format!("img{}.png", i));
        save_grid(&PixelGrid::filled(3 + i, 5, color), &path).unwrap();
        images.push(load_grid(&path).unwrap());
    }

    let blurred = apply_batch(&Filter::GaussianBlur(BlurParams::new(2).unwrap()), &images);
    for (output, original) in blurred.iter().zip(&images) {
        assert_eq!(output, &FilterOutput::Image(original.clone()));
    }

    let edges = apply_batch(&Filter::EdgeDetect(EdgeParams::new(1).unwrap()), &images);
    for (output, original) in edges.iter().zip(&images) {
        assert_eq!(
            output,
            &FilterOutput::Image(PixelGrid::filled(original.rows(), original.cols(), WHITE))
        );
    }
}
