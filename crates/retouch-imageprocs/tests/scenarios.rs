/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use retouch_core::pixel::Pixel;
use retouch_image::codecs::ppm::{decode_ppm, save_ppm};
use retouch_image::image::Image;
use retouch_image::store::ImageStore;
use retouch_image::traits::OperationsTrait;
use retouch_imageprocs::brighten::Brighten;
use retouch_imageprocs::color_matrix::{ColorFilter, ColorMatrix};
use retouch_imageprocs::convolve::{Convolve, Kernel};
use retouch_imageprocs::flip::{Flip, FlipDirection};
use retouch_imageprocs::grayscale::{GrayScale, GrayScaleMethod};

fn two_by_two() -> Image {
    let pixels = vec![
        Pixel::new(1, 2, 3),
        Pixel::new(4, 5, 6),
        Pixel::new(7, 8, 9),
        Pixel::new(10, 11, 12),
    ];
    Image::new(2, 2, 255, pixels).unwrap()
}

#[test]
fn grayscale_red() {
    let gray = GrayScale::new(GrayScaleMethod::Red)
        .execute(&two_by_two())
        .unwrap();

    assert_eq!(gray.pixel_at(0, 0).unwrap(), Pixel::new(1, 1, 1));
    assert_eq!(gray.pixel_at(1, 1).unwrap(), Pixel::new(10, 10, 10));
}

#[test]
fn brightness_clamps() {
    let bright = Brighten::new(200).execute(&two_by_two()).unwrap();

    assert_eq!(bright.pixel_at(0, 0).unwrap(), Pixel::new(201, 202, 203));
    assert_eq!(bright.pixel_at(1, 1).unwrap(), Pixel::new(210, 211, 212));

    let saturated = Brighten::new(4000).execute(&two_by_two()).unwrap();
    assert!(saturated.pixels().iter().all(|p| *p == Pixel::gray(255)));

    let dark = Brighten::new(-50).execute(&two_by_two()).unwrap();
    assert!(dark.pixels().iter().all(|p| *p == Pixel::BLACK));
}

#[test]
fn sepia() {
    let image = Image::fill(Pixel::new(1, 2, 3), 1, 1, 255).unwrap();
    let sepia = ColorMatrix::new(ColorFilter::Sepia).execute(&image).unwrap();

    assert_eq!(sepia.pixel_at(0, 0).unwrap(), Pixel::new(2, 2, 1));
}

#[test]
fn operations_keep_metadata() {
    let image = Image::fill(Pixel::new(40, 50, 60), 6, 4, 100).unwrap();

    let operations: Vec<Box<dyn OperationsTrait>> = vec![
        Box::new(Flip::new(FlipDirection::Vertical)),
        Box::new(GrayScale::new(GrayScaleMethod::Luma)),
        Box::new(Brighten::new(-10)),
        Box::new(ColorMatrix::new(ColorFilter::Luma)),
        Box::new(Convolve::new(Kernel::Blur)),
        Box::new(Convolve::new(Kernel::Sharpen)),
    ];
    for operation in operations {
        let output = operation.execute(&image).unwrap();

        assert_eq!(output.dimensions(), (6, 4), "{}", operation.name());
        assert_eq!(output.max_value(), 100, "{}", operation.name());
    }
}

#[test]
fn store_pipeline_through_ppm() {
    let store = ImageStore::new();
    store.put("koala", decode_ppm(&save_ppm(&two_by_two()).unwrap()).unwrap());

    store
        .apply("koala", "koala-flipped", &Flip::new(FlipDirection::Horizontal))
        .unwrap();
    store
        .apply("koala-flipped", "koala-gray", &GrayScale::new(GrayScaleMethod::Blue))
        .unwrap();

    let gray = store.get("koala-gray").unwrap();
    assert_eq!(gray.pixel_at(0, 0).unwrap(), Pixel::gray(6));
    assert_eq!(store.len(), 3);
    // the source image is untouched
    assert_eq!(*store.get("koala").unwrap(), two_by_two());
}
