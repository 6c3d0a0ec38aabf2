/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use retouch_core::pixel::Pixel;
use retouch_image::histogram::HistogramChannel;
use retouch_image::image::Image;

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
fn pixels_are_row_major() {
    let image = two_by_two();

    assert_eq!(image.pixel_at(0, 1).unwrap(), Pixel::new(4, 5, 6));
    assert_eq!(image.pixel_at(1, 0).unwrap(), Pixel::new(7, 8, 9));
}

#[test]
fn red_histogram_has_every_bucket() {
    let image = two_by_two();
    let histogram = image.histogram(HistogramChannel::Red);

    assert_eq!(histogram.buckets().len(), 256);
    assert_eq!(histogram.count(1), 1);
    assert_eq!(histogram.count(2), 0);
    assert_eq!(histogram.total(), 4);
}

#[test]
fn single_value_region() {
    let image = Image::fill(Pixel::new(1, 0, 0), 1, 1, 255).unwrap();
    let histogram = image.histogram(HistogramChannel::Red);

    assert_eq!(histogram.count(1), 1);
    assert_eq!(histogram.iter().filter(|(_, count)| *count > 0).count(), 1);
}
