/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - a row major grid of [`Pixel`]s
//!     - with a fixed width and height
//!         - and the maximum channel value it was declared with
//!
//! Images never change after construction, every operation
//! allocates a new image which makes sharing one image between
//! several derived edits safe.
use std::fmt::{Debug, Formatter};
use std::slice::ChunksExact;

use retouch_core::pixel::Pixel;

use crate::errors::ImageErrors;
use crate::histogram::{Histogram, HistogramChannel};

/// Represents a single image
#[derive(Clone, Eq, PartialEq)]
pub struct Image {
    width:     usize,
    height:    usize,
    max_value: usize,
    pixels:    Vec<Pixel>
}

impl Image {
    /// Create a new image from row major pixels
    ///
    /// # Errors
    /// - Width, height or max value of zero
    /// - `pixels.len()` not equal to `width*height`
    ///
    /// # Example
    /// ```
    /// use retouch_core::pixel::Pixel;
    /// use retouch_image::image::Image;
    ///
    /// let image = Image::new(2, 1, 255, vec![Pixel::new(1, 2, 3), Pixel::BLACK]).unwrap();
    /// assert_eq!(image.dimensions(), (2, 1));
    ///
    /// assert!(Image::new(0, 1, 255, vec![]).is_err());
    /// ```
    pub fn new(
        width: usize, height: usize, max_value: usize, pixels: Vec<Pixel>
    ) -> Result<Image, ImageErrors> {
        if width == 0 || height == 0 {
            return Err(ImageErrors::InvalidDimensions(width, height));
        }
        if max_value == 0 {
            return Err(ImageErrors::InvalidMaxValue(max_value));
        }
        let expected = width
            .checked_mul(height)
            .ok_or(ImageErrors::InvalidDimensions(width, height))?;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(Image {
            width,
            height,
            max_value,
            pixels
        })
    }

    /// Create an image from a grid of rows
    ///
    /// Every row must have the same length, which becomes the width
    pub fn from_rows(rows: Vec<Vec<Pixel>>, max_value: usize) -> Result<Image, ImageErrors> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(ImageErrors::DimensionsMisMatch(width, row.len()));
        }
        Image::new(width, height, max_value, rows.concat())
    }

    /// Create an image where each pixel is the result of calling `func`
    /// with its `(row, col)` position
    ///
    /// # Example
    /// ```
    /// use retouch_core::pixel::Pixel;
    /// use retouch_image::image::Image;
    ///
    /// let gradient = Image::from_fn(4, 2, 255, |row, col| Pixel::gray((row * 4 + col) as i32)).unwrap();
    /// assert_eq!(gradient.pixel_at(1, 3).unwrap(), Pixel::gray(7));
    /// ```
    pub fn from_fn<F>(
        width: usize, height: usize, max_value: usize, mut func: F
    ) -> Result<Image, ImageErrors>
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let mut pixels = allocate(width, height)?;

        for row in 0..height {
            for col in 0..width {
                pixels.push(func(row, col));
            }
        }
        Image::new(width, height, max_value, pixels)
    }

    /// Create an image with every pixel set to `pixel`
    pub fn fill(
        pixel: Pixel, width: usize, height: usize, max_value: usize
    ) -> Result<Image, ImageErrors> {
        let mut pixels = allocate(width, height)?;
        pixels.resize(width * height, pixel);

        Image::new(width, height, max_value, pixels)
    }

    /// Create an image from interleaved red, green and blue samples
    ///
    /// Samples are clamped to `[0,255]` on the way in.
    pub fn from_samples(
        width: usize, height: usize, max_value: usize, samples: &[i32]
    ) -> Result<Image, ImageErrors> {
        let expected = width.saturating_mul(height).saturating_mul(3);

        if samples.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, samples.len()));
        }
        let pixels = samples
            .chunks_exact(3)
            .map(|x| Pixel::new(x[0], x[1], x[2]))
            .collect();

        Image::new(width, height, max_value, pixels)
    }

    /// Create an image from the raw output of an external decoder
    ///
    /// `data` holds interleaved 8 bit red, green and blue samples,
    /// the resulting image has a maximum value of 255.
    pub fn from_rgb8(width: usize, height: usize, data: &[u8]) -> Result<Image, ImageErrors> {
        let expected = width.saturating_mul(height).saturating_mul(3);

        if data.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, data.len()));
        }
        let pixels = data
            .chunks_exact(3)
            .map(|x| Pixel::from_channels([x[0], x[1], x[2]]))
            .collect();

        Image::new(width, height, 255, pixels)
    }

    /// Return interleaved 8 bit red, green and blue samples
    /// for an external encoder
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(Pixel::channels).collect()
    }

    /// Create a new image with the same width, height and max value
    /// as this one but different pixels
    ///
    /// # Errors
    /// If `pixels` does not contain `width*height` items
    pub fn with_pixels(&self, pixels: Vec<Pixel>) -> Result<Image, ImageErrors> {
        Image::new(self.width, self.height, self.max_value, pixels)
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// The maximum channel value the image was declared with
    pub const fn max_value(&self) -> usize {
        self.max_value
    }

    /// Return all pixels in row major order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate over the image rows, top to bottom
    pub fn rows(&self) -> ChunksExact<'_, Pixel> {
        self.pixels.chunks_exact(self.width)
    }

    /// Return the pixel at `row` (vertical) and `col` (horizontal)
    ///
    /// # Errors
    /// If `row >= height` or `col >= width`
    pub fn pixel_at(&self, row: usize, col: usize) -> Result<Pixel, ImageErrors> {
        if row >= self.height || col >= self.width {
            return Err(ImageErrors::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height
            });
        }
        Ok(self.pixels[row * self.width + col])
    }

    /// Count how often each value in `0..=255` occurs in `channel`
    ///
    /// # Example
    /// ```
    /// use retouch_core::pixel::Pixel;
    /// use retouch_image::histogram::HistogramChannel;
    /// use retouch_image::image::Image;
    ///
    /// let image = Image::fill(Pixel::new(1, 2, 6), 10, 10, 255).unwrap();
    /// let histogram = image.histogram(HistogramChannel::Intensity);
    ///
    /// assert_eq!(histogram.count(3), 100);
    /// assert_eq!(histogram.buckets().len(), 256);
    /// ```
    pub fn histogram(&self, channel: HistogramChannel) -> Histogram {
        Histogram::new(&self.pixels, channel)
    }
}

/// An empty buffer able to hold `width*height` pixels
///
/// Fails instead of panicking when the dimensions are zero, overflow
/// or can't be allocated.
fn allocate(width: usize, height: usize) -> Result<Vec<Pixel>, ImageErrors> {
    if width == 0 || height == 0 {
        return Err(ImageErrors::InvalidDimensions(width, height));
    }
    let count = width
        .checked_mul(height)
        .ok_or(ImageErrors::InvalidDimensions(width, height))?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|_| ImageErrors::InvalidDimensions(width, height))?;

    Ok(pixels)
}

impl Debug for Image {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("max_value", &self.max_value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use retouch_core::pixel::Pixel;

    use crate::errors::ImageErrors;
    use crate::image::Image;

    fn two_by_three() -> Image {
        Image::from_fn(3, 2, 255, |row, col| Pixel::gray((row * 10 + col) as i32)).unwrap()
    }

    #[test]
    fn rejects_invalid_construction() {
        assert!(matches!(
            Image::new(0, 2, 255, vec![]),
            Err(ImageErrors::InvalidDimensions(0, 2))
        ));
        assert!(matches!(
            Image::new(1, 1, 0, vec![Pixel::BLACK]),
            Err(ImageErrors::InvalidMaxValue(0))
        ));
        assert!(matches!(
            Image::new(2, 2, 255, vec![Pixel::BLACK; 3]),
            Err(ImageErrors::DimensionsMisMatch(4, 3))
        ));
    }

    #[test]
    fn oversized_dimensions_are_errors() {
        assert!(matches!(
            Image::fill(Pixel::BLACK, usize::MAX, 2, 255),
            Err(ImageErrors::InvalidDimensions(usize::MAX, 2))
        ));
        assert!(matches!(
            Image::from_fn(usize::MAX, 2, 255, |_, _| Pixel::BLACK),
            Err(ImageErrors::InvalidDimensions(usize::MAX, 2))
        ));
        // the pixel count fits a usize but its size in bytes does not
        assert!(Image::fill(Pixel::BLACK, usize::MAX / 2, 2, 255).is_err());
        assert!(matches!(
            Image::from_fn(0, 5, 255, |_, _| unreachable!()),
            Err(ImageErrors::InvalidDimensions(0, 5))
        ));
    }

    #[test]
    fn bounds_are_checked_per_axis() {
        let image = two_by_three();

        assert_eq!(image.pixel_at(1, 2).unwrap(), Pixel::gray(12));
        // row is bounded by the height, col by the width
        assert!(matches!(
            image.pixel_at(2, 0),
            Err(ImageErrors::OutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(image.pixel_at(0, 3).is_err());
        assert!(image.pixel_at(1, 3).is_err());
    }

    #[test]
    fn rows_are_width_long() {
        let image = two_by_three();
        let rows: Vec<&[Pixel]> = image.rows().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], [Pixel::gray(10), Pixel::gray(11), Pixel::gray(12)]);
    }

    #[test]
    fn from_rows_requires_rectangular_grid() {
        let ragged = vec![vec![Pixel::BLACK; 2], vec![Pixel::BLACK; 3]];

        assert!(Image::from_rows(ragged, 255).is_err());

        let image = Image::from_rows(vec![vec![Pixel::BLACK; 2]; 3], 255).unwrap();
        assert_eq!(image.dimensions(), (2, 3));
    }

    #[test]
    fn samples_are_clamped() {
        let image = Image::from_samples(1, 1, 100, &[-3, 400, 20]).unwrap();

        assert_eq!(image.pixel_at(0, 0).unwrap(), Pixel::new(0, 255, 20));
        assert_eq!(image.max_value(), 100);
    }

    #[test]
    fn rgb8_adapter_preserves_layout() {
        let data = [1, 2, 3, 4, 5, 6];
        let image = Image::from_rgb8(2, 1, &data).unwrap();

        assert_eq!(image.pixel_at(0, 1).unwrap(), Pixel::new(4, 5, 6));
        assert_eq!(image.to_rgb8(), data);
        assert!(Image::from_rgb8(2, 2, &data).is_err());
    }
}
