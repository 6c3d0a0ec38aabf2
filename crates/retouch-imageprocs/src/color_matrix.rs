/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Perform a color matrix operation
//!
//! The red, green and blue channels of every pixel are multiplied by a 3*3 matrix
//!
//! The matrix is equivalent to the operation
//! ```text
//! red   = m[0][0]*r + m[0][1]*g + m[0][2]*b
//! green = m[1][0]*r + m[1][1]*g + m[1][2]*b
//! blue  = m[2][0]*r + m[2][1]*g + m[2][2]*b
//!```
//! Each result is truncated toward zero and then clamped to `0..=255`.
//!
//! ## Examples of color matrix
//!
//! - An identity color matrix that does nothing
//! ```text
//! [[1.0,0.0,0.0],
//!  [0.0,1.0,0.0],
//!  [0.0,0.0,1.0]]
//! ```
//!
//!  - A matrix that swaps red and blue
//!
//! ```text
//! [[0.0,0.0,1.0],
//!  [0.0,1.0,0.0],
//!  [1.0,0.0,0.0]]
//! ```
use std::str::FromStr;

use retouch_core::pixel::Pixel;
use retouch_image::errors::ImageErrors;
use retouch_image::image::Image;
use retouch_image::traits::OperationsTrait;

use crate::grayscale::LUMA_WEIGHTS;

pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131]
];

pub const LUMA_MATRIX: [[f64; 3]; 3] = [LUMA_WEIGHTS; 3];

/// Predefined color matrices
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorFilter {
    /// Warm brown tones, see [`SEPIA_MATRIX`]
    Sepia,
    /// Grayscale through luma weights, see [`LUMA_MATRIX`]
    Luma
}

impl ColorFilter {
    pub const fn matrix(self) -> [[f64; 3]; 3] {
        match self {
            ColorFilter::Sepia => SEPIA_MATRIX,
            ColorFilter::Luma => LUMA_MATRIX
        }
    }
}

impl FromStr for ColorFilter {
    type Err = ImageErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sepia" => Ok(ColorFilter::Sepia),
            "luma" => Ok(ColorFilter::Luma),
            _ => Err(ImageErrors::UnknownVariant("filter", s.to_string()))
        }
    }
}

/// A color matrix filter
///
/// # Example
/// ```rust
/// use retouch_core::pixel::Pixel;
/// use retouch_image::errors::ImageErrors;
/// use retouch_image::image::Image;
/// use retouch_image::traits::OperationsTrait;
/// use retouch_imageprocs::color_matrix::ColorMatrix;
///
/// fn main() -> Result<(), ImageErrors> {
///     let image = Image::fill(Pixel::new(1, 2, 3), 10, 10, 255)?;
///     // swap red and blue
///     let filter = ColorMatrix::from_matrix([
///         [0.0, 0.0, 1.0],
///         [0.0, 1.0, 0.0],
///         [1.0, 0.0, 0.0]
///     ]);
///     let swapped = filter.execute(&image)?;
///
///     assert_eq!(swapped.pixel_at(0, 0)?, Pixel::new(3, 2, 1));
///     Ok(())
/// }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ColorMatrix {
    matrix: [[f64; 3]; 3]
}

impl ColorMatrix {
    /// Create a color matrix from a predefined filter
    #[must_use]
    pub fn new(filter: ColorFilter) -> ColorMatrix {
        ColorMatrix::from_matrix(filter.matrix())
    }

    /// Create a color matrix from arbitrary values
    #[must_use]
    pub fn from_matrix(matrix: [[f64; 3]; 3]) -> ColorMatrix {
        ColorMatrix { matrix }
    }
}

impl OperationsTrait for ColorMatrix {
    fn name(&self) -> &'static str {
        "Color Matrix"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut pixels = image.pixels().to_vec();

        color_matrix(&mut pixels, &self.matrix);

        image.with_pixels(pixels)
    }
}

/// Apply `matrix` to every pixel in place
pub fn color_matrix(pixels: &mut [Pixel], matrix: &[[f64; 3]; 3]) {
    for pixel in pixels.iter_mut() {
        let colors = pixel.channels().map(f64::from);

        let [r, g, b] = matrix.map(|row| {
            let sum: f64 = row.iter().zip(colors.iter()).map(|(m, c)| m * c).sum();
            // `as` saturates at the i32 range, Pixel clamps the rest
            sum.trunc() as i32
        });
        *pixel = Pixel::new(r, g, b);
    }
}
