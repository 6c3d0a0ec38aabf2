/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 2D convolution on images
//!
//! This filter supports any odd sized square kernel, the two
//! predefined ones are a 3x3 blur and a 5x5 sharpen.
//!
//! Pixels outside the image count as zero. The intermediate
//! calculations are carried in `f64`, results are rounded half away
//! from zero and then clamped.
use std::str::FromStr;

use retouch_core::log::trace;
use retouch_core::pixel::Pixel;
use retouch_image::errors::ImageErrors;
use retouch_image::image::Image;
use retouch_image::traits::OperationsTrait;

#[rustfmt::skip]
pub const BLUR_KERNEL: [f64; 9] = [
    0.0625, 0.125, 0.0625,
    0.125,  0.25,  0.125,
    0.0625, 0.125, 0.0625
];

#[rustfmt::skip]
pub const SHARPEN_KERNEL: [f64; 25] = [
    -0.125, -0.125, -0.125, -0.125, -0.125,
    -0.125,  0.25,   0.25,   0.25,  -0.125,
    -0.125,  0.25,   1.0,    0.25,  -0.125,
    -0.125,  0.25,   0.25,   0.25,  -0.125,
    -0.125, -0.125, -0.125, -0.125, -0.125
];

/// Predefined convolution kernels
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Kernel {
    /// 3x3 gaussian like blur, see [`BLUR_KERNEL`]
    Blur,
    /// 5x5 sharpen, see [`SHARPEN_KERNEL`]
    Sharpen
}

impl Kernel {
    pub const fn weights(self) -> &'static [f64] {
        match self {
            Kernel::Blur => &BLUR_KERNEL,
            Kernel::Sharpen => &SHARPEN_KERNEL
        }
    }
}

impl FromStr for Kernel {
    type Err = ImageErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blur" => Ok(Kernel::Blur),
            "sharpen" => Ok(Kernel::Sharpen),
            _ => Err(ImageErrors::UnknownVariant("quality", s.to_string()))
        }
    }
}

/// Convolve an image
///
/// # Example
/// - Convolve with a custom 3x3 matrix
///
/// ```
/// use retouch_core::pixel::Pixel;
/// use retouch_image::errors::ImageErrors;
/// use retouch_image::image::Image;
/// use retouch_image::traits::OperationsTrait;
/// use retouch_imageprocs::convolve::Convolve;
///
/// // shift every pixel one step to the right
/// let matrix = vec![0.0, 0.0, 0.0,
///                   1.0, 0.0, 0.0,
///                   0.0, 0.0, 0.0];
/// let image = Image::from_fn(3, 1, 255, |_, col| Pixel::gray(col as i32 + 1))?;
///
/// let shifted = Convolve::with_weights(matrix)?.execute(&image)?;
///
/// assert_eq!(shifted.pixels(), [Pixel::BLACK, Pixel::gray(1), Pixel::gray(2)]);
/// # Ok::<(), ImageErrors>(())
/// ```
#[derive(Clone, Debug)]
pub struct Convolve {
    weights: Vec<f64>
}

impl Convolve {
    /// Create a convolution from a predefined kernel
    #[must_use]
    pub fn new(kernel: Kernel) -> Convolve {
        Convolve {
            weights: kernel.weights().to_vec()
        }
    }

    /// Create a convolution from row major weights of an odd sized square kernel
    ///
    /// # Errors
    /// If the weights length isn't the square of an odd number
    pub fn with_weights(weights: Vec<f64>) -> Result<Convolve, ImageErrors> {
        kernel_size(weights.len())?;

        Ok(Convolve { weights })
    }
}

impl OperationsTrait for Convolve {
    fn name(&self) -> &'static str {
        "2D convolution"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let (width, height) = image.dimensions();
        let mut out_pixels = vec![Pixel::BLACK; width * height];

        convolve(image.pixels(), &mut out_pixels, width, height, &self.weights)?;

        image.with_pixels(out_pixels)
    }
}

/// Side length of a square kernel with `len` weights
fn kernel_size(len: usize) -> Result<usize, &'static str> {
    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
    let size = (len as f64).sqrt().round() as usize;

    if size * size != len || size % 2 == 0 {
        return Err("Convolution kernels must be square with an odd side length");
    }
    Ok(size)
}

/// Copy the channels of `in_pixels` into a buffer with a border of
/// `radius` zeroed entries on every side
fn pad_zeros(in_pixels: &[Pixel], width: usize, height: usize, radius: usize) -> Vec<[f64; 3]> {
    let padded_width = width + radius * 2;
    let padded_height = height + radius * 2;

    let mut padded = vec![[0.0; 3]; padded_width * padded_height];

    for (in_row, out_row) in in_pixels
        .chunks_exact(width)
        .zip(padded.chunks_exact_mut(padded_width).skip(radius))
    {
        for (pixel, out) in in_row.iter().zip(out_row[radius..].iter_mut()) {
            *out = pixel.channels().map(f64::from);
        }
    }
    padded
}

/// Convolve `in_pixels` with a square kernel writing the result to `out_pixels`
///
/// # Errors
/// If the weights don't form an odd sized square or the buffers
/// don't hold `width*height` pixels
pub fn convolve(
    in_pixels: &[Pixel], out_pixels: &mut [Pixel], width: usize, height: usize, weights: &[f64]
) -> Result<(), &'static str> {
    let size = kernel_size(weights.len())?;

    if in_pixels.len() != width * height || out_pixels.len() != width * height {
        return Err("Pixel buffers do not match image dimensions");
    }
    if width == 0 {
        return Ok(());
    }
    let radius = size / 2;
    let padded_width = width + radius * 2;

    trace!("Convolving with a {size}x{size} kernel");

    let padded = pad_zeros(in_pixels, width, height, radius);

    for (y, out_row) in out_pixels.chunks_exact_mut(width).enumerate() {
        for (x, out) in out_row.iter_mut().enumerate() {
            let mut sum = [0.0_f64; 3];

            for (ky, kernel_row) in weights.chunks_exact(size).enumerate() {
                let start = (y + ky) * padded_width + x;
                let in_row = &padded[start..start + size];

                for (weight, channels) in kernel_row.iter().zip(in_row) {
                    sum[0] += weight * channels[0];
                    sum[1] += weight * channels[1];
                    sum[2] += weight * channels[2];
                }
            }
            let [r, g, b] = sum.map(|x| x.round() as i32);

            *out = Pixel::new(r, g, b);
        }
    }
    Ok(())
}
