/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an image to grayscale
//!
//! Each pixel is reduced to a single value which is then
//! written to all three channels.
use std::str::FromStr;

use retouch_core::pixel::Pixel;
use retouch_image::errors::ImageErrors;
use retouch_image::image::Image;
use retouch_image::traits::OperationsTrait;

/// Luma weights for red, green and blue (Rec. 709)
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// How a pixel is reduced to one value
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GrayScaleMethod {
    /// The red channel
    Red,
    /// The green channel
    Green,
    /// The blue channel
    Blue,
    /// The largest of the three channels
    Value,
    /// Truncated average of the three channels
    Intensity,
    /// Weighted sum of the channels with [`LUMA_WEIGHTS`], rounded
    Luma
}

impl GrayScaleMethod {
    pub const fn name(self) -> &'static str {
        match self {
            GrayScaleMethod::Red => "red",
            GrayScaleMethod::Green => "green",
            GrayScaleMethod::Blue => "blue",
            GrayScaleMethod::Value => "value",
            GrayScaleMethod::Intensity => "intensity",
            GrayScaleMethod::Luma => "luma"
        }
    }

    /// Reduce `pixel` to a single value
    pub fn reduce(self, pixel: Pixel) -> u8 {
        match self {
            GrayScaleMethod::Red => pixel.r(),
            GrayScaleMethod::Green => pixel.g(),
            GrayScaleMethod::Blue => pixel.b(),
            GrayScaleMethod::Value => pixel.max_channel(),
            GrayScaleMethod::Intensity => pixel.intensity(),
            GrayScaleMethod::Luma => {
                let [r, g, b] = pixel.channels();
                let sum = LUMA_WEIGHTS[0] * f64::from(r)
                    + LUMA_WEIGHTS[1] * f64::from(g)
                    + LUMA_WEIGHTS[2] * f64::from(b);
                // weights sum to one, the result stays within 0..=255
                #[allow(clippy::cast_sign_loss)]
                {
                    sum.round().clamp(0.0, 255.0) as u8
                }
            }
        }
    }
}

impl FromStr for GrayScaleMethod {
    type Err = ImageErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(GrayScaleMethod::Red),
            "green" => Ok(GrayScaleMethod::Green),
            "blue" => Ok(GrayScaleMethod::Blue),
            "value" => Ok(GrayScaleMethod::Value),
            "intensity" => Ok(GrayScaleMethod::Intensity),
            "luma" => Ok(GrayScaleMethod::Luma),
            _ => Err(ImageErrors::UnknownVariant("grayscale", s.to_string()))
        }
    }
}

/// Convert an image to grayscale
///
/// # Example
/// ```
/// use retouch_core::pixel::Pixel;
/// use retouch_image::image::Image;
/// use retouch_image::traits::OperationsTrait;
/// use retouch_imageprocs::grayscale::{GrayScale, GrayScaleMethod};
///
/// let image = Image::fill(Pixel::new(10, 60, 20), 4, 4, 255).unwrap();
/// let gray = GrayScale::new(GrayScaleMethod::Value).execute(&image).unwrap();
///
/// assert_eq!(gray.pixel_at(3, 3).unwrap(), Pixel::gray(60));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct GrayScale {
    method: GrayScaleMethod
}

impl GrayScale {
    #[must_use]
    pub fn new(method: GrayScaleMethod) -> GrayScale {
        GrayScale { method }
    }
}

impl OperationsTrait for GrayScale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut pixels = image.pixels().to_vec();

        grayscale(&mut pixels, self.method);

        image.with_pixels(pixels)
    }
}

/// Replace every pixel with its gray equivalent
pub fn grayscale(pixels: &mut [Pixel], method: GrayScaleMethod) {
    for pixel in pixels.iter_mut() {
        *pixel = Pixel::gray(i32::from(method.reduce(*pixel)));
    }
}

#[cfg(test)]
mod tests {
    use retouch_core::pixel::Pixel;

    use crate::grayscale::GrayScaleMethod;

    #[test]
    fn reductions() {
        let pixel = Pixel::new(30, 200, 100);

        assert_eq!(GrayScaleMethod::Red.reduce(pixel), 30);
        assert_eq!(GrayScaleMethod::Green.reduce(pixel), 200);
        assert_eq!(GrayScaleMethod::Blue.reduce(pixel), 100);
        assert_eq!(GrayScaleMethod::Value.reduce(pixel), 200);
        assert_eq!(GrayScaleMethod::Intensity.reduce(pixel), 110);
        // 0.2126*30 + 0.7152*200 + 0.0722*100 = 156.638
        assert_eq!(GrayScaleMethod::Luma.reduce(pixel), 157);
    }

    #[test]
    fn luma_of_white_stays_white() {
        assert_eq!(GrayScaleMethod::Luma.reduce(Pixel::gray(255)), 255);
    }

    #[test]
    fn parse_methods() {
        assert_eq!("value".parse::<GrayScaleMethod>().unwrap(), GrayScaleMethod::Value);
        assert!("alpha".parse::<GrayScaleMethod>().is_err());
    }
}
