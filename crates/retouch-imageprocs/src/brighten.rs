/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Brighten or darken an image
use retouch_core::pixel::Pixel;
use retouch_image::errors::ImageErrors;
use retouch_image::image::Image;
use retouch_image::traits::OperationsTrait;

/// Add a constant to every channel of every pixel
///
/// Negative values darken. Channels saturate at 0 and 255.
#[derive(Copy, Clone, Debug)]
pub struct Brighten {
    value: i32
}

impl Brighten {
    #[must_use]
    pub fn new(value: i32) -> Brighten {
        Brighten { value }
    }
}

impl OperationsTrait for Brighten {
    fn name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut pixels = image.pixels().to_vec();

        brighten(&mut pixels, self.value);

        image.with_pixels(pixels)
    }
}

pub fn brighten(pixels: &mut [Pixel], value: i32) {
    pixels.iter_mut().for_each(|x| {
        let [r, g, b] = x.channels();
        *x = Pixel::new(
            i32::from(r).saturating_add(value),
            i32::from(g).saturating_add(value),
            i32::from(b).saturating_add(value)
        );
    });
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use retouch_core::pixel::Pixel;
    use retouch_image::image::Image;
    use retouch_image::traits::OperationsTrait;

    use crate::brighten::{brighten, Brighten};

    fn random_image() -> Image {
        let (width, height) = (40, 30);
        let mut data = vec![0_u8; width * height * 3];
        nanorand::WyRand::new().fill(&mut data);

        Image::from_rgb8(width, height, &data).unwrap()
    }

    #[test]
    fn zero_is_identity() {
        let image = random_image();

        assert_eq!(Brighten::new(0).execute(&image).unwrap(), image);
    }

    #[test]
    fn unclamped_pixels_round_trip() {
        let image = random_image();
        let k = 37;

        let forward = Brighten::new(k).execute(&image).unwrap();
        let back = Brighten::new(-k).execute(&forward).unwrap();

        for (original, restored) in image.pixels().iter().zip(back.pixels()) {
            if original.channels().iter().all(|c| i32::from(*c) + k <= 255) {
                assert_eq!(original, restored);
            }
        }
    }

    #[test]
    fn saturates() {
        let mut pixels = [Pixel::new(250, 5, 100)];

        brighten(&mut pixels, 10);
        assert_eq!(pixels[0], Pixel::new(255, 15, 110));

        brighten(&mut pixels, i32::MIN);
        assert_eq!(pixels[0], Pixel::BLACK);
    }
}
