/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Flip filter: Mirror an image around one of its axes
//!
use std::str::FromStr;

use retouch_image::errors::ImageErrors;
use retouch_image::image::Image;
use retouch_image::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlipDirection {
    /// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌──────────┐
    ///│a b c d e│   │e d c b a │
    ///│f g h i j│   │j i h g f │
    ///└─────────┘   └──────────┘
    ///```
    Horizontal,

    /// Reverse the order of the rows
    ///
    /// ```text
    ///
    ///old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    ///
    Vertical
}

impl FromStr for FlipDirection {
    type Err = ImageErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(FlipDirection::Horizontal),
            "vertical" => Ok(FlipDirection::Vertical),
            _ => Err(ImageErrors::UnknownVariant("flip", s.to_string()))
        }
    }
}

/// Flip an image to a certain direction
///
/// Flipping twice in the same direction gives back the original image
#[derive(Copy, Clone, Debug)]
pub struct Flip {
    flip_direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(flip_direction: FlipDirection) -> Flip {
        Self { flip_direction }
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        "Flip"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let width = image.width();
        let mut pixels = image.pixels().to_vec();

        match self.flip_direction {
            FlipDirection::Horizontal => flop(&mut pixels, width),
            FlipDirection::Vertical => vertical_flip(&mut pixels, width)
        }

        image.with_pixels(pixels)
    }
}

/// Mirror each row of a row major buffer in place
pub fn flop<T: Copy>(in_out_image: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    for row in in_out_image.chunks_exact_mut(width) {
        row.reverse();
    }
}

/// Reverse the order of rows of a row major buffer in place
pub fn vertical_flip<T: Copy>(channel: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    // the middle row of an odd height image stays put
    let half = (channel.len() / width / 2) * width;

    let (top, bottom) = channel.split_at_mut(half);

    for (top_row, bottom_row) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        top_row.swap_with_slice(bottom_row);
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use retouch_core::pixel::Pixel;
    use retouch_image::errors::ImageErrors;
    use retouch_image::image::Image;
    use retouch_image::traits::OperationsTrait;

    use crate::flip::{flop, vertical_flip, Flip, FlipDirection};

    #[test]
    fn flop_reverses_rows() {
        let mut data = [1, 2, 3, 4, 5, 6];
        flop(&mut data, 3);

        assert_eq!(data, [3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn vertical_flip_keeps_middle_row() {
        let mut data = [1, 2, 3, 4, 5, 6];
        vertical_flip(&mut data, 2);

        assert_eq!(data, [5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn flip_twice_is_identity() {
        let (width, height) = (13, 7);
        let mut data = vec![0_u8; width * height * 3];
        nanorand::WyRand::new().fill(&mut data);

        let image = Image::from_rgb8(width, height, &data).unwrap();

        for direction in [FlipDirection::Horizontal, FlipDirection::Vertical] {
            let flip = Flip::new(direction);
            let once = flip.execute(&image).unwrap();
            let twice = flip.execute(&once).unwrap();

            assert_ne!(once, image);
            assert_eq!(twice, image);
        }
    }

    #[test]
    fn horizontal_moves_columns() {
        let image = Image::from_fn(3, 2, 255, |row, col| Pixel::gray((row * 3 + col) as i32)).unwrap();
        let flipped = Flip::new(FlipDirection::Horizontal).execute(&image).unwrap();

        assert_eq!(flipped.pixel_at(0, 0).unwrap(), Pixel::gray(2));
        assert_eq!(flipped.pixel_at(1, 2).unwrap(), Pixel::gray(3));
    }

    #[test]
    fn unknown_direction() {
        assert!(matches!(
            "diagonal".parse::<FlipDirection>(),
            Err(ImageErrors::UnknownVariant("flip", _))
        ));
    }
}
