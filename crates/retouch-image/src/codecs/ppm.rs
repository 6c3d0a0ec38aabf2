/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "ppm")]
//! Represents a plain PPM decoder and encoder
use std::path::Path;

pub use retouch_ppm::PPMDecoder;
use retouch_core::log::{info, warn};
use retouch_core::options::DecoderOptions;

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

impl<'a> DecoderTrait for PPMDecoder<'a> {
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let samples = PPMDecoder::decode(self)?;

        let (width, height) = PPMDecoder::dimensions(self)
            .ok_or(ImageErrors::GenericStr("PPM headers were not decoded"))?;
        let max_value = self
            .max_value()
            .ok_or(ImageErrors::GenericStr("PPM headers were not decoded"))?;

        info!("Decoded {width}x{height} PPM with max value {max_value}");

        Image::from_samples(width, height, max_value, &samples)
    }

    fn dimensions(&self) -> Option<(usize, usize)> {
        PPMDecoder::dimensions(self)
    }

    fn name(&self) -> &'static str {
        "PPM Decoder"
    }
}

/// Encodes images as plain `P3` PPM
///
/// The header carries the image's own max value
#[derive(Copy, Clone, Debug, Default)]
pub struct PPMEncoder;

impl PPMEncoder {
    pub fn new() -> PPMEncoder {
        PPMEncoder
    }
}

impl EncoderTrait for PPMEncoder {
    fn name(&self) -> &'static str {
        "PPM Encoder"
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::PPM
    }

    fn encode(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        let (width, height) = image.dimensions();
        let mut output = Vec::with_capacity(width * height * 12 + 20);

        retouch_ppm::PPMEncoder::new(&mut output).encode(
            width,
            height,
            image.max_value(),
            &image.to_rgb8()
        )?;

        Ok(output)
    }
}

/// Decode plain PPM bytes with default options
///
/// # Example
/// ```
/// use retouch_core::pixel::Pixel;
/// use retouch_image::codecs::ppm::decode_ppm;
///
/// let image = decode_ppm(b"P3 2 1 255 1 2 3 300 -4 5").unwrap();
///
/// assert_eq!(image.pixel_at(0, 1).unwrap(), Pixel::new(255, 0, 5));
/// ```
pub fn decode_ppm(data: &[u8]) -> Result<Image, ImageErrors> {
    decode_ppm_with_options(data, DecoderOptions::default())
}

/// Decode plain PPM bytes
pub fn decode_ppm_with_options(data: &[u8], options: DecoderOptions) -> Result<Image, ImageErrors> {
    DecoderTrait::decode(&mut PPMDecoder::new_with_options(options, data))
}

/// Encode `image` as plain PPM
pub fn save_ppm(image: &Image) -> Result<Vec<u8>, ImageErrors> {
    PPMEncoder::new().encode(image)
}

/// Load a PPM file, returning `None` if the path isn't a `.ppm` file,
/// can't be read or doesn't decode
///
/// The reason is logged at warn level.
pub fn load_ppm<P: AsRef<Path>>(path: P) -> Option<Image> {
    load_ppm_with_options(path, DecoderOptions::default())
}

/// Same as [`load_ppm`] with custom decoder options
pub fn load_ppm_with_options<P: AsRef<Path>>(path: P, options: DecoderOptions) -> Option<Image> {
    let path = path.as_ref();

    if ImageFormat::from_path(path) != Some(ImageFormat::PPM) {
        warn!("{} is not a ppm file", path.display());
        return None;
    }
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            warn!("Could not read {}: {}", path.display(), err);
            return None;
        }
    };
    match decode_ppm_with_options(&data, options) {
        Ok(image) => Some(image),
        Err(err) => {
            warn!("Could not decode {}: {}", path.display(), err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use retouch_core::options::DecoderOptions;
    use retouch_core::pixel::Pixel;

    use crate::codecs::ppm::{decode_ppm, decode_ppm_with_options, load_ppm, save_ppm};
    use crate::errors::ImageErrors;
    use crate::image::Image;

    #[test]
    fn keeps_declared_max_value() {
        let image = decode_ppm(b"P3\n1 1\n100\n10 20 30\n").unwrap();

        assert_eq!(image.max_value(), 100);
        assert_eq!(save_ppm(&image).unwrap(), b"P3\n1 1\n100\n10\n20\n30\n");
    }

    #[test]
    fn strict_rejects_samples_above_max() {
        let data = b"P3 1 1 10 11 0 0";
        let options = DecoderOptions::new_strict();

        assert!(matches!(
            decode_ppm_with_options(data, options),
            Err(ImageErrors::PPMDecodeErrors(_))
        ));
        // lenient mode clamps into the pixel range instead
        assert_eq!(
            decode_ppm(data).unwrap().pixel_at(0, 0).unwrap(),
            Pixel::new(11, 0, 0)
        );
    }

    #[test]
    fn zero_max_value_is_rejected() {
        assert!(decode_ppm(b"P3 1 1 0 0 0 0").is_err());
    }

    #[test]
    fn load_missing_file_is_none() {
        assert!(load_ppm("/this/path/does/not/exist.ppm").is_none());
        assert!(load_ppm("/this/path/does/not/exist.png").is_none());
    }

    #[test]
    fn load_wrong_magic_is_none() {
        let path = std::env::temp_dir().join("retouch-image-load-wrong-magic.ppm");

        std::fs::write(&path, b"P6\n1 1\n255\n\x01\x02\x03").unwrap();
        let loaded = load_ppm(&path);
        let _ = std::fs::remove_file(&path);

        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_disk() {
        let image = Image::fill(Pixel::new(4, 5, 6), 3, 2, 255).unwrap();
        let path = std::env::temp_dir().join("retouch-image-load-from-disk.ppm");

        std::fs::write(&path, save_ppm(&image).unwrap()).unwrap();
        let loaded = load_ppm(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, Some(image));
    }
}
