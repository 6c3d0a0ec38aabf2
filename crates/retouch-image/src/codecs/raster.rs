/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "raster")]
//! Compressed formats through the `image` crate
//!
//! Png, jpeg and bmp files are decoded to 8 bit RGB and
//! wrapped into an [`Image`] with a max value of 255.
//! Alpha channels are dropped.
use std::io::Cursor;

use ::image::{DynamicImage, ImageReader, Limits, RgbImage};
use retouch_core::log::{debug, info};
use retouch_core::options::DecoderOptions;

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

fn to_raster_format(format: ImageFormat) -> Result<::image::ImageFormat, ImageErrors> {
    match format {
        ImageFormat::PNG => Ok(::image::ImageFormat::Png),
        ImageFormat::JPEG => Ok(::image::ImageFormat::Jpeg),
        ImageFormat::BMP => Ok(::image::ImageFormat::Bmp),
        ImageFormat::PPM => Err(ImageErrors::UnsupportedFormat(
            "PPM is not handled by the raster codecs".to_string()
        ))
    }
}

fn to_u32(value: usize) -> Result<u32, ImageErrors> {
    u32::try_from(value).map_err(|_| ImageErrors::GenericString(format!("{value} exceeds u32")))
}

/// Decoder for png, jpeg and bmp images
pub struct RasterDecoder<'a> {
    format:     ImageFormat,
    data:       &'a [u8],
    options:    DecoderOptions,
    dimensions: Option<(usize, usize)>
}

impl<'a> RasterDecoder<'a> {
    pub fn new(format: ImageFormat, data: &'a [u8]) -> RasterDecoder<'a> {
        RasterDecoder::new_with_options(format, DecoderOptions::default(), data)
    }

    pub fn new_with_options(
        format: ImageFormat, options: DecoderOptions, data: &'a [u8]
    ) -> RasterDecoder<'a> {
        RasterDecoder {
            format,
            data,
            options,
            dimensions: None
        }
    }
}

impl<'a> DecoderTrait for RasterDecoder<'a> {
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let format = to_raster_format(self.format)?;

        let mut limits = Limits::default();
        limits.max_image_width = Some(to_u32(self.options.get_max_width())?);
        limits.max_image_height = Some(to_u32(self.options.get_max_height())?);

        let mut reader = ImageReader::with_format(Cursor::new(self.data), format);
        reader.limits(limits);

        let decoded = reader.decode()?;

        debug!("Raster input color type: {:?}", decoded.color());

        let rgb = decoded.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);

        info!("Decoded {width}x{height} {:?} image", self.format);

        self.dimensions = Some((width, height));

        Image::from_rgb8(width, height, rgb.as_raw())
    }

    fn dimensions(&self) -> Option<(usize, usize)> {
        self.dimensions
    }

    fn name(&self) -> &'static str {
        "Raster Decoder"
    }
}

/// Encoder for png, jpeg and bmp images
///
/// Channels are written as stored, the image's max value isn't used
/// for scaling.
#[derive(Copy, Clone, Debug)]
pub struct RasterEncoder {
    format: ImageFormat
}

impl RasterEncoder {
    pub fn new(format: ImageFormat) -> RasterEncoder {
        RasterEncoder { format }
    }
}

impl EncoderTrait for RasterEncoder {
    fn name(&self) -> &'static str {
        "Raster Encoder"
    }

    fn format(&self) -> ImageFormat {
        self.format
    }

    fn encode(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        let format = to_raster_format(self.format)?;
        let (width, height) = image.dimensions();

        let buffer = RgbImage::from_raw(to_u32(width)?, to_u32(height)?, image.to_rgb8())
            .ok_or(ImageErrors::GenericStr("Pixel buffer does not match dimensions"))?;

        let mut output = Vec::new();

        DynamicImage::ImageRgb8(buffer).write_to(&mut Cursor::new(&mut output), format)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use retouch_core::options::DecoderOptions;
    use retouch_core::pixel::Pixel;

    use crate::codecs::raster::{RasterDecoder, RasterEncoder};
    use crate::codecs::ImageFormat;
    use crate::image::Image;
    use crate::traits::{DecoderTrait, EncoderTrait};

    fn gradient() -> Image {
        Image::from_fn(5, 3, 255, |row, col| {
            Pixel::new((row * 40) as i32, (col * 30) as i32, 7)
        })
        .unwrap()
    }

    #[test]
    fn lossless_formats_keep_pixels() {
        let image = gradient();

        for format in [ImageFormat::PNG, ImageFormat::BMP] {
            let bytes = RasterEncoder::new(format).encode(&image).unwrap();
            let mut decoder = RasterDecoder::new(format, &bytes);

            assert_eq!(decoder.decode().unwrap(), image);
            assert_eq!(decoder.dimensions(), Some((5, 3)));
        }
    }

    #[test]
    fn jpeg_keeps_dimensions() {
        let bytes = RasterEncoder::new(ImageFormat::JPEG)
            .encode(&gradient())
            .unwrap();
        let decoded = RasterDecoder::new(ImageFormat::JPEG, &bytes).decode().unwrap();

        assert_eq!(decoded.dimensions(), (5, 3));
        assert_eq!(decoded.max_value(), 255);
    }

    #[test]
    fn limits_are_respected() {
        let bytes = RasterEncoder::new(ImageFormat::PNG)
            .encode(&gradient())
            .unwrap();
        let options = DecoderOptions::default().set_max_width(4);

        assert!(RasterDecoder::new_with_options(ImageFormat::PNG, options, &bytes)
            .decode()
            .is_err());
    }

    #[test]
    fn ppm_is_not_a_raster_format() {
        assert!(RasterEncoder::new(ImageFormat::PPM)
            .encode(&gradient())
            .is_err());
    }
}
