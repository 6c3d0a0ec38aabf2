/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! PPM is handled by `retouch-ppm` (feature `ppm`),
//! png, jpeg and bmp by the `image` crate (feature `raster`).
//! With a feature off, the matching formats report
//! [`ImageErrors::UnsupportedFormat`].
use std::fs::read;
use std::path::Path;

use retouch_core::log::{info, trace};
use retouch_core::options::DecoderOptions;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

#[cfg(feature = "ppm")]
pub mod ppm;
#[cfg(feature = "raster")]
pub mod raster;

/// All supported image formats
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ImageFormat {
    /// Plain text portable pixmap
    PPM,
    PNG,
    JPEG,
    BMP
}

impl ImageFormat {
    /// Guess a format from a file extension, without the leading dot
    ///
    /// Matching ignores case and accepts `jpeg` as well as `jpg`.
    ///
    /// # Example
    /// ```
    /// use retouch_image::codecs::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::JPEG));
    /// assert_eq!(ImageFormat::from_extension("gif"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<ImageFormat> {
        match ext.to_ascii_lowercase().as_str() {
            "ppm" => Some(ImageFormat::PPM),
            "png" => Some(ImageFormat::PNG),
            "jpg" | "jpeg" => Some(ImageFormat::JPEG),
            "bmp" => Some(ImageFormat::BMP),
            _ => None
        }
    }

    /// Guess a format from the extension of `path`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<ImageFormat> {
        path.as_ref()
            .extension()
            .and_then(|x| x.to_str())
            .and_then(ImageFormat::from_extension)
    }

    /// The preferred file extension for this format
    pub const fn extension(self) -> &'static str {
        match self {
            ImageFormat::PPM => "ppm",
            ImageFormat::PNG => "png",
            ImageFormat::JPEG => "jpg",
            ImageFormat::BMP => "bmp"
        }
    }

    /// Return whether this library was compiled with support for this format
    pub const fn has_codec(self) -> bool {
        match self {
            ImageFormat::PPM => cfg!(feature = "ppm"),
            ImageFormat::PNG | ImageFormat::JPEG | ImageFormat::BMP => cfg!(feature = "raster")
        }
    }

    /// Get a decoder for `data` or an error if the format is not compiled in
    #[allow(unused_variables)]
    pub fn decoder<'a>(
        self, data: &'a [u8], options: DecoderOptions
    ) -> Result<Box<dyn DecoderTrait + 'a>, ImageErrors> {
        match self {
            #[cfg(feature = "ppm")]
            ImageFormat::PPM => Ok(Box::new(retouch_ppm::PPMDecoder::new_with_options(
                options, data
            ))),
            #[cfg(feature = "raster")]
            ImageFormat::PNG | ImageFormat::JPEG | ImageFormat::BMP => Ok(Box::new(
                raster::RasterDecoder::new_with_options(self, options, data)
            )),
            #[allow(unreachable_patterns)]
            _ => Err(ImageErrors::UnsupportedFormat(format!("{self:?}")))
        }
    }

    /// Get an encoder for this format or an error if the format is not compiled in
    pub fn encoder(self) -> Result<Box<dyn EncoderTrait>, ImageErrors> {
        match self {
            #[cfg(feature = "ppm")]
            ImageFormat::PPM => Ok(Box::new(ppm::PPMEncoder::new())),
            #[cfg(feature = "raster")]
            ImageFormat::PNG | ImageFormat::JPEG | ImageFormat::BMP => {
                Ok(Box::new(raster::RasterEncoder::new(self)))
            }
            #[allow(unreachable_patterns)]
            _ => Err(ImageErrors::UnsupportedFormat(format!("{self:?}")))
        }
    }
}

impl Image {
    /// Open an image from a file, the format is taken from the
    /// file extension
    ///
    /// # Errors
    /// - Unknown extension or format without a compiled codec
    /// - File could not be read
    /// - Decoding failed
    pub fn open<P: AsRef<Path>>(path: P, options: DecoderOptions) -> Result<Image, ImageErrors> {
        let path = path.as_ref();

        let format = ImageFormat::from_path(path)
            .ok_or_else(|| ImageErrors::UnsupportedFormat(path.display().to_string()))?;

        let data = read(path)?;

        trace!("Read {} bytes from {}", data.len(), path.display());

        Image::read(&data, format, options)
    }

    /// Decode an image held in memory
    pub fn read(
        data: &[u8], format: ImageFormat, options: DecoderOptions
    ) -> Result<Image, ImageErrors> {
        let mut decoder = format.decoder(data, options)?;

        trace!("Decoding with {}", decoder.name());

        decoder.decode()
    }

    /// Encode this image in memory
    pub fn write_to_vec(&self, format: ImageFormat) -> Result<Vec<u8>, ImageErrors> {
        let mut encoder = format.encoder()?;

        trace!("Encoding with {}", encoder.name());

        encoder.encode(self)
    }

    /// Encode this image and write it to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P, format: ImageFormat) -> Result<(), ImageErrors> {
        let data = self.write_to_vec(format)?;

        std::fs::write(path.as_ref(), data)?;

        info!("Wrote {:?} image to {}", format, path.as_ref().display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::codecs::ImageFormat;

    #[test]
    fn format_from_path() {
        assert_eq!(
            ImageFormat::from_path(Path::new("images/koala.ppm")),
            Some(ImageFormat::PPM)
        );
        assert_eq!(ImageFormat::from_path("koala.JPEG"), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::from_path("koala"), None);
    }

    #[test]
    fn extensions_round_trip() {
        for format in [
            ImageFormat::PPM,
            ImageFormat::PNG,
            ImageFormat::JPEG,
            ImageFormat::BMP
        ] {
            assert_eq!(ImageFormat::from_extension(format.extension()), Some(format));
        }
    }
}
