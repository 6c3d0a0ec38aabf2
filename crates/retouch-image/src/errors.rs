/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};
use std::io::Error;

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding,processing and encoding errors possible
pub enum ImageErrors {
    /// Width or height of zero
    InvalidDimensions(usize, usize),
    /// A maximum channel value of zero
    InvalidMaxValue(usize),
    /// Expected number of pixels and the number found
    DimensionsMisMatch(usize, usize),
    /// A pixel access outside the image
    OutOfBounds {
        row:    usize,
        col:    usize,
        width:  usize,
        height: usize
    },
    /// An operation was asked for a variant it doesn't know,
    /// contains the operation name and the offending variant
    UnknownVariant(&'static str, String),
    /// No image is stored under this name
    NoSuchImage(String),
    /// An operation returned an image whose width, height or max value
    /// differ from its input
    OperationChangedImage(&'static str),
    /// No codec for this format or file extension
    UnsupportedFormat(String),
    #[cfg(feature = "ppm")]
    PPMDecodeErrors(retouch_ppm::PPMDecodeErrors),
    EncodeErrors(ImgEncodeErrors),
    #[cfg(feature = "raster")]
    RasterErrors(::image::ImageError),
    IoErrors(std::io::Error),
    GenericString(String),
    GenericStr(&'static str)
}

/// All errors possible during image encoding
pub enum ImgEncodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    #[cfg(feature = "ppm")]
    PPMEncodeErrors(retouch_ppm::PPMEncodeErrors)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions(width, height) => {
                writeln!(
                    f,
                    "Width and height must be greater than zero, found width {width} and height {height}"
                )
            }
            Self::InvalidMaxValue(value) => {
                writeln!(f, "Max value must be greater than zero, found {value}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::OutOfBounds {
                row,
                col,
                width,
                height
            } => {
                writeln!(
                    f,
                    "Pixel ({row},{col}) is outside an image of width {width} and height {height}"
                )
            }
            Self::UnknownVariant(operation, variant) => {
                writeln!(f, "Unknown {operation} type '{variant}'")
            }
            Self::NoSuchImage(name) => {
                writeln!(f, "No image named '{name}'")
            }
            Self::OperationChangedImage(operation) => {
                writeln!(
                    f,
                    "Operation {operation} changed the image dimensions or max value"
                )
            }
            Self::UnsupportedFormat(format) => {
                writeln!(f, "Unsupported image format '{format}'")
            }
            #[cfg(feature = "ppm")]
            Self::PPMDecodeErrors(ref error) => {
                writeln!(f, "PPM decoding failed: {error:?}")
            }
            Self::EncodeErrors(ref err) => writeln!(f, "{err:?}"),
            #[cfg(feature = "raster")]
            Self::RasterErrors(ref error) => {
                writeln!(f, "Raster image codec failed: {error}")
            }
            Self::IoErrors(ref err) => writeln!(f, "I/O error: {err}"),
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl Debug for ImgEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic(ref string) => writeln!(f, "{string}"),
            Self::GenericStatic(ref string) => writeln!(f, "{string}"),
            #[cfg(feature = "ppm")]
            Self::PPMEncodeErrors(ref error) => {
                writeln!(f, "{error:?}")
            }
        }
    }
}

#[cfg(feature = "ppm")]
impl From<retouch_ppm::PPMDecodeErrors> for ImageErrors {
    fn from(from: retouch_ppm::PPMDecodeErrors) -> Self {
        ImageErrors::PPMDecodeErrors(from)
    }
}

#[cfg(feature = "ppm")]
impl From<retouch_ppm::PPMEncodeErrors> for ImgEncodeErrors {
    fn from(error: retouch_ppm::PPMEncodeErrors) -> Self {
        ImgEncodeErrors::PPMEncodeErrors(error)
    }
}

#[cfg(feature = "ppm")]
impl From<retouch_ppm::PPMEncodeErrors> for ImageErrors {
    fn from(error: retouch_ppm::PPMEncodeErrors) -> Self {
        ImageErrors::EncodeErrors(error.into())
    }
}

#[cfg(feature = "raster")]
impl From<::image::ImageError> for ImageErrors {
    fn from(from: ::image::ImageError) -> Self {
        ImageErrors::RasterErrors(from)
    }
}

impl From<ImgEncodeErrors> for ImageErrors {
    fn from(from: ImgEncodeErrors) -> Self {
        ImageErrors::EncodeErrors(from)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(from: Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}
