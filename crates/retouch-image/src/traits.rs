/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Main traits related to images
//!
//! Decoders turn bytes into an [`Image`], operations turn one image into
//! another and encoders turn an image back into bytes.
use retouch_core::log::trace;

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::image::Image;

/// Encapsulates an image decoder.
///
/// All supported image decoders must implement this class
pub trait DecoderTrait {
    /// Decode a buffer already in memory
    ///
    /// The buffer should be stored in the decoder
    fn decode(&mut self) -> Result<Image, ImageErrors>;

    /// Get width and height of the image
    ///
    /// This should be available once headers have been decoded
    fn dimensions(&self) -> Option<(usize, usize)>;

    /// Get the name of the decoder
    fn name(&self) -> &'static str;
}

/// This encapsulates an image operation.
///
/// All operations that can be stored in a workflow
/// need to encapsulate this struct.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Produce a new image from `image`
    ///
    /// Implementors must return an image with the same width,
    /// height and maximum value as the input
    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors>;

    /// Run the operation and check the output kept the input's
    /// dimensions and max value
    ///
    /// This is what callers should use, [`execute_impl`](Self::execute_impl)
    /// is for implementors.
    fn execute(&self, image: &Image) -> Result<Image, ImageErrors> {
        trace!(
            "Running {} on a {}x{} image",
            self.name(),
            image.width(),
            image.height()
        );

        let output = self.execute_impl(image)?;

        if output.dimensions() != image.dimensions() || output.max_value() != image.max_value() {
            return Err(ImageErrors::OperationChangedImage(self.name()));
        }
        trace!("Finished running {}", self.name());

        Ok(output)
    }
}

/// Encapsulates an image encoder
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    /// The format this encoder produces
    fn format(&self) -> ImageFormat;

    /// Encode `image` returning the encoded bytes
    fn encode(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors>;
}

#[cfg(test)]
mod tests {
    use retouch_core::pixel::Pixel;

    use crate::errors::ImageErrors;
    use crate::image::Image;
    use crate::traits::OperationsTrait;

    struct Crop;

    impl OperationsTrait for Crop {
        fn name(&self) -> &'static str {
            "crop"
        }

        fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
            Image::fill(Pixel::BLACK, 1, 1, image.max_value())
        }
    }

    struct Identity;

    impl OperationsTrait for Identity {
        fn name(&self) -> &'static str {
            "identity"
        }

        fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
            Ok(image.clone())
        }
    }

    #[test]
    fn execute_rejects_resized_output() {
        let image = Image::fill(Pixel::gray(3), 2, 2, 255).unwrap();

        assert!(matches!(
            Crop.execute(&image),
            Err(ImageErrors::OperationChangedImage("crop"))
        ));
        assert_eq!(Identity.execute(&image).unwrap(), image);
    }
}
