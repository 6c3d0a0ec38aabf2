/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use retouch_core::bytestream::ZByteReader;
use retouch_core::log::{info, trace};
use retouch_core::options::DecoderOptions;

/// Highest maximum value a conformant PPM file may declare
pub const PPM_MAX_VALUE: usize = 65535;

/// Errors that can occur when decoding a PPM file
pub enum PPMDecodeErrors {
    Generic(String),
    GenericStatic(&'static str),
    /// The file did not start with the expected magic token
    InvalidMagic(String),
    InvalidHeader(String),
    /// A token that should have been an integer
    InvalidInteger(String),
    /// Width or height was zero
    ZeroDimensions(usize, usize),
    LargeDimensions(usize, usize),
    /// Expected number of samples and the number found
    NotEnoughSamples(usize, usize),
    /// A sample outside of `0..=max_value` in strict mode
    SampleOutOfRange(i64, usize),
    /// Tokens found after the last pixel in strict mode
    TrailingData(usize)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Generic(val) => {
                writeln!(f, "{val}")
            }
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::InvalidMagic(val) => {
                writeln!(f, "Expected P3 as the PPM magic token but found '{val}'")
            }
            Self::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            Self::InvalidInteger(val) => {
                writeln!(f, "Expected an integer but found '{val}'")
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Image dimensions must be non zero, found width {width} and height {height}"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::NotEnoughSamples(expected, found) => {
                writeln!(f, "Expected {expected} samples but found {found}")
            }
            Self::SampleOutOfRange(value, max) => {
                writeln!(f, "Sample {value} is outside the range 0..={max}")
            }
            Self::TrailingData(position) => {
                writeln!(f, "Unexpected data after the last pixel at byte {position}")
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

/// An instance of a plain PPM decoder
///
/// The decoder decodes the P3 (ASCII) format and returns
/// raw integer samples, it does not clamp them.
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       usize,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    options:         DecoderOptions
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use retouch_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    /// # Example
    /// ```
    /// use retouch_core::options::DecoderOptions;
    /// use retouch_ppm::PPMDecoder;
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P3 2 1 255 0 0 0 0 0 0");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            decoded_headers: false,
            reader: ZByteReader::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Return Err on Error otherwise return nothing,
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        // comment lines may come before the magic token
        skip_spaces(&mut self.reader);

        if !self.reader.has(2) {
            let len = self.reader.remaining();
            let msg = format!("Expected at least 2 bytes in header but stream has {len}");

            return Err(PPMDecodeErrors::Generic(msg));
        }
        let magic = get_token(&mut self.reader);

        if magic != b"P3" {
            let msg = String::from_utf8_lossy(magic).to_string();
            return Err(PPMDecodeErrors::InvalidMagic(msg));
        }

        skip_spaces(&mut self.reader);
        let width = self.get_integer()?;
        skip_spaces(&mut self.reader);
        let height = self.get_integer()?;

        let width = usize::try_from(width).unwrap_or(0);
        let height = usize::try_from(height).unwrap_or(0);

        if width == 0 || height == 0 {
            return Err(PPMDecodeErrors::ZeroDimensions(width, height));
        }
        if width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }
        info!("Width: {}, height: {}", width, height);

        skip_spaces(&mut self.reader);
        // read max value
        let max_value = usize::try_from(self.get_integer()?).unwrap_or(0);

        if max_value == 0 {
            return Err(PPMDecodeErrors::InvalidHeader(
                "maximum value must be greater than zero".to_string()
            ));
        }
        if self.options.get_strict_mode() && max_value > PPM_MAX_VALUE {
            let msg = format!("MAX value {max_value} greater than {PPM_MAX_VALUE}");

            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }
        info!("Max value: {}", max_value);

        self.width = width;
        self.height = height;
        self.max_value = max_value;
        self.decoded_headers = true;

        Ok(())
    }

    /// Read one optionally signed decimal integer at the current position
    ///
    /// Values that do not fit an `i64` saturate.
    fn get_integer(&mut self) -> Result<i64, PPMDecodeErrors> {
        let start = self.reader.get_position();
        let mut negative = false;

        if let Some(sign @ (b'-' | b'+')) = self.reader.peek_u8() {
            negative = sign == b'-';
            self.reader.skip(1);
        }
        let digits = self.reader.take_while(|x| x.is_ascii_digit());

        let terminated = self
            .reader
            .peek_u8()
            .map_or(true, |x| x.is_ascii_whitespace() || x == b'#');

        if digits.is_empty() || !terminated {
            self.reader.rewind(self.reader.get_position() - start);
            let token = get_token(&mut self.reader);

            if token.is_empty() {
                return Err(PPMDecodeErrors::GenericStatic("Unexpected end of stream"));
            }
            return Err(PPMDecodeErrors::InvalidInteger(
                String::from_utf8_lossy(token).to_string()
            ));
        }
        let magnitude = digits.iter().fold(0_i64, |acc, x| {
            acc.saturating_mul(10).saturating_add(i64::from(x - b'0'))
        });

        Ok(if negative { -magnitude } else { magnitude })
    }

    /// Return the maximum channel value declared in the header, or none if
    /// headers aren't decoded
    pub const fn max_value(&self) -> Option<usize> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Return image dimensions as `(width, height)` or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Decode a ppm encoded file and return the raw samples from it
    ///
    /// The result holds `width*height*3` values, red green and blue for each
    /// pixel in row major order. Values are returned as read, without clamping.
    pub fn decode(&mut self) -> Result<Vec<i32>, PPMDecodeErrors> {
        self.read_headers()?;

        let size = self
            .width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(3))
            .ok_or(PPMDecodeErrors::GenericStatic("Image dimensions overflow"))?;

        let strict = self.options.get_strict_mode();
        // every sample needs at least two bytes, a digit and a separator
        let mut samples = Vec::with_capacity(size.min(self.reader.remaining() / 2 + 1));

        for _ in 0..size {
            skip_spaces(&mut self.reader);

            if self.reader.eof() {
                return Err(PPMDecodeErrors::NotEnoughSamples(size, samples.len()));
            }
            let value = self.get_integer()?;

            if strict && !(0..=self.max_value as i64).contains(&value) {
                return Err(PPMDecodeErrors::SampleOutOfRange(value, self.max_value));
            }
            #[allow(clippy::cast_possible_truncation)]
            samples.push(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32);
        }

        skip_spaces(&mut self.reader);

        if !self.reader.eof() {
            if strict {
                return Err(PPMDecodeErrors::TrailingData(self.reader.get_position()));
            }
            trace!(
                "Ignoring {} bytes after the last pixel",
                self.reader.remaining()
            );
        }
        Ok(samples)
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ZByteReader) {
    while !byte_stream.eof() {
        let mut byte = byte_stream.get_u8();

        if byte == b'#' {
            // comment
            // skip the whole comment
            while byte != b'\n' && !byte_stream.eof() {
                byte = byte_stream.get_u8();
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            byte_stream.rewind(1);
            break;
        }
    }
}

/// Return all bytes preceding the next whitespace, advancing past them
fn get_token<'a>(z: &mut ZByteReader<'a>) -> &'a [u8] {
    z.take_while(|x| !x.is_ascii_whitespace())
}
