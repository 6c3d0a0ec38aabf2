/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::{Error, Write};

use retouch_core::log::trace;

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    Static(&'static str),
    /// Expected number of samples and the number provided
    DimensionsMisMatch(usize, usize),
    IOErrors(io::Error)
}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: Error) -> Self {
        PPMEncodeErrors::IOErrors(err)
    }
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PPMEncodeErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            PPMEncodeErrors::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Data length does not match image dimensions, expected {expected} samples but found {found}"
                )
            }
            PPMEncodeErrors::IOErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMEncodeErrors {}

/// A plain PPM encoder
///
/// Writes the `P3` header followed by one sample per line.
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }

    fn write_headers(
        &mut self, width: usize, height: usize, max_value: usize
    ) -> Result<(), PPMEncodeErrors> {
        let header = format!("P3\n{width} {height}\n{max_value}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `data` as a plain PPM file
    ///
    /// `data` holds interleaved red, green and blue samples and must contain
    /// exactly `width*height*3` values.
    pub fn encode(
        &mut self, width: usize, height: usize, max_value: usize, data: &[u8]
    ) -> Result<(), PPMEncodeErrors> {
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(3))
            .ok_or(PPMEncodeErrors::Static("Image dimensions overflow"))?;

        if expected != data.len() {
            return Err(PPMEncodeErrors::DimensionsMisMatch(expected, data.len()));
        }
        trace!("Encoding {}x{} image as plain PPM", width, height);

        self.write_headers(width, height, max_value)?;

        // "255\n" is the longest a sample gets
        let mut body = String::with_capacity(data.len() * 4);

        for sample in data {
            body.push_str(&sample.to_string());
            body.push('\n');
        }
        self.writer.write_all(body.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{PPMEncodeErrors, PPMEncoder};

    #[test]
    fn encode_layout() {
        let mut output = vec![];
        PPMEncoder::new(&mut output)
            .encode(2, 1, 255, &[0, 1, 2, 253, 254, 255])
            .unwrap();

        assert_eq!(output, b"P3\n2 1\n255\n0\n1\n2\n253\n254\n255\n");
    }

    #[test]
    fn rejects_wrong_sample_count() {
        let mut output = vec![];
        let result = PPMEncoder::new(&mut output).encode(2, 2, 255, &[0; 6]);

        assert!(matches!(
            result,
            Err(PPMEncodeErrors::DimensionsMisMatch(12, 6))
        ));
        assert!(output.is_empty());
    }
}
