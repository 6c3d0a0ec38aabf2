/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain text Portable Pixmap (P3) decoder and encoder
//!
//! The format is a magic token (`P3`), the width, height and maximum
//! channel value followed by `width*height*3` whitespace separated integers
//! holding the red, green and blue channels of each pixel in row major order.
//!
//! Comments start with `#` and run to the end of the line.
//!
//! # Example
//! ```
//! use retouch_ppm::{PPMDecoder, PPMEncoder};
//!
//! let mut decoder = PPMDecoder::new(b"P3\n# a 1x1 image\n1 1\n255\n10 20 30\n");
//! let samples = decoder.decode().unwrap();
//! assert_eq!(samples, [10, 20, 30]);
//! assert_eq!(decoder.dimensions(), Some((1, 1)));
//!
//! let mut output = vec![];
//! PPMEncoder::new(&mut output).encode(1, 1, 255, &[10, 20, 30]).unwrap();
//! assert_eq!(output, b"P3\n1 1\n255\n10\n20\n30\n");
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

pub use decoder::*;
pub use encoder::*;

mod decoder;
mod encoder;
