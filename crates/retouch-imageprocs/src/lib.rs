/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `retouch-image`
//!
//! This implements the image edits available to retouch scripts,
//! each one as a struct implementing the `OperationsTrait` defined by
//! retouch-image, backed by a plain function working on pixel slices.
//!
//! Operations never modify their input, they return a new image with the
//! same width, height and max value.
//!
//! # Example
//! - Brighten an image by 20
//! ```
//! use retouch_core::pixel::Pixel;
//! use retouch_image::image::Image;
//! use retouch_image::traits::OperationsTrait;
//! use retouch_imageprocs::brighten::Brighten;
//!
//! let image = Image::fill(Pixel::new(100, 200, 250), 100, 100, 255).unwrap();
//! let brighter = Brighten::new(20).execute(&image).unwrap();
//!
//! assert_eq!(brighter.pixel_at(0, 0).unwrap(), Pixel::new(120, 220, 255));
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
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation
)]

pub mod brighten;
pub mod color_matrix;
pub mod convolve;
pub mod flip;
pub mod grayscale;
