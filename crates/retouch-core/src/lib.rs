/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all libraries
//!
//! This crate provides a set of core routines shared
//! by the decoders, encoders and image operations under the `retouch` umbrella
//!
//! It currently contains
//!
//! - The [`Pixel`](pixel::Pixel) type, a saturating RGB triple
//! - A bytestream reader used by text based decoders
//! - Image decoder options
//! - Logging macros that are no-ops unless the `log` feature is enabled
//!
//! # Features
//!  - `log`: Forward the logging macros to the [`log`](https://docs.rs/log) crate.
//!
#![macro_use]

pub mod bytestream;
pub mod log;
pub mod options;
pub mod pixel;
