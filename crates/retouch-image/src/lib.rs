/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An in-memory image model
//!
//! This crate holds the [`Image`](image::Image) type every retouch
//! operation works on, together with
//!
//! - Channel histograms
//! - Codec adapters that turn files into images and back
//! - The traits decoders, encoders and operations implement
//! - A named, thread safe image store
//!
//! # Features
//! - `ppm`: Plain PPM support through `retouch-ppm`
//! - `raster`: Png, jpeg and bmp support through the `image` crate
//! - `serde-support`: Serialize histograms and image information
//! - `log`: Enable logging
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
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation
)]

pub mod codecs;
pub mod errors;
pub mod histogram;
pub mod image;
mod serde;
pub mod store;
pub mod traits;
