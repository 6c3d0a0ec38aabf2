/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate channel histogram statistics
//!
//! An image histogram shows the number of pixels in an image at each
//! channel value, every histogram has exactly 256 buckets, one for each
//! value in `0..=255`
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use retouch_core::pixel::Pixel;

use crate::errors::ImageErrors;

/// The pixel component a histogram counts
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HistogramChannel {
    Red,
    Green,
    Blue,
    /// Truncated average of the three channels
    Intensity
}

impl HistogramChannel {
    pub const fn name(self) -> &'static str {
        match self {
            HistogramChannel::Red => "red",
            HistogramChannel::Green => "green",
            HistogramChannel::Blue => "blue",
            HistogramChannel::Intensity => "intensity"
        }
    }

    /// Extract the value this channel counts from a pixel
    pub fn value_of(self, pixel: &Pixel) -> u8 {
        match self {
            HistogramChannel::Red => pixel.r(),
            HistogramChannel::Green => pixel.g(),
            HistogramChannel::Blue => pixel.b(),
            HistogramChannel::Intensity => pixel.intensity()
        }
    }
}

impl Display for HistogramChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HistogramChannel {
    type Err = ImageErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(HistogramChannel::Red),
            "green" => Ok(HistogramChannel::Green),
            "blue" => Ok(HistogramChannel::Blue),
            "intensity" => Ok(HistogramChannel::Intensity),
            _ => Err(ImageErrors::UnknownVariant("histogram", s.to_string()))
        }
    }
}

/// Per value counts of one channel of an image
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Histogram {
    channel: HistogramChannel,
    buckets: [u32; 256]
}

impl Histogram {
    /// Count `channel` over `pixels`
    pub fn new(pixels: &[Pixel], channel: HistogramChannel) -> Histogram {
        let values: Vec<u8> = pixels.iter().map(|x| channel.value_of(x)).collect();

        Histogram {
            channel,
            buckets: histogram(&values)
        }
    }

    pub const fn channel(&self) -> HistogramChannel {
        self.channel
    }

    /// Number of pixels whose channel value is `value`
    pub const fn count(&self, value: u8) -> u32 {
        self.buckets[value as usize]
    }

    pub const fn buckets(&self) -> &[u32; 256] {
        &self.buckets
    }

    /// Iterate over `(value, count)` pairs in increasing value order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (0..=255_u8).zip(self.buckets.iter().copied())
    }

    /// Sum of all buckets, this is the number of pixels counted
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|x| u64::from(*x)).sum()
    }

    /// The largest single bucket
    pub fn max_count(&self) -> u32 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }
}

/// Count byte occurrences
///
/// Splits counting over four tables so consecutive equal bytes
/// don't stall on the same counter.
#[must_use]
pub fn histogram(data: &[u8]) -> [u32; 256] {
    let mut start1 = [0_u32; 256];
    let mut counts = [0_u32; 256 * 3];

    let (start2, counts) = counts.split_at_mut(256);
    let (start3, start4) = counts.split_at_mut(256);

    let chunks = data.chunks_exact(4);
    let remainder = chunks.remainder();

    for i in chunks {
        start1[usize::from(i[0])] += 1;
        start2[usize::from(i[1])] += 1;
        start3[usize::from(i[2])] += 1;
        start4[usize::from(i[3])] += 1;
    }
    for i in remainder {
        start1[usize::from(*i)] += 1;
    }
    for (((b, c), d), e) in start1
        .iter_mut()
        .zip(start2.iter())
        .zip(start3.iter())
        .zip(start4.iter())
    {
        *b += c + d + e;
    }

    start1
}
