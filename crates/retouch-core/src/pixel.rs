/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single RGB pixel
//!
//! Channels are always within `0..=255`, construction saturates
//! out of range values instead of failing.
use core::fmt::{Debug, Formatter};

/// Maximum value a single channel can hold
pub const MAX_CHANNEL_VALUE: i32 = 255;

/// An immutable red, green and blue triple.
///
/// Equality is structural, two pixels are equal when
/// all their channels are equal.
///
/// # Example
/// ```
/// use retouch_core::pixel::Pixel;
/// let pixel = Pixel::new(-20, 128, 300);
///
/// assert_eq!(pixel.channels(), [0, 128, 255]);
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Pixel {
    r: u8,
    g: u8,
    b: u8
}

impl Pixel {
    /// Black, all channels zero
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

    /// Create a new pixel, clamping each channel to `[0,255]`
    #[must_use]
    pub fn new(r: i32, g: i32, b: i32) -> Pixel {
        Pixel {
            r: saturate(r),
            g: saturate(g),
            b: saturate(b)
        }
    }

    /// Create a pixel with the same value in all three channels
    #[must_use]
    pub fn gray(value: i32) -> Pixel {
        Pixel::new(value, value, value)
    }

    /// Create a pixel from channels that are already in range
    #[must_use]
    pub const fn from_channels([r, g, b]: [u8; 3]) -> Pixel {
        Pixel { r, g, b }
    }

    /// Return a value-identical pixel
    #[must_use]
    pub const fn copy(&self) -> Pixel {
        Pixel {
            r: self.r,
            g: self.g,
            b: self.b
        }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Channels in `[r, g, b]` order
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The largest of the three channels
    pub fn max_channel(&self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Integer truncated mean of the three channels
    pub fn intensity(&self) -> u8 {
        // sum of three u8 values is at most 765, the mean fits in a u8
        ((u16::from(self.r) + u16::from(self.g) + u16::from(self.b)) / 3) as u8
    }

    /// Whether all three channels hold the same value
    pub const fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl Debug for Pixel {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Pixel({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(channels: [u8; 3]) -> Self {
        Pixel::from_channels(channels)
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(pixel: Pixel) -> Self {
        pixel.channels()
    }
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn saturate(value: i32) -> u8 {
    value.clamp(0, MAX_CHANNEL_VALUE) as u8
}
