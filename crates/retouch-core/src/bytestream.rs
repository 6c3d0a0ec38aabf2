/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! Useful for text based image readers which walk the input
//! one byte at a time, it's put here to minimize code reuse

/// An in-memory byte reader
///
/// Reads past the end of the stream return `0` instead of panicking,
/// callers check [`eof`](ZByteReader::eof) before trusting a value.
pub struct ZByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new reader over `buf`
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Return the next byte and advance, or zero if at the end
    #[inline]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Return the next byte without advancing
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Move the cursor `num` bytes back, stopping at the start
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }

    /// Move the cursor `num` bytes forward, stopping at the end
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Whether all bytes have been consumed
    #[inline]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Current offset from the start of the stream
    pub const fn get_position(&self) -> usize {
        self.position
    }

    /// Number of bytes not yet consumed
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Whether at least `num` bytes are left
    pub const fn has(&self, num: usize) -> bool {
        self.remaining() >= num
    }

    /// Return bytes from the current position up to the first byte
    /// for which `func` returns false, advancing past them
    pub fn take_while<F: Fn(u8) -> bool>(&mut self, func: F) -> &'a [u8] {
        let start = self.position;

        while let Some(byte) = self.peek_u8() {
            if !func(byte) {
                break;
            }
            self.position += 1;
        }
        &self.stream[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::ZByteReader;

    #[test]
    fn reads_and_rewinds() {
        let mut reader = ZByteReader::new(b"P3 12");

        assert_eq!(reader.get_u8(), b'P');
        assert_eq!(reader.get_u8(), b'3');
        reader.rewind(1);
        assert_eq!(reader.peek_u8(), Some(b'3'));
        reader.skip(2);
        assert_eq!(reader.take_while(|x| x.is_ascii_digit()), b"12");
        assert!(reader.eof());
        assert_eq!(reader.get_u8(), 0);
        assert_eq!(reader.remaining(), 0);
    }
}
