/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]
//! Serialization of image information

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::histogram::{Histogram, HistogramChannel};
use crate::image::Image;

impl Serialize for Histogram {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 4;
        let mut state = serializer.serialize_struct("Histogram", STRUCT_FIELDS)?;

        state.serialize_field("channel", &self.channel())?;
        state.serialize_field("total", &self.total())?;
        state.serialize_field("max_count", &self.max_count())?;
        state.serialize_field("buckets", &self.buckets()[..])?;

        state.end()
    }
}

impl Serialize for HistogramChannel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.name())
    }
}

/// Image metadata, pixels are not serialized
impl Serialize for Image {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Image", 3)?;

        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("max_value", &self.max_value())?;

        state.end()
    }
}
