/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use retouch_image::histogram::Histogram;
use retouch_image::image::Image;

/// Histogram of a stored image as written by the `histogram` command
pub struct HistogramReport<'a> {
    name:      &'a str,
    image:     &'a Image,
    histogram: &'a Histogram
}

impl<'a> HistogramReport<'a> {
    pub fn new(name: &'a str, image: &'a Image, histogram: &'a Histogram) -> HistogramReport<'a> {
        HistogramReport {
            name,
            image,
            histogram
        }
    }
}

impl<'a> Serialize for HistogramReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("HistogramReport", 3)?;

        state.serialize_field("image", &self.name)?;
        state.serialize_field("metadata", &self.image)?;
        state.serialize_field("histogram", &self.histogram)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use retouch_core::pixel::Pixel;
    use retouch_image::histogram::HistogramChannel;
    use retouch_image::image::Image;

    use crate::serde::HistogramReport;

    #[test]
    fn report_layout() {
        let image = Image::fill(Pixel::new(1, 2, 3), 2, 3, 255).unwrap();
        let histogram = image.histogram(HistogramChannel::Green);

        let json = serde_json::to_value(HistogramReport::new("koala", &image, &histogram)).unwrap();

        assert_eq!(json["image"], "koala");
        assert_eq!(json["metadata"]["width"], 2);
        assert_eq!(json["metadata"]["max_value"], 255);
        assert_eq!(json["histogram"]["channel"], "green");
        assert_eq!(json["histogram"]["total"], 6);
        assert_eq!(json["histogram"]["buckets"][2], 6);
        assert_eq!(json["histogram"]["buckets"].as_array().unwrap().len(), 256);
    }
}
