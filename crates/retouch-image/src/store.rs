/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A thread safe collection of images addressed by name
//!
//! Every access goes through one mutex, so a lookup, transform and
//! insert done by [`ImageStore::apply`] is seen by other threads as a
//! single step.
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use retouch_core::log::{debug, trace};

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::OperationsTrait;

/// Named images
///
/// Images are stored behind an [`Arc`] so readers can keep using
/// an image after it has been replaced or removed.
#[derive(Default)]
pub struct ImageStore {
    images: Mutex<HashMap<String, Arc<Image>>>
}

impl ImageStore {
    pub fn new() -> ImageStore {
        ImageStore::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Image>>> {
        // images are never partially written, a poisoned map is still consistent
        self.images.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `image` under `name` returning the image previously stored there
    pub fn put(&self, name: &str, image: Image) -> Option<Arc<Image>> {
        let previous = self.lock().insert(name.to_string(), Arc::new(image));

        if previous.is_some() {
            debug!("Replaced image {}", name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<Arc<Image>> {
        self.lock().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    pub fn remove(&self, name: &str) -> Option<Arc<Image>> {
        self.lock().remove(name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Names of all stored images, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Run `operation` on the image called `source` and store the
    /// result as `destination`
    ///
    /// The store is left untouched if `source` is missing or the
    /// operation fails.
    ///
    /// # Example
    /// ```
    /// use retouch_core::pixel::Pixel;
    /// use retouch_image::errors::ImageErrors;
    /// use retouch_image::image::Image;
    /// use retouch_image::store::ImageStore;
    /// use retouch_image::traits::OperationsTrait;
    ///
    /// struct Invert;
    ///
    /// impl OperationsTrait for Invert {
    ///     fn name(&self) -> &'static str {
    ///         "invert"
    ///     }
    ///     fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
    ///         let pixels = image
    ///             .pixels()
    ///             .iter()
    ///             .map(|p| Pixel::new(255 - i32::from(p.r()), 255 - i32::from(p.g()), 255 - i32::from(p.b())))
    ///             .collect();
    ///         image.with_pixels(pixels)
    ///     }
    /// }
    ///
    /// let store = ImageStore::new();
    /// store.put("koala", Image::fill(Pixel::BLACK, 2, 2, 255).unwrap());
    /// store.apply("koala", "inverted", &Invert).unwrap();
    ///
    /// assert_eq!(store.get("inverted").unwrap().pixel_at(1, 1).unwrap(), Pixel::gray(255));
    /// assert!(store.apply("missing", "out", &Invert).is_err());
    /// ```
    pub fn apply(
        &self, source: &str, destination: &str, operation: &dyn OperationsTrait
    ) -> Result<Arc<Image>, ImageErrors> {
        let mut images = self.lock();

        let input = images
            .get(source)
            .ok_or_else(|| ImageErrors::NoSuchImage(source.to_string()))?;

        let output = Arc::new(operation.execute(input)?);

        trace!("{} -> {} via {}", source, destination, operation.name());

        images.insert(destination.to_string(), Arc::clone(&output));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use retouch_core::pixel::Pixel;

    use crate::errors::ImageErrors;
    use crate::image::Image;
    use crate::store::ImageStore;
    use crate::traits::OperationsTrait;

    struct AddOne;

    impl OperationsTrait for AddOne {
        fn name(&self) -> &'static str {
            "add one"
        }

        fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
            let pixels = image
                .pixels()
                .iter()
                .map(|p| Pixel::gray(i32::from(p.r()) + 1))
                .collect();
            image.with_pixels(pixels)
        }
    }

    struct Failing;

    impl OperationsTrait for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn execute_impl(&self, _: &Image) -> Result<Image, ImageErrors> {
            Err(ImageErrors::GenericStr("always fails"))
        }
    }

    fn black() -> Image {
        Image::fill(Pixel::BLACK, 2, 2, 255).unwrap()
    }

    #[test]
    fn put_overwrites_and_returns_previous() {
        let store = ImageStore::new();

        assert!(store.put("a", black()).is_none());
        let previous = store.put("a", Image::fill(Pixel::gray(9), 1, 1, 255).unwrap());

        assert_eq!(previous.unwrap().dimensions(), (2, 2));
        assert_eq!(store.get("a").unwrap().dimensions(), (1, 1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn names_are_sorted() {
        let store = ImageStore::new();

        for name in ["zebra", "koala", "manhattan"] {
            store.put(name, black());
        }
        assert_eq!(store.names(), ["koala", "manhattan", "zebra"]);

        store.remove("koala");
        assert!(!store.contains("koala"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn failures_leave_store_untouched() {
        let store = ImageStore::new();
        store.put("a", black());

        assert!(matches!(
            store.apply("b", "c", &AddOne),
            Err(ImageErrors::NoSuchImage(_))
        ));
        assert!(store.apply("a", "c", &Failing).is_err());
        assert_eq!(store.names(), ["a"]);
    }

    #[test]
    fn concurrent_updates_of_one_name_are_not_lost() {
        let store = Arc::new(ImageStore::new());
        store.put("counter", black());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..10 {
                        store.apply("counter", "counter", &AddOne).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        let counter = store.get("counter").unwrap();
        assert_eq!(counter.pixel_at(0, 0).unwrap(), Pixel::gray(80));
    }
}
