use serde::Serialize;

use storefront_catalog::{CatalogStore, ImageRef};
use storefront_events::{EventSink, StorefrontEvent};

/// The image the carousel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveImage {
    pub index: usize,
    pub image: ImageRef,
}

/// Active position in an ordered image list.
///
/// Invariant: `index < images.len()` whenever the list is non-empty. Every
/// operation on an empty list is a no-op returning `None`.
#[derive(Debug, Clone, Default)]
pub struct CarouselController {
    images: Vec<ImageRef>,
    index: usize,
    sink: EventSink,
}

impl CarouselController {
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self {
            images,
            index: 0,
            sink: EventSink::disconnected(),
        }
    }

    /// Gallery over the primary image of every catalog product.
    pub fn from_catalog(catalog: &CatalogStore) -> Self {
        Self::new(catalog.images())
    }

    pub fn with_sink(mut self, sink: EventSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Active index, `None` for an empty gallery.
    pub fn index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    pub fn current(&self) -> Option<ActiveImage> {
        self.images.get(self.index).map(|image| ActiveImage {
            index: self.index,
            image: image.clone(),
        })
    }

    /// Jump to `index`, reduced modulo the gallery length.
    pub fn set_index(&mut self, index: usize) -> Option<ActiveImage> {
        if self.is_empty() {
            return None;
        }
        self.move_to(index % self.len())
    }

    pub fn next(&mut self) -> Option<ActiveImage> {
        if self.is_empty() {
            return None;
        }
        self.move_to((self.index + 1) % self.len())
    }

    pub fn prev(&mut self) -> Option<ActiveImage> {
        if self.is_empty() {
            return None;
        }
        let len = self.len();
        self.move_to((self.index + len - 1) % len)
    }

    /// Position of `image` in the gallery, if it is part of it.
    pub fn position_of(&self, image: &ImageRef) -> Option<usize> {
        self.images.iter().position(|candidate| candidate == image)
    }

    fn move_to(&mut self, index: usize) -> Option<ActiveImage> {
        self.index = index;
        let active = self.current()?;
        tracing::debug!(index, image = %active.image, "carousel moved");
        self.sink.emit(StorefrontEvent::ImageChanged {
            index,
            image: active.image.to_string(),
        });
        Some(active)
    }
}
