use serde::{Deserialize, Serialize};

use storefront_events::{EventSink, StorefrontEvent};

use crate::carousel::{ActiveImage, CarouselController};

/// Modal overlay lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Full-screen image overlay bound to a [`CarouselController`].
///
/// The presenter only owns the open/closed state. The active index lives in
/// the carousel, which is passed in on every call so the thumbnail strip and
/// the overlay always agree on the image.
///
/// Clicking outside the image is the input layer's business; it calls
/// [`ModalPresenter::close`].
#[derive(Debug, Clone, Default)]
pub struct ModalPresenter {
    state: ModalState,
    sink: EventSink,
}

impl ModalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: EventSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Open (or re-target) the overlay on `index`.
    ///
    /// On an empty gallery there is nothing to show: the modal stays closed.
    pub fn open(&mut self, carousel: &mut CarouselController, index: usize) -> Option<ActiveImage> {
        let active = carousel.set_index(index)?;

        self.state = ModalState::Open;
        tracing::debug!(index = active.index, "modal opened");
        self.sink.emit(StorefrontEvent::ModalOpened {
            index: active.index,
            image: active.image.to_string(),
        });

        Some(active)
    }

    pub fn close(&mut self) -> ModalState {
        if self.state == ModalState::Open {
            self.state = ModalState::Closed;
            tracing::debug!("modal closed");
            self.sink.emit(StorefrontEvent::ModalClosed);
        }
        self.state
    }

    /// Next image; ignored while closed.
    pub fn next(&mut self, carousel: &mut CarouselController) -> Option<ActiveImage> {
        if !self.is_open() {
            return None;
        }
        carousel.next()
    }

    /// Previous image; ignored while closed.
    pub fn prev(&mut self, carousel: &mut CarouselController) -> Option<ActiveImage> {
        if !self.is_open() {
            return None;
        }
        carousel.prev()
    }

    /// Image shown in the overlay, `None` while closed.
    pub fn current(&self, carousel: &CarouselController) -> Option<ActiveImage> {
        if !self.is_open() {
            return None;
        }
        carousel.current()
    }
}
