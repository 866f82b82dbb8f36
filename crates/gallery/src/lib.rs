//! Image gallery state: the carousel's active index and the modal overlay
//! bound to it.
//!
//! Both controllers return the new state from every call and publish a
//! notification; nothing here knows how images are drawn.

pub mod carousel;
pub mod modal;

pub use carousel::{ActiveImage, CarouselController};
pub use modal::{ModalPresenter, ModalState};
