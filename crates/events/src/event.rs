use serde::{Deserialize, Serialize};

/// A notification about a state change.
///
/// Events are **immutable** facts about something that already happened.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "reviews.page.loaded").
    fn event_type(&self) -> &'static str;
}

/// Everything the rendering layer can observe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorefrontEvent {
    /// Both catalog collections finished loading (possibly empty).
    CatalogLoaded { products: usize, predictions: usize },
    /// The carousel's active image moved.
    ImageChanged { index: usize, image: String },
    /// The modal overlay opened on `index`.
    ModalOpened { index: usize, image: String },
    ModalClosed,
    /// The review collection was replaced; the list must be cleared.
    ReviewsReset { total: usize },
    /// A page was appended to the rendered review list.
    ReviewsPageLoaded {
        start: usize,
        count: usize,
        has_more: bool,
    },
    ReviewSubmitted { author: String, total: usize },
    ReviewsSorted { criterion: String },
    /// The "add to favorites" button flipped.
    FavoriteToggled { favorite: bool },
    /// The full-description overlay opened or collapsed.
    DetailsToggled { open: bool },
}

impl Event for StorefrontEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StorefrontEvent::CatalogLoaded { .. } => "catalog.loaded",
            StorefrontEvent::ImageChanged { .. } => "gallery.image.changed",
            StorefrontEvent::ModalOpened { .. } => "gallery.modal.opened",
            StorefrontEvent::ModalClosed => "gallery.modal.closed",
            StorefrontEvent::ReviewsReset { .. } => "reviews.reset",
            StorefrontEvent::ReviewsPageLoaded { .. } => "reviews.page.loaded",
            StorefrontEvent::ReviewSubmitted { .. } => "reviews.submitted",
            StorefrontEvent::ReviewsSorted { .. } => "reviews.sorted",
            StorefrontEvent::FavoriteToggled { .. } => "page.favorite.toggled",
            StorefrontEvent::DetailsToggled { .. } => "page.details.toggled",
        }
    }
}
