//! `storefront-page`: the product page wired together.
//!
//! [`ProductPage`] owns the catalog, the gallery controllers and the review
//! ledger; the rendering layer calls it and observes its events.

pub mod page;
pub mod sample;

pub use page::{ProductCard, ProductPage};
pub use sample::sample_source;
