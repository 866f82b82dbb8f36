//! Catalog module: the products and sales predictions fetched from the backend.
//!
//! The catalog is loaded once and read-only afterwards. Everything here is
//! deterministic apart from [`CatalogSource`] implementations, which do the IO.

pub mod prediction;
pub mod product;
pub mod rating;
pub mod source;
pub mod store;

pub use prediction::{PopularityPoint, Prediction};
pub use product::{ImageRef, Product};
pub use rating::growth_stars;
pub use source::{CatalogSource, CatalogSourceError, StaticCatalogSource};
#[cfg(feature = "http")]
pub use source::HttpCatalogSource;
pub use store::CatalogStore;
