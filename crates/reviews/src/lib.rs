//! Review module: the product page's review list.
//!
//! Reviews are seeded once (mock data or backend), shown page by page, and
//! mutated only by submission (prepend) and sorting (stable reorder). Nothing
//! is ever deleted.

pub mod draft;
pub mod ledger;
pub mod review;
pub mod seed;
pub mod stars;

pub use draft::{MediaUpload, ReviewDraft};
pub use ledger::{ReviewLedger, ReviewPage, SortCriterion};
pub use review::{MediaRef, Review};
pub use seed::mock_reviews;
pub use stars::{render_stars, MAX_RATING, MIN_RATING};
