//! `storefront-core`: shared building blocks for the storefront state core.
//!
//! This crate contains **pure** primitives (no IO, no rendering): the error
//! model and runtime configuration.

pub mod config;
pub mod error;

pub use config::StorefrontConfig;
pub use error::{FieldError, StorefrontError, StorefrontResult};
