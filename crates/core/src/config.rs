//! Runtime configuration for the storefront page.
//!
//! Values come from `STOREFRONT_*` environment variables. Unset variables fall
//! back to the defaults below; malformed ones are reported as
//! [`StorefrontError::Config`].

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StorefrontError, StorefrontResult};

pub const ENV_REVIEW_PAGE_SIZE: &str = "STOREFRONT_REVIEW_PAGE_SIZE";
pub const ENV_GROWTH_STAR_DIVISOR: &str = "STOREFRONT_GROWTH_STAR_DIVISOR";
pub const ENV_DEFAULT_STARS: &str = "STOREFRONT_DEFAULT_STARS";
pub const ENV_RELATED_LIMIT: &str = "STOREFRONT_RELATED_LIMIT";
pub const ENV_API_URL: &str = "STOREFRONT_API_URL";

/// Tunables shared by the catalog, review and page crates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Reviews returned per "load more" call.
    pub review_page_size: usize,
    /// Growth percentage worth one star in product ratings.
    pub growth_star_divisor: f64,
    /// Star count shown for products with no growth figure.
    pub default_star_count: u8,
    /// Number of related products shown next to the featured one.
    pub related_products_limit: usize,
    /// Backend base URL; `None` means the bundled sample catalog is used.
    pub api_base_url: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            review_page_size: 3,
            growth_star_divisor: 10.0,
            default_star_count: 3,
            related_products_limit: 4,
            api_base_url: None,
        }
    }
}

impl StorefrontConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> StorefrontResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> StorefrontResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            review_page_size: parse_or(&lookup, ENV_REVIEW_PAGE_SIZE, defaults.review_page_size)?,
            growth_star_divisor: parse_or(
                &lookup,
                ENV_GROWTH_STAR_DIVISOR,
                defaults.growth_star_divisor,
            )?,
            default_star_count: parse_or(&lookup, ENV_DEFAULT_STARS, defaults.default_star_count)?,
            related_products_limit: parse_or(
                &lookup,
                ENV_RELATED_LIMIT,
                defaults.related_products_limit,
            )?,
            api_base_url: lookup(ENV_API_URL)
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values the page cannot work with.
    pub fn validate(&self) -> StorefrontResult<()> {
        if self.review_page_size == 0 {
            return Err(StorefrontError::config("review_page_size must be at least 1"));
        }
        if !(self.growth_star_divisor.is_finite() && self.growth_star_divisor > 0.0) {
            return Err(StorefrontError::config(
                "growth_star_divisor must be a positive number",
            ));
        }
        if self.default_star_count > 5 {
            return Err(StorefrontError::config("default_star_count must be at most 5"));
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> StorefrontResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + core::fmt::Debug,
    T::Err: core::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| StorefrontError::config(format!("{key}={raw:?}: {e}"))),
        None => {
            tracing::debug!(key, ?default, "config variable not set; using default");
            Ok(default)
        }
    }
}
