//! Where the catalog comes from.
//!
//! The backend is an opaque collaborator that returns two JSON collections.
//! [`CatalogSource`] is the seam; the store never knows how the bytes arrive.

use async_trait::async_trait;
use thiserror::Error;

use crate::prediction::Prediction;
use crate::product::Product;

#[derive(Debug, Error)]
pub enum CatalogSourceError {
    #[error("catalog transport failed: {0}")]
    Transport(String),

    #[error("catalog endpoint returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode {collection}: {message}")]
    Decode {
        collection: &'static str,
        message: String,
    },
}

/// Async source of the two catalog collections.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogSourceError>;

    async fn fetch_predictions(&self) -> Result<Vec<Prediction>, CatalogSourceError>;
}

/// In-memory JSON documents standing in for the backend.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products_json: String,
    predictions_json: String,
}

impl StaticCatalogSource {
    pub fn new(products_json: impl Into<String>, predictions_json: impl Into<String>) -> Self {
        Self {
            products_json: products_json.into(),
            predictions_json: predictions_json.into(),
        }
    }

    /// Build from already-typed records.
    pub fn from_records(
        products: &[Product],
        predictions: &[Prediction],
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            serde_json::to_string(products)?,
            serde_json::to_string(predictions)?,
        ))
    }
}

fn decode<T>(collection: &'static str, json: &str) -> Result<Vec<T>, CatalogSourceError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json).map_err(|e| CatalogSourceError::Decode {
        collection,
        message: e.to_string(),
    })
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogSourceError> {
        decode("products", &self.products_json)
    }

    async fn fetch_predictions(&self) -> Result<Vec<Prediction>, CatalogSourceError> {
        decode("predictions", &self.predictions_json)
    }
}

/// Plain `GET` of `{base}/api/products` and `{base}/api/predictions`.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "http")]
impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse a configured client (timeouts, proxy settings).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim().trim_end_matches('/').to_string(),
        }
    }

    async fn get<T>(&self, path: &str, collection: &'static str) -> Result<Vec<T>, CatalogSourceError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogSourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogSourceError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| CatalogSourceError::Decode {
                collection,
                message: e.to_string(),
            })
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogSourceError> {
        self.get("/api/products", "products").await
    }

    async fn fetch_predictions(&self) -> Result<Vec<Prediction>, CatalogSourceError> {
        self.get("/api/predictions", "predictions").await
    }
}
