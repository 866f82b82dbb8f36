use storefront_events::{EventSink, StorefrontEvent};

use crate::prediction::{PopularityPoint, Prediction};
use crate::product::{ImageRef, Product};
use crate::source::CatalogSource;

/// Products and predictions, loaded once and read-only afterwards.
///
/// An empty store is a valid state: a failed fetch leaves its collection
/// empty and the page renders nothing for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    products: Vec<Product>,
    predictions: Vec<Prediction>,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>, predictions: Vec<Prediction>) -> Self {
        Self {
            products,
            predictions,
        }
    }

    /// Fetch both collections concurrently and wait for both.
    ///
    /// Never fails: each collection that could not be fetched is logged and
    /// left empty.
    pub async fn load<S>(source: &S, sink: &EventSink) -> Self
    where
        S: CatalogSource + ?Sized,
    {
        let (products, predictions) =
            tokio::join!(source.fetch_products(), source.fetch_predictions());

        let products = products.unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to fetch products; catalog stays empty");
            Vec::new()
        });
        let predictions = predictions.unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to fetch predictions; chart stays empty");
            Vec::new()
        });

        tracing::info!(
            products = products.len(),
            predictions = predictions.len(),
            "catalog loaded"
        );
        sink.emit(StorefrontEvent::CatalogLoaded {
            products: products.len(),
            predictions: predictions.len(),
        });

        Self::new(products, predictions)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.predictions.is_empty()
    }

    /// Product shown on the detail page.
    pub fn featured(&self) -> Option<&Product> {
        self.products.first()
    }

    /// Primary image of each product, in catalog order.
    ///
    /// Products without an image are skipped, so gallery positions only match
    /// product positions when every product has one.
    pub fn images(&self) -> Vec<ImageRef> {
        self.products
            .iter()
            .filter_map(|p| p.image().cloned())
            .collect()
    }

    pub fn leaders(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_leader)
    }

    /// The first `limit` products from a different category than `product`.
    pub fn related_to(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category != product.category)
            .take(limit)
            .collect()
    }

    /// Home-page chart data, most popular first (ties keep backend order).
    pub fn popularity_series(&self) -> Vec<PopularityPoint> {
        let mut points: Vec<PopularityPoint> =
            self.predictions.iter().map(PopularityPoint::from).collect();
        points.sort_by(|a, b| b.score.cmp(&a.score));
        points
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use storefront_events::{EventBus, InMemoryEventBus};

    use super::*;
    use crate::source::{CatalogSourceError, StaticCatalogSource};

    fn product(category: &str, image: &str) -> Product {
        Product::new(category, image)
    }

    fn prediction(name: &str, score: u32) -> Prediction {
        let day = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        Prediction {
            product_id: 1,
            product_name: name.to_string(),
            popularity_score: score,
            window_start: day,
            window_end: day,
        }
    }

    struct BrokenProducts;

    #[async_trait]
    impl CatalogSource for BrokenProducts {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogSourceError> {
            Err(CatalogSourceError::Transport("connection refused".to_string()))
        }

        async fn fetch_predictions(&self) -> Result<Vec<Prediction>, CatalogSourceError> {
            Ok(vec![prediction("Yoga Mats", 75)])
        }
    }

    #[tokio::test]
    async fn load_waits_for_both_collections() {
        let source = StaticCatalogSource::from_records(
            &[product("Backpacks", "/images/img7.jpg")],
            &[prediction("Smart Watches", 90)],
        )
        .unwrap();
        let bus = Arc::new(InMemoryEventBus::<StorefrontEvent>::new());
        let sub = bus.subscribe();

        let store = CatalogStore::load(&source, &EventSink::from(bus.clone())).await;

        assert_eq!(store.products().len(), 1);
        assert_eq!(store.predictions().len(), 1);
        assert_eq!(
            sub.drain(),
            vec![StorefrontEvent::CatalogLoaded {
                products: 1,
                predictions: 1
            }]
        );
    }

    #[tokio::test]
    async fn failed_fetch_leaves_collection_empty() {
        let store = CatalogStore::load(&BrokenProducts, &EventSink::disconnected()).await;

        assert!(store.products().is_empty());
        assert!(store.featured().is_none());
        assert!(store.images().is_empty());
        assert_eq!(store.predictions().len(), 1);
    }

    #[test]
    fn related_products_skip_the_same_category() {
        let store = CatalogStore::new(
            vec![
                product("Backpacks", "/1.jpg"),
                product("Backpacks", "/2.jpg"),
                product("Sunglasses", "/3.jpg"),
                product("Yoga Mats", "/4.jpg"),
                product("Smart Watches", "/5.jpg"),
            ],
            Vec::new(),
        );
        let featured = store.featured().unwrap();

        let related: Vec<&str> = store
            .related_to(featured, 2)
            .into_iter()
            .map(Product::name)
            .collect();

        assert_eq!(related, vec!["Sunglasses", "Yoga Mats"]);
    }

    #[test]
    fn images_follow_catalog_order() {
        let store = CatalogStore::new(
            vec![product("A", "/a.jpg"), product("B", "/b.jpg")],
            Vec::new(),
        );

        assert_eq!(
            store.images(),
            vec![ImageRef::from("/a.jpg"), ImageRef::from("/b.jpg")]
        );
    }

    #[test]
    fn leaders_are_flagged_products() {
        let mut leader = product("Wireless Earbuds", "/11.jpg");
        leader.is_leader = true;
        let store = CatalogStore::new(vec![product("A", "/a.jpg"), leader], Vec::new());

        let names: Vec<&str> = store.leaders().map(Product::name).collect();
        assert_eq!(names, vec!["Wireless Earbuds"]);
    }

    #[test]
    fn popularity_series_is_sorted_by_score() {
        let store = CatalogStore::new(
            Vec::new(),
            vec![
                prediction("Running Shoes", 85),
                prediction("Wireless Earbuds", 95),
                prediction("Yoga Mats", 75),
            ],
        );

        let labels: Vec<String> = store
            .popularity_series()
            .into_iter()
            .map(|p| p.label)
            .collect();

        assert_eq!(labels, vec!["Wireless Earbuds", "Running Shoes", "Yoga Mats"]);
    }
}
