use std::sync::Arc;

use anyhow::Context;

use storefront_catalog::CatalogSource;
use storefront_core::StorefrontConfig;
use storefront_events::{EventBus, EventSink, InMemoryEventBus, StorefrontEvent};
use storefront_page::{ProductPage, sample_source};
use storefront_reviews::{ReviewDraft, SortCriterion};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    let source = catalog_source(&config);

    let bus = Arc::new(InMemoryEventBus::<StorefrontEvent>::new());
    let events = bus.subscribe();

    let mut page = ProductPage::load(source.as_ref(), config, EventSink::from(bus.clone())).await;

    if let Some(product) = page.featured() {
        tracing::info!(
            product = product.name(),
            stars = %page.product_stars(product),
            "featured product"
        );
    }
    for card in page.related_products() {
        tracing::info!(title = %card.title, stars = %card.stars, price = ?card.price, "related product");
    }
    for point in page.popularity_series() {
        tracing::info!(label = %point.label, score = point.score, "predicted popularity");
    }

    // A short scripted session, as the input layer would drive it.
    page.hover_thumbnail(3);
    page.open_modal(2);
    page.modal_next();
    page.modal_prev();
    page.close_modal();
    page.toggle_details();
    page.toggle_favorite();

    page.load_more_reviews();
    match page.submit_review(ReviewDraft::new("", 4, "hi")) {
        Ok(_) => tracing::warn!("empty author was accepted"),
        Err(err) => tracing::info!(%err, fields = ?err.invalid_fields(), "submission rejected"),
    }
    page.submit_review(ReviewDraft::new("Demo User", 5, "Great palette!"))
        .context("valid demo review was rejected")?;
    let sorted = page.sort_reviews(SortCriterion::HighestRating);
    for review in &sorted.reviews {
        tracing::info!(author = %review.author, stars = %review.stars(), date = %review.date, "review");
    }

    for event in events.drain() {
        tracing::info!(event = %serde_json::to_string(&event)?, "event");
    }

    Ok(())
}

#[cfg(feature = "http")]
fn catalog_source(config: &StorefrontConfig) -> Box<dyn CatalogSource> {
    match &config.api_base_url {
        Some(url) => {
            tracing::info!(%url, "loading catalog from backend");
            Box::new(storefront_catalog::HttpCatalogSource::new(url.clone()))
        }
        None => Box::new(sample_source()),
    }
}

#[cfg(not(feature = "http"))]
fn catalog_source(config: &StorefrontConfig) -> Box<dyn CatalogSource> {
    if config.api_base_url.is_some() {
        tracing::warn!("STOREFRONT_API_URL is set but the http feature is disabled; using the bundled catalog");
    }
    Box::new(sample_source())
}
