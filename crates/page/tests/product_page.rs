use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use storefront_catalog::{CatalogSource, CatalogSourceError, Prediction, Product};
use storefront_core::{StorefrontConfig, StorefrontError};
use storefront_events::{EventBus, EventSink, InMemoryEventBus, StorefrontEvent, Subscription};
use storefront_gallery::ModalState;
use storefront_page::{ProductPage, sample_source};
use storefront_reviews::{ReviewDraft, SortCriterion};

struct Harness {
    page: ProductPage,
    events: Subscription<StorefrontEvent>,
}

impl Harness {
    async fn with_source<S: CatalogSource>(source: &S) -> Self {
        let bus = Arc::new(InMemoryEventBus::<StorefrontEvent>::new());
        let events = bus.subscribe();
        let page = ProductPage::load(source, StorefrontConfig::default(), EventSink::from(bus)).await;
        Self { page, events }
    }

    async fn sample() -> Self {
        Self::with_source(&sample_source()).await
    }
}

struct Offline;

#[async_trait]
impl CatalogSource for Offline {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogSourceError> {
        Err(CatalogSourceError::Transport("offline".to_string()))
    }

    async fn fetch_predictions(&self) -> Result<Vec<Prediction>, CatalogSourceError> {
        Err(CatalogSourceError::Transport("offline".to_string()))
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn first_render_has_catalog_and_first_review_page() {
    let h = Harness::sample().await;

    assert_eq!(h.page.catalog().products().len(), 15);
    assert_eq!(h.page.featured().map(Product::name), Some("Candy Bags for School"));
    assert_eq!(h.page.carousel().index(), Some(0));
    assert_eq!(h.page.related_products().len(), 4);
    assert_eq!(h.page.popularity_series()[0].label, "Wireless Earbuds");
    assert_eq!(h.page.reviews_shown().len(), 3);
    assert!(h.page.reviews().has_more());

    assert_eq!(
        h.events.drain(),
        vec![
            StorefrontEvent::CatalogLoaded {
                products: 15,
                predictions: 5
            },
            StorefrontEvent::ReviewsReset { total: 5 },
            StorefrontEvent::ReviewsPageLoaded {
                start: 0,
                count: 3,
                has_more: true
            },
        ]
    );
}

#[tokio::test]
async fn offline_backend_still_renders() {
    let mut h = Harness::with_source(&Offline).await;

    assert!(h.page.catalog().is_empty());
    assert!(h.page.featured().is_none());
    assert_eq!(h.page.open_modal(0), None);
    assert_eq!(h.page.modal_state(), ModalState::Closed);
    assert_eq!(h.page.reviews_shown().len(), 3);
}

#[tokio::test]
async fn modal_cycles_through_the_gallery() {
    let mut h = Harness::sample().await;

    let opened = h.page.open_modal(13).unwrap();
    assert_eq!(opened.image.as_str(), "/images/img14.jpg");

    h.page.modal_next();
    let wrapped = h.page.modal_next().unwrap();
    assert_eq!(wrapped.index, 0);

    let back = h.page.modal_prev().unwrap();
    assert_eq!(back.index, 14);
    assert_eq!(h.page.modal_image(), Some(back));

    assert_eq!(h.page.close_modal(), ModalState::Closed);
    assert_eq!(h.page.modal_next(), None);
    assert_eq!(h.page.modal_image(), None);
    // The main image keeps the last modal position.
    assert_eq!(h.page.carousel().index(), Some(14));
}

#[tokio::test]
async fn review_photo_opens_the_modal() {
    let mut h = Harness::sample().await;
    let photo = h.page.reviews_shown()[1].media[0].clone();

    let active = h.page.open_media(&photo).unwrap();

    assert_eq!(active.index, 1);
    assert_eq!(h.page.modal_state(), ModalState::Open);
}

#[tokio::test]
async fn page_toggles_notify_the_renderer() {
    let mut h = Harness::sample().await;
    h.events.drain();

    h.page.toggle_favorite();
    h.page.toggle_details();
    h.page.toggle_details();

    assert!(h.page.is_favorite());
    assert!(!h.page.details_open());
    assert_eq!(
        h.events.drain(),
        vec![
            StorefrontEvent::FavoriteToggled { favorite: true },
            StorefrontEvent::DetailsToggled { open: true },
            StorefrontEvent::DetailsToggled { open: false },
        ]
    );
}

#[tokio::test]
async fn load_more_until_exhausted() {
    let mut h = Harness::sample().await;

    let second = h.page.load_more_reviews();
    assert_eq!(second.start, 3);
    assert_eq!(second.reviews.len(), 2);
    assert!(!second.has_more);

    let third = h.page.load_more_reviews();
    assert!(third.is_exhausted());
    assert_eq!(h.page.reviews_shown().len(), 5);
}

#[tokio::test]
async fn rejected_submission_names_fields_and_changes_nothing() {
    let mut h = Harness::sample().await;
    h.events.drain();

    let err = h.page.submit_review(ReviewDraft::new("", 4, "hi")).unwrap_err();

    assert!(matches!(err, StorefrontError::Validation(_)));
    assert_eq!(err.invalid_fields(), vec!["author"]);
    assert_eq!(h.page.reviews().len(), 5);
    assert_eq!(h.page.reviews_shown().len(), 3);
    assert!(h.events.drain().is_empty());
}

#[tokio::test]
async fn accepted_submission_restarts_the_list() {
    let mut h = Harness::sample().await;
    h.page.load_more_reviews();

    let first_page = h
        .page
        .submit_review(ReviewDraft::new("A", 5, "great").dated(date("2024-05-01")))
        .unwrap();

    assert_eq!(h.page.reviews().len(), 6);
    assert_eq!(first_page.start, 0);
    assert_eq!(first_page.reviews.len(), 3);
    assert_eq!(first_page.reviews[0].author, "A");
    assert_eq!(h.page.reviews_shown()[0].author, "A");
}

#[tokio::test]
async fn sorting_restarts_the_list_in_the_new_order() {
    let mut h = Harness::sample().await;
    h.page.load_more_reviews();

    let page = h.page.sort_reviews(SortCriterion::Oldest);

    assert_eq!(page.start, 0);
    assert_eq!(page.reviews[0].date, date("2023-12-05"));
    assert_eq!(page.reviews[1].date, date("2024-01-10"));
    assert_eq!(h.page.reviews_shown().len(), 3);

    let page = h.page.sort_reviews(SortCriterion::LowestRating);
    assert_eq!(page.reviews[0].rating, 3);
}
