//! Product detail page controller.
//!
//! Owns one of each state component and exposes the calls the input layer
//! makes. Every call returns the resulting state; renderers that prefer to
//! react to changes subscribe to the page's [`EventSink`] instead.

use serde::Serialize;

use storefront_catalog::{CatalogSource, CatalogStore, ImageRef, PopularityPoint, Product, growth_stars};
use storefront_core::{StorefrontConfig, StorefrontResult};
use storefront_events::{EventSink, StorefrontEvent};
use storefront_gallery::{ActiveImage, CarouselController, ModalPresenter, ModalState};
use storefront_reviews::{
    MediaRef, Review, ReviewDraft, ReviewLedger, ReviewPage, SortCriterion, mock_reviews,
    render_stars,
};

/// What a product card in the related-products strip shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub title: String,
    pub image: Option<ImageRef>,
    pub price: Option<f64>,
    pub stars: String,
}

#[derive(Debug)]
pub struct ProductPage {
    config: StorefrontConfig,
    catalog: CatalogStore,
    carousel: CarouselController,
    modal: ModalPresenter,
    reviews: ReviewLedger,
    favorite: bool,
    details_open: bool,
    sink: EventSink,
}

impl ProductPage {
    /// Load the catalog (both collections, concurrently), build the gallery,
    /// seed the reviews and show their first page.
    pub async fn load<S>(source: &S, config: StorefrontConfig, sink: EventSink) -> Self
    where
        S: CatalogSource + ?Sized,
    {
        let catalog = CatalogStore::load(source, &sink).await;
        let reviews = ReviewLedger::new().with_sink(sink.clone());
        let mut page = Self::assemble(config, catalog, reviews, sink);

        page.reviews.seed(mock_reviews());
        page.load_more_reviews();
        page
    }

    /// Page over an already loaded catalog and review ledger.
    pub fn assemble(
        config: StorefrontConfig,
        catalog: CatalogStore,
        reviews: ReviewLedger,
        sink: EventSink,
    ) -> Self {
        let carousel = CarouselController::from_catalog(&catalog).with_sink(sink.clone());
        let modal = ModalPresenter::new().with_sink(sink.clone());

        tracing::debug!(
            images = carousel.len(),
            reviews = reviews.len(),
            "product page assembled"
        );
        Self {
            config,
            catalog,
            carousel,
            modal,
            reviews,
            favorite: false,
            details_open: false,
            sink,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn reviews(&self) -> &ReviewLedger {
        &self.reviews
    }

    pub fn featured(&self) -> Option<&Product> {
        self.catalog.featured()
    }

    /// Growth-based star glyphs for a catalog product.
    pub fn product_stars(&self, product: &Product) -> String {
        render_stars(growth_stars(
            product.growth_pct,
            self.config.growth_star_divisor,
            self.config.default_star_count,
        ))
    }

    /// Cards for products outside the featured product's category.
    pub fn related_products(&self) -> Vec<ProductCard> {
        let Some(featured) = self.featured() else {
            return Vec::new();
        };

        self.catalog
            .related_to(featured, self.config.related_products_limit)
            .into_iter()
            .map(|product| ProductCard {
                title: product.name().to_string(),
                image: product.image().cloned(),
                price: product.display_price(),
                stars: self.product_stars(product),
            })
            .collect()
    }

    pub fn popularity_series(&self) -> Vec<PopularityPoint> {
        self.catalog.popularity_series()
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Flip the favorite flag; returns the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        tracing::debug!(favorite = self.favorite, "favorite toggled");
        self.sink.emit(StorefrontEvent::FavoriteToggled {
            favorite: self.favorite,
        });
        self.favorite
    }

    /// Whether the full-description overlay is expanded. Starts collapsed.
    pub fn details_open(&self) -> bool {
        self.details_open
    }

    pub fn toggle_details(&mut self) -> bool {
        self.details_open = !self.details_open;
        self.sink.emit(StorefrontEvent::DetailsToggled {
            open: self.details_open,
        });
        self.details_open
    }

    // Gallery

    /// Main image follows the hovered thumbnail.
    pub fn hover_thumbnail(&mut self, index: usize) -> Option<ActiveImage> {
        self.carousel.set_index(index)
    }

    pub fn open_modal(&mut self, index: usize) -> Option<ActiveImage> {
        self.modal.open(&mut self.carousel, index)
    }

    pub fn close_modal(&mut self) -> ModalState {
        self.modal.close()
    }

    pub fn modal_next(&mut self) -> Option<ActiveImage> {
        self.modal.next(&mut self.carousel)
    }

    pub fn modal_prev(&mut self) -> Option<ActiveImage> {
        self.modal.prev(&mut self.carousel)
    }

    pub fn modal_state(&self) -> ModalState {
        self.modal.state()
    }

    pub fn modal_image(&self) -> Option<ActiveImage> {
        self.modal.current(&self.carousel)
    }

    /// Open the modal on a review photo, if it is one of the gallery images.
    ///
    /// Videos and uploads that are not catalog images have no gallery
    /// position; the call is then a no-op.
    pub fn open_media(&mut self, media: &MediaRef) -> Option<ActiveImage> {
        let MediaRef::Image(src) = media else {
            return None;
        };
        let Some(index) = self.carousel.position_of(&gallery_ref(src)) else {
            tracing::debug!(src = %src, "review media is not part of the gallery");
            return None;
        };
        self.open_modal(index)
    }

    // Reviews

    /// Next page of reviews at the configured page size.
    pub fn load_more_reviews(&mut self) -> ReviewPage {
        self.reviews.load_next_page(self.config.review_page_size)
    }

    /// Reviews currently on screen (everything loaded since the last reset).
    pub fn reviews_shown(&self) -> &[Review] {
        &self.reviews.reviews()[..self.reviews.loaded()]
    }

    /// Submit the review form; on success the list restarts at its first page.
    pub fn submit_review(&mut self, draft: ReviewDraft) -> StorefrontResult<ReviewPage> {
        self.reviews.submit(draft)?;
        Ok(self.load_more_reviews())
    }

    /// Reorder all reviews and restart the list at its first page.
    pub fn sort_reviews(&mut self, criterion: SortCriterion) -> ReviewPage {
        self.reviews.sort_by(criterion);
        self.load_more_reviews()
    }
}

// Review photos are stored relative to the site root, gallery images absolute.
fn gallery_ref(src: &str) -> ImageRef {
    if src.starts_with('/') || src.contains("://") || src.starts_with("blob:") {
        ImageRef::new(src)
    } else {
        ImageRef::new(format!("/{src}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> CatalogStore {
        let products = (1..=n)
            .map(|i| {
                let mut p = Product::new(format!("Category {i}"), format!("/images/img{i}.jpg"));
                p.growth_pct = Some(i as f64 * 10.0);
                p.top_product_acp = Some(100.0 * i as f64);
                p
            })
            .collect();
        CatalogStore::new(products, Vec::new())
    }

    fn page(n: usize) -> ProductPage {
        ProductPage::assemble(
            StorefrontConfig::default(),
            catalog(n),
            ReviewLedger::from(mock_reviews()),
            EventSink::disconnected(),
        )
    }

    #[test]
    fn gallery_relative_paths_become_absolute() {
        assert_eq!(gallery_ref("images/img2.jpg"), ImageRef::from("/images/img2.jpg"));
        assert_eq!(gallery_ref("/images/img2.jpg"), ImageRef::from("/images/img2.jpg"));
        assert_eq!(gallery_ref("blob:abc"), ImageRef::from("blob:abc"));
    }

    #[test]
    fn open_media_targets_the_matching_gallery_image() {
        let mut page = page(5);
        let photo = MediaRef::Image("images/img3.jpg".to_string());

        let active = page.open_media(&photo).unwrap();

        assert_eq!(active.index, 2);
        assert_eq!(page.modal_state(), ModalState::Open);
    }

    #[test]
    fn open_media_ignores_videos_and_unknown_images() {
        let mut page = page(5);

        assert_eq!(page.open_media(&MediaRef::Video("clip.mp4".to_string())), None);
        assert_eq!(page.open_media(&MediaRef::Image("blob:upload".to_string())), None);
        assert_eq!(page.modal_state(), ModalState::Closed);
    }

    #[test]
    fn related_cards_use_growth_stars() {
        let page = page(4);
        let cards = page.related_products();

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title, "Category 2");
        assert_eq!(cards[0].stars, "★★☆☆☆");
        assert_eq!(cards[0].price, Some(200.0));
    }

    #[test]
    fn star_divisor_is_configurable() {
        let mut page = page(2);
        page.config.growth_star_divisor = 5.0;
        let second = page.catalog().products()[1].clone();

        assert_eq!(page.product_stars(&second), "★★★★☆");
    }

    #[test]
    fn empty_catalog_renders_nothing() {
        let mut page = page(0);

        assert!(page.featured().is_none());
        assert!(page.related_products().is_empty());
        assert_eq!(page.hover_thumbnail(1), None);
        assert_eq!(page.open_modal(0), None);
        assert_eq!(page.modal_next(), None);
    }

    #[test]
    fn favorite_and_details_toggle_independently() {
        let mut page = page(1);
        assert!(!page.is_favorite());
        assert!(!page.details_open());

        assert!(page.toggle_favorite());
        assert!(page.toggle_details());
        assert!(!page.toggle_favorite());

        assert!(!page.is_favorite());
        assert!(page.details_open());
        assert!(!page.toggle_details());
    }

    #[test]
    fn reviews_shown_grows_page_by_page() {
        let mut page = page(1);
        assert!(page.reviews_shown().is_empty());

        page.load_more_reviews();
        assert_eq!(page.reviews_shown().len(), 3);

        page.load_more_reviews();
        assert_eq!(page.reviews_shown().len(), 5);
    }
}
