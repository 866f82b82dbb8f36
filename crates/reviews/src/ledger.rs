use core::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{StorefrontError, StorefrontResult};
use storefront_events::{EventSink, StorefrontEvent};

use crate::draft::ReviewDraft;
use crate::review::Review;

/// Review list orderings offered by the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortCriterion {
    HighestRating,
    LowestRating,
    Newest,
    Oldest,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::HighestRating,
        SortCriterion::LowestRating,
        SortCriterion::Newest,
        SortCriterion::Oldest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::HighestRating => "highest-rating",
            SortCriterion::LowestRating => "lowest-rating",
            SortCriterion::Newest => "newest",
            SortCriterion::Oldest => "oldest",
        }
    }
}

impl core::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortCriterion {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StorefrontError::parse(format!("unknown sort criterion: {s:?}")))
    }
}

/// One "load more" worth of reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewPage {
    /// Position of the first review of this page in the ledger.
    pub start: usize,
    pub reviews: Vec<Review>,
    /// Whether another call would return more reviews.
    pub has_more: bool,
}

impl ReviewPage {
    /// Nothing was returned because the cursor was already at the end.
    pub fn is_exhausted(&self) -> bool {
        self.reviews.is_empty() && !self.has_more
    }
}

/// Ordered review collection with an incremental read cursor.
///
/// Invariant: `loaded <= reviews.len()`. The cursor only moves forward by
/// the number of reviews a page returned, and goes back to 0 whenever the
/// order of the collection changes (seed, submit, sort).
#[derive(Debug, Clone, Default)]
pub struct ReviewLedger {
    reviews: Vec<Review>,
    loaded: usize,
    sink: EventSink,
}

impl ReviewLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: EventSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Number of reviews handed out since the last reset.
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn has_more(&self) -> bool {
        self.loaded < self.reviews.len()
    }

    /// Replace the whole collection and rewind the cursor.
    pub fn seed(&mut self, reviews: Vec<Review>) {
        self.reviews = reviews;
        self.loaded = 0;
        tracing::info!(total = self.reviews.len(), "review ledger seeded");
        self.sink.emit(StorefrontEvent::ReviewsReset {
            total: self.reviews.len(),
        });
    }

    /// Up to `page_size` reviews from the cursor; fewer at the tail, none once
    /// exhausted.
    pub fn load_next_page(&mut self, page_size: usize) -> ReviewPage {
        let start = self.loaded.min(self.reviews.len());
        let end = start.saturating_add(page_size).min(self.reviews.len());
        let reviews = self.reviews[start..end].to_vec();

        self.loaded = end;
        let page = ReviewPage {
            start,
            reviews,
            has_more: self.has_more(),
        };

        if page.is_exhausted() {
            tracing::debug!(total = self.reviews.len(), "review ledger exhausted");
        } else {
            tracing::debug!(start, count = page.reviews.len(), has_more = page.has_more, "review page loaded");
            self.sink.emit(StorefrontEvent::ReviewsPageLoaded {
                start,
                count: page.reviews.len(),
                has_more: page.has_more,
            });
        }
        page
    }

    /// Validate and prepend a review dated today.
    pub fn submit(&mut self, draft: ReviewDraft) -> StorefrontResult<&Review> {
        self.submit_on(draft, Utc::now().date_naive())
    }

    /// Validate and prepend a review, using `today` when the draft has no date.
    ///
    /// On success the cursor rewinds so the next page starts with the new
    /// review. A rejected draft leaves the ledger untouched.
    pub fn submit_on(&mut self, draft: ReviewDraft, today: NaiveDate) -> StorefrontResult<&Review> {
        let review = draft.into_review(today).inspect_err(|err| {
            tracing::debug!(%err, "review submission rejected");
        })?;

        tracing::info!(author = %review.author, rating = review.rating, "review submitted");
        self.sink.emit(StorefrontEvent::ReviewSubmitted {
            author: review.author.clone(),
            total: self.reviews.len() + 1,
        });

        self.reviews.insert(0, review);
        self.loaded = 0;
        Ok(&self.reviews[0])
    }

    /// Stable reorder of the whole collection; rewinds the cursor.
    pub fn sort_by(&mut self, criterion: SortCriterion) {
        match criterion {
            SortCriterion::HighestRating => self.reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
            SortCriterion::LowestRating => self.reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
            SortCriterion::Newest => self.reviews.sort_by(|a, b| b.date.cmp(&a.date)),
            SortCriterion::Oldest => self.reviews.sort_by(|a, b| a.date.cmp(&b.date)),
        }
        self.loaded = 0;

        tracing::debug!(%criterion, "reviews sorted");
        self.sink.emit(StorefrontEvent::ReviewsSorted {
            criterion: criterion.to_string(),
        });
    }
}

impl From<Vec<Review>> for ReviewLedger {
    fn from(reviews: Vec<Review>) -> Self {
        Self {
            reviews,
            loaded: 0,
            sink: EventSink::disconnected(),
        }
    }
}
