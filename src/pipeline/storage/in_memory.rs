use std::sync::Mutex;
use tracing::debug;

use crate::domain::{Review, SortOrder};

/// In-memory backing collection for the review feed.
///
/// The feed owns the session's canonical reviews in a prepend-only list:
/// new entries, whether a fetched batch or a single local submission,
/// always land at the front, so the backing order is insertion order with
/// the most recently added first. Views never mutate this list; they
/// clone a snapshot and filter and sort the copy.
pub struct ReviewFeed {
    reviews: Mutex<Vec<Review>>,
}

impl Default for ReviewFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewFeed {
    pub fn new() -> Self {
        Self {
            reviews: Mutex::new(Vec::new()),
        }
    }

    /// Prepend one locally authored review to the feed
    pub fn submit(&self, review: Review) {
        let mut reviews = self.reviews.lock().unwrap();
        debug!("Submitted review {} with rating {}", review.id, review.rating);
        reviews.insert(0, review);
    }

    /// Prepend a fetched batch, preserving the batch's own order.
    ///
    /// The first record of the batch ends up first in the feed, exactly
    /// as if the batch had been spliced in at the front in one step.
    pub fn ingest_batch(&self, batch: Vec<Review>) {
        let mut reviews = self.reviews.lock().unwrap();
        debug!("Ingesting batch of {} external reviews", batch.len());
        reviews.splice(0..0, batch);
    }

    /// Produce a display view: an optional exact-rating filter followed
    /// by the requested ordering.
    ///
    /// Filtering happens before sorting, and both operate on a snapshot,
    /// so calling this is idempotent and never reorders the backing list.
    /// The rating sorts are stable: entries tied on rating keep their
    /// filtered insertion order.
    pub fn view(&self, filter_rating: Option<u8>, sort: SortOrder) -> Vec<Review> {
        let reviews = self.reviews.lock().unwrap();
        let mut result: Vec<Review> = match filter_rating {
            Some(rating) => reviews
                .iter()
                .filter(|review| review.rating == rating)
                .cloned()
                .collect(),
            None => reviews.clone(),
        };
        drop(reviews);

        match sort {
            SortOrder::Newest => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => result.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Highest => result.sort_by(|a, b| b.rating.cmp(&a.rating)),
            SortOrder::Lowest => result.sort_by(|a, b| a.rating.cmp(&b.rating)),
        }

        result
    }

    pub fn len(&self) -> usize {
        self.reviews.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReviewAuthor;
    use chrono::{Duration, TimeZone, Utc};

    // Deterministic timestamps: base time plus a per-review minute offset
    fn make_review(id: &str, rating: u8, minutes: i64) -> Review {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Review {
            id: id.to_string(),
            author: ReviewAuthor {
                name: Some(format!("Author {}", id)),
                avatar: None,
                uid: format!("uid-{}", id),
            },
            rating,
            title: String::new(),
            content: format!("Content for review {}", id),
            created_at: base + Duration::minutes(minutes),
        }
    }

    fn ids(view: &[Review]) -> Vec<&str> {
        view.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_submit_prepends() {
        let feed = ReviewFeed::new();
        feed.submit(make_review("a", 4, 0));
        feed.submit(make_review("b", 4, 1));

        // Equal ratings, so the stable Highest sort exposes the raw
        // backing order: most recent submission first
        let backing = feed.view(None, SortOrder::Highest);
        assert_eq!(ids(&backing), vec!["b", "a"]);
        let oldest = feed.view(None, SortOrder::Oldest);
        assert_eq!(ids(&oldest), vec!["a", "b"]);
    }

    #[test]
    fn test_ingest_batch_preserves_batch_order() {
        let feed = ReviewFeed::new();
        feed.submit(make_review("local", 4, 100));
        feed.ingest_batch(vec![
            make_review("g0", 4, 0),
            make_review("g1", 4, 1),
            make_review("g2", 4, 2),
        ]);

        // All ratings equal: the stable Highest sort reveals backing
        // order, which must be batch order followed by prior entries
        let view = feed.view(None, SortOrder::Highest);
        assert_eq!(ids(&view), vec!["g0", "g1", "g2", "local"]);
        assert_eq!(feed.len(), 4);
    }

    #[test]
    fn test_ingest_empty_batch_is_a_no_op() {
        let feed = ReviewFeed::new();
        feed.submit(make_review("a", 5, 0));
        feed.ingest_batch(Vec::new());
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn test_view_filters_exact_rating() {
        let feed = ReviewFeed::new();
        feed.ingest_batch(vec![
            make_review("five-1", 5, 0),
            make_review("three", 3, 1),
            make_review("five-2", 5, 2),
            make_review("unknown", 0, 3),
        ]);

        let fives = feed.view(Some(5), SortOrder::Oldest);
        assert_eq!(ids(&fives), vec!["five-1", "five-2"]);

        let fours = feed.view(Some(4), SortOrder::Newest);
        assert!(fours.is_empty());
    }

    #[test]
    fn test_rating_filters_partition_the_rated_entries() {
        let feed = ReviewFeed::new();
        feed.ingest_batch(vec![
            make_review("r1", 1, 0),
            make_review("r2", 5, 1),
            make_review("r3", 3, 2),
            make_review("r4", 5, 3),
            make_review("r5", 2, 4),
        ]);

        // Every entry with a known rating appears in exactly one
        // single-rating view
        let mut seen = Vec::new();
        for rating in 1..=5u8 {
            for review in feed.view(Some(rating), SortOrder::Newest) {
                assert_eq!(review.rating, rating);
                seen.push(review.id);
            }
        }
        seen.sort();
        assert_eq!(seen, vec!["r1", "r2", "r3", "r4", "r5"]);
    }

    #[test]
    fn test_newest_and_oldest_are_reverses() {
        let feed = ReviewFeed::new();
        feed.ingest_batch(vec![
            make_review("a", 2, 5),
            make_review("b", 4, 1),
            make_review("c", 1, 9),
        ]);

        let newest = feed.view(None, SortOrder::Newest);
        let mut oldest = feed.view(None, SortOrder::Oldest);
        oldest.reverse();
        assert_eq!(ids(&newest), ids(&oldest));
        assert_eq!(ids(&newest), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_highest_sort_is_stable_on_ties() {
        let feed = ReviewFeed::new();
        feed.ingest_batch(vec![
            make_review("first-five", 5, 0),
            make_review("one", 1, 1),
            make_review("second-five", 5, 2),
        ]);

        let highest = feed.view(None, SortOrder::Highest);
        assert_eq!(ids(&highest), vec!["first-five", "second-five", "one"]);

        let lowest = feed.view(None, SortOrder::Lowest);
        assert_eq!(ids(&lowest), vec!["one", "first-five", "second-five"]);
    }

    #[test]
    fn test_unknown_ratings_sort_below_every_star_rating() {
        let feed = ReviewFeed::new();
        feed.ingest_batch(vec![
            make_review("unknown", 0, 0),
            make_review("one-star", 1, 1),
            make_review("five-star", 5, 2),
        ]);

        let highest = feed.view(None, SortOrder::Highest);
        assert_eq!(ids(&highest), vec!["five-star", "one-star", "unknown"]);
    }

    #[test]
    fn test_view_is_idempotent_and_leaves_feed_untouched() {
        let feed = ReviewFeed::new();
        feed.ingest_batch(vec![
            make_review("a", 3, 2),
            make_review("b", 5, 0),
            make_review("c", 4, 1),
        ]);

        let first: Vec<String> = feed
            .view(Some(5), SortOrder::Newest)
            .into_iter()
            .map(|r| r.id)
            .collect();
        let second: Vec<String> = feed
            .view(Some(5), SortOrder::Newest)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(first, second);

        // The backing order is unchanged by any number of views
        assert_eq!(feed.len(), 3);
        let raw = feed.view(None, SortOrder::Highest);
        assert_eq!(ids(&raw), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_empty_feed_views_are_empty() {
        let feed = ReviewFeed::new();
        assert!(feed.is_empty());
        assert!(feed.view(None, SortOrder::Newest).is_empty());
        assert!(feed.view(Some(5), SortOrder::Lowest).is_empty());
    }
}
