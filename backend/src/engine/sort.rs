use chrono::{DateTime, Utc};
use common::model::dish::DishRecord;
use common::model::query::SortOption;
use std::cmp::Ordering;

pub const RECENCY_WEIGHT: f64 = 0.7;
pub const RATING_WEIGHT: f64 = 0.3;

/// Whole elapsed days from `created` to `now`.
pub fn days_since(created: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created).num_days()
}

/// `0.7 / max(days, 1) + 0.3 * average`. Undated dishes count as distant past
/// and only score on rating. Rating is used on its raw 0-5 scale.
pub fn trending_score(dish: &DishRecord, now: DateTime<Utc>) -> f64 {
    let recency = match dish.created_at {
        Some(created) => 1.0 / days_since(created, now).max(1) as f64,
        None => 0.0,
    };
    RECENCY_WEIGHT * recency + RATING_WEIGHT * dish.average_rating
}

/// Stable in-place sort. Missing timestamps sort as the earliest possible date.
pub fn sort_dishes(dishes: &mut [&DishRecord], option: SortOption, now: DateTime<Utc>) {
    match option {
        // `None < Some(_)`, which is exactly "missing means earliest".
        SortOption::Newest => dishes.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Oldest => dishes.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOption::HighestRated => {
            dishes.sort_by(|a, b| descending(a.average_rating, b.average_rating))
        }
        SortOption::Trending => {
            dishes.sort_by_cached_key(|d| std::cmp::Reverse(OrderedScore(trending_score(d, now))))
        }
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

struct OrderedScore(f64);

impl PartialEq for OrderedScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedScore {}

impl PartialOrd for OrderedScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
