//! # Dish Collection Query Engine
//!
//! Pure functions over a [`DishSnapshot`]. Nothing here touches the store or
//! mutates the snapshot; callers pass `now` explicitly and get a fresh view back.
//!
//! - `filter`: minimum rating and free-text match on dish/restaurant name.
//! - `sort`: Newest, Oldest, Highest Rated and Trending orderings.
//! - `grouping`: month buckets for the memory timeline.
//! - `throwback`: dishes near a creation anniversary.
//!
//! [`compute_view`] composes filter, sort and throwback selection for the
//! discovery screen; [`memory_lane`] composes grouping and throwbacks.

pub mod filter;
pub mod grouping;
pub mod sort;
pub mod throwback;

use chrono::{DateTime, Utc};
use common::model::dish::DishRecord;
use common::model::query::QueryParameters;
use common::model::restaurant::RestaurantRecord;
use common::model::view::{DiscoveryView, MemoryLane};
use crate::engine::grouping::MonthKey;
use std::collections::HashMap;

pub const DEFAULT_THROWBACK_WINDOW_DAYS: i64 = 365;
pub const DEFAULT_HIGHLY_RATED_MIN: f64 = 4.0;
pub const DEFAULT_FEATURE_LIMIT: usize = 5;

/// Dishes in store order plus the restaurant table they point into.
#[derive(Debug, Clone, Default)]
pub struct DishSnapshot {
    pub dishes: Vec<DishRecord>,
    pub restaurants: HashMap<String, RestaurantRecord>,
}

impl DishSnapshot {
    pub fn new(dishes: Vec<DishRecord>, restaurants: Vec<RestaurantRecord>) -> Self {
        DishSnapshot {
            dishes,
            restaurants: restaurants.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    pub fn restaurant(&self, dish: &DishRecord) -> Option<&RestaurantRecord> {
        dish.restaurant_id
            .as_ref()
            .and_then(|id| self.restaurants.get(id))
    }

    /// Name of the dish's restaurant, or "" when it has none.
    pub fn restaurant_name(&self, dish: &DishRecord) -> &str {
        self.restaurant(dish).map(|r| r.name.as_str()).unwrap_or("")
    }
}

fn owned<'a>(dishes: impl IntoIterator<Item = &'a DishRecord>) -> Vec<DishRecord> {
    dishes.into_iter().cloned().collect()
}

/// Filtered and sorted discovery list plus throwbacks from the full snapshot.
pub fn compute_view(
    snapshot: &DishSnapshot,
    params: &QueryParameters,
    window_days: i64,
    now: DateTime<Utc>,
) -> DiscoveryView {
    let params = params.normalized();
    let mut dishes = filter::filter_dishes(snapshot, params.min_rating, &params.search);
    sort::sort_dishes(&mut dishes, params.sort, now);

    DiscoveryView {
        dishes: owned(dishes),
        throwbacks: owned(throwback::select_throwbacks(snapshot, window_days, now)),
    }
}

/// Month buckets keyed by label, with labels listed most recent month first.
pub fn memory_lane(snapshot: &DishSnapshot, window_days: i64, now: DateTime<Utc>) -> MemoryLane {
    let grouping = grouping::group_by_month(snapshot, now);
    let keys = grouping.sorted_keys();
    let groups = keys
        .iter()
        .map(|key| (key.label(), owned(grouping.bucket(key).iter().copied())))
        .collect();

    MemoryLane {
        throwbacks: owned(throwback::select_throwbacks(snapshot, window_days, now)),
        sorted_keys: keys.iter().map(MonthKey::label).collect(),
        groups,
    }
}

/// First `limit` dishes, in store order, rated at least `min_rating`.
pub fn highly_rated(snapshot: &DishSnapshot, min_rating: f64, limit: usize) -> Vec<DishRecord> {
    snapshot
        .dishes
        .iter()
        .filter(|d| d.average_rating >= min_rating)
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::{Duration, TimeZone};

    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    pub fn restaurant(id: &str, name: &str) -> RestaurantRecord {
        RestaurantRecord {
            id: id.to_string(),
            name: name.to_string(),
            location: String::new(),
            visit_count: 1,
        }
    }

    /// A dish whose three sub-ratings all equal `rating`.
    pub fn dish(id: &str, name: &str, rating: f64, days_ago: Option<i64>) -> DishRecord {
        let mut dish = DishRecord {
            id: id.to_string(),
            name: name.to_string(),
            notes: String::new(),
            image: None,
            taste_rating: 0.0,
            presentation_rating: 0.0,
            value_rating: 0.0,
            average_rating: 0.0,
            created_at: days_ago.map(|d| now() - Duration::days(d)),
            restaurant_id: None,
        };
        dish.apply_ratings(rating, rating, rating);
        dish
    }

    pub fn at(mut dish: DishRecord, restaurant_id: &str) -> DishRecord {
        dish.restaurant_id = Some(restaurant_id.to_string());
        dish
    }

    pub fn ids(dishes: &[&DishRecord]) -> Vec<String> {
        dishes.iter().map(|d| d.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use common::model::query::SortOption;

    fn scenario() -> DishSnapshot {
        let mut dish_a = dish("a", "DishA", 0.0, Some(0));
        dish_a.apply_ratings(4.6, 4.0, 4.0);
        let dish_b = dish("b", "DishB", 2.0, Some(400));
        DishSnapshot::new(vec![dish_b, dish_a], vec![])
    }

    #[test]
    fn scenario_filter_then_highest_rated() {
        let snapshot = scenario();
        let params = QueryParameters {
            min_rating: 3.0,
            ..Default::default()
        };
        let view = compute_view(&snapshot, &params, DEFAULT_THROWBACK_WINDOW_DAYS, now());
        let filtered: Vec<&str> = view.dishes.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(filtered, vec!["a"]);

        let params = QueryParameters {
            sort: SortOption::HighestRated,
            ..Default::default()
        };
        let view = compute_view(&snapshot, &params, DEFAULT_THROWBACK_WINDOW_DAYS, now());
        let sorted: Vec<&str> = view.dishes.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(sorted, vec!["a", "b"]);
    }

    #[test]
    fn negative_threshold_behaves_like_no_filter() {
        let snapshot = scenario();
        let params = QueryParameters {
            min_rating: -4.0,
            ..Default::default()
        };
        let view = compute_view(&snapshot, &params, DEFAULT_THROWBACK_WINDOW_DAYS, now());
        assert_eq!(view.dishes.len(), 2);
    }

    #[test]
    fn discovery_throwbacks_ignore_the_filter() {
        let snapshot = DishSnapshot::new(
            vec![dish("old", "Soup", 1.0, Some(365)), dish("new", "Salad", 5.0, Some(1))],
            vec![],
        );
        let params = QueryParameters {
            min_rating: 4.0,
            ..Default::default()
        };
        let view = compute_view(&snapshot, &params, DEFAULT_THROWBACK_WINDOW_DAYS, now());
        assert_eq!(view.dishes.len(), 1);
        assert_eq!(view.throwbacks.len(), 1);
        assert_eq!(view.throwbacks[0].id, "old");
    }

    #[test]
    fn memory_lane_keys_match_groups() {
        let snapshot = DishSnapshot::new(
            vec![
                dish("a", "A", 3.0, Some(0)),
                dish("b", "B", 3.0, Some(40)),
                dish("c", "C", 3.0, Some(365)),
            ],
            vec![],
        );
        let lane = memory_lane(&snapshot, DEFAULT_THROWBACK_WINDOW_DAYS, now());
        assert_eq!(lane.sorted_keys, vec!["October 2026", "September 2026", "October 2025"]);
        assert_eq!(lane.groups.len(), 3);
        for key in &lane.sorted_keys {
            assert_eq!(lane.groups[key].len(), 1);
        }
        assert_eq!(lane.groups["October 2025"][0].id, "c");
        assert_eq!(lane.throwbacks.len(), 1);
    }

    #[test]
    fn highly_rated_keeps_store_order_and_limit() {
        let snapshot = DishSnapshot::new(
            vec![
                dish("a", "A", 4.5, Some(1)),
                dish("b", "B", 3.0, Some(2)),
                dish("c", "C", 4.0, Some(3)),
                dish("d", "D", 5.0, Some(4)),
            ],
            vec![],
        );
        let top: Vec<String> = highly_rated(&snapshot, DEFAULT_HIGHLY_RATED_MIN, 2)
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(top, vec!["a", "c"]);
    }

    #[test]
    fn restaurant_name_defaults_to_empty() {
        let snapshot = DishSnapshot::new(
            vec![at(dish("a", "A", 3.0, None), "r1"), at(dish("b", "B", 3.0, None), "gone")],
            vec![restaurant("r1", "Noma")],
        );
        assert_eq!(snapshot.restaurant_name(&snapshot.dishes[0]), "Noma");
        assert_eq!(snapshot.restaurant_name(&snapshot.dishes[1]), "");
    }
}
