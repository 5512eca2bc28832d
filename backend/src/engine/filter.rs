use crate::engine::DishSnapshot;
use common::model::dish::DishRecord;

/// Dishes rated at least `min_rating` whose dish or restaurant name contains
/// `search`, case-insensitively. Store order is kept.
///
/// An empty `search` keeps everything that passes the rating threshold. A dish
/// with no name or no restaurant is matched as if those were empty strings.
pub fn filter_dishes<'a>(
    snapshot: &'a DishSnapshot,
    min_rating: f64,
    search: &str,
) -> Vec<&'a DishRecord> {
    let needle = search.to_lowercase();
    snapshot
        .dishes
        .iter()
        .filter(|dish| dish.average_rating >= min_rating)
        .filter(|dish| needle.is_empty() || matches_text(snapshot, dish, &needle))
        .collect()
}

fn matches_text(snapshot: &DishSnapshot, dish: &DishRecord, needle: &str) -> bool {
    dish.name.to_lowercase().contains(needle)
        || snapshot
            .restaurant_name(dish)
            .to_lowercase()
            .contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::*;

    fn snapshot() -> DishSnapshot {
        DishSnapshot::new(
            vec![
                at(dish("1", "Spicy Ramen", 4.5, Some(1)), "r1"),
                at(dish("2", "Margherita", 3.0, Some(2)), "r2"),
                dish("3", "", 2.0, Some(3)),
                at(dish("4", "Tonkotsu", 1.0, Some(4)), "r1"),
            ],
            vec![restaurant("r1", "Ramen Bar"), restaurant("r2", "Luigi's")],
        )
    }

    #[test]
    fn rating_threshold_splits_the_set() {
        let snapshot = snapshot();
        let kept = filter_dishes(&snapshot, 3.0, "");
        assert_eq!(ids(&kept), vec!["1", "2"]);
        assert!(kept.iter().all(|d| d.average_rating >= 3.0));
        assert!(snapshot
            .dishes
            .iter()
            .filter(|d| !kept.iter().any(|k| k.id == d.id))
            .all(|d| d.average_rating < 3.0));
    }

    #[test]
    fn empty_search_returns_rating_filtered_set_unchanged() {
        let snapshot = snapshot();
        assert_eq!(filter_dishes(&snapshot, 0.0, "").len(), 4);
    }

    #[test]
    fn search_matches_dish_or_restaurant_case_insensitively() {
        let snapshot = snapshot();
        assert_eq!(ids(&filter_dishes(&snapshot, 0.0, "RAMEN")), vec!["1", "4"]);
        assert_eq!(ids(&filter_dishes(&snapshot, 0.0, "luigi")), vec!["2"]);
        assert_eq!(ids(&filter_dishes(&snapshot, 0.0, "rita")), vec!["2"]);
    }

    #[test]
    fn nameless_dish_without_restaurant_is_not_a_wildcard() {
        let snapshot = snapshot();
        assert!(filter_dishes(&snapshot, 0.0, "x")
            .iter()
            .all(|d| d.id != "3"));
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let snapshot = snapshot();
        assert!(filter_dishes(&snapshot, 5.0, "sushi").is_empty());
    }
}
