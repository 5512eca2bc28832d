use crate::engine::sort::days_since;
use crate::engine::DishSnapshot;
use chrono::{DateTime, Utc};
use common::model::dish::DishRecord;

/// Trailing grace period after each anniversary, in days.
pub const GRACE_DAYS: i64 = 7;

/// Whether a dish `age_days` old sits in the week after a `window_days` anniversary.
///
/// Matches when `age % window < 7` and `age >= window - 7`; `age == window` is included.
/// The week before an anniversary never matches: `window - 7` is only a lower bound.
pub fn is_throwback(age_days: i64, window_days: i64) -> bool {
    if window_days <= 0 || age_days < 0 {
        return false;
    }
    age_days % window_days < GRACE_DAYS && age_days >= window_days - GRACE_DAYS
}

/// Dishes near a creation anniversary, in store order. Undated dishes never match.
pub fn select_throwbacks(
    snapshot: &DishSnapshot,
    window_days: i64,
    now: DateTime<Utc>,
) -> Vec<&DishRecord> {
    snapshot
        .dishes
        .iter()
        .filter(|dish| {
            dish.created_at
                .is_some_and(|created| is_throwback(days_since(created, now), window_days))
        })
        .collect()
}
