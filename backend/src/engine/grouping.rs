use crate::engine::DishSnapshot;
use chrono::{DateTime, Datelike, Month, Utc};
use common::model::dish::DishRecord;
use std::collections::BTreeMap;

/// Calendar month bucket. Orders by the month it represents, never by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn of(at: DateTime<Utc>) -> Self {
        MonthKey {
            year: at.year(),
            month: at.month(),
        }
    }

    /// "October 2026"
    pub fn label(&self) -> String {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or_default();
        format!("{} {}", name, self.year)
    }
}

#[derive(Debug, Default)]
pub struct MonthGrouping<'a> {
    buckets: BTreeMap<MonthKey, Vec<&'a DishRecord>>,
}

impl<'a> MonthGrouping<'a> {
    /// Bucket keys, most recent month first.
    pub fn sorted_keys(&self) -> Vec<MonthKey> {
        self.buckets.keys().rev().copied().collect()
    }

    pub fn bucket(&self, key: &MonthKey) -> &[&'a DishRecord] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Buckets every dish by creation month. Undated dishes land in `now`'s month.
pub fn group_by_month(snapshot: &DishSnapshot, now: DateTime<Utc>) -> MonthGrouping<'_> {
    let mut grouping = MonthGrouping::default();
    for dish in &snapshot.dishes {
        let key = MonthKey::of(dish.created_at.unwrap_or(now));
        grouping.buckets.entry(key).or_default().push(dish);
    }
    grouping
}
