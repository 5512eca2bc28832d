use crate::model::dish::DishRecord;
use serde::Serialize;
use std::collections::HashMap;

/// The discovery screen: filtered and sorted dishes plus current throwbacks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscoveryView {
    pub dishes: Vec<DishRecord>,
    pub throwbacks: Vec<DishRecord>,
}

/// Timeline of every dish bucketed by month, most recent month first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryLane {
    pub throwbacks: Vec<DishRecord>,
    /// Month label ("October 2026") to the dishes logged that month.
    pub groups: HashMap<String, Vec<DishRecord>>,
    /// Keys of `groups`, newest month first.
    pub sorted_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareStats {
    pub total_shared: i64,
    pub total_dishes: usize,
    pub conversion_rate: f64,
}
