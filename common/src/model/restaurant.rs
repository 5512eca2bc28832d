use serde::{Deserialize, Serialize};

/// A place where dishes get logged.
///
/// Restaurants are created lazily the first time a dish is logged under a new
/// name and are never deleted. `visit_count` goes up by one per logged dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub visit_count: i64,
}
