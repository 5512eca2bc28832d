use serde::{Deserialize, Serialize};

pub const MAX_RATING: f64 = 5.0;

/// Ordering applied to the discovery list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    Newest,
    Oldest,
    #[serde(rename = "Highest Rated")]
    HighestRated,
    Trending,
}

impl SortOption {
    pub fn all() -> [SortOption; 4] {
        [
            SortOption::Newest,
            SortOption::Oldest,
            SortOption::HighestRated,
            SortOption::Trending,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::Oldest => "Oldest",
            SortOption::HighestRated => "Highest Rated",
            SortOption::Trending => "Trending",
        }
    }
}

/// Ephemeral discovery parameters; never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryParameters {
    #[serde(default)]
    pub search: String,
    /// 0 means no rating filter.
    #[serde(default)]
    pub min_rating: f64,
    #[serde(default)]
    pub sort: SortOption,
}

impl QueryParameters {
    /// Returns a copy with `min_rating` clamped into `[0, MAX_RATING]`.
    pub fn normalized(&self) -> Self {
        let min_rating = if self.min_rating.is_nan() {
            0.0
        } else {
            self.min_rating.clamp(0.0, MAX_RATING)
        };
        QueryParameters {
            search: self.search.clone(),
            min_rating,
            sort: self.sort,
        }
    }
}
