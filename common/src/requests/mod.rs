use crate::model::card::{PlateCardTheme, TextCustomization};
use crate::model::query::SortOption;
use serde::{Deserialize, Serialize};

fn default_rating() -> f64 {
    3.0
}

#[derive(Deserialize, Serialize, Clone, Debug)]
/// Payload for logging a new dish.
/// In quick mode only `taste_rating` is used; the other two ratings copy it.
pub struct LogDishRequest {
    #[serde(default)]
    pub name: String,
    pub restaurant_name: String,
    #[serde(default)]
    pub notes: String,
    pub image_base64: Option<String>,
    #[serde(default = "default_rating")]
    pub taste_rating: f64,
    #[serde(default = "default_rating")]
    pub presentation_rating: f64,
    #[serde(default = "default_rating")]
    pub value_rating: f64,
    #[serde(default)]
    pub quick_mode: bool,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct UpdateDishRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: String,
    pub taste_rating: f64,
    pub presentation_rating: f64,
    pub value_rating: f64,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
/// Partial update of the discovery parameters. Absent fields stay as they are.
pub struct DiscoveryQuery {
    pub search: Option<String>,
    pub min_rating: Option<f64>,
    pub sort: Option<SortOption>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct CardQuery {
    pub theme: Option<PlateCardTheme>,
    pub font_size: Option<f64>,
    pub font_weight: Option<u8>,
}

impl CardQuery {
    pub fn text(&self) -> TextCustomization {
        let defaults = TextCustomization::default();
        TextCustomization {
            font_size: self.font_size.unwrap_or(defaults.font_size),
            font_weight: self.font_weight.unwrap_or(defaults.font_weight),
        }
        .normalized()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ThemeRequest {
    pub theme: PlateCardTheme,
}
