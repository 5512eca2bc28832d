//! Data handed to the card renderer.
//!
//! Rasterizing the card happens elsewhere; this module only describes which
//! dish, which theme and which text options a card is built from.

use crate::model::dish::{DishRecord, RatingBand};
use serde::{Deserialize, Serialize};

pub const CARD_HASHTAG: &str = "#PlateMateApp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateCardTheme {
    #[default]
    Classic,
    Modern,
    Minimal,
    Vibrant,
    Elegant,
}

impl PlateCardTheme {
    pub fn all() -> [PlateCardTheme; 5] {
        [
            PlateCardTheme::Classic,
            PlateCardTheme::Modern,
            PlateCardTheme::Minimal,
            PlateCardTheme::Vibrant,
            PlateCardTheme::Elegant,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlateCardTheme::Classic => "classic",
            PlateCardTheme::Modern => "modern",
            PlateCardTheme::Minimal => "minimal",
            PlateCardTheme::Vibrant => "vibrant",
            PlateCardTheme::Elegant => "elegant",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.as_str() == raw)
    }

    pub fn corner_radius(&self) -> f64 {
        match self {
            PlateCardTheme::Classic | PlateCardTheme::Elegant => 12.0,
            PlateCardTheme::Modern | PlateCardTheme::Vibrant => 16.0,
            PlateCardTheme::Minimal => 8.0,
        }
    }

    pub fn spacing(&self) -> f64 {
        match self {
            PlateCardTheme::Classic | PlateCardTheme::Elegant => 12.0,
            PlateCardTheme::Modern => 16.0,
            PlateCardTheme::Minimal => 10.0,
            PlateCardTheme::Vibrant => 14.0,
        }
    }
}

pub const REGULAR_FONT_WEIGHT: u8 = 4;

/// Text options for a card. `font_weight` runs 1 (ultra light) to 9 (black).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCustomization {
    pub font_size: f64,
    pub font_weight: u8,
}

impl Default for TextCustomization {
    fn default() -> Self {
        TextCustomization {
            font_size: 1.0,
            font_weight: REGULAR_FONT_WEIGHT,
        }
    }
}

impl TextCustomization {
    /// Out-of-scale weights fall back to regular.
    pub fn normalized(&self) -> Self {
        let font_weight = if (1..=9).contains(&self.font_weight) {
            self.font_weight
        } else {
            REGULAR_FONT_WEIGHT
        };
        TextCustomization {
            font_size: self.font_size,
            font_weight,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardPayload {
    pub dish: DishRecord,
    pub restaurant_name: String,
    pub theme: PlateCardTheme,
    pub corner_radius: f64,
    pub spacing: f64,
    pub text: TextCustomization,
    pub rating_band: RatingBand,
    pub hashtag: String,
}
