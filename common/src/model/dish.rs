use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged dish.
///
/// `average_rating` is stored, not derived on read: whoever writes the three
/// sub-ratings must also write the average, which is what [`DishRecord::apply_ratings`]
/// does. Readers (the query engine, card payloads) trust the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    /// UUID v4, assigned once at creation.
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: String,
    /// Photo bytes as handed over by the picker. Travels as base64 in JSON.
    #[serde(default, with = "image_base64", skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
    pub taste_rating: f64,
    pub presentation_rating: f64,
    pub value_rating: f64,
    pub average_rating: f64,
    pub created_at: Option<DateTime<Utc>>,
    /// Id of the restaurant in the restaurant table; the dish does not own it.
    pub restaurant_id: Option<String>,
}

/// Coarse rating bucket used to colour ratings on cards and lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingBand {
    Low,
    Medium,
    High,
}

impl RatingBand {
    pub fn for_rating(rating: f64) -> Self {
        if rating < 2.5 {
            RatingBand::Low
        } else if rating < 3.8 {
            RatingBand::Medium
        } else {
            RatingBand::High
        }
    }
}

impl DishRecord {
    pub fn average_of(taste: f64, presentation: f64, value: f64) -> f64 {
        (taste + presentation + value) / 3.0
    }

    /// Writes the three sub-ratings and the derived average together.
    pub fn apply_ratings(&mut self, taste: f64, presentation: f64, value: f64) {
        self.taste_rating = taste;
        self.presentation_rating = presentation;
        self.value_rating = value;
        self.average_rating = Self::average_of(taste, presentation, value);
    }

    pub fn rating_band(&self) -> RatingBand {
        RatingBand::for_rating(self.average_rating)
    }
}

mod image_base64 {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(b) => serializer.serialize_some(&BASE64.encode(b)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| BASE64.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
