//! # Dish Library
//!
//! Owns the injected [`DishStore`] and the current [`DishSnapshot`], and is the
//! only place that writes dishes or restaurants. Every write refreshes the
//! snapshot so the query engine always works on what the store holds.
//!
//! Failure policy:
//! - Writes return `Result<_, StoreError>` so the HTTP layer can answer.
//! - Reads that hit the store (suggestions, favourites, recent dishes) log the
//!   error and return an empty list.
//! - A failed `refresh` logs and keeps the previous snapshot.

use crate::engine::{self, DishSnapshot};
use crate::error::StoreError;
use crate::store::sqlite::SqliteStore;
use crate::store::{DishStore, PREFERRED_THEME_KEY, TOTAL_SHARED_KEY};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use common::model::card::{CardPayload, PlateCardTheme, TextCustomization, CARD_HASHTAG};
use common::model::dish::DishRecord;
use common::model::query::{QueryParameters, MAX_RATING};
use common::model::restaurant::RestaurantRecord;
use common::model::view::{DiscoveryView, MemoryLane, ShareStats};
use common::requests::{LogDishRequest, UpdateDishRequest};
use log::{debug, error, info};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// The library as shared across actix workers and the view updater.
pub type SharedLibrary = Arc<RwLock<DishLibrary<SqliteStore>>>;

pub struct DishLibrary<S: DishStore> {
    store: S,
    snapshot: DishSnapshot,
    throwback_window_days: i64,
}

fn validate_ratings(ratings: [f64; 3]) -> Result<(), StoreError> {
    if ratings.iter().all(|r| (0.0..=MAX_RATING).contains(r)) {
        Ok(())
    } else {
        Err(StoreError::Validation(format!(
            "ratings must be between 0 and {MAX_RATING}, got {ratings:?}"
        )))
    }
}

/// Decodes a base64 photo and checks that it looks like an image. The bytes
/// are returned untouched.
fn decode_image(encoded: &str) -> Result<Vec<u8>, StoreError> {
    let bytes = BASE64
        .decode(encoded.trim())
        .map_err(|e| StoreError::Encoding(e.to_string()))?;
    image::guess_format(&bytes).map_err(|e| StoreError::InvalidImage(e.to_string()))?;
    Ok(bytes)
}

impl<S: DishStore> DishLibrary<S> {
    pub fn new(store: S, throwback_window_days: i64) -> Self {
        let mut library = DishLibrary {
            store,
            snapshot: DishSnapshot::default(),
            throwback_window_days,
        };
        library.refresh();
        library
    }

    pub fn dishes(&self) -> &[DishRecord] {
        &self.snapshot.dishes
    }

    /// Reloads dishes and restaurants. On failure the previous snapshot stays.
    pub fn refresh(&mut self) {
        let loaded = self
            .store
            .fetch_dishes()
            .and_then(|dishes| Ok((dishes, self.store.fetch_restaurants()?)));
        match loaded {
            Ok((dishes, restaurants)) => {
                debug!(
                    "Snapshot refreshed: {} dishes, {} restaurants",
                    dishes.len(),
                    restaurants.len()
                );
                self.snapshot = DishSnapshot::new(dishes, restaurants);
            }
            Err(e) => error!("Error refreshing dishes, keeping previous snapshot: {}", e),
        }
    }

    pub fn dish(&self, id: &str) -> Option<&DishRecord> {
        self.snapshot.dishes.iter().find(|d| d.id == id)
    }

    /// Logs a new dish, creating the restaurant on first use of an exact name
    /// and bumping its visit count otherwise.
    pub fn log_dish(
        &mut self,
        request: &LogDishRequest,
        now: DateTime<Utc>,
    ) -> Result<DishRecord, StoreError> {
        if request.restaurant_name.trim().is_empty() {
            return Err(StoreError::Validation(
                "restaurant name must not be empty".to_string(),
            ));
        }

        let (presentation, value) = if request.quick_mode {
            (request.taste_rating, request.taste_rating)
        } else {
            (request.presentation_rating, request.value_rating)
        };
        validate_ratings([request.taste_rating, presentation, value])?;

        let image = request
            .image_base64
            .as_deref()
            .map(decode_image)
            .transpose()?;

        let restaurant = match self.store.find_restaurant_by_name(&request.restaurant_name)? {
            Some(existing) => RestaurantRecord {
                visit_count: existing.visit_count + 1,
                ..existing
            },
            None => RestaurantRecord {
                id: Uuid::new_v4().to_string(),
                name: request.restaurant_name.clone(),
                location: String::new(),
                visit_count: 1,
            },
        };

        let mut dish = DishRecord {
            id: Uuid::new_v4().to_string(),
            name: request.name.clone(),
            notes: request.notes.clone(),
            image,
            taste_rating: 0.0,
            presentation_rating: 0.0,
            value_rating: 0.0,
            average_rating: 0.0,
            created_at: Some(now),
            restaurant_id: Some(restaurant.id.clone()),
        };
        dish.apply_ratings(request.taste_rating, presentation, value);

        self.store.commit_logged_dish(&restaurant, &dish)?;
        info!(
            "Logged dish {} at {} (visit {})",
            dish.id, restaurant.name, restaurant.visit_count
        );
        self.refresh();
        Ok(dish)
    }

    /// Rewrites name, notes and ratings, re-deriving the stored average.
    pub fn update_dish(
        &mut self,
        id: &str,
        request: &UpdateDishRequest,
    ) -> Result<DishRecord, StoreError> {
        validate_ratings([
            request.taste_rating,
            request.presentation_rating,
            request.value_rating,
        ])?;
        let mut dish = self
            .store
            .dish(id)?
            .ok_or_else(|| StoreError::NotFound(format!("dish {id}")))?;

        dish.name = request.name.clone();
        dish.notes = request.notes.clone();
        dish.apply_ratings(
            request.taste_rating,
            request.presentation_rating,
            request.value_rating,
        );

        self.store.save_dish(&dish)?;
        self.refresh();
        Ok(dish)
    }

    /// Deletes a dish. Its restaurant and visit count are left alone.
    pub fn delete_dish(&mut self, id: &str) -> Result<(), StoreError> {
        if !self.store.delete_dish(id)? {
            return Err(StoreError::NotFound(format!("dish {id}")));
        }
        info!("Deleted dish {}", id);
        self.refresh();
        Ok(())
    }

    /// Autocomplete for the restaurant field.
    pub fn restaurant_suggestions(&self, fragment: &str, limit: usize) -> Vec<String> {
        if fragment.is_empty() {
            return Vec::new();
        }
        match self.store.search_restaurants(fragment, limit) {
            Ok(restaurants) => restaurants.into_iter().map(|r| r.name).collect(),
            Err(e) => {
                error!("Error fetching restaurant suggestions: {}", e);
                Vec::new()
            }
        }
    }

    pub fn favorite_restaurants(&self, limit: usize) -> Vec<RestaurantRecord> {
        self.store.favorite_restaurants(limit).unwrap_or_else(|e| {
            error!("Error fetching favorite restaurants: {}", e);
            Vec::new()
        })
    }

    pub fn recent_dishes(&self, limit: usize) -> Vec<DishRecord> {
        self.store.fetch_recent_dishes(limit).unwrap_or_else(|e| {
            error!("Error fetching recent dishes: {}", e);
            Vec::new()
        })
    }

    pub fn discovery(&self, params: &QueryParameters, now: DateTime<Utc>) -> DiscoveryView {
        engine::compute_view(&self.snapshot, params, self.throwback_window_days, now)
    }

    pub fn memory_lane(&self, now: DateTime<Utc>) -> MemoryLane {
        engine::memory_lane(&self.snapshot, self.throwback_window_days, now)
    }

    pub fn throwbacks(&self, now: DateTime<Utc>) -> Vec<DishRecord> {
        engine::throwback::select_throwbacks(&self.snapshot, self.throwback_window_days, now)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn highly_rated(&self, min_rating: f64, limit: usize) -> Vec<DishRecord> {
        engine::highly_rated(&self.snapshot, min_rating, limit)
    }

    /// Card data for the renderer. Without an explicit theme the saved preference is used.
    pub fn card(
        &self,
        dish_id: &str,
        theme: Option<PlateCardTheme>,
        text: TextCustomization,
    ) -> Result<CardPayload, StoreError> {
        let dish = self
            .dish(dish_id)
            .ok_or_else(|| StoreError::NotFound(format!("dish {dish_id}")))?;
        let theme = theme.unwrap_or_else(|| self.preferred_theme());
        Ok(CardPayload {
            restaurant_name: self.snapshot.restaurant_name(dish).to_string(),
            rating_band: dish.rating_band(),
            dish: dish.clone(),
            theme,
            corner_radius: theme.corner_radius(),
            spacing: theme.spacing(),
            text: text.normalized(),
            hashtag: CARD_HASHTAG.to_string(),
        })
    }

    pub fn preferred_theme(&self) -> PlateCardTheme {
        match self.store.setting(PREFERRED_THEME_KEY) {
            Ok(Some(raw)) => PlateCardTheme::parse(&raw).unwrap_or_default(),
            Ok(None) => PlateCardTheme::default(),
            Err(e) => {
                error!("Error loading preferred theme: {}", e);
                PlateCardTheme::default()
            }
        }
    }

    pub fn save_preferred_theme(&self, theme: PlateCardTheme) -> Result<(), StoreError> {
        self.store.set_setting(PREFERRED_THEME_KEY, theme.as_str())
    }

    fn total_shared(&self) -> i64 {
        match self.store.setting(TOTAL_SHARED_KEY) {
            Ok(raw) => raw.and_then(|v| v.parse().ok()).unwrap_or(0),
            Err(e) => {
                error!("Error loading share counter: {}", e);
                0
            }
        }
    }

    /// Counts one share of `dish_id`. Returns the new total.
    pub fn track_shared_dish(&self, dish_id: &str) -> Result<i64, StoreError> {
        if self.dish(dish_id).is_none() {
            return Err(StoreError::NotFound(format!("dish {dish_id}")));
        }
        let total = self.total_shared() + 1;
        self.store.set_setting(TOTAL_SHARED_KEY, &total.to_string())?;
        Ok(total)
    }

    pub fn share_stats(&self) -> ShareStats {
        let total_shared = self.total_shared();
        let total_dishes = self.snapshot.dishes.len();
        let conversion_rate = if total_dishes == 0 {
            0.0
        } else {
            total_shared as f64 / total_dishes as f64
        };
        ShareStats {
            total_shared,
            total_dishes,
            conversion_rate,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::sync::atomic::{AtomicBool, Ordering};

    /// 1x1 PNG.
    pub(crate) const PNG_BASE64: &str =
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

    pub(crate) fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    pub(crate) fn request(name: &str, restaurant: &str, rating: f64) -> LogDishRequest {
        LogDishRequest {
            name: name.to_string(),
            restaurant_name: restaurant.to_string(),
            notes: String::new(),
            image_base64: None,
            taste_rating: rating,
            presentation_rating: rating,
            value_rating: rating,
            quick_mode: false,
        }
    }

    fn library() -> DishLibrary<SqliteStore> {
        DishLibrary::new(SqliteStore::open_in_memory().unwrap(), 365)
    }

    #[test]
    fn visit_count_starts_at_one_and_increments_on_exact_name() {
        let mut lib = library();
        lib.log_dish(&request("Ramen", "Ippudo", 4.0), now()).unwrap();
        let first = lib.favorite_restaurants(5);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].visit_count, 1);

        lib.log_dish(&request("Buns", "Ippudo", 4.0), now()).unwrap();
        let second = lib.favorite_restaurants(5);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].visit_count, 2);
        assert_eq!(second[0].id, first[0].id);
    }

    #[test]
    fn different_case_creates_a_new_restaurant() {
        let mut lib = library();
        lib.log_dish(&request("Ramen", "Ippudo", 4.0), now()).unwrap();
        lib.log_dish(&request("Ramen", "ippudo", 4.0), now()).unwrap();
        assert_eq!(lib.favorite_restaurants(5).len(), 2);
        // Autocomplete still finds both.
        assert_eq!(lib.restaurant_suggestions("IPP", 5).len(), 2);
    }

    #[test]
    fn logged_dish_gets_average_timestamp_and_restaurant() {
        let mut lib = library();
        let mut req = request("Tacos", "Pujol", 0.0);
        req.taste_rating = 5.0;
        req.presentation_rating = 4.0;
        req.value_rating = 3.0;
        let dish = lib.log_dish(&req, now()).unwrap();

        assert_eq!(dish.average_rating, 4.0);
        assert_eq!(dish.created_at, Some(now()));
        assert_eq!(lib.dishes().len(), 1);
        assert_eq!(lib.snapshot.restaurant_name(&lib.snapshot.dishes[0]), "Pujol");
    }

    #[test]
    fn quick_mode_copies_taste_rating() {
        let mut lib = library();
        let mut req = request("Fries", "Shake Shack", 1.0);
        req.taste_rating = 4.5;
        req.quick_mode = true;
        let dish = lib.log_dish(&req, now()).unwrap();
        assert_eq!(dish.presentation_rating, 4.5);
        assert_eq!(dish.value_rating, 4.5);
        assert_eq!(dish.average_rating, 4.5);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let mut lib = library();
        assert!(matches!(
            lib.log_dish(&request("Soup", "  ", 3.0), now()),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            lib.log_dish(&request("Soup", "Cafe", 6.0), now()),
            Err(StoreError::Validation(_))
        ));

        let mut req = request("Soup", "Cafe", 3.0);
        req.image_base64 = Some("not base64!".to_string());
        assert!(matches!(lib.log_dish(&req, now()), Err(StoreError::Encoding(_))));

        req.image_base64 = Some(BASE64.encode(b"plain text"));
        assert!(matches!(lib.log_dish(&req, now()), Err(StoreError::InvalidImage(_))));

        assert!(lib.dishes().is_empty());
    }

    #[test]
    fn image_bytes_are_stored_untouched() {
        let mut lib = library();
        let mut req = request("Soup", "Cafe", 3.0);
        req.image_base64 = Some(PNG_BASE64.to_string());
        let dish = lib.log_dish(&req, now()).unwrap();
        assert_eq!(dish.image, Some(BASE64.decode(PNG_BASE64).unwrap()));
        assert_eq!(lib.dishes()[0].image, dish.image);
    }

    #[test]
    fn update_rederives_average_and_keeps_creation_date() {
        let mut lib = library();
        let dish = lib.log_dish(&request("Pho", "Saigon", 2.0), now()).unwrap();
        let updated = lib
            .update_dish(
                &dish.id,
                &UpdateDishRequest {
                    name: "Pho Dac Biet".to_string(),
                    notes: "better second time".to_string(),
                    taste_rating: 5.0,
                    presentation_rating: 5.0,
                    value_rating: 2.0,
                },
            )
            .unwrap();
        assert_eq!(updated.average_rating, 4.0);
        assert_eq!(updated.created_at, dish.created_at);
        assert_eq!(lib.dish(&dish.id).unwrap().name, "Pho Dac Biet");

        let missing = lib.update_dish(
            "nope",
            &UpdateDishRequest {
                name: String::new(),
                notes: String::new(),
                taste_rating: 1.0,
                presentation_rating: 1.0,
                value_rating: 1.0,
            },
        );
        assert!(matches!(missing, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn delete_leaves_restaurant_visits_alone() {
        let mut lib = library();
        let dish = lib.log_dish(&request("Pho", "Saigon", 2.0), now()).unwrap();
        lib.delete_dish(&dish.id).unwrap();
        assert!(lib.dishes().is_empty());
        assert_eq!(lib.favorite_restaurants(5)[0].visit_count, 1);
        assert!(matches!(lib.delete_dish(&dish.id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn empty_fragment_has_no_suggestions() {
        let mut lib = library();
        lib.log_dish(&request("Pho", "Saigon", 2.0), now()).unwrap();
        assert!(lib.restaurant_suggestions("", 5).is_empty());
        assert_eq!(lib.restaurant_suggestions("gon", 5), vec!["Saigon"]);
    }

    #[test]
    fn throwbacks_come_from_the_full_snapshot() {
        let mut lib = library();
        lib.log_dish(&request("Birthday cake", "Bakery", 1.0), now() - Duration::days(365))
            .unwrap();
        lib.log_dish(&request("Toast", "Bakery", 5.0), now()).unwrap();
        let throwbacks = lib.throwbacks(now());
        assert_eq!(throwbacks.len(), 1);
        assert_eq!(throwbacks[0].name, "Birthday cake");

        let lane = lib.memory_lane(now());
        assert_eq!(lane.sorted_keys, vec!["October 2026", "October 2025"]);
    }

    #[test]
    fn theme_preference_persists_and_tolerates_garbage() {
        let lib = library();
        assert_eq!(lib.preferred_theme(), PlateCardTheme::Classic);
        lib.save_preferred_theme(PlateCardTheme::Vibrant).unwrap();
        assert_eq!(lib.preferred_theme(), PlateCardTheme::Vibrant);
        lib.store.set_setting(PREFERRED_THEME_KEY, "neon").unwrap();
        assert_eq!(lib.preferred_theme(), PlateCardTheme::Classic);
    }

    #[test]
    fn card_uses_preferred_theme_by_default() {
        let mut lib = library();
        let dish = lib.log_dish(&request("Pho", "Saigon", 4.0), now()).unwrap();
        lib.save_preferred_theme(PlateCardTheme::Elegant).unwrap();

        let card = lib.card(&dish.id, None, TextCustomization::default()).unwrap();
        assert_eq!(card.theme, PlateCardTheme::Elegant);
        assert_eq!(card.restaurant_name, "Saigon");
        assert_eq!(card.hashtag, "#PlateMateApp");

        let card = lib
            .card(&dish.id, Some(PlateCardTheme::Minimal), TextCustomization::default())
            .unwrap();
        assert_eq!(card.corner_radius, 8.0);
        assert!(matches!(
            lib.card("missing", None, TextCustomization::default()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn share_stats_track_conversion() {
        let mut lib = library();
        assert_eq!(lib.share_stats().conversion_rate, 0.0);
        let a = lib.log_dish(&request("A", "X", 3.0), now()).unwrap();
        lib.log_dish(&request("B", "X", 3.0), now()).unwrap();
        assert_eq!(lib.track_shared_dish(&a.id).unwrap(), 1);
        let stats = lib.share_stats();
        assert_eq!(stats.total_shared, 1);
        assert_eq!(stats.total_dishes, 2);
        assert_eq!(stats.conversion_rate, 0.5);
        assert!(lib.track_shared_dish("missing").is_err());
    }

    /// Store whose reads can be switched to fail.
    struct FlakyStore {
        inner: SqliteStore,
        failing: AtomicBool,
    }

    impl FlakyStore {
        fn check(&self) -> Result<(), StoreError> {
            if self.failing.load(Ordering::SeqCst) {
                Err(StoreError::Unavailable)
            } else {
                Ok(())
            }
        }
    }

    impl DishStore for FlakyStore {
        fn fetch_dishes(&self) -> Result<Vec<DishRecord>, StoreError> {
            self.check()?;
            self.inner.fetch_dishes()
        }
        fn fetch_recent_dishes(&self, limit: usize) -> Result<Vec<DishRecord>, StoreError> {
            self.check()?;
            self.inner.fetch_recent_dishes(limit)
        }
        fn fetch_restaurants(&self) -> Result<Vec<RestaurantRecord>, StoreError> {
            self.check()?;
            self.inner.fetch_restaurants()
        }
        fn search_restaurants(
            &self,
            fragment: &str,
            limit: usize,
        ) -> Result<Vec<RestaurantRecord>, StoreError> {
            self.check()?;
            self.inner.search_restaurants(fragment, limit)
        }
        fn favorite_restaurants(&self, limit: usize) -> Result<Vec<RestaurantRecord>, StoreError> {
            self.check()?;
            self.inner.favorite_restaurants(limit)
        }
        fn find_restaurant_by_name(
            &self,
            name: &str,
        ) -> Result<Option<RestaurantRecord>, StoreError> {
            self.inner.find_restaurant_by_name(name)
        }
        fn dish(&self, id: &str) -> Result<Option<DishRecord>, StoreError> {
            self.inner.dish(id)
        }
        fn save_dish(&self, dish: &DishRecord) -> Result<(), StoreError> {
            self.inner.save_dish(dish)
        }
        fn delete_dish(&self, id: &str) -> Result<bool, StoreError> {
            self.inner.delete_dish(id)
        }
        fn commit_logged_dish(
            &self,
            restaurant: &RestaurantRecord,
            dish: &DishRecord,
        ) -> Result<(), StoreError> {
            self.inner.commit_logged_dish(restaurant, dish)
        }
        fn setting(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.setting(key)
        }
        fn set_setting(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.inner.set_setting(key, value)
        }
    }

    #[test]
    fn failed_reads_degrade_to_prior_or_empty_state() {
        let mut lib = DishLibrary::new(
            FlakyStore {
                inner: SqliteStore::open_in_memory().unwrap(),
                failing: AtomicBool::new(false),
            },
            365,
        );
        lib.log_dish(&request("Pho", "Saigon", 4.0), now()).unwrap();
        assert_eq!(lib.dishes().len(), 1);

        lib.store.failing.store(true, Ordering::SeqCst);
        lib.refresh();
        assert_eq!(lib.dishes().len(), 1);
        assert!(lib.restaurant_suggestions("sai", 5).is_empty());
        assert!(lib.favorite_restaurants(5).is_empty());
        assert!(lib.recent_dishes(5).is_empty());
    }
}
