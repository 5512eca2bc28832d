//! # Persistent Store
//!
//! The dish library never talks to SQLite directly; it is handed something
//! implementing [`DishStore`]. `main.rs` injects a [`sqlite::SqliteStore`] and
//! tests use the same type over an in-memory database.
//!
//! Two restaurant lookups exist on purpose:
//! - `find_restaurant_by_name` is an exact, case-sensitive match. The save path
//!   uses it to decide whether a dish goes to an existing restaurant.
//! - `search_restaurants` is a case-insensitive substring match used for
//!   autocomplete while the user types.

pub mod sqlite;

use crate::error::StoreError;
use common::model::dish::DishRecord;
use common::model::restaurant::RestaurantRecord;

pub const PREFERRED_THEME_KEY: &str = "preferred_card_theme";
pub const TOTAL_SHARED_KEY: &str = "total_dishes_shared";

pub trait DishStore: Send + Sync {
    /// All dishes, newest `created_at` first.
    fn fetch_dishes(&self) -> Result<Vec<DishRecord>, StoreError>;

    fn fetch_recent_dishes(&self, limit: usize) -> Result<Vec<DishRecord>, StoreError>;

    /// All restaurants, most visited first.
    fn fetch_restaurants(&self) -> Result<Vec<RestaurantRecord>, StoreError>;

    fn search_restaurants(
        &self,
        fragment: &str,
        limit: usize,
    ) -> Result<Vec<RestaurantRecord>, StoreError>;

    /// Most visited first, ties broken by name.
    fn favorite_restaurants(&self, limit: usize) -> Result<Vec<RestaurantRecord>, StoreError>;

    fn find_restaurant_by_name(&self, name: &str)
        -> Result<Option<RestaurantRecord>, StoreError>;

    fn dish(&self, id: &str) -> Result<Option<DishRecord>, StoreError>;

    /// Inserts or replaces a dish.
    fn save_dish(&self, dish: &DishRecord) -> Result<(), StoreError>;

    /// Returns whether a dish was actually removed.
    fn delete_dish(&self, id: &str) -> Result<bool, StoreError>;

    /// Writes the restaurant (with its bumped visit count) and the new dish atomically.
    fn commit_logged_dish(
        &self,
        restaurant: &RestaurantRecord,
        dish: &DishRecord,
    ) -> Result<(), StoreError>;

    fn setting(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_setting(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
