//! # Dish Service Module
//!
//! This module aggregates the endpoints that log, read, edit and remove dishes.
//!
//! ## Sub-modules:
//! - `save`: logs a new dish and its restaurant visit.
//! - `get`: lists, recent dishes, highly rated dishes and single lookups.
//! - `update`: rewrites an existing dish.
//! - `delete`: removes a dish.

mod delete;
mod get;
mod save;
mod update;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

/// The base path for all dish-related API endpoints.
const API_PATH: &str = "/api/dishes";

/// Configures and returns the Actix `Scope` for all dish-related routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**:
///     - **Handler**: `get::list`
///     - **Description**: Every dish, newest first.
///
/// *   **`POST /log`**:
///     - **Handler**: `save::process`
///     - **Description**: Logs a new dish from a `LogDishRequest`. The restaurant
///       is matched by exact name and created on first use, otherwise its visit
///       count goes up by one. The optional photo arrives as Base64 and must be
///       a recognised image. Returns the new dish.
///
/// *   **`GET /recent?limit`**:
///     - **Handler**: `get::recent`
///     - **Description**: The most recently created dishes, 5 by default.
///
/// *   **`GET /highly_rated?limit`**:
///     - **Handler**: `get::highly_rated`
///     - **Description**: Dishes rated 4 or more, in store order.
///
/// *   **`GET /{dish_id}`**:
///     - **Handler**: `get::one`
///     - **Description**: A single dish, or `404 Not Found`.
///
/// *   **`POST /{dish_id}/update`**:
///     - **Handler**: `update::process`
///     - **Description**: Rewrites name, notes and ratings from an
///       `UpdateDishRequest` and recomputes the average.
///
/// *   **`DELETE /{dish_id}`**:
///     - **Handler**: `delete::process`
///     - **Description**: Removes the dish. The restaurant and its visit count
///       are left alone.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::list))
        .route("/log", post().to(save::process))
        .route("/recent", get().to(get::recent))
        .route("/highly_rated", get().to(get::highly_rated))
        .route("/{dish_id}", get().to(get::one))
        .route("/{dish_id}", delete().to(delete::process))
        .route("/{dish_id}/update", post().to(update::process))
}
