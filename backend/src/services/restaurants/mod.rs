//! Restaurant lookups for the log form and the home screen.

mod favorites;
mod suggestions;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for restaurant lookups.
const API_PATH: &str = "/api/restaurants";

/// Configures and returns the Actix `Scope` for restaurant routes.
///
/// # Registered Routes:
///
/// *   **`GET /suggestions?q&limit`**:
///     - **Handler**: `suggestions::process`
///     - **Description**: Names containing `q`, case-insensitive, most visited
///       first, 5 by default. An empty `q` gives an empty list.
///
/// *   **`GET /favorites?limit`**:
///     - **Handler**: `favorites::process`
///     - **Description**: Most visited restaurants, ties broken by name.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/suggestions", get().to(suggestions::process))
        .route("/favorites", get().to(favorites::process))
}
