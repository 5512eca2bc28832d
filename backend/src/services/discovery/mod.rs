//! # Discovery Service Module
//!
//! Search, rating filter and sort over the dish collection. Interactive
//! changes go through the debounced view updater; `/search` is the one-shot
//! synchronous path.

mod query;
mod view;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for discovery endpoints.
const API_PATH: &str = "/api/discovery";

/// Configures and returns the Actix `Scope` for discovery routes.
///
/// # Registered Routes:
///
/// *   **`POST /query`**:
///     - **Handler**: `query::process`
///     - **Description**: Takes a partial `DiscoveryQuery`. Each present field
///       becomes a `ViewUpdate` for the view updater. Answers `202 Accepted`
///       with the current generation.
///
/// *   **`GET /view`**:
///     - **Handler**: `view::current`
///     - **Description**: The last computed view with its parameters and
///       generation. Poll until the generation moves past the one `/query`
///       returned.
///
/// *   **`GET /search?search&min_rating&sort`**:
///     - **Handler**: `view::search`
///     - **Description**: Computes a view synchronously, bypassing the updater.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/query", post().to(query::process))
        .route("/view", get().to(view::current))
        .route("/search", get().to(view::search))
}
