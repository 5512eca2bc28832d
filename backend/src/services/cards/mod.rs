//! # Card Service Module
//!
//! Supplies the data for shareable dish cards and tracks sharing. Drawing the
//! card image is left to the client; this module only decides what goes on it.
//!
//! ## Sub-modules:
//! - `card`: builds the `CardPayload` for one dish.
//! - `theme`: lists themes and reads or saves the preferred one.
//! - `share`: the share counter and its stats.

mod card;
mod share;
mod theme;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all card-related API endpoints.
const API_PATH: &str = "/api/cards";

/// Configures and returns the Actix `Scope` for card and sharing routes.
///
/// # Registered Routes:
///
/// *   **`GET /themes`**:
///     - **Handler**: `theme::list`
///     - **Description**: Every available theme, in display order.
///
/// *   **`GET /theme`** / **`POST /theme`**:
///     - **Handler**: `theme::preferred`, `theme::save`
///     - **Description**: Reads or saves the preferred theme. The body of the
///       `POST` is a `ThemeRequest`; an unknown theme name is rejected.
///
/// *   **`GET /stats`**:
///     - **Handler**: `share::stats`
///     - **Description**: Total shares, dish count and share conversion rate.
///
/// *   **`GET /{dish_id}?theme&font_size&font_weight`**:
///     - **Handler**: `card::process`
///     - **Description**: The `CardPayload` for a dish. Without `theme` the
///       preferred theme is used.
///
/// *   **`POST /{dish_id}/shared`**:
///     - **Handler**: `share::track`
///     - **Description**: Counts one share of the dish and returns the new total.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/themes", get().to(theme::list))
        .route("/theme", get().to(theme::preferred))
        .route("/theme", post().to(theme::save))
        .route("/stats", get().to(share::stats))
        .route("/{dish_id}", get().to(card::process))
        .route("/{dish_id}/shared", post().to(share::track))
}
