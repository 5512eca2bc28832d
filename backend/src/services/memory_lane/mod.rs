//! Memory Lane: the month-by-month timeline and "one year ago" throwbacks.

mod timeline;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/memory_lane";

/// Routes under `/api/memory_lane`.
///
/// # Registered Routes:
///
/// *   **`GET /`**: `timeline::process`. A `MemoryLane` with `groups` keyed by
///     month label and `sorted_keys` newest month first.
/// *   **`GET /throwbacks`**: `timeline::throwbacks`. Just the throwback dishes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(timeline::process))
        .route("/throwbacks", get().to(timeline::throwbacks))
}
