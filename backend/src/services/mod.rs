pub mod cards;
pub mod dishes;
pub mod discovery;
pub mod memory_lane;
pub mod restaurants;

use crate::error::StoreError;
use crate::view_controller::state::{ViewState, ViewUpdate};
use actix_web::HttpResponse;
use log::{debug, error};

/// Maps a library error to the response the client gets.
///
/// - `NotFound` -> `404 Not Found`
/// - bad input (validation, encoding, image) -> `400 Bad Request`
/// - store failures -> `503 Service Unavailable`, logged
pub(crate) fn error_response(context: &str, e: &StoreError) -> HttpResponse {
    match e {
        StoreError::NotFound(_) => HttpResponse::NotFound().body(format!("{}: {}", context, e)),
        StoreError::Validation(_) | StoreError::InvalidImage(_) | StoreError::Encoding(_) => {
            HttpResponse::BadRequest().body(format!("{}: {}", context, e))
        }
        StoreError::Database(_) | StoreError::Unavailable => {
            error!("{}: {}", context, e);
            HttpResponse::ServiceUnavailable().body(format!("{}: {}", context, e))
        }
    }
}

/// Asks the view updater to recompute after the store changed. Never blocks;
/// a full queue already holds a pending recompute.
pub(crate) fn notify_store_changed(view: &ViewState) {
    if let Err(e) = view.tx.try_send(ViewUpdate::Refresh) {
        debug!("Discovery refresh not queued: {}", e);
    }
}
