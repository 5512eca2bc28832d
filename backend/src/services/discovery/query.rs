use crate::view_controller::state::{ViewState, ViewUpdate};
use actix_web::{web, HttpResponse, Responder};
use common::requests::DiscoveryQuery;
use serde_json::json;

/// Turns the present fields of a `DiscoveryQuery` into view updates.
pub async fn process(
    payload: web::Json<DiscoveryQuery>,
    view: web::Data<ViewState>,
) -> impl Responder {
    let DiscoveryQuery {
        search,
        min_rating,
        sort,
    } = payload.into_inner();

    let updates = search
        .map(ViewUpdate::Search)
        .into_iter()
        .chain(sort.map(ViewUpdate::Sort))
        .chain(min_rating.map(ViewUpdate::MinRating));

    for update in updates {
        if let Err(e) = view.tx.send(update).await {
            return HttpResponse::ServiceUnavailable()
                .body(format!("Discovery updater is not running: {}", e));
        }
    }

    HttpResponse::Accepted().json(json!({ "generation": view.generation() }))
}
