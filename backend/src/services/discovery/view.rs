use crate::library::SharedLibrary;
use crate::view_controller::state::ViewState;
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use common::model::query::QueryParameters;
use common::requests::DiscoveryQuery;
use serde_json::json;

pub async fn current(view: web::Data<ViewState>) -> impl Responder {
    let params = view.params.read().await.clone();
    let current = view.view.read().await.clone();
    HttpResponse::Ok().json(json!({
        "generation": view.generation(),
        "params": params,
        "view": current,
    }))
}

pub async fn search(
    query: web::Query<DiscoveryQuery>,
    library: web::Data<SharedLibrary>,
) -> impl Responder {
    let query = query.into_inner();
    let defaults = QueryParameters::default();
    let params = QueryParameters {
        search: query.search.unwrap_or(defaults.search),
        min_rating: query.min_rating.unwrap_or(defaults.min_rating),
        sort: query.sort.unwrap_or(defaults.sort),
    };
    HttpResponse::Ok().json(library.read().await.discovery(&params, Utc::now()))
}
