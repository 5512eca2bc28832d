use crate::engine::DEFAULT_FEATURE_LIMIT;
use crate::library::SharedLibrary;
use actix_web::{web, HttpResponse, Responder};
use common::requests::LimitQuery;

pub async fn process(
    query: web::Query<LimitQuery>,
    library: web::Data<SharedLibrary>,
) -> impl Responder {
    let limit = query.limit.unwrap_or(DEFAULT_FEATURE_LIMIT);
    HttpResponse::Ok().json(library.read().await.favorite_restaurants(limit))
}
