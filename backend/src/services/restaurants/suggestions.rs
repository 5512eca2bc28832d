use crate::library::{SharedLibrary, DEFAULT_SUGGESTION_LIMIT};
use actix_web::{web, HttpResponse, Responder};
use common::requests::SuggestionQuery;

pub async fn process(
    query: web::Query<SuggestionQuery>,
    library: web::Data<SharedLibrary>,
) -> impl Responder {
    let limit = query.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    let names = library.read().await.restaurant_suggestions(&query.q, limit);
    HttpResponse::Ok().json(names)
}
