use crate::library::SharedLibrary;
use crate::services::error_response;
use actix_web::{web, HttpResponse, Responder};
use common::requests::CardQuery;

pub async fn process(
    dish_id: web::Path<String>,
    query: web::Query<CardQuery>,
    library: web::Data<SharedLibrary>,
) -> impl Responder {
    let result = library
        .read()
        .await
        .card(&dish_id, query.theme, query.text());
    match result {
        Ok(card) => HttpResponse::Ok().json(card),
        Err(e) => error_response("Error building card", &e),
    }
}
