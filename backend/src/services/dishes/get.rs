use crate::engine::{DEFAULT_FEATURE_LIMIT, DEFAULT_HIGHLY_RATED_MIN};
use crate::library::SharedLibrary;
use actix_web::{web, HttpResponse, Responder};
use common::requests::LimitQuery;

/// `GET /api/dishes`: the whole snapshot, newest first.
pub async fn list(library: web::Data<SharedLibrary>) -> impl Responder {
    let library = library.read().await;
    HttpResponse::Ok().json(library.dishes())
}

pub async fn recent(
    query: web::Query<LimitQuery>,
    library: web::Data<SharedLibrary>,
) -> impl Responder {
    let limit = query.limit.unwrap_or(DEFAULT_FEATURE_LIMIT);
    HttpResponse::Ok().json(library.read().await.recent_dishes(limit))
}

pub async fn highly_rated(
    query: web::Query<LimitQuery>,
    library: web::Data<SharedLibrary>,
) -> impl Responder {
    let limit = query.limit.unwrap_or(DEFAULT_FEATURE_LIMIT);
    HttpResponse::Ok().json(
        library
            .read()
            .await
            .highly_rated(DEFAULT_HIGHLY_RATED_MIN, limit),
    )
}

pub async fn one(dish_id: web::Path<String>, library: web::Data<SharedLibrary>) -> impl Responder {
    let library = library.read().await;
    match library.dish(&dish_id) {
        Some(dish) => HttpResponse::Ok().json(dish),
        None => HttpResponse::NotFound().body("Dish not found"),
    }
}
