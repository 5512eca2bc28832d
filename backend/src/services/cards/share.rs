use crate::library::SharedLibrary;
use crate::services::error_response;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn track(dish_id: web::Path<String>, library: web::Data<SharedLibrary>) -> impl Responder {
    match library.write().await.track_shared_dish(&dish_id) {
        Ok(total) => HttpResponse::Ok().json(json!({ "total_shared": total })),
        Err(e) => error_response("Error tracking share", &e),
    }
}

pub async fn stats(library: web::Data<SharedLibrary>) -> impl Responder {
    HttpResponse::Ok().json(library.read().await.share_stats())
}
