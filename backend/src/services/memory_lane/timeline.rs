use crate::library::SharedLibrary;
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;

pub async fn process(library: web::Data<SharedLibrary>) -> impl Responder {
    HttpResponse::Ok().json(library.read().await.memory_lane(Utc::now()))
}

pub async fn throwbacks(library: web::Data<SharedLibrary>) -> impl Responder {
    HttpResponse::Ok().json(library.read().await.throwbacks(Utc::now()))
}
