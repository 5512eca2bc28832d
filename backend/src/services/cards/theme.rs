use crate::library::SharedLibrary;
use crate::services::error_response;
use actix_web::{web, HttpResponse, Responder};
use common::model::card::PlateCardTheme;
use common::requests::ThemeRequest;

pub async fn list() -> impl Responder {
    HttpResponse::Ok().json(PlateCardTheme::all())
}

pub async fn preferred(library: web::Data<SharedLibrary>) -> impl Responder {
    HttpResponse::Ok().json(library.read().await.preferred_theme())
}

pub async fn save(
    payload: web::Json<ThemeRequest>,
    library: web::Data<SharedLibrary>,
) -> impl Responder {
    match library.read().await.save_preferred_theme(payload.theme) {
        Ok(()) => HttpResponse::Ok().json(payload.theme),
        Err(e) => error_response("Error saving preferred theme", &e),
    }
}
