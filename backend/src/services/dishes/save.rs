use crate::library::SharedLibrary;
use crate::services::{error_response, notify_store_changed};
use crate::view_controller::state::ViewState;
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use common::requests::LogDishRequest;

pub async fn process(
    payload: web::Json<LogDishRequest>,
    library: web::Data<SharedLibrary>,
    view: web::Data<ViewState>,
) -> impl Responder {
    let result = library.write().await.log_dish(&payload, Utc::now());
    match result {
        Ok(dish) => {
            notify_store_changed(&view);
            HttpResponse::Ok().json(dish)
        }
        Err(e) => error_response("Error logging dish", &e),
    }
}
