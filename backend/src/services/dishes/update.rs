use crate::library::SharedLibrary;
use crate::services::{error_response, notify_store_changed};
use crate::view_controller::state::ViewState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::UpdateDishRequest;

pub async fn process(
    dish_id: web::Path<String>,
    payload: web::Json<UpdateDishRequest>,
    library: web::Data<SharedLibrary>,
    view: web::Data<ViewState>,
) -> impl Responder {
    let result = library.write().await.update_dish(&dish_id, &payload);
    match result {
        Ok(dish) => {
            notify_store_changed(&view);
            HttpResponse::Ok().json(dish)
        }
        Err(e) => error_response("Error updating dish", &e),
    }
}
