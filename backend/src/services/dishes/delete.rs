use crate::library::SharedLibrary;
use crate::services::{error_response, notify_store_changed};
use crate::view_controller::state::ViewState;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(
    dish_id: web::Path<String>,
    library: web::Data<SharedLibrary>,
    view: web::Data<ViewState>,
) -> impl Responder {
    let result = library.write().await.delete_dish(&dish_id);
    match result {
        Ok(()) => {
            notify_store_changed(&view);
            HttpResponse::NoContent().finish()
        }
        Err(e) => error_response("Error deleting dish", &e),
    }
}
