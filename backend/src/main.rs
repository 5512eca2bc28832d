mod config;
mod engine;
mod error;
mod library;
mod services;
mod store;
mod view_controller;

use crate::config::Config;
use crate::library::{DishLibrary, SharedLibrary};
use crate::store::sqlite::SqliteStore;
use crate::view_controller::state::{ViewState, ViewUpdate};
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::RwLock;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();
    let url = format!("http://{}:{}", config.host, config.port);

    let store = SqliteStore::open(&config.database_path)
        .map_err(|e| std::io::Error::other(format!("Cannot open {}: {}", config.database_path, e)))?;
    info!("Using database {}", config.database_path);

    let library: SharedLibrary = Arc::new(RwLock::new(DishLibrary::new(
        store,
        config.throwback_window_days,
    )));

    // Initialize discovery view state
    let (view_state, rx) = ViewState::new(100);

    // Start view updater task
    let updater_state = view_state.clone();
    let updater_library = library.clone();
    let debounce = config.debounce;
    tokio::spawn(async move {
        view_controller::state::start_view_updater(updater_state, updater_library, rx, debounce)
            .await;
    });
    if view_state.tx.send(ViewUpdate::Refresh).await.is_err() {
        warn!("Initial discovery view could not be scheduled");
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB, photos travel as base64
            .app_data(web::Data::new(library.clone()))
            .app_data(web::Data::new(view_state.clone()))
            .service(services::dishes::configure_routes())
            .service(services::restaurants::configure_routes())
            .service(services::discovery::configure_routes())
            .service(services::memory_lane::configure_routes())
            .service(services::cards::configure_routes())
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
