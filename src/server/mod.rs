//! main file for the server

pub mod model;
mod controller;
mod routes;
mod state;
mod storage;
mod util;

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use log::info;
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;
use crate::server::storage::json_file::JsonFileStore;

/// Run the server
pub async fn run(ServerConfig { addr, orders_file, public_dir }: ServerConfig) -> anyhow::Result<()> {
    let store = JsonFileStore::open(&orders_file)
        .await
        .with_context(|| format!("failed to open orders file {}", orders_file.display()))?;
    info!("orders are persisted in {}", store.path().display());
    let data = web::Data::new(AppState::new(Arc::new(store), public_dir.clone()));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(routes::api)
            .service(routes::frontend(&public_dir))
    })
    .bind(addr)
    .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on http://localhost:{}", addr.port());
    server.run().await.context("server stopped unexpectedly")
}
