// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, then start the HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use services::{GooglePlacesClient, JAPANESE_WEEKDAYS};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load configuration (.env + process environment)
    let config = Config::from_env();

    // 2. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting places-finder...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 3. Build the Places API client once; shared read-only by all workers
    let client = web::Data::new(GooglePlacesClient::new(&config));
    let labels = web::Data::new(JAPANESE_WEEKDAYS);

    // 4. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .app_data(labels.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::search_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
