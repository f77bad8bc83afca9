// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, translations and database, then start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod http;
mod i18n;
mod models;
mod services;
mod views;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use config::Config;
use dotenv::dotenv;
use i18n::Translator;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting MyEspacio...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Load translations
    let translator = Translator::load(&config.locale_dir)
        .await
        .with_context(|| format!("loading locales from {}", config.locale_dir.display()))?;
    let translator = web::Data::new(translator);

    // 5. Initialize database connection pool
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_data = web::Data::new(config);
    let pool_data = web::Data::new(pool);

    HttpServer::new(move || {
        App::new()
            // Application state (database pool, config and translations)
            .app_data(pool_data.clone())
            .app_data(config_data.clone())
            .app_data(translator.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::common_config)
            .configure(handlers::photos_config)
            .configure(handlers::albums_config)
            .configure(handlers::contact_config)
            .default_service(web::to(handlers::common::not_found))
    })
    .bind(&server_addr)
    .with_context(|| format!("binding {}", server_addr))?
    .run()
    .await?;

    Ok(())
}
