use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::{error, info};

mod blog;
mod comment;
mod config;
mod database;
mod middleware;
mod review;
mod router;
mod session;
mod state;
mod utils;
mod wish;

use config::{Config, StoreKind};
use database::{DocumentStore, MemoryStore, MongoStore};
use middleware::auth::SessionKeys;
use middleware::not_found::not_found;
use state::AppState;

fn cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

fn fail(message: String) -> std::io::Error {
    error!("{}", message);
    std::io::Error::other(message)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logger with environment variable support
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| fail(format!("Invalid configuration: {}", e)))?;

    let store: Arc<dyn DocumentStore> = match config.store {
        StoreKind::Mongo => Arc::new(
            MongoStore::init(&config.mongodb_uri, &config.db_name)
                .await
                .map_err(|e| fail(format!("Failed to connect to MongoDB: {}", e)))?,
        ),
        StoreKind::Memory => {
            info!("Using in-memory document store");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState::new(
        store,
        SessionKeys::new(config.token_secret.clone(), config.environment),
    );
    state
        .prepare()
        .await
        .map_err(|e| fail(format!("Failed to prepare collections: {}", e)))?;

    info!(
        "Starting server on http://{}:{} ({:?})",
        config.host, config.port, config.environment
    );

    let origins = config.cors_origins.clone();
    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found))
            .wrap(cors(&origins))
            .wrap(Logger::default())
            .configure(move |cfg| state.configure(cfg))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
