//! Minimal CRM backend: lists and creates client records over HTTP.

#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware};

#[cfg(feature = "server")]
use crate::db::{DbPool, check_schema, establish_connection_pool, run_migrations};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{ClientStore, DieselRepository};

pub mod db;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
pub mod services;

/// Opens the connection pool and makes sure the schema is usable.
///
/// Any failure here is fatal: the server must not start against a database
/// it cannot serve from.
#[cfg(feature = "server")]
pub fn init_database(server_config: &ServerConfig) -> std::io::Result<DbPool> {
    let database = &server_config.database;
    log::info!(
        "Connecting to database `{}` (host {}, user {})",
        database.name,
        database.host,
        database.user
    );

    // Establish Diesel connection pool; failure here aborts startup.
    let pool = establish_connection_pool(database.database_url(), database.pool_size).map_err(
        |e| std::io::Error::other(format!("Failed to establish database connection: {e}")),
    )?;

    if server_config.run_migrations {
        let applied = run_migrations(&pool)
            .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
        log::info!("Applied {applied} pending migrations");
    }

    check_schema(&pool).map_err(|e| {
        std::io::Error::other(format!(
            "Database `{}` is missing the clients schema: {e}",
            database.name
        ))
    })?;

    Ok(pool)
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let pool = init_database(&server_config)?;

    let store: Arc<dyn ClientStore> = Arc::new(DieselRepository::new(pool));
    let policy = server_config.error_status_policy;

    let bind_address = (server_config.address.clone(), server_config.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(routes::path_normalizer())
            .wrap(middleware::Logger::default())
            .configure(routes::configure(store.clone(), policy))
    })
    .bind(bind_address)?;

    log::info!(
        "Servidor escuchando en http://{}:{}",
        server_config.address,
        server_config.port
    );

    server.run().await
}
