use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};

pub mod domain;
pub mod dto;
pub mod models;
pub mod routes;

use crate::models::config::AppConfig;

/// Build and run the HTTP server on the configured address.
///
/// Handlers rebuild their state from the environment on every request, so
/// the server itself holds nothing; `config` is only used for binding and
/// startup logging.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let address = config.server.bind_address();
    log::info!("Serving dashboard on http://{}:{}", address.0, address.1);
    if config.auth.secret_key.is_empty() {
        log::info!("Authentication is not configured");
    } else {
        log::info!(
            "Authentication configured for {} user(s)",
            config.auth.users.len()
        );
    }

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind(address)?
    .run()
    .await
}
