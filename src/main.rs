//! Application entry point building the Actix-Web server.
use dotenvy::dotenv;

use glance_serverless::models::config::AppConfig;
use glance_serverless::run;

#[actix_web::main]
async fn main() {
    // Load environment variables from `.env` in local development.
    dotenv().ok();
    // Initialize logger with default level INFO if not provided.
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Fail fast on malformed configuration. The same variables are re-read
    // on every request, so handlers still validate for themselves.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading configuration: {}", err);
            std::process::exit(1);
        }
    };

    match run(config).await {
        Ok(()) => log::info!("Server stopped"),
        Err(err) => {
            log::error!("Error starting server: {}", err);
            std::process::exit(1);
        }
    }
}
