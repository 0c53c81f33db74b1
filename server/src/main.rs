mod config;
mod handlers;
mod routes;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use config::{AppConfig, ServerConfig};
use handlers::AppState;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = ServerConfig::from_env();

    let config = match AppConfig::load(&server_config.config_path) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Loaded {} services from {} (poll interval {}s)",
        config.services.len(),
        server_config.config_path.display(),
        config.poll_interval_seconds
    );

    let app_state = match AppState::new(config) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to initialize services: {:#}", e);
            std::process::exit(1);
        }
    };

    let static_dir = server_config.static_dir.clone();
    let serve_static = static_dir.is_dir();
    if !serve_static {
        log::warn!(
            "Static directory {} not found, dashboard UI will not be served",
            static_dir.display()
        );
    }

    log::info!(
        "Starting SwitchBoard on {}:{}",
        server_config.server_host,
        server_config.server_port
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_method()
            .allow_any_origin()
            .allow_any_header();

        let app = App::new()
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(routes::configure);

        if serve_static {
            app.configure(|cfg| routes::configure_static(cfg, &static_dir))
        } else {
            app
        }
    })
    .bind((server_config.server_host.as_str(), server_config.server_port))?
    .run()
    .await
}
