use crate::handlers;
use actix_web::web;
use std::path::Path;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Dashboard API
        .route("/api/status", web::get().to(handlers::get_status))
        .service(
            web::resource("/api/toggle")
                .route(web::post().to(handlers::toggle_service))
                .default_service(web::to(handlers::method_not_allowed)),
        )
        .route("/api/config", web::get().to(handlers::get_config))

        // Liveness
        .route("/health", web::get().to(handlers::health));
}

/// Serve the dashboard UI. Must be registered after the API routes since it
/// is mounted at `/`.
pub fn configure_static(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    cfg.service(actix_files::Files::new("/", static_dir).index_file("index.html"));
}
