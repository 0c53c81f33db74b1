use crate::config::AppConfig;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use switchboard_services::{StatusError, StatusService, ToggleError, ToggleService};
use switchboard_shared::{ToggleRequest, ToggleResponse};

pub struct AppState {
    pub config: Arc<AppConfig>,
    pub status_service: StatusService,
    pub toggle_service: ToggleService,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let status_service = StatusService::new(config.docker_status_url.clone())?;
        let toggle_service = ToggleService::new(config.toggle_service_url.clone())?;
        Ok(Self {
            config,
            status_service,
            toggle_service,
        })
    }
}

fn error_body(message: impl Into<String>) -> serde_json::Value {
    serde_json::json!({ "error": message.into() })
}

/// Current status of every configured service
pub async fn get_status(state: web::Data<AppState>) -> impl Responder {
    match state
        .status_service
        .service_statuses(&state.config.services)
        .await
    {
        Ok(statuses) => HttpResponse::Ok().json(statuses),
        Err(e @ StatusError::Fetch { .. }) => {
            log::error!("Error fetching docker status: {}", e);
            HttpResponse::InternalServerError().json(error_body("Failed to fetch service status"))
        }
        Err(e @ StatusError::Read(_)) => {
            log::error!("Error reading response: {}", e);
            HttpResponse::InternalServerError().json(error_body("Failed to read service status"))
        }
    }
}

/// Forward a start/stop request to the toggle controller
pub async fn toggle_service(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let request: ToggleRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Rejecting toggle body: {}", e);
            return HttpResponse::BadRequest().json(error_body("Invalid request body"));
        }
    };

    let Some((direction, service)) = request.target() else {
        return HttpResponse::BadRequest()
            .json(error_body("Exactly one of 'up' or 'down' must name a service"));
    };

    log::info!("Toggling service {} {}", service, direction);

    match state.toggle_service.toggle(&request).await {
        Ok(()) => HttpResponse::Ok().json(ToggleResponse::success()),
        Err(ToggleError::Rejected { status }) => {
            let code = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(code).json(error_body(format!(
                "Service toggle failed with status {}",
                status.as_u16()
            )))
        }
        Err(e) => {
            log::error!("Error toggling service: {}", e);
            HttpResponse::InternalServerError().json(error_body("Failed to toggle service"))
        }
    }
}

/// Service list and poll interval for the dashboard
pub async fn get_config(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.config.dashboard())
}

pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(error_body("Method not allowed"))
}

pub async fn health() -> impl Responder {
    "OK"
}
