pub mod labels;
pub mod models;

pub use labels::Labels;
pub use models::{
    ContainerRecord, DashboardConfig, ServiceConfig, ServiceStatus, ToggleDirection,
    ToggleRequest, ToggleResponse, NOT_FOUND_STATUS, UNKNOWN_STATE,
};
