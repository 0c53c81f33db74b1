pub mod client;
pub mod name_resolver;
pub mod status_service;
pub mod toggle_service;

pub use name_resolver::resolve;
pub use status_service::{StatusError, StatusService, parse_records, reconcile};
pub use toggle_service::{ToggleError, ToggleService};
