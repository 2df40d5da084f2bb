use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::AppointmentApi;

/// Immutable state shared by every request. Views are never stored here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub appointments: Arc<dyn AppointmentApi>,
}

impl AppState {
    pub fn new(config: AppConfig, appointments: Arc<dyn AppointmentApi>) -> Self {
        Self {
            config: Arc::new(config),
            appointments,
        }
    }
}
