//! Public appointment verification service.
//!
//! A shareable link `/verify/{id}` is resolved against the hospital
//! backend's `GET {API_BASE}/appointments/{id}/verify` endpoint and rendered
//! as one of three views: loading, failed or verified.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

pub use config::{AppConfig, MissingIdPolicy};
pub use error::VerifyError;
pub use models::{AppState, AppointmentRecord, AppointmentStatus, VerificationResult};
pub use services::{AppointmentApi, HttpAppointmentApi, VerificationView};
