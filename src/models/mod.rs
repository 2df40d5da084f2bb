// src/models/mod.rs

pub mod app;
pub mod appointments;
pub mod session;
pub mod verification;

pub use app::AppState;
pub use appointments::{AppointmentRecord, AppointmentStatus};
pub use session::{Role, Session, SessionError};
pub use verification::{VerificationRequest, VerificationResult};
