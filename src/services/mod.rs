pub mod appointment_service;
pub mod verification_service;

pub use appointment_service::{AppointmentApi, HttpAppointmentApi};
pub use verification_service::VerificationView;
