pub mod appointment;
pub mod status;

pub use appointment::AppointmentRecord;
pub use status::AppointmentStatus;
