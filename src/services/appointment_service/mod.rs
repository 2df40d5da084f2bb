pub mod client;

pub use client::{AppointmentApi, HttpAppointmentApi};
