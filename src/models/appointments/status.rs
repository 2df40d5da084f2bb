use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// Appointment status as shown on the verification badge
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Classifies a raw backend status. Total: unknown or absent values fall
    /// back to `Upcoming`.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("completed") => AppointmentStatus::Completed,
            Some("cancelled") => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Upcoming,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Upcoming",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }

    // Bootstrap background class for the badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "bg-primary",
            AppointmentStatus::Completed => "bg-success",
            AppointmentStatus::Cancelled => "bg-danger",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            AppointmentStatus::Upcoming => "upcoming",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", status_str)
    }
}

// Never fails: anything that is not a recognised string becomes `Upcoming`.
impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(AppointmentStatus::classify(value.as_str()))
    }
}
