use serde::{Deserialize, Deserializer, Serialize};

use crate::error::VerifyError;
use crate::models::appointments::status::AppointmentStatus;

/// Read-only projection of an appointment returned by the public
/// verification endpoint. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub appointment_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_pid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub doctor_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub department: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl AppointmentRecord {
    /// Decodes a verification response body. Only a JSON object is accepted;
    /// field-level defaulting is left to serde.
    pub fn decode(body: &[u8]) -> Result<Self, VerifyError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| VerifyError::Decode(e.to_string()))?;
        if !value.is_object() {
            return Err(VerifyError::Decode(
                "verification response is not a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| VerifyError::Decode(e.to_string()))
    }
}

// Accepts strings and numbers; null, blank strings and other JSON types
// count as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_partial_record() {
        let record: AppointmentRecord =
            serde_json::from_str(r#"{"appointmentId":"A1","status":"Completed"}"#).unwrap();
        assert_eq!(record.appointment_id.as_deref(), Some("A1"));
        assert_eq!(record.status, AppointmentStatus::Completed);
        assert!(record.date.is_none());
        assert!(record.time.is_none());
        assert!(record.department.is_none());
    }

    #[test]
    fn decodes_full_record() {
        let body = r#"{
            "appointmentId": "APT-0042",
            "date": "2026-10-17T09:00:00Z",
            "time": "09:00 AM",
            "patientName": "Ada Obi",
            "patientPid": 10442,
            "doctorName": "Dr. Mensah",
            "department": "Cardiology",
            "status": "cancelled",
            "extra": {"ignored": true}
        }"#;
        let record: AppointmentRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.patient_pid.as_deref(), Some("10442"));
        assert_eq!(record.doctor_name.as_deref(), Some("Dr. Mensah"));
        assert_eq!(record.status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn null_and_blank_fields_are_absent() {
        let record: AppointmentRecord =
            serde_json::from_str(r#"{"date":null,"time":"  ","status":null}"#).unwrap();
        assert!(record.date.is_none());
        assert!(record.time.is_none());
        assert_eq!(record.status, AppointmentStatus::Upcoming);
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(matches!(
            AppointmentRecord::decode(b"[1,2,3]"),
            Err(VerifyError::Decode(_))
        ));
        assert!(matches!(
            AppointmentRecord::decode(b"\"A1\""),
            Err(VerifyError::Decode(_))
        ));
        assert!(matches!(
            AppointmentRecord::decode(b"<html>oops</html>"),
            Err(VerifyError::Decode(_))
        ));
    }

    #[test]
    fn decode_accepts_empty_object() {
        let record = AppointmentRecord::decode(b"{}").unwrap();
        assert_eq!(record, AppointmentRecord::default());
    }
}
