use serde::Serialize;

use crate::error::VerifyError;
use crate::models::appointments::AppointmentRecord;

/// Opaque identifier taken from the verification link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    id: String,
}

impl VerificationRequest {
    /// Returns `None` for an absent or blank identifier.
    pub fn from_path(raw: Option<&str>) -> Option<Self> {
        let id = raw?.trim();
        if id.is_empty() {
            return None;
        }
        Some(Self { id: id.to_string() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum VerificationResult {
    Pending,
    Failed { reason: String },
    Verified { record: AppointmentRecord },
}

impl Default for VerificationResult {
    fn default() -> Self {
        VerificationResult::Pending
    }
}

impl VerificationResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, VerificationResult::Pending)
    }

    /// Applies the outcome of the backend call. Only `Pending` can move;
    /// returns false and leaves the state untouched otherwise.
    pub fn settle(&mut self, outcome: Result<AppointmentRecord, VerifyError>) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = match outcome {
            Ok(record) => VerificationResult::Verified { record },
            Err(err) => VerificationResult::Failed {
                reason: err.reason(),
            },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointments::AppointmentStatus;

    #[test]
    fn blank_identifiers_are_absent() {
        assert!(VerificationRequest::from_path(None).is_none());
        assert!(VerificationRequest::from_path(Some("")).is_none());
        assert!(VerificationRequest::from_path(Some("  \t")).is_none());
        let req = VerificationRequest::from_path(Some("abc123")).unwrap();
        assert_eq!(req.id(), "abc123");
    }

    #[test]
    fn settle_moves_pending_to_verified() {
        let mut state = VerificationResult::default();
        let record = AppointmentRecord {
            appointment_id: Some("A1".to_string()),
            status: AppointmentStatus::Completed,
            ..Default::default()
        };
        assert!(state.settle(Ok(record.clone())));
        assert_eq!(state, VerificationResult::Verified { record });
    }

    #[test]
    fn settle_is_one_directional() {
        let mut state = VerificationResult::Pending;
        assert!(state.settle(Err(VerifyError::Rejected {
            status: 404,
            message: Some("Not found".to_string()),
        })));
        assert!(!state.settle(Ok(AppointmentRecord::default())));
        assert_eq!(
            state,
            VerificationResult::Failed {
                reason: "Not found".to_string()
            }
        );
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(VerificationResult::Pending).unwrap();
        assert_eq!(json, serde_json::json!({"state": "pending"}));

        let json = serde_json::to_value(VerificationResult::Failed {
            reason: "Not found".to_string(),
        })
        .unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(json["reason"], "Not found");
    }
}
