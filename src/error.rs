use thiserror::Error;

pub const GENERIC_FAILURE_REASON: &str = "Appointment not found or invalid verification link.";
pub const MISSING_IDENTIFIER_REASON: &str = "Missing appointment identifier.";

/// Everything that can go wrong while verifying one appointment link.
///
/// The view never sees these variants: they all collapse into a single
/// `Failed` state carrying `reason()`.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("request to verification endpoint failed: {0}")]
    Network(String),

    #[error("verification endpoint rejected the request with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("could not decode verification response: {0}")]
    Decode(String),

    #[error("no appointment identifier was supplied")]
    MissingIdentifier,

    #[error("appointment identifier {0:?} is not a usable path segment")]
    InvalidIdentifier(String),
}

impl VerifyError {
    /// Human-readable reason shown on the error card. Never empty.
    pub fn reason(&self) -> String {
        match self {
            VerifyError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            VerifyError::MissingIdentifier => MISSING_IDENTIFIER_REASON.to_string(),
            _ => GENERIC_FAILURE_REASON.to_string(),
        }
    }
}

impl From<reqwest::Error> for VerifyError {
    fn from(err: reqwest::Error) -> Self {
        VerifyError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_with_message_uses_it() {
        let err = VerifyError::Rejected {
            status: 404,
            message: Some("Not found".to_string()),
        };
        assert_eq!(err.reason(), "Not found");
    }

    #[test]
    fn rejected_without_message_is_generic() {
        for message in [None, Some("   ".to_string())] {
            let err = VerifyError::Rejected {
                status: 500,
                message,
            };
            assert_eq!(err.reason(), GENERIC_FAILURE_REASON);
        }
    }

    #[test]
    fn every_reason_is_non_empty() {
        let errors = [
            VerifyError::Network("connection refused".to_string()),
            VerifyError::Decode("expected value".to_string()),
            VerifyError::MissingIdentifier,
            VerifyError::InvalidIdentifier("..".to_string()),
            VerifyError::Rejected {
                status: 410,
                message: None,
            },
        ];
        for err in errors {
            assert!(!err.reason().is_empty(), "{err}");
        }
    }
}
