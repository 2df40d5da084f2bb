use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Clinic,
    Receptionist,
    Patient,
}

impl Role {
    pub fn dashboard_path(&self) -> String {
        format!("/{}/dashboard", self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role_str = match self {
            Role::Admin => "admin",
            Role::Clinic => "clinic",
            Role::Receptionist => "receptionist",
            Role::Patient => "patient",
        };
        write!(f, "{}", role_str)
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("malformed session payload: {0}")]
    Malformed(String),

    #[error("session field `{0}` is empty")]
    EmptyField(&'static str),
}

/// Signed-in user as presented by the hosting application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: String,
    pub name: String,
    pub role: Role,
}

// Wire shape; validated into `Session` by `Session::decode`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSession {
    #[serde(alias = "_id", alias = "id")]
    user_id: String,
    name: String,
    role: Role,
}

impl Session {
    pub fn decode(raw: &str) -> Result<Self, SessionError> {
        let raw: RawSession =
            serde_json::from_str(raw).map_err(|e| SessionError::Malformed(e.to_string()))?;
        let user_id = raw.user_id.trim();
        let name = raw.name.trim();
        if user_id.is_empty() {
            return Err(SessionError::EmptyField("userId"));
        }
        if name.is_empty() {
            return Err(SessionError::EmptyField("name"));
        }
        Ok(Session {
            user_id: user_id.to_string(),
            name: name.to_string(),
            role: raw.role,
        })
    }
}
