use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde::Deserialize;
use std::time::Duration;

use crate::error::VerifyError;
use crate::models::AppointmentRecord;

/// Read side of the hospital backend used by the verifier.
#[async_trait]
pub trait AppointmentApi: Send + Sync {
    async fn fetch_verification(&self, id: &str) -> Result<AppointmentRecord, VerifyError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<serde_json::Value>,
}

/// Calls `GET {api_base}/appointments/{id}/verify` without credentials.
#[derive(Clone)]
pub struct HttpAppointmentApi {
    client: Client,
    api_base: Url,
}

impl HttpAppointmentApi {
    pub fn new(api_base: Url, timeout: Duration) -> Result<Self, VerifyError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_base })
    }

    /// `.` and `..` are rejected: URL normalisation would drop them and
    /// send the request to a different endpoint.
    pub fn verify_url(&self, id: &str) -> Result<Url, VerifyError> {
        if matches!(id, "." | "..") {
            return Err(VerifyError::InvalidIdentifier(id.to_string()));
        }
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| VerifyError::Network(format!("API base cannot be a base: {}", self.api_base)))?
            .pop_if_empty()
            .extend(["appointments", id, "verify"]);
        Ok(url)
    }
}

#[async_trait]
impl AppointmentApi for HttpAppointmentApi {
    async fn fetch_verification(&self, id: &str) -> Result<AppointmentRecord, VerifyError> {
        let url = self.verify_url(id)?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .and_then(|m| m.as_str().map(str::to_string));
            log::info!("verification for {} rejected with {}", id, status);
            return Err(VerifyError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        AppointmentRecord::decode(&body)
    }
}
