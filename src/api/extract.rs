use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

use crate::models::Session;

pub const SESSION_HEADER: &str = "x-hms-session";

/// Optional signed-in user, decoded and validated from `x-hms-session`.
/// A missing or invalid header yields `None`; it never rejects the request.
pub struct CurrentSession(pub Option<Session>);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(SESSION_HEADER) else {
            return Ok(CurrentSession(None));
        };

        let session = match value.to_str() {
            Ok(raw) => match Session::decode(raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    log::warn!("ignoring invalid session header: {}", e);
                    None
                }
            },
            Err(_) => {
                log::warn!("ignoring non-ASCII session header");
                None
            }
        };
        Ok(CurrentSession(session))
    }
}
