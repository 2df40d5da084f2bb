#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-process stand-in for the hospital backend.
#[derive(Default)]
pub struct FakeBackend {
    pub calls: AtomicUsize,
    pub saw_authorization: Mutex<bool>,
}

impl FakeBackend {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

async fn verify_endpoint(
    State(backend): State<Arc<FakeBackend>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    backend.calls.fetch_add(1, Ordering::SeqCst);
    if headers.contains_key("authorization") {
        *backend.saw_authorization.lock().unwrap() = true;
    }

    match id.as_str() {
        "abc123" => Json(json!({"appointmentId": "A1", "status": "Completed"})).into_response(),
        "full" => Json(json!({
            "appointmentId": "APT-0042",
            "date": "2026-10-17T09:00:00.000Z",
            "time": "09:00 AM",
            "patientName": "Ada Obi",
            "patientPid": 10442,
            "doctorName": "Dr. Mensah",
            "department": "Cardiology",
            "status": "upcoming"
        }))
        .into_response(),
        "missing" => (StatusCode::NOT_FOUND, Json(json!({"message": "Not found"}))).into_response(),
        "expired" => (StatusCode::GONE, Json(json!({"message": "Link expired"}))).into_response(),
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        "garbled" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Json(json!({"appointmentId": "SLOW"})).into_response()
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Starts the fake backend; returns it with its `API_BASE`.
pub async fn start_backend() -> (Arc<FakeBackend>, String) {
    let backend = Arc::new(FakeBackend::default());
    let app = Router::new()
        .route("/api/appointments/{id}/verify", get(verify_endpoint))
        .with_state(backend.clone());
    let addr = serve(app).await;
    (backend, format!("http://{}/api", addr))
}
