use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::extract::CurrentSession;
use crate::models::{AppState, Session, VerificationRequest, VerificationResult};
use crate::services::VerificationView;
use crate::views::{render_loading, render_page, render_state};

const PAGE_TITLE: &str = "Appointment Verification";

// Reconnects the page to the live feed and swaps in each fragment it receives.
const LIVE_SCRIPT: &str = "(function () {
        var scheme = location.protocol === 'https:' ? 'wss://' : 'ws://';
        var ws = new WebSocket(scheme + location.host + location.pathname.replace(/\\/live$/, '/ws'));
        ws.onmessage = function (event) {
            document.getElementById('verify-root').innerHTML = event.data;
        };
    })();";

/// Mounts a fresh view for one request and waits for it to settle.
///
/// The view is dropped with the handler future, so a client that goes
/// away mid-request unmounts it and the late backend answer is discarded.
pub async fn run_verification(state: &AppState, raw_id: Option<&str>) -> VerificationResult {
    let request = VerificationRequest::from_path(raw_id);
    let view = VerificationView::new(
        state.appointments.clone(),
        request,
        state.config.missing_id,
    );
    view.mount();
    let result = view.settled().await;
    log::info!(
        "view {}: verification of {:?} ended {}",
        view.instance(),
        view.request().map(|r| r.id()),
        state_name(&result)
    );
    result
}

fn state_name(result: &VerificationResult) -> &'static str {
    match result {
        VerificationResult::Pending => "pending",
        VerificationResult::Failed { .. } => "failed",
        VerificationResult::Verified { .. } => "verified",
    }
}

fn page_status(result: &VerificationResult) -> StatusCode {
    match result {
        VerificationResult::Failed { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    }
}

fn render_result_page(state: &AppState, session: Option<&Session>, result: &VerificationResult) -> Response {
    let body = render_state(result, &state.config.login_url);
    let html = render_page(PAGE_TITLE, session, &body, None);
    (page_status(result), Html(html)).into_response()
}

/// `GET /verify/{id}`
pub async fn verify_page_handler(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<String>,
) -> Response {
    let result = run_verification(&state, Some(&id)).await;
    render_result_page(&state, session.as_ref(), &result)
}

/// `GET /verify` with no identifier in the link.
pub async fn verify_page_missing_handler(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Response {
    let result = run_verification(&state, None).await;
    render_result_page(&state, session.as_ref(), &result)
}

/// `GET /verify/{id}/live`: loading view now, the rest over the WebSocket.
pub async fn verify_live_page_handler(
    CurrentSession(session): CurrentSession,
    Path(_id): Path<String>,
) -> Html<String> {
    Html(render_page(
        PAGE_TITLE,
        session.as_ref(),
        &render_loading(),
        Some(LIVE_SCRIPT),
    ))
}

/// `GET /api/verify/{id}`
pub async fn verify_json_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<VerificationResult>) {
    let result = run_verification(&state, Some(&id)).await;
    let status = match &result {
        VerificationResult::Pending => StatusCode::ACCEPTED,
        VerificationResult::Failed { .. } => StatusCode::NOT_FOUND,
        VerificationResult::Verified { .. } => StatusCode::OK,
    };
    (status, Json(result))
}

pub async fn fallback_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
