use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use futures::stream::SplitStream;
use futures::{SinkExt, StreamExt};

use crate::models::{AppState, VerificationRequest};
use crate::services::VerificationView;
use crate::views::{render_loading, render_state};

/// `GET /verify/{id}/ws`
pub async fn websocket_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state, id))
}

/// One socket is one view instance: the loading fragment goes out first,
/// then the terminal fragment, then a close frame. If the client leaves
/// first the view is unmounted and whatever the backend returns later is
/// dropped.
pub async fn handle_socket(socket: WebSocket, state: AppState, id: String) {
    let (mut sender, mut receiver) = socket.split();

    if let Err(e) = sender.send(Message::Text(render_loading().into())).await {
        log::debug!("Error sending loading fragment: {}", e);
        return;
    }

    let view = VerificationView::new(
        state.appointments.clone(),
        VerificationRequest::from_path(Some(&id)),
        state.config.missing_id,
    );
    view.mount();

    let result = tokio::select! {
        result = view.settled() => Some(result),
        _ = wait_for_close(&mut receiver) => None,
    };

    let Some(result) = result else {
        view.unmount();
        log::info!("view {}: client left before verification finished", view.instance());
        return;
    };

    let fragment = render_state(&result, &state.config.login_url);
    if let Err(e) = sender.send(Message::Text(fragment.into())).await {
        log::debug!("Error sending verification fragment: {}", e);
        return;
    }
    let _ = sender.send(Message::Close(None)).await;
}

async fn wait_for_close(receiver: &mut SplitStream<WebSocket>) {
    loop {
        match receiver.next().await {
            Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
            Some(Ok(_)) => {}
        }
    }
}
