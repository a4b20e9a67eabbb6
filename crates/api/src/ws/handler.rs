use axum::extract::ws::{Message, Utf8Bytes, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;

use dockboard_core::types::DbId;

use crate::handlers::door;
use crate::state::AppState;

/// An inbound message from a dashboard client.
///
/// Same `{"event": ..., "data": ...}` envelope as server-to-client
/// frames. `update_status` is the only client-originated mutation.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
enum ClientMessage {
    UpdateStatus(UpdateStatusData),
}

#[derive(Debug, Deserialize)]
struct UpdateStatusData {
    door_id: DbId,
    status: String,
}

/// HTTP handler that upgrades the connection to WebSocket.
///
/// After the upgrade the connection is registered with `WsManager` and
/// managed by two spawned tasks (sender + receiver).
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Manage a single WebSocket connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Registers the connection with `WsManager`.
///   2. Spawns a sender task that forwards messages from the manager channel.
///   3. Processes inbound messages on the current task.
///   4. Cleans up on disconnect.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "WebSocket connected");

    // Register and get the receiver for outbound messages.
    let mut rx = state.ws_manager.add(conn_id.clone()).await;

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward channel messages to the WebSocket sink.
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    // Receiver loop: process inbound messages.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(Message::Text(text)) => {
                handle_client_message(&state, &conn_id, &text).await;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    // Clean up: remove connection and abort sender task.
    state.ws_manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, "WebSocket disconnected");
}

/// Dispatch one inbound text frame.
///
/// Malformed frames are logged and dropped; a failed mutation is logged
/// but never reported back to the sender -- there is no reply channel
/// in the protocol, only the shared broadcast.
async fn handle_client_message(state: &AppState, conn_id: &str, text: &Utf8Bytes) {
    let parsed: ClientMessage = match serde_json::from_str(text.as_str()) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::debug!(conn_id = %conn_id, error = %e, "Ignoring malformed WebSocket frame");
            return;
        }
    };

    match parsed {
        ClientMessage::UpdateStatus(data) => {
            if let Err(e) = door::apply_status(state, data.door_id, &data.status).await {
                tracing::error!(
                    conn_id = %conn_id,
                    door_id = data.door_id,
                    error = %e,
                    "Failed to apply status update"
                );
            }
        }
    }
}
