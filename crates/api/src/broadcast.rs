//! Event-to-WebSocket fan-out.
//!
//! [`EventBroadcaster`] subscribes to the [`EventBus`] and forwards
//! every published [`DashboardEvent`] as a JSON text frame to all
//! currently connected clients, including the client whose HTTP request
//! caused the event. Delivery is fire-and-forget: there is no replay,
//! no acknowledgment, and no ordering guarantee across doors.

use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::broadcast;

use dockboard_events::DashboardEvent;

use crate::ws::WsManager;

/// Forwards dashboard events from the bus to the WebSocket registry.
pub struct EventBroadcaster {
    ws_manager: Arc<WsManager>,
}

impl EventBroadcaster {
    /// Create a new broadcaster targeting the given connection registry.
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the forwarding loop.
    ///
    /// Subscribes to the event bus via `receiver` and pushes each event
    /// to every connection. The loop exits when the channel is closed
    /// (i.e. the [`EventBus`](dockboard_events::EventBus) is dropped at
    /// shutdown).
    pub async fn run(self, mut receiver: broadcast::Receiver<DashboardEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.forward(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    // Dropped events are acceptable: clients that miss
                    // one re-fetch state through the read APIs.
                    tracing::warn!(skipped = n, "Event broadcaster lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, broadcaster shutting down");
                    break;
                }
            }
        }
    }

    /// Serialize one event and broadcast it to all connections.
    async fn forward(&self, event: &DashboardEvent) {
        let frame = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize dashboard event");
                return;
            }
        };
        self.ws_manager.broadcast(Message::Text(frame.into())).await;
    }
}
