//! WebSocket infrastructure for real-time dashboard sync.
//!
//! Provides connection management, heartbeat monitoring, and the HTTP
//! upgrade handler used by Axum routes. All connections share one
//! global broadcast scope; there is no authentication and no rooms.

mod handler;
mod heartbeat;
pub mod manager;

pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
