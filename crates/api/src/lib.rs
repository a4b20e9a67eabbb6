//! Dockboard API server library.
//!
//! Exposes the core building blocks (config, state, error handling,
//! routes, WebSocket infrastructure, event broadcasting) so integration
//! tests and the binary entrypoint can both access them.

pub mod broadcast;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod ws;
