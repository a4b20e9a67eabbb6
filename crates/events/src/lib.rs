//! Dockboard event bus.
//!
//! Building blocks for the real-time side-channel that keeps every
//! connected dashboard in visual sync:
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`DashboardEvent`] — the typed catalog of state-change events and
//!   their exact wire shapes.
//!
//! Delivery is best-effort and at-most-once: there is no persistence,
//! no replay, and no acknowledgment. A client that connects after an
//! event was published must re-fetch current state through the read
//! APIs.

pub mod bus;
pub mod event;

pub use bus::EventBus;
pub use event::{DashboardEvent, DetailFields, DoorDetailsSaved, NewDoorAdded, NewDoorRemoved, StatusUpdated};
