//! Shared domain types for the dockboard platform.
//!
//! Kept deliberately small: primitive aliases, the error taxonomy, and
//! the door status vocabulary. Everything database- or HTTP-specific
//! lives in the `dockboard-db` and `dockboard-api` crates.

pub mod error;
pub mod status;
pub mod types;

pub use error::CoreError;
pub use status::DoorStatus;
