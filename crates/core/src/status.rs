//! Door status vocabulary.
//!
//! Statuses are stored as free text in the database -- clients may write
//! arbitrary strings and legacy rows may hold values outside the
//! conventional set. [`DoorStatus`] models the four conventional values
//! as a closed set with an explicit [`DoorStatus::Other`] fallback so
//! display code (the report, primarily) can color-code known statuses
//! without ever rejecting or crashing on unknown ones.

use std::fmt;

/// A door status: one of the four conventional values, or anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoorStatus {
    Empty,
    Loading,
    Loaded,
    Backhaul,
    /// A status string outside the conventional set. Preserved verbatim.
    Other(String),
}

impl DoorStatus {
    /// The status every door is reset to by `reset_all` and
    /// `clear_all_data`.
    pub const RESET: &'static str = "Empty";

    /// The status doors are seeded with on first run.
    pub const SEED: &'static str = "Backhaul";

    /// Parse a stored status string. Never fails: unrecognized values
    /// become [`DoorStatus::Other`].
    pub fn parse(s: &str) -> Self {
        match s {
            "Empty" => Self::Empty,
            "Loading" => Self::Loading,
            "Loaded" => Self::Loaded,
            "Backhaul" => Self::Backhaul,
            other => Self::Other(other.to_string()),
        }
    }

    /// The canonical string form, as stored in the database.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::Loading => "Loading",
            Self::Loaded => "Loaded",
            Self::Backhaul => "Backhaul",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for DoorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
