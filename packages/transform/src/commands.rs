//! # OT Commands
//!
//! The three cursor-relative edits a client can send.
//!
//! ## Command Semantics
//!
//! ### Skip
//! - Moves the cursor forward by `count` characters
//! - Landing on or past the end of the document leaves it undefined
//!
//! ### Insert
//! - Splices `chars` in at the cursor
//! - The cursor ends up after the inserted text
//!
//! ### Delete
//! - Removes `count` characters starting at the cursor
//! - The cursor does not move; a count running past the end is clamped
//!
//! ## Wire Form
//!
//! ```text
//! {"op": "skip", "count": 4}
//! {"op": "insert", "chars": " day"}
//! {"op": "delete", "count": 3}
//! ```

use serde::{Deserialize, Serialize};

/// A single OT edit command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Command {
    /// Advance the cursor by `count` characters
    Skip { count: usize },

    /// Insert `chars` at the cursor and move past them
    Insert { chars: String },

    /// Remove `count` characters at the cursor
    Delete { count: usize },

    /// Any record whose `op` tag is not recognized
    #[serde(other)]
    Unknown,
}

impl Command {
    pub fn skip(count: usize) -> Self {
        Command::Skip { count }
    }

    pub fn insert(chars: impl Into<String>) -> Self {
        Command::Insert {
            chars: chars.into(),
        }
    }

    pub fn delete(count: usize) -> Self {
        Command::Delete { count }
    }

    /// Get a debug name for this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Skip { .. } => "skip",
            Command::Insert { .. } => "insert",
            Command::Delete { .. } => "delete",
            Command::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Command::Unknown)
    }
}
