//! # otcheck transform
//!
//! Applies Operational Transformation commands to a text document, so a
//! client's locally-predicted edits can be checked against the document the
//! server holds.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ wire: JSON command list → Vec<Command>      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ interpreter: cursor + buffer state machine  │
//! │  - skip / insert / delete                   │
//! │  - Undefined once a skip passes the end     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ validator: outcome == expected document     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use otcheck_transform::{is_valid, parse_commands, transform};
//!
//! let commands = parse_commands(r#"[{"op": "skip", "count": 4}, {"op": "insert", "chars": " day"}]"#)?;
//!
//! let outcome = transform("Nice!", &commands)?;
//! assert_eq!(outcome.document(), Some("Nice day!"));
//! assert_eq!(outcome.position(), Some(8));
//!
//! assert!(is_valid("Nice!", "Nice day!", &commands)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod commands;
mod errors;
mod interpreter;
mod validator;
mod wire;

pub use commands::Command;
pub use errors::{InterpreterError, OtError, WireError};
pub use interpreter::{transform, Interpreter, Outcome};
pub use validator::{is_valid, validate, Validation};
pub use wire::{
    commands_from_value, is_valid_json, parse_commands, to_json, to_value, transform_json,
};
