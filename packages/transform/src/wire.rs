//! # JSON Wire Boundary
//!
//! Decodes the transport form of a command list and exposes the
//! "document + JSON string" entry points.
//!
//! Records with an unrecognized `op` decode to [`Command::Unknown`] and fail
//! later in the interpreter. Records for a known `op` with missing or
//! mistyped fields are rejected here.

use crate::{is_valid, transform, Command, OtError, Outcome, WireError};
use tracing::debug;

/// Decode a JSON array of command records
pub fn parse_commands(json: &str) -> Result<Vec<Command>, WireError> {
    let commands: Vec<Command> = serde_json::from_str(json)?;
    debug!(count = commands.len(), "Decoded command list");
    Ok(commands)
}

/// Decode a command list that is already part of a larger JSON document
pub fn commands_from_value(value: serde_json::Value) -> Result<Vec<Command>, WireError> {
    let commands: Vec<Command> = serde_json::from_value(value)?;
    debug!(count = commands.len(), "Decoded command list");
    Ok(commands)
}

/// Apply a JSON command list to `document`
pub fn transform_json(document: &str, json: &str) -> Result<Outcome, OtError> {
    let commands = parse_commands(json)?;
    Ok(transform(document, &commands)?)
}

/// Check a JSON command list against the expected document
pub fn is_valid_json(document: &str, expected: &str, json: &str) -> Result<bool, OtError> {
    let commands = parse_commands(json)?;
    Ok(is_valid(document, expected, &commands)?)
}

/// Encode commands back into their JSON array form
pub fn to_json(commands: &[Command]) -> Result<String, WireError> {
    Ok(serde_json::to_string(commands)?)
}

/// Encode commands as a JSON array value
pub fn to_value(commands: &[Command]) -> Result<serde_json::Value, WireError> {
    Ok(serde_json::to_value(commands)?)
}
