//! Compare an interpreter run against the document the server holds.

use crate::{transform, Command, InterpreterError, Outcome};
use serde::Serialize;

/// Result of checking a run against an expected document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    /// Whether the run reproduced the expected document exactly
    pub valid: bool,

    /// What the interpreter actually produced
    pub outcome: Outcome,
}

/// Run `commands` over `document` and report how the result compares to `expected`
pub fn validate(
    document: &str,
    expected: &str,
    commands: &[Command],
) -> Result<Validation, InterpreterError> {
    let outcome = transform(document, commands)?;
    let valid = outcome.document() == Some(expected);

    Ok(Validation { valid, outcome })
}

/// True when `commands` turn `document` into exactly `expected`
///
/// An undefined result is never valid. Unknown commands are returned as
/// errors rather than `false`.
pub fn is_valid(
    document: &str,
    expected: &str,
    commands: &[Command],
) -> Result<bool, InterpreterError> {
    validate(document, expected, commands).map(|v| v.valid)
}
