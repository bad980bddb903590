//! Error types for the transform crate

use thiserror::Error;

/// Failure raised while interpreting a command sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpreterError {
    #[error("Unknown OT command at index {index}")]
    UnknownCommand { index: usize },
}

/// Failure raised while decoding the JSON transport form
#[derive(Error, Debug)]
pub enum WireError {
    #[error("Malformed command list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Either side of the document + JSON entry points
#[derive(Error, Debug)]
pub enum OtError {
    #[error("Wire error: {0}")]
    Wire(#[from] WireError),

    #[error("Interpreter error: {0}")]
    Interpreter(#[from] InterpreterError),
}

impl OtError {
    /// True when the run failed on an unrecognized `op` tag
    pub fn is_unknown_command(&self) -> bool {
        matches!(
            self,
            OtError::Interpreter(InterpreterError::UnknownCommand { .. })
        )
    }
}
