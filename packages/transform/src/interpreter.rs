//! # Command Interpreter
//!
//! Walks a cursor through a document while applying OT commands.
//!
//! ## States
//!
//! ```text
//!            skip past end
//! Active ───────────────────→ Undefined
//!   ↺ skip / insert / delete      ↺ skip / insert / delete (no-op)
//! ```
//!
//! A run starts in `Active(document, 0)`. `Undefined` is absorbing: once a
//! skip lands on or past the end of the document, every later skip, insert
//! or delete is ignored and the run can no longer produce a document. An
//! unrecognized command fails the run from either state.
//!
//! Positions and counts are measured in `char`s.

use crate::{Command, InterpreterError};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Final state of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Outcome {
    /// The run produced a document, with the cursor left at `position`
    Defined { document: String, position: usize },

    /// A skip at `command_index` moved the cursor to or past the end
    Undefined { command_index: usize },
}

impl Outcome {
    /// Resulting document, if the run produced one
    pub fn document(&self) -> Option<&str> {
        match self {
            Outcome::Defined { document, .. } => Some(document),
            Outcome::Undefined { .. } => None,
        }
    }

    pub fn into_document(self) -> Option<String> {
        match self {
            Outcome::Defined { document, .. } => Some(document),
            Outcome::Undefined { .. } => None,
        }
    }

    /// Ending cursor position, if the run produced a document
    pub fn position(&self) -> Option<usize> {
        match self {
            Outcome::Defined { position, .. } => Some(*position),
            Outcome::Undefined { .. } => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Outcome::Undefined { .. })
    }
}

/// Interpreter state, updated in place by each command
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Active { buffer: Vec<char>, position: usize },
    Undefined { command_index: usize },
}

impl State {
    /// Buffer and cursor, or `None` once the document is undefined
    fn active(&mut self) -> Option<(&mut Vec<char>, &mut usize)> {
        match self {
            State::Active { buffer, position } => Some((buffer, position)),
            State::Undefined { .. } => None,
        }
    }

    /// Apply one command in place
    ///
    /// An unknown command fails from either state and leaves the state
    /// untouched. Every other command is a no-op once undefined.
    fn step(&mut self, command: &Command, index: usize) -> Result<(), InterpreterError> {
        match command {
            Command::Unknown => {
                warn!(index, "Unknown OT command");
                return Err(InterpreterError::UnknownCommand { index });
            }

            Command::Skip { count } => {
                if let Some((buffer, position)) = self.active() {
                    let next = position.saturating_add(*count);
                    if next >= buffer.len() {
                        debug!(
                            index,
                            position = next,
                            len = buffer.len(),
                            "Skip moved past end of document"
                        );
                        *self = State::Undefined { command_index: index };
                    } else {
                        *position = next;
                    }
                }
            }

            Command::Delete { count } => {
                if let Some((buffer, position)) = self.active() {
                    let end = position.saturating_add(*count).min(buffer.len());
                    buffer.drain(*position..end);
                }
            }

            Command::Insert { chars } => {
                if let Some((buffer, position)) = self.active() {
                    let before = buffer.len();
                    buffer.splice(*position..*position, chars.chars());
                    *position += buffer.len() - before;
                }
            }
        }

        Ok(())
    }
}

/// Stateful interpreter for one document
///
/// Use this to step through a run one command at a time; [`transform`]
/// drives it over a whole command list.
#[derive(Debug, Clone)]
pub struct Interpreter {
    state: State,
    applied: usize,
}

impl Interpreter {
    /// Start a run at position 0 of `document`
    pub fn new(document: &str) -> Self {
        Self {
            state: State::Active {
                buffer: document.chars().collect(),
                position: 0,
            },
            applied: 0,
        }
    }

    /// Apply the next command
    ///
    /// Fails with [`InterpreterError::UnknownCommand`] for an unrecognized
    /// command, leaving the state untouched.
    pub fn apply(&mut self, command: &Command) -> Result<(), InterpreterError> {
        let index = self.applied;
        let was_undefined = self.is_undefined();

        self.state.step(command, index)?;
        self.applied += 1;

        match &self.state {
            State::Active { buffer, position } => {
                debug!(index, op = command.name(), position, len = buffer.len(), "Applied command");
            }
            State::Undefined { .. } if was_undefined => {
                debug!(index, op = command.name(), "Document undefined, ignoring command");
            }
            State::Undefined { .. } => {}
        }

        Ok(())
    }

    /// Cursor position, unless the document is undefined
    pub fn position(&self) -> Option<usize> {
        match &self.state {
            State::Active { position, .. } => Some(*position),
            State::Undefined { .. } => None,
        }
    }

    /// Current document text, unless the document is undefined
    pub fn document(&self) -> Option<String> {
        match &self.state {
            State::Active { buffer, .. } => Some(buffer.iter().collect()),
            State::Undefined { .. } => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self.state, State::Undefined { .. })
    }

    /// Number of commands applied so far
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// End the run
    pub fn finish(self) -> Outcome {
        match self.state {
            State::Active { buffer, position } => Outcome::Defined {
                document: buffer.into_iter().collect(),
                position,
            },
            State::Undefined { command_index } => Outcome::Undefined { command_index },
        }
    }
}

/// Apply `commands` to `document` in order, starting at position 0
///
/// Stops at the first unrecognized command.
#[instrument(
    skip(document, commands),
    fields(len = document.chars().count(), commands = commands.len())
)]
pub fn transform(document: &str, commands: &[Command]) -> Result<Outcome, InterpreterError> {
    let mut interpreter = Interpreter::new(document);

    for command in commands {
        interpreter.apply(command)?;
    }

    let outcome = interpreter.finish();
    debug!(undefined = outcome.is_undefined(), "Transform complete");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(outcome: Outcome) -> String {
        outcome.into_document().expect("document should be defined")
    }

    #[test]
    fn test_skip_then_insert() {
        let outcome = transform("Nice!", &[Command::skip(4), Command::insert(" day")]).unwrap();
        assert_eq!(outcome.position(), Some(8));
        assert_eq!(doc(outcome), "Nice day!");
    }

    #[test]
    fn test_delete_keeps_position() {
        let outcome = transform("What is up?", &[Command::skip(7), Command::delete(3)]).unwrap();
        assert_eq!(outcome.position(), Some(7));
        assert_eq!(doc(outcome), "What is?");
    }

    #[test]
    fn test_insert_into_empty_document() {
        let outcome = transform("", &[Command::insert("Hello, human!")]).unwrap();
        assert_eq!(outcome.position(), Some(13));
        assert_eq!(doc(outcome), "Hello, human!");
    }

    #[test]
    fn test_empty_insert_is_noop() {
        let outcome = transform("abc", &[Command::skip(1), Command::insert("")]).unwrap();
        assert_eq!(outcome.position(), Some(1));
        assert_eq!(doc(outcome), "abc");
    }

    #[test]
    fn test_skip_to_exact_end_is_undefined() {
        let outcome = transform("abc", &[Command::skip(3)]).unwrap();
        assert_eq!(outcome, Outcome::Undefined { command_index: 0 });
    }

    #[test]
    fn test_skip_on_empty_document_is_undefined() {
        let outcome = transform("", &[Command::skip(0)]).unwrap();
        assert!(outcome.is_undefined());
    }

    #[test]
    fn test_undefined_absorbs_later_commands() {
        let outcome = transform(
            "abc",
            &[
                Command::skip(5),
                Command::insert("xyz"),
                Command::delete(10),
                Command::skip(1),
            ],
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Undefined { command_index: 0 });
        assert_eq!(outcome.document(), None);
    }

    #[test]
    fn test_delete_past_end_is_clamped() {
        let outcome = transform("abcdef", &[Command::skip(4), Command::delete(100)]).unwrap();
        assert_eq!(outcome.position(), Some(4));
        assert_eq!(doc(outcome), "abcd");
    }

    #[test]
    fn test_huge_skip_does_not_overflow() {
        let outcome = transform("abc", &[Command::skip(1), Command::skip(usize::MAX)]).unwrap();
        assert_eq!(outcome, Outcome::Undefined { command_index: 1 });
    }

    #[test]
    fn test_unknown_command_fails_with_index() {
        let err = transform("abc", &[Command::skip(1), Command::Unknown]).unwrap_err();
        assert_eq!(err, InterpreterError::UnknownCommand { index: 1 });
    }

    #[test]
    fn test_unknown_command_fails_even_when_undefined() {
        let err = transform("abc", &[Command::skip(9), Command::Unknown]).unwrap_err();
        assert_eq!(err, InterpreterError::UnknownCommand { index: 1 });
    }

    #[test]
    fn test_positions_count_chars_not_bytes() {
        let commands = [Command::skip(6), Command::delete(5), Command::insert("süß")];
        let outcome = transform("héllo wörld", &commands).unwrap();
        assert_eq!(outcome.position(), Some(9));
        assert_eq!(doc(outcome), "héllo süß");
    }

    #[test]
    fn test_unknown_step_leaves_state_untouched() {
        let mut active = State::Active {
            buffer: "abc".chars().collect(),
            position: 1,
        };
        let before = active.clone();
        assert_eq!(
            active.step(&Command::Unknown, 3),
            Err(InterpreterError::UnknownCommand { index: 3 })
        );
        assert_eq!(active, before);

        let mut undefined = State::Undefined { command_index: 0 };
        assert!(undefined.step(&Command::Unknown, 1).is_err());
        assert!(undefined.step(&Command::insert("x"), 2).is_ok());
        assert_eq!(undefined, State::Undefined { command_index: 0 });
    }

    #[test]
    fn test_stepping_interpreter() {
        let mut interpreter = Interpreter::new("Nice!");
        assert_eq!(interpreter.position(), Some(0));

        interpreter.apply(&Command::skip(4)).unwrap();
        assert_eq!(interpreter.position(), Some(4));

        interpreter.apply(&Command::insert(" day")).unwrap();
        assert_eq!(interpreter.document().as_deref(), Some("Nice day!"));
        assert_eq!(interpreter.applied(), 2);

        assert!(interpreter.apply(&Command::Unknown).is_err());
        assert_eq!(interpreter.applied(), 2);
        assert_eq!(interpreter.position(), Some(8));

        interpreter.apply(&Command::skip(1)).unwrap();
        assert!(interpreter.is_undefined());
        assert_eq!(interpreter.position(), None);
        assert_eq!(interpreter.finish(), Outcome::Undefined { command_index: 2 });
    }
}
