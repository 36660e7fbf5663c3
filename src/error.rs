//! Error types.
//!
//! Bad menu input is never an error - the selector re-prompts. What's
//! left is the input stream ending and I/O failing.

use thiserror::Error;

/// Errors while selecting an attribute.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("input ended before a valid attribute was chosen")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors while playing a round.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("attribute selection failed: {0}")]
    Selection(#[from] SelectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Did the round stop because the player closed the input?
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, GameError::Selection(SelectError::EndOfInput))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_input_detection() {
        let eof = GameError::from(SelectError::EndOfInput);
        assert!(eof.is_end_of_input());

        let io = GameError::from(std::io::Error::other("broken pipe"));
        assert!(!io.is_end_of_input());

        let nested_io = GameError::from(SelectError::Io(std::io::Error::other("closed")));
        assert!(!nested_io.is_end_of_input());
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::from(SelectError::EndOfInput);
        assert_eq!(
            err.to_string(),
            "attribute selection failed: input ended before a valid attribute was chosen"
        );
    }
}
