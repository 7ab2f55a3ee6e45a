//! Error type shared by the whole engine.

use thiserror::Error;

use crate::board::EntryId;

use super::team::{Seat, Team};

/// Why a submitted clue was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClueRejection {
    /// The clue word is an unrevealed board word.
    BoardWord,
    /// The declared count is zero.
    ZeroCount,
    /// The clue word is empty after normalization.
    EmptyWord,
}

impl std::fmt::Display for ClueRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClueRejection::BoardWord => write!(f, "word is on the board"),
            ClueRejection::ZeroCount => write!(f, "count must be at least 1"),
            ClueRejection::EmptyWord => write!(f, "word is empty"),
        }
    }
}

/// Errors returned by board construction, the turn state machine and strategies.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("a match needs exactly 4 players, got {0}")]
    WrongPlayerCount(usize),

    #[error("seat {0} is assigned more than once")]
    DuplicateSeat(Seat),

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error("board needs {expected} words, got {actual}")]
    WordCountMismatch { expected: usize, actual: usize },

    #[error("word '{0}' appears on the board more than once")]
    DuplicateWord(String),

    #[error("illegal clue '{word}': {reason}")]
    IllegalClue { word: String, reason: ClueRejection },

    #[error("no entry {0}")]
    UnknownEntry(EntryId),

    #[error("no entry at row {row}, column {col}")]
    OutOfBounds { row: usize, col: usize },

    #[error("entry {0} is already revealed")]
    AlreadyRevealed(EntryId),

    #[error("{seat} cannot {action} now")]
    WrongPhase { seat: Seat, action: &'static str },

    #[error("no guesses left this turn")]
    NoGuessesLeft,

    #[error("the match is over")]
    GameOver,

    #[error("{0} finished without giving a clue")]
    ClueNotGiven(Seat),

    #[error("no legal clue left for {0}")]
    NoLegalClue(Team),

    #[error("{0} is already playing")]
    StrategyBusy(Seat),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::IllegalClue {
            word: "apple".to_string(),
            reason: ClueRejection::BoardWord,
        };
        assert_eq!(err.to_string(), "illegal clue 'apple': word is on the board");

        let err = GameError::WrongPhase {
            seat: Seat::operative(Team::Red),
            action: "give a clue",
        };
        assert_eq!(err.to_string(), "Red Operative cannot give a clue now");
    }
}
