//! Turn phases.

use serde::{Deserialize, Serialize};

use crate::core::Seat;

use super::outcome::Outcome;

/// Progress within one team's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// The team's spymaster has not given a clue yet.
    #[default]
    AwaitingClue,
    /// A clue is active; the operative may reveal up to `guesses_left` entries.
    AwaitingGuesses { guesses_left: u32 },
}

impl TurnState {
    #[must_use]
    pub const fn guesses_left(self) -> u32 {
        match self {
            TurnState::AwaitingClue => 0,
            TurnState::AwaitingGuesses { guesses_left } => guesses_left,
        }
    }
}

/// What the match is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingClue(Seat),
    AwaitingGuesses { seat: Seat, guesses_left: u32 },
    Terminal(Outcome),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingClue(seat) => write!(f, "{seat}: give a clue"),
            Phase::AwaitingGuesses { seat, guesses_left } => {
                write!(f, "{seat}: {guesses_left} guesses left")
            }
            Phase::Terminal(outcome) => write!(f, "{outcome}"),
        }
    }
}
