//! Match outcome.
//!
//! Winner and loser are one value: with two teams, naming either side
//! fixes the other, so they can never disagree.

use serde::{Deserialize, Serialize};

use crate::core::Team;

/// Result of a match so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Still being played.
    #[default]
    Undecided,
    /// The team reached its target.
    Won(Team),
    /// The team revealed the hazard.
    Lost(Team),
}

impl Outcome {
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Team> {
        match self {
            Outcome::Undecided => None,
            Outcome::Won(team) => Some(team),
            Outcome::Lost(team) => Some(team.opponent()),
        }
    }

    #[must_use]
    pub const fn loser(self) -> Option<Team> {
        match self {
            Outcome::Undecided => None,
            Outcome::Won(team) => Some(team.opponent()),
            Outcome::Lost(team) => Some(team),
        }
    }

    /// Check if a team won.
    #[must_use]
    pub fn is_winner(self, team: Team) -> bool {
        self.winner() == Some(team)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "undecided"),
            Outcome::Won(team) => write!(f, "{team} wins"),
            Outcome::Lost(team) => write!(f, "{team} hit the hazard, {} wins", team.opponent()),
        }
    }
}
