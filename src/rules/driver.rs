//! Running a match to completion.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Team, TeamMap};

use super::game::Game;
use super::outcome::Outcome;

/// Summary of a finished (or abandoned) match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub outcome: Outcome,
    /// Round the match ended in.
    pub rounds: u32,
    /// Strategy invocations made by the runner.
    pub sub_turns: u32,
    /// Entries of each team revealed.
    pub revealed: TeamMap<u32>,
}

impl MatchReport {
    /// True if the runner stopped before anyone won.
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        !self.outcome.is_decided()
    }
}

/// Drives `enter_next_game_turn` until the match is decided.
#[derive(Clone, Debug)]
pub struct MatchRunner {
    /// Give up after this many strategy invocations.
    pub max_turns: u32,
}

impl Default for MatchRunner {
    fn default() -> Self {
        Self { max_turns: 1000 }
    }
}

impl MatchRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Play `game` until a winner is known or `max_turns` is reached.
    pub fn run(&self, game: &mut Game) -> Result<MatchReport, GameError> {
        let mut sub_turns = 0;
        while !game.check_winner() {
            if sub_turns >= self.max_turns {
                log::warn!("match abandoned after {sub_turns} turns");
                break;
            }
            game.enter_next_game_turn()?;
            sub_turns += 1;
        }

        let state = game.state();
        let report = MatchReport {
            outcome: state.outcome(),
            rounds: state.round(),
            sub_turns,
            revealed: TeamMap::new(|team: Team| state.revealed(team)),
        };
        log::info!(
            "{} after {} rounds ({} sub-turns)",
            report.outcome,
            report.rounds,
            report.sub_turns
        );
        Ok(report)
    }
}
