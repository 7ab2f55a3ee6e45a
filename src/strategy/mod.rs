//! Pluggable seat strategies.
//!
//! A strategy is bound to one seat and drives it through [`Game`]'s public
//! operations only. Spymasters call [`Game::set_current_clue`] once per
//! sub-turn; operatives call [`Game::reveal_entry`] zero or more times.
//! Either returns [`PlayStatus::Finished`] to hand the turn on.
//!
//! Each strategy owns its `GameRng`, so a match is reproducible from its
//! seed.

mod operative;
mod spymaster;

pub use operative::{RandomOperative, SuggestionOperative};
pub use spymaster::{RandomSpymaster, SafeSpymaster};

use crate::core::{GameError, GameRng, Role, Seat};
use crate::rules::Game;

/// Result of one call to [`Strategy::play`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayStatus {
    /// The seat's sub-turn is over.
    Finished,
    /// The seat acted but keeps the turn; it will be asked to play again.
    Yielded,
}

/// Decision policy for one seat.
pub trait Strategy: std::fmt::Debug {
    /// Act for `seat` in the current sub-turn.
    fn play(&mut self, game: &mut Game, seat: Seat) -> Result<PlayStatus, GameError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Built-in strategy families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Random clues and random reveals.
    Random,
    /// Safe clues and reveals guided by the suggestion graph.
    #[default]
    Smart,
}

impl StrategyKind {
    /// Instantiate the strategy of this family for `role`.
    #[must_use]
    pub fn build(self, role: Role, rng: GameRng) -> Box<dyn Strategy> {
        match (self, role) {
            (StrategyKind::Random, Role::Spymaster) => Box::new(RandomSpymaster::new(rng)),
            (StrategyKind::Random, Role::Operative) => Box::new(RandomOperative::new(rng)),
            (StrategyKind::Smart, Role::Spymaster) => Box::new(SafeSpymaster::new(rng)),
            (StrategyKind::Smart, Role::Operative) => Box::new(SuggestionOperative::new(rng)),
        }
    }
}
