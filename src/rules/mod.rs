//! Turn order, scoring and match orchestration.
//!
//! - [`MatchState`]: the serializable state machine (clue, reveal, win
//!   check, seat advance)
//! - [`Game`]: a `MatchState` plus seated strategies and notifications
//! - [`GameBuilder`]: seeded setup with built-in strategies
//! - [`MatchRunner`]: plays a game to the end

mod builder;
mod driver;
mod game;
mod outcome;
mod state;
mod turn;

pub use builder::GameBuilder;
pub use driver::{MatchReport, MatchRunner};
pub use game::{Game, Player};
pub use outcome::Outcome;
pub use state::MatchState;
pub use turn::{Phase, TurnState};
