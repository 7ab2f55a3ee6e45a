//! Core engine types: teams and seats, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;
pub mod team;

pub use config::GameConfig;
pub use error::{ClueRejection, GameError};
pub use rng::GameRng;
pub use team::{Role, Seat, Team, TeamMap};
