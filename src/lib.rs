//! # rust-codenames
//!
//! Rules and intelligence engine for a two-team word-association
//! deduction game. Each team has a spymaster who gives one-word clues and
//! an operative who reveals board entries.
//!
//! ## Design Principles
//!
//! 1. **Index-Based Graph**: Clues and entries are addressed by `ClueId` /
//!    `EntryId`. The suggestion graph keeps adjacency on both sides; there
//!    are no mutual references.
//!
//! 2. **Single Writer**: Strategies mutate a match only through `Game`'s
//!    operations, one seat at a time.
//!
//! 3. **Reproducible**: Every source of randomness is a `GameRng` derived
//!    from an explicit seed.
//!
//! ## Modules
//!
//! - `core`: Teams, seats, RNG, configuration, errors
//! - `board`: Entries, the grid, layouts, board-data providers
//! - `clues`: Clues and the suggestion graph
//! - `events`: Publish/subscribe notifications
//! - `rules`: Turn and scoring state machine, match orchestration
//! - `strategy`: Pluggable seat strategies
//!
//! ## Example
//!
//! ```
//! use rust_codenames::board::WordPool;
//! use rust_codenames::rules::{GameBuilder, MatchRunner};
//!
//! let mut pool = WordPool::new(3);
//! for i in 0..40 {
//!     pool.insert(format!("word{i}"), [format!("hint{i}"), format!("group{}", i % 6)]);
//! }
//!
//! let mut game = GameBuilder::new(3).build_from_source(&mut pool).unwrap();
//! let report = MatchRunner::new().run(&mut game).unwrap();
//! assert!(report.outcome.is_decided());
//! ```

pub mod board;
pub mod clues;
pub mod core;
pub mod events;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{ClueRejection, GameConfig, GameError, GameRng, Role, Seat, Team, TeamMap};

pub use crate::board::{Board, BoardData, BoardLayout, BoardSource, Category, Entry, EntryId, WordPool};

pub use crate::clues::{normalize_word, Clue, ClueId, SuggestionGraph};

pub use crate::events::{GameEvents, Observable, SubscriptionId};

pub use crate::rules::{Game, GameBuilder, MatchReport, MatchRunner, MatchState, Outcome, Phase, Player, TurnState};

pub use crate::strategy::{PlayStatus, Strategy, StrategyKind};
