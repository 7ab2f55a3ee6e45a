//! Clues and the suggestion graph.
//!
//! The graph is the structure every automated player queries: which clue
//! words point at which entries, and how many of each team's entries.

mod clue;
mod graph;
mod normalize;

pub use clue::{Clue, ClueId};
pub use graph::SuggestionGraph;
pub use normalize::normalize_word;
