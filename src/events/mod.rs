//! Match notifications for presentation layers.
//!
//! A fixed set of named events, each with a typed payload:
//!
//! - `clue_given`: the [`Clue`] a spymaster just submitted
//! - `phase_changed`: a label such as `"Red Spymaster"`
//! - `round_changed`: the new round number
//!
//! Events are fire-and-forget broadcasts; see [`Observable`].

mod observable;

pub use observable::{Observable, SubscriptionId};

use crate::clues::Clue;

/// The notifications a match emits.
#[derive(Debug, Default)]
pub struct GameEvents {
    pub clue_given: Observable<Clue>,
    pub phase_changed: Observable<String>,
    pub round_changed: Observable<u32>,
}

impl GameEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
