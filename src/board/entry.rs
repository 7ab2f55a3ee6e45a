//! Board entries - one word slot with a hidden category.
//!
//! An `Entry` carries the externally supplied candidate clue words that
//! hint at it. After the suggestion graph is built, only the clue words
//! that survived filtering remain attached.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Team};

/// Stable index of an entry on its board (row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub u16);

impl EntryId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entry({})", self.0)
    }
}

/// Hidden affiliation of an entry. Fixed for the life of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Belongs to a team; revealing it scores for that team.
    Team(Team),
    /// Ends the guessing turn, scores nothing.
    Neutral,
    /// Ends the match; the revealing team loses.
    Hazard,
}

impl Category {
    /// The owning team, if any.
    #[must_use]
    pub const fn team(self) -> Option<Team> {
        match self {
            Category::Team(team) => Some(team),
            Category::Neutral | Category::Hazard => None,
        }
    }

    /// Layout character: `R`, `B`, `N` or `H`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Category::Team(Team::Red) => 'R',
            Category::Team(Team::Blue) => 'B',
            Category::Neutral => 'N',
            Category::Hazard => 'H',
        }
    }

    /// Inverse of [`Category::symbol`], case-insensitive.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'R' => Some(Category::Team(Team::Red)),
            'B' => Some(Category::Team(Team::Blue)),
            'N' => Some(Category::Neutral),
            'H' => Some(Category::Hazard),
            _ => None,
        }
    }
}

/// One cell of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    id: EntryId,
    word: String,
    category: Category,
    revealed: bool,
    candidate_clues: BTreeSet<String>,
}

impl Entry {
    /// Create a hidden entry. `word` is expected to be normalized already.
    pub fn new(id: EntryId, word: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            word: word.into(),
            category,
            revealed: false,
            candidate_clues: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Clue words currently attached to this entry.
    pub fn candidate_clues(&self) -> impl Iterator<Item = &str> {
        self.candidate_clues.iter().map(String::as_str)
    }

    #[must_use]
    pub fn has_clue(&self, clue: &str) -> bool {
        self.candidate_clues.contains(clue)
    }

    pub(crate) fn add_clue(&mut self, clue: String) -> bool {
        self.candidate_clues.insert(clue)
    }

    pub(crate) fn remove_clue(&mut self, clue: &str) -> bool {
        self.candidate_clues.remove(clue)
    }

    /// Flip the entry face up. Fails if it already is.
    pub(crate) fn reveal(&mut self) -> Result<Category, GameError> {
        if self.revealed {
            return Err(GameError::AlreadyRevealed(self.id));
        }
        self.revealed = true;
        Ok(self.category)
    }
}
