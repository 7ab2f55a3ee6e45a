//! Clues and their suggestion bookkeeping.
//!
//! A `Clue` is a word plus a declared count. Clues owned by the suggestion
//! graph also track which entries they currently suggest, with one counter
//! per category. Counters only change through [`Clue::add_entry`] and
//! [`Clue::remove_entry`], so they always agree with the membership set.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Category, EntryId};
use crate::core::{Team, TeamMap};

use super::normalize::normalize_word;

/// Index of a clue in its graph's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClueId(pub u32);

impl ClueId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ClueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Clue({})", self.0)
    }
}

/// A clue word, its declared count, and the entries it suggests.
///
/// ```
/// use rust_codenames::board::{Category, EntryId};
/// use rust_codenames::clues::Clue;
/// use rust_codenames::core::Team;
///
/// let mut clue = Clue::new("Ocean");
/// clue.add_entry(EntryId::new(0), Category::Team(Team::Red));
/// clue.add_entry(EntryId::new(4), Category::Neutral);
///
/// assert_eq!(clue.word(), "ocean");
/// assert_eq!(clue.suggested_for(Team::Red), 1);
/// assert_eq!(clue.complement_for(Team::Red), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    word: String,
    declared_count: u32,
    is_board_word: bool,
    team_suggested: TeamMap<u32>,
    neutral_suggested: u32,
    hazard_suggested: u32,
    entries: SmallVec<[EntryId; 4]>,
}

impl Clue {
    /// Create a clue with a declared count of zero.
    pub fn new(word: impl AsRef<str>) -> Self {
        Self {
            word: normalize_word(word.as_ref()),
            declared_count: 0,
            is_board_word: false,
            team_suggested: TeamMap::default(),
            neutral_suggested: 0,
            hazard_suggested: 0,
            entries: SmallVec::new(),
        }
    }

    /// Set the declared count (builder pattern).
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.declared_count = count;
        self
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// How many entries the giver claims the clue points at.
    #[must_use]
    pub fn declared_count(&self) -> u32 {
        self.declared_count
    }

    /// True if the clue word is also a board word (unusable by a giver).
    #[must_use]
    pub fn is_board_word(&self) -> bool {
        self.is_board_word
    }

    pub(crate) fn set_board_word(&mut self, is_board_word: bool) {
        self.is_board_word = is_board_word;
    }

    /// Entries currently suggested.
    #[must_use]
    pub fn entries(&self) -> &[EntryId] {
        &self.entries
    }

    #[must_use]
    pub fn suggests(&self, entry: EntryId) -> bool {
        self.entries.contains(&entry)
    }

    /// Associate an entry. Returns false if it was already associated.
    pub fn add_entry(&mut self, entry: EntryId, category: Category) -> bool {
        if self.suggests(entry) {
            return false;
        }
        self.entries.push(entry);
        *self.counter_mut(category) += 1;
        true
    }

    /// Drop an association. Returns false if the entry was not associated.
    pub fn remove_entry(&mut self, entry: EntryId, category: Category) -> bool {
        let Some(pos) = self.entries.iter().position(|&e| e == entry) else {
            return false;
        };
        self.entries.remove(pos);
        let counter = self.counter_mut(category);
        assert!(*counter > 0, "suggestion counter for {category:?} would go negative");
        *counter -= 1;
        true
    }

    fn counter_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Team(team) => &mut self.team_suggested[team],
            Category::Neutral => &mut self.neutral_suggested,
            Category::Hazard => &mut self.hazard_suggested,
        }
    }

    /// Suggested entries of the given category.
    #[must_use]
    pub fn count_for(&self, category: Category) -> u32 {
        match category {
            Category::Team(team) => self.team_suggested[team],
            Category::Neutral => self.neutral_suggested,
            Category::Hazard => self.hazard_suggested,
        }
    }

    /// Suggested entries belonging to `team`.
    #[must_use]
    pub fn suggested_for(&self, team: Team) -> u32 {
        self.team_suggested[team]
    }

    /// Suggested entries that are not `team`'s: opponent, neutral and hazard.
    #[must_use]
    pub fn complement_for(&self, team: Team) -> u32 {
        self.team_suggested[team.opponent()] + self.neutral_suggested + self.hazard_suggested
    }

    #[must_use]
    pub fn hazard_suggested(&self) -> bool {
        self.hazard_suggested > 0
    }

    /// Whether the clue still points at anything.
    #[must_use]
    pub fn suggests_some_entry(&self) -> bool {
        !self.entries.is_empty()
    }

    /// No team entries at all: only neutral and/or hazard ones.
    #[must_use]
    pub fn only_suggests_neutral_or_hazard(&self) -> bool {
        Team::ALL.iter().all(|&team| self.team_suggested[team] == 0)
    }

    /// At least one `team` entry and none of the opponent's.
    #[must_use]
    pub fn is_safe_for(&self, team: Team) -> bool {
        self.team_suggested[team] > 0 && self.team_suggested[team.opponent()] == 0
    }
}

impl std::fmt::Display for Clue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.word, self.declared_count)
    }
}
