//! The board: a fixed grid of entries.
//!
//! Entries are stored row-major and addressed by `EntryId`, by
//! `(row, col)`, or by word. The shape never changes after construction;
//! the only mutations are revealing an entry and trimming its clue words.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::clues::normalize_word;
use crate::core::{GameConfig, GameError, Team};

use super::entry::{Category, Entry, EntryId};
use super::layout::BoardLayout;

/// Fixed-size grid of entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    entries: Vec<Entry>,
    by_word: FxHashMap<String, EntryId>,
}

impl Board {
    /// Lay out `words` according to `layout`.
    ///
    /// Words are normalized; they must be non-empty, distinct, and exactly
    /// fill the configured grid. The layout is validated against `config`.
    pub fn new(config: &GameConfig, words: &[String], layout: &BoardLayout) -> Result<Self, GameError> {
        layout.validate(config)?;

        let size = config.board_size();
        if words.len() != size {
            return Err(GameError::WordCountMismatch {
                expected: size,
                actual: words.len(),
            });
        }

        let mut entries = Vec::with_capacity(size);
        let mut by_word = FxHashMap::default();

        for (index, (raw, &category)) in words.iter().zip(&layout.categories).enumerate() {
            let word = normalize_word(raw);
            if word.is_empty() {
                return Err(GameError::InvalidLayout(format!("empty word at cell {index}")));
            }

            let id = u16::try_from(index)
                .map(EntryId::new)
                .map_err(|_| GameError::InvalidLayout(format!("cell {index} is past the last entry id")))?;
            if by_word.insert(word.clone(), id).is_some() {
                return Err(GameError::DuplicateWord(word));
            }
            entries.push(Entry::new(id, word, category));
        }

        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            entries,
            by_word,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.index())
    }

    /// Look up an entry by id, failing on an unknown id.
    pub fn entry(&self, id: EntryId) -> Result<&Entry, GameError> {
        self.get(id).ok_or(GameError::UnknownEntry(id))
    }

    pub(crate) fn entry_mut(&mut self, id: EntryId) -> Result<&mut Entry, GameError> {
        self.entries.get_mut(id.index()).ok_or(GameError::UnknownEntry(id))
    }

    /// Id of the entry at a grid coordinate.
    pub fn id_at(&self, row: usize, col: usize) -> Result<EntryId, GameError> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(EntryId::new((row * self.cols + col) as u16))
    }

    /// Entry at a grid coordinate.
    pub fn at(&self, row: usize, col: usize) -> Result<&Entry, GameError> {
        self.entry(self.id_at(row, col)?)
    }

    /// Grid coordinate of an entry.
    #[must_use]
    pub fn position(&self, id: EntryId) -> (usize, usize) {
        (id.index() / self.cols, id.index() % self.cols)
    }

    /// Find an entry by word (normalized before lookup).
    #[must_use]
    pub fn find(&self, word: &str) -> Option<EntryId> {
        self.by_word.get(&normalize_word(word)).copied()
    }

    /// Whether `word` (already normalized) is the word of any entry.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    /// Whether `word` (already normalized) is the word of an unrevealed entry.
    #[must_use]
    pub fn is_live_word(&self, word: &str) -> bool {
        self.by_word
            .get(word)
            .is_some_and(|&id| !self.entries[id.index()].is_revealed())
    }

    /// All entries, row-major.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.entries.iter_mut()
    }

    /// Entries still face down.
    pub fn unrevealed(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| !e.is_revealed())
    }

    /// Unrevealed entries of the given category.
    #[must_use]
    pub fn remaining(&self, category: Category) -> usize {
        self.unrevealed().filter(|e| e.category() == category).count()
    }

    /// Unrevealed entries belonging to `team`.
    #[must_use]
    pub fn remaining_for(&self, team: Team) -> usize {
        self.remaining(Category::Team(team))
    }

    /// Id of the (first) hazard entry.
    #[must_use]
    pub fn hazard(&self) -> Option<EntryId> {
        self.entries
            .iter()
            .find(|e| e.category() == Category::Hazard)
            .map(Entry::id)
    }

    /// Flip an entry face up, returning its category.
    pub(crate) fn reveal(&mut self, id: EntryId) -> Result<Category, GameError> {
        self.entry_mut(id)?.reveal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Word{i}")).collect()
    }

    fn small() -> (GameConfig, BoardLayout) {
        let config = GameConfig::new().with_grid(3, 3).with_base_target(3);
        let layout = BoardLayout::parse("red", "RRRR BBB H N").unwrap();
        (config, layout)
    }

    #[test]
    fn test_board_construction() {
        let (config, layout) = small();
        let board = Board::new(&config, &words(9), &layout).unwrap();

        assert_eq!(board.len(), 9);
        assert_eq!(board.rows(), 3);
        assert_eq!(board.at(0, 0).unwrap().word(), "word0");
        assert_eq!(board.at(2, 2).unwrap().category(), Category::Neutral);
        assert_eq!(board.hazard(), Some(EntryId::new(7)));
        assert_eq!(board.remaining_for(Team::Red), 4);
    }

    #[test]
    fn test_coordinates() {
        let (config, layout) = small();
        let board = Board::new(&config, &words(9), &layout).unwrap();

        let id = board.id_at(1, 2).unwrap();
        assert_eq!(id, EntryId::new(5));
        assert_eq!(board.position(id), (1, 2));
        assert!(matches!(board.id_at(3, 0), Err(GameError::OutOfBounds { row: 3, col: 0 })));
    }

    #[test]
    fn test_find_normalizes() {
        let (config, layout) = small();
        let board = Board::new(&config, &words(9), &layout).unwrap();
        assert_eq!(board.find("  WORD4 "), Some(EntryId::new(4)));
        assert_eq!(board.find("word99"), None);
    }

    #[test]
    fn test_word_count_mismatch() {
        let (config, layout) = small();
        let err = Board::new(&config, &words(8), &layout).unwrap_err();
        assert!(matches!(err, GameError::WordCountMismatch { expected: 9, actual: 8 }));
    }

    #[test]
    fn test_duplicate_words_rejected() {
        let (config, layout) = small();
        let mut list = words(9);
        list[8] = "WORD0".to_string();
        let err = Board::new(&config, &list, &layout).unwrap_err();
        assert!(matches!(err, GameError::DuplicateWord(w) if w == "word0"));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let config = GameConfig::new().with_grid(256, 257);
        let layout = BoardLayout::new(Team::Red, Vec::new());
        let err = Board::new(&config, &[], &layout).unwrap_err();
        assert!(matches!(err, GameError::InvalidLayout(_)));
    }

    #[test]
    fn test_reveal_tracks_live_words() {
        let (config, layout) = small();
        let mut board = Board::new(&config, &words(9), &layout).unwrap();

        assert!(board.is_live_word("word1"));
        assert_eq!(board.reveal(EntryId::new(1)).unwrap(), Category::Team(Team::Red));
        assert!(!board.is_live_word("word1"));
        assert!(board.contains_word("word1"));
        assert_eq!(board.remaining_for(Team::Red), 3);

        assert!(matches!(board.reveal(EntryId::new(1)), Err(GameError::AlreadyRevealed(_))));
        assert!(matches!(board.reveal(EntryId::new(40)), Err(GameError::UnknownEntry(_))));
    }
}
