//! Board-data providers.
//!
//! The engine does not own a word list. A `BoardSource` supplies:
//! - a layout (starting team and category per cell),
//! - a set of distinct entry words sized to the grid,
//! - for each entry word, an ordered list of candidate clue words.
//!
//! `BoardData` is the assembled result, and can also be written by hand
//! in tests. `WordPool` is an in-memory provider backed by a seeded RNG;
//! it loads from and saves to `{"seed": .., "associations": {word: [clues]}}`.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::clues::normalize_word;
use crate::core::{GameConfig, GameError, GameRng, Team};

use super::layout::BoardLayout;

/// External provider of board words, layouts and candidate clues.
pub trait BoardSource {
    /// Choose a layout satisfying `config`.
    fn layout(&mut self, config: &GameConfig) -> BoardLayout;

    /// Draw `count` distinct entry words.
    fn codenames(&mut self, count: usize) -> Result<Vec<String>, GameError>;

    /// Candidate clue words for an entry word, in provider order.
    fn clues_for(&self, word: &str) -> Vec<String>;
}

/// Everything needed to set up one board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    pub layout: BoardLayout,
    pub words: Vec<String>,
    /// Candidate clues keyed by normalized entry word.
    pub clues: FxHashMap<String, Vec<String>>,
}

impl BoardData {
    /// Assemble board data from explicit parts.
    #[must_use]
    pub fn new(layout: BoardLayout, words: Vec<String>) -> Self {
        Self {
            layout,
            words,
            clues: FxHashMap::default(),
        }
    }

    /// Attach candidate clues for one entry word (builder pattern).
    #[must_use]
    pub fn with_clues<I, S>(mut self, word: &str, clues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clues
            .entry(normalize_word(word))
            .or_default()
            .extend(clues.into_iter().map(Into::into));
        self
    }

    /// Draw a full board from a provider.
    pub fn from_source(source: &mut impl BoardSource, config: &GameConfig) -> Result<Self, GameError> {
        let layout = source.layout(config);
        let words = source.codenames(config.board_size())?;
        let clues = words
            .iter()
            .map(|w| (normalize_word(w), source.clues_for(w)))
            .collect();

        Ok(Self { layout, words, clues })
    }

    /// Candidate clues for an entry word.
    #[must_use]
    pub fn clues_for(&self, word: &str) -> &[String] {
        self.clues
            .get(&normalize_word(word))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// In-memory word → candidate-clues association with seeded draws.
///
/// ```
/// use rust_codenames::board::{BoardData, WordPool};
/// use rust_codenames::core::GameConfig;
///
/// let mut pool = WordPool::new(7);
/// for i in 0..30 {
///     pool.insert(format!("word{i}"), [format!("hint{}", i % 4)]);
/// }
///
/// let data = BoardData::from_source(&mut pool, &GameConfig::default()).unwrap();
/// assert_eq!(data.words.len(), 25);
/// ```
///
/// Serialized pools keep only the seed and the associations. Loading one
/// restarts its draws from the seed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "PoolFile", into = "PoolFile")]
pub struct WordPool {
    seed: u64,
    words: Vec<String>,
    associations: FxHashMap<String, Vec<String>>,
    layout_rng: GameRng,
    word_rng: GameRng,
}

impl WordPool {
    /// Create an empty pool whose draws are determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let rng = GameRng::new(seed);
        Self {
            seed,
            words: Vec::new(),
            associations: FxHashMap::default(),
            layout_rng: rng.for_context("layout"),
            word_rng: rng.for_context("words"),
        }
    }

    /// Build a pool from word/clues pairs, inserted in word order.
    #[must_use]
    pub fn from_associations<I>(seed: u64, associations: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut pool = Self::new(seed);
        let mut entries: Vec<_> = associations.into_iter().collect();
        // map iteration order is unspecified; sort so draws only depend on the seed
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (word, clues) in entries {
            pool.insert(word, clues);
        }
        pool
    }

    /// Add a word and its candidate clues. Re-inserting a word extends its clues.
    pub fn insert<I, S>(&mut self, word: impl AsRef<str>, clues: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = normalize_word(word.as_ref());
        if key.is_empty() {
            return;
        }
        if !self.associations.contains_key(&key) {
            self.words.push(key.clone());
        }
        self.associations
            .entry(key)
            .or_default()
            .extend(clues.into_iter().map(Into::into));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// On-disk form of a [`WordPool`].
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PoolFile {
    #[serde(default)]
    seed: u64,
    associations: BTreeMap<String, Vec<String>>,
}

impl From<PoolFile> for WordPool {
    fn from(file: PoolFile) -> Self {
        Self::from_associations(file.seed, file.associations)
    }
}

impl From<WordPool> for PoolFile {
    fn from(pool: WordPool) -> Self {
        Self {
            seed: pool.seed,
            associations: pool.associations.into_iter().collect(),
        }
    }
}

impl BoardSource for WordPool {
    fn layout(&mut self, config: &GameConfig) -> BoardLayout {
        let starting_team = if self.layout_rng.gen_bool(0.5) {
            Team::Red
        } else {
            Team::Blue
        };
        BoardLayout::standard(starting_team, config, &mut self.layout_rng)
    }

    fn codenames(&mut self, count: usize) -> Result<Vec<String>, GameError> {
        if self.words.len() < count {
            return Err(GameError::WordCountMismatch {
                expected: count,
                actual: self.words.len(),
            });
        }

        let mut drawn = self.words.clone();
        self.word_rng.shuffle(&mut drawn);
        drawn.truncate(count);
        Ok(drawn)
    }

    fn clues_for(&self, word: &str) -> Vec<String> {
        self.associations
            .get(&normalize_word(word))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(seed: u64, size: usize) -> WordPool {
        let mut pool = WordPool::new(seed);
        for i in 0..size {
            pool.insert(format!("Word{i}"), [format!("clue{}", i % 5), "shared".to_string()]);
        }
        pool
    }

    #[test]
    fn test_from_source_is_seeded() {
        let config = GameConfig::default();
        let a = BoardData::from_source(&mut pool(3, 40), &config).unwrap();
        let b = BoardData::from_source(&mut pool(3, 40), &config).unwrap();
        assert_eq!(a, b);
        assert!(a.layout.validate(&config).is_ok());
    }

    #[test]
    fn test_draws_distinct_words() {
        let data = BoardData::from_source(&mut pool(11, 30), &GameConfig::default()).unwrap();
        let mut words = data.words.clone();
        words.sort();
        words.dedup();
        assert_eq!(words.len(), 25);
    }

    #[test]
    fn test_pool_too_small() {
        let err = BoardData::from_source(&mut pool(1, 10), &GameConfig::default()).unwrap_err();
        assert!(matches!(err, GameError::WordCountMismatch { expected: 25, actual: 10 }));
    }

    #[test]
    fn test_clues_follow_words() {
        let data = BoardData::from_source(&mut pool(5, 25), &GameConfig::default()).unwrap();
        for word in &data.words {
            let clues = data.clues_for(word);
            assert_eq!(clues.len(), 2);
            assert_eq!(clues[1], "shared");
        }
    }

    #[test]
    fn test_insert_extends() {
        let mut pool = WordPool::new(0);
        pool.insert("Apple", ["fruit"]);
        pool.insert("apple", ["tree"]);
        pool.insert("   ", ["ignored"]);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.clues_for("APPLE"), vec!["fruit", "tree"]);
    }

    #[test]
    fn test_pool_loads_from_json() {
        let json = r#"{"seed": 4, "associations": {"Moon": ["night"], "sun": ["day", "star"]}}"#;
        let mut loaded: WordPool = serde_json::from_str(json).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.clues_for("moon"), vec!["night"]);

        let mut expected = WordPool::new(4);
        expected.insert("moon", ["night"]);
        expected.insert("sun", ["day", "star"]);
        assert_eq!(loaded.codenames(2).unwrap(), expected.codenames(2).unwrap());
    }

    #[test]
    fn test_pool_json_round_trip() {
        let json = serde_json::to_string(&pool(8, 30)).unwrap();
        let mut restored: WordPool = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 30);
        assert_eq!(restored.clues_for("word12"), vec!["clue2", "shared"]);

        // layout draws restart from the seed
        let config = GameConfig::default();
        assert_eq!(restored.layout(&config), pool(8, 30).layout(&config));
    }

    #[test]
    fn test_board_data_builder() {
        let data = BoardData::new(BoardLayout::new(Team::Red, Vec::new()), vec!["Moon".to_string()])
            .with_clues("Moon", ["night", "tide"]);
        assert_eq!(data.clues_for("moon"), ["night", "tide"]);
        assert!(data.clues_for("sun").is_empty());
    }
}
