//! The suggestion graph: a bipartite relation between clue words and
//! board entries.
//!
//! ## Construction
//!
//! 1. Each entry receives its externally supplied candidate clue words,
//!    normalized.
//! 2. Every distinct clue word becomes one `Clue`, associated with every
//!    entry that lists it; per-category counters are incremented.
//! 3. Clue words that are also board words are flagged, not dropped.
//! 4. Clues that suggest no team entry at all are removed, and their word
//!    is stripped from the entries that listed it (the hazard included).
//!
//! ## Storage
//!
//! Clues live in an arena addressed by `ClueId`. Adjacency is index based
//! on both sides: each clue lists its `EntryId`s and the graph keeps one
//! `ClueId` list per entry. Entries themselves stay owned by the `Board`.
//!
//! ## Live mutation
//!
//! [`SuggestionGraph::pick_entry`] drops every association of a revealed
//! entry. A clue left suggesting nothing stays in the graph; callers decide
//! whether it is still useful.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Category, EntryId};
use crate::core::{GameError, Team};

use super::clue::{Clue, ClueId};
use super::normalize::normalize_word;

/// Clue words ↔ board entries, with per-team suggestion counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionGraph {
    clues: Vec<Clue>,
    by_word: FxHashMap<String, ClueId>,
    entry_clues: Vec<SmallVec<[ClueId; 8]>>,
}

impl SuggestionGraph {
    /// Build the graph for `board`.
    ///
    /// `candidates_for` is asked once per entry word for its candidate clue
    /// words. The board's entries keep only the clue words that survive
    /// filtering.
    pub fn build<F>(board: &mut Board, mut candidates_for: F) -> Self
    where
        F: FnMut(&str) -> Vec<String>,
    {
        for entry in board.entries_mut() {
            for raw in candidates_for(entry.word()) {
                let clue = normalize_word(&raw);
                if !clue.is_empty() {
                    entry.add_clue(clue);
                }
            }
        }

        // BTreeMap keeps arena order independent of hashing
        let mut pending: BTreeMap<String, Clue> = BTreeMap::new();
        for entry in board.entries() {
            for word in entry.candidate_clues() {
                pending
                    .entry(word.to_string())
                    .or_insert_with(|| Clue::new(word))
                    .add_entry(entry.id(), entry.category());
            }
        }

        let mut graph = Self {
            clues: Vec::with_capacity(pending.len()),
            by_word: FxHashMap::default(),
            entry_clues: vec![SmallVec::new(); board.len()],
        };

        let mut discarded = 0usize;
        for (word, mut clue) in pending {
            if clue.only_suggests_neutral_or_hazard() {
                for &id in clue.entries() {
                    if let Ok(entry) = board.entry_mut(id) {
                        entry.remove_clue(&word);
                    }
                }
                discarded += 1;
                continue;
            }

            clue.set_board_word(board.contains_word(&word));

            let id = ClueId::new(graph.clues.len() as u32);
            for &entry in clue.entries() {
                graph.entry_clues[entry.index()].push(id);
            }
            graph.by_word.insert(word, id);
            graph.clues.push(clue);
        }

        log::debug!(
            "suggestion graph: {} clues kept, {} discarded as neutral/hazard-only",
            graph.clues.len(),
            discarded
        );

        graph
    }

    /// Number of retained clues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    /// Clue by arena id.
    #[must_use]
    pub fn get(&self, id: ClueId) -> Option<&Clue> {
        self.clues.get(id.index())
    }

    /// Clue by word (normalized before lookup).
    #[must_use]
    pub fn clue(&self, word: &str) -> Option<&Clue> {
        self.by_word
            .get(&normalize_word(word))
            .and_then(|&id| self.get(id))
    }

    /// All retained clues, in arena order.
    pub fn clues(&self) -> impl Iterator<Item = &Clue> {
        self.clues.iter()
    }

    /// Clues currently suggesting `entry`.
    pub fn clues_for_entry(&self, entry: EntryId) -> impl Iterator<Item = &Clue> {
        self.entry_clues
            .get(entry.index())
            .into_iter()
            .flatten()
            .filter_map(|&id| self.get(id))
    }

    /// Remove every association of a revealed entry.
    ///
    /// Each affected clue has the counter for `category` decremented.
    /// Returns the number of clues touched.
    pub fn pick_entry(&mut self, entry: EntryId, category: Category) -> usize {
        let Some(adjacent) = self.entry_clues.get_mut(entry.index()) else {
            return 0;
        };
        let adjacent = std::mem::take(adjacent);

        for &id in &adjacent {
            let removed = self.clues[id.index()].remove_entry(entry, category);
            debug_assert!(removed, "adjacency out of sync for {entry} / {id}");
        }
        adjacent.len()
    }

    /// Clues with at least one `team` entry and none of the opponent's.
    pub fn safe_clues(&self, team: Team) -> impl Iterator<Item = &Clue> {
        self.clues.iter().filter(move |c| c.is_safe_for(team))
    }

    /// Entries of `team` suggested by `word`; 0 for an unknown word.
    #[must_use]
    pub fn suggested_for(&self, word: &str, team: Team) -> u32 {
        self.clue(word).map_or(0, |c| c.suggested_for(team))
    }

    /// Entries not of `team` suggested by `word`; 0 for an unknown word.
    #[must_use]
    pub fn complement_for(&self, word: &str, team: Team) -> u32 {
        self.clue(word).map_or(0, |c| c.complement_for(team))
    }

    /// Whether `word` is a retained clue that collides with a board word.
    #[must_use]
    pub fn is_board_word(&self, word: &str) -> bool {
        self.clue(word).is_some_and(Clue::is_board_word)
    }

    /// Check that adjacency and every clue's counters agree with `board`.
    ///
    /// Returns a description of the first inconsistency found.
    pub fn verify(&self, board: &Board) -> Result<(), String> {
        for (index, clue) in self.clues.iter().enumerate() {
            let id = ClueId::new(index as u32);
            let mut expected = FxHashMap::<Category, u32>::default();

            for &entry in clue.entries() {
                let found = board.entry(entry).map_err(|e: GameError| e.to_string())?;
                if found.is_revealed() {
                    return Err(format!("{id} still suggests revealed {entry}"));
                }
                if !self.entry_clues[entry.index()].contains(&id) {
                    return Err(format!("{entry} does not list {id}"));
                }
                *expected.entry(found.category()).or_default() += 1;
            }

            for category in [
                Category::Team(Team::Red),
                Category::Team(Team::Blue),
                Category::Neutral,
                Category::Hazard,
            ] {
                let want = expected.get(&category).copied().unwrap_or(0);
                if clue.count_for(category) != want {
                    return Err(format!(
                        "{id} '{}' counts {} {:?}, membership has {}",
                        clue.word(),
                        clue.count_for(category),
                        category,
                        want
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardLayout;
    use crate::core::GameConfig;

    // 3x3: R R R R B B B H N
    fn board() -> Board {
        let config = GameConfig::new().with_grid(3, 3).with_base_target(3);
        let layout = BoardLayout::parse("red", "RRRRBBBHN").unwrap();
        let words: Vec<String> = ["apple", "bear", "cat", "dog", "eel", "fox", "gnu", "hazard", "ink"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        Board::new(&config, &words, &layout).unwrap()
    }

    fn candidates(word: &str) -> Vec<String> {
        let list: &[&str] = match word {
            "apple" => &["Fruit", "tree", "red"],
            "bear" => &["animal", "forest"],
            "cat" => &["animal", "pet"],
            "dog" => &["pet", "bark"],
            "eel" => &["fish", "animal"],
            "fox" => &["forest", "red"],
            "gnu" => &["savanna"],
            "hazard" => &["danger", "bark", "tree"],
            "ink" => &["danger", "pen"],
            _ => &[],
        };
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_filters_neutral_and_hazard_only() {
        let mut board = board();
        let graph = SuggestionGraph::build(&mut board, candidates);

        // "danger" (hazard + neutral) and "pen" (neutral) are dropped
        assert!(graph.clue("danger").is_none());
        assert!(graph.clue("pen").is_none());
        assert!(graph.clues().all(|c| !c.only_suggests_neutral_or_hazard()));

        let hazard = board.hazard().unwrap();
        assert!(!board.entry(hazard).unwrap().has_clue("danger"));
        assert!(board.entry(hazard).unwrap().has_clue("bark"));
        let ink = board.find("ink").unwrap();
        assert!(!board.entry(ink).unwrap().has_clue("pen"));
    }

    #[test]
    fn test_counts() {
        let mut board = board();
        let graph = SuggestionGraph::build(&mut board, candidates);

        let animal = graph.clue("animal").unwrap();
        assert_eq!(animal.suggested_for(Team::Red), 2);
        assert_eq!(animal.suggested_for(Team::Blue), 1);
        assert_eq!(animal.complement_for(Team::Red), 1);

        let bark = graph.clue("BARK").unwrap();
        assert!(bark.hazard_suggested());
        assert_eq!(bark.suggested_for(Team::Red), 1);

        assert_eq!(graph.suggested_for("red", Team::Blue), 1);
        assert_eq!(graph.suggested_for("nope", Team::Blue), 0);
        assert!(graph.verify(&board).is_ok());
    }

    #[test]
    fn test_candidate_clues_are_normalized() {
        let mut board = board();
        let graph = SuggestionGraph::build(&mut board, candidates);
        assert!(graph.clue("fruit").is_some());
        assert!(board.entry(EntryId::new(0)).unwrap().has_clue("fruit"));
    }

    #[test]
    fn test_board_word_flagged() {
        let mut board = board();
        let graph = SuggestionGraph::build(&mut board, |word| {
            if word == "bear" {
                vec!["apple".to_string()]
            } else {
                Vec::new()
            }
        });
        assert!(graph.is_board_word("apple"));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_safe_clues() {
        let mut board = board();
        let graph = SuggestionGraph::build(&mut board, candidates);

        let mut red: Vec<_> = graph.safe_clues(Team::Red).map(Clue::word).collect();
        red.sort_unstable();
        assert_eq!(red, vec!["bark", "fruit", "pet", "tree"]);

        let mut blue: Vec<_> = graph.safe_clues(Team::Blue).map(Clue::word).collect();
        blue.sort_unstable();
        assert_eq!(blue, vec!["fish", "savanna"]);
    }

    #[test]
    fn test_pick_entry_decrements() {
        let mut board = board();
        let mut graph = SuggestionGraph::build(&mut board, candidates);

        let cat = board.find("cat").unwrap();
        let category = board.reveal(cat).unwrap();
        assert_eq!(graph.pick_entry(cat, category), 2);

        let pet = graph.clue("pet").unwrap();
        assert_eq!(pet.suggested_for(Team::Red), 1);
        assert!(!pet.suggests(cat));
        assert_eq!(graph.clues_for_entry(cat).count(), 0);
        assert!(graph.verify(&board).is_ok());

        // second pick is a no-op
        assert_eq!(graph.pick_entry(cat, category), 0);
    }

    #[test]
    fn test_zero_suggestion_clue_is_kept() {
        let mut board = board();
        let mut graph = SuggestionGraph::build(&mut board, candidates);

        let gnu = board.find("gnu").unwrap();
        let category = board.reveal(gnu).unwrap();
        graph.pick_entry(gnu, category);

        let savanna = graph.clue("savanna").unwrap();
        assert!(!savanna.suggests_some_entry());
        assert_eq!(graph.safe_clues(Team::Blue).count(), 1);
    }
}
