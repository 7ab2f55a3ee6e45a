//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rust_codenames::board::{BoardData, BoardLayout, Category, EntryId, WordPool};
use rust_codenames::clues::Clue;
use rust_codenames::core::GameError;
use rust_codenames::rules::{MatchState, Phase};

/// Red starts: entries 0..9 red, 9..17 blue, 17 hazard, 18..25 neutral.
pub const STANDARD: &str = "RRRRR RRRRB BBBBB BBHNN NNNNN";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn words() -> Vec<String> {
    (0..25).map(|i| format!("w{i}")).collect()
}

/// Standard board with no candidate clues.
pub fn standard_data() -> BoardData {
    BoardData::new(BoardLayout::parse("red", STANDARD).unwrap(), words())
}

/// A pool where every word has a private clue plus a shared group clue.
pub fn pool(seed: u64, size: usize) -> WordPool {
    let mut pool = WordPool::new(seed);
    for i in 0..size {
        pool.insert(format!("word{i}"), [format!("hint{i}"), format!("group{}", i % 6)]);
    }
    pool
}

/// Play clue/pass sub-turns as needed until the current operative can
/// reveal `id`, then reveal it.
pub fn reveal_through_turns(state: &mut MatchState, id: EntryId) -> Result<Category, GameError> {
    loop {
        match state.phase() {
            Phase::Terminal(_) => return Err(GameError::GameOver),
            Phase::AwaitingClue(_) => {
                state.set_current_clue(Clue::new("signal").with_count(25))?;
                state.complete_sub_turn()?;
            }
            Phase::AwaitingGuesses { guesses_left: 0, .. } => {
                state.complete_sub_turn()?;
            }
            Phase::AwaitingGuesses { .. } => return state.reveal_entry(id),
        }
    }
}
