//! Guessing strategies.

use crate::board::EntryId;
use crate::core::{GameError, GameRng, Seat};
use crate::rules::Game;

use super::{PlayStatus, Strategy};

fn turn_open(game: &Game) -> bool {
    game.guesses_left() > 0 && !game.outcome().is_decided()
}

fn pick(rng: &mut GameRng, pool: &[EntryId]) -> Option<EntryId> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range_usize(0..pool.len())])
}

/// An unrevealed entry that no clue points at, or any unrevealed entry.
fn blind_guess(game: &Game, rng: &mut GameRng) -> Option<EntryId> {
    let hidden: Vec<EntryId> = game.board().unrevealed().map(|e| e.id()).collect();
    let unclued: Vec<EntryId> = hidden
        .iter()
        .copied()
        .filter(|&id| game.graph().clues_for_entry(id).next().is_none())
        .collect();
    if unclued.is_empty() {
        pick(rng, &hidden)
    } else {
        pick(rng, &unclued)
    }
}

/// Reveals random unrevealed entries until the turn ends.
#[derive(Clone, Debug)]
pub struct RandomOperative {
    rng: GameRng,
}

impl RandomOperative {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomOperative {
    fn play(&mut self, game: &mut Game, _seat: Seat) -> Result<PlayStatus, GameError> {
        while turn_open(game) {
            let hidden: Vec<EntryId> = game.board().unrevealed().map(|e| e.id()).collect();
            let Some(id) = pick(&mut self.rng, &hidden) else {
                break;
            };
            game.reveal_entry(id)?;
        }
        Ok(PlayStatus::Finished)
    }

    fn name(&self) -> &'static str {
        "random-operative"
    }
}

/// Reveals entries the current clue suggests, then passes.
///
/// The graph is queried again before every reveal, since each reveal
/// removes that entry from every clue. A clue that suggests nothing from
/// the start gets one blind guess, preferring entries no clue points at.
#[derive(Clone, Debug)]
pub struct SuggestionOperative {
    rng: GameRng,
}

impl SuggestionOperative {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for SuggestionOperative {
    fn play(&mut self, game: &mut Game, seat: Seat) -> Result<PlayStatus, GameError> {
        let Some(word) = game.current_clue().map(|c| c.word().to_string()) else {
            return Err(GameError::WrongPhase {
                seat,
                action: "guess without a clue",
            });
        };

        let mut reveals = 0;
        while turn_open(game) {
            let suggested: Vec<EntryId> = game
                .graph()
                .clue(&word)
                .map(|c| c.entries().to_vec())
                .unwrap_or_default();
            let guess = match pick(&mut self.rng, &suggested) {
                Some(id) => Some(id),
                None if reveals == 0 => blind_guess(game, &mut self.rng),
                None => None,
            };
            let Some(id) = guess else {
                log::debug!("{seat} passes on '{word}'");
                break;
            };
            game.reveal_entry(id)?;
            reveals += 1;
        }
        Ok(PlayStatus::Finished)
    }

    fn name(&self) -> &'static str {
        "suggestion-operative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_empty() {
        assert_eq!(pick(&mut GameRng::new(0), &[]), None);
    }

    #[test]
    fn test_pick_is_seeded() {
        let pool: Vec<EntryId> = (0..10).map(EntryId::new).collect();
        let a = pick(&mut GameRng::new(3), &pool);
        let b = pick(&mut GameRng::new(3), &pool);
        assert_eq!(a, b);
        assert!(pool.contains(&a.unwrap()));
    }
}
