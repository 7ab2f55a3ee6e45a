//! Clue-giving strategies.

use crate::clues::Clue;
use crate::core::{GameError, GameRng, Seat, Team};
use crate::rules::Game;

use super::{PlayStatus, Strategy};

/// A usable clue and how many own entries it points at.
#[derive(Clone, Debug)]
struct Candidate {
    word: String,
    own: u32,
    margin: i64,
    safe: bool,
}

/// Retained clues that are not board words and suggest at least one
/// `team` entry.
fn candidates(game: &Game, team: Team) -> Vec<Candidate> {
    game.graph()
        .clues()
        .filter(|c| !c.is_board_word() && c.suggested_for(team) > 0)
        .map(|c| Candidate {
            word: c.word().to_string(),
            own: c.suggested_for(team),
            margin: i64::from(c.suggested_for(team)) - i64::from(c.complement_for(team)),
            safe: c.is_safe_for(team) && !c.hazard_suggested(),
        })
        .collect()
}

/// A count-1 clue for when no retained clue points at an own entry.
///
/// Prefers a retained clue that no longer suggests anything, then a
/// placeholder word that is neither on the board nor in the graph.
fn fallback(game: &Game, rng: &mut GameRng) -> Option<Candidate> {
    let spent: Vec<&str> = game
        .graph()
        .clues()
        .filter(|c| !c.is_board_word() && !c.suggests_some_entry())
        .map(Clue::word)
        .collect();
    let word = match rng.choose(&spent) {
        Some(&word) => word.to_string(),
        None => (0u32..)
            .map(|n| if n == 0 { "pass".to_string() } else { format!("pass {n}") })
            .find(|w| !game.board().contains_word(w) && game.graph().clue(w).is_none())?,
    };
    Some(Candidate {
        word,
        own: 1,
        margin: 0,
        safe: false,
    })
}

fn submit(game: &mut Game, candidate: &Candidate) -> Result<PlayStatus, GameError> {
    game.set_current_clue(Clue::new(&candidate.word).with_count(candidate.own))?;
    Ok(PlayStatus::Finished)
}

/// Gives any usable clue, for its full own-team count.
#[derive(Clone, Debug)]
pub struct RandomSpymaster {
    rng: GameRng,
}

impl RandomSpymaster {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomSpymaster {
    fn play(&mut self, game: &mut Game, seat: Seat) -> Result<PlayStatus, GameError> {
        let pool = candidates(game, seat.team);
        let choice = match self.rng.choose(&pool) {
            Some(choice) => choice.clone(),
            None => fallback(game, &mut self.rng).ok_or(GameError::NoLegalClue(seat.team))?,
        };
        submit(game, &choice)
    }

    fn name(&self) -> &'static str {
        "random-spymaster"
    }
}

/// Prefers safe clues (no opponent entry, no hazard) with the most own
/// entries. Without a safe clue, falls back to the best own-minus-rest
/// margin. Ties are broken at random.
#[derive(Clone, Debug)]
pub struct SafeSpymaster {
    rng: GameRng,
}

impl SafeSpymaster {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    fn pick<'a>(&mut self, pool: &'a [Candidate]) -> Option<&'a Candidate> {
        let safe: Vec<&Candidate> = pool.iter().filter(|c| c.safe).collect();
        let best: Vec<&Candidate> = if safe.is_empty() {
            let top = pool.iter().map(|c| c.margin).max()?;
            pool.iter().filter(|c| c.margin == top).collect()
        } else {
            let top = safe.iter().map(|c| c.own).max()?;
            safe.into_iter().filter(|c| c.own == top).collect()
        };
        self.rng.choose(&best).copied()
    }
}

impl Strategy for SafeSpymaster {
    fn play(&mut self, game: &mut Game, seat: Seat) -> Result<PlayStatus, GameError> {
        let pool = candidates(game, seat.team);
        let choice = match self.pick(&pool) {
            Some(choice) => choice.clone(),
            None => {
                let choice = fallback(game, &mut self.rng).ok_or(GameError::NoLegalClue(seat.team))?;
                log::debug!("{seat} has no clue for its entries, gives '{}'", choice.word);
                choice
            }
        };
        log::debug!("{seat} picks '{}' (margin {})", choice.word, choice.margin);
        submit(game, &choice)
    }

    fn name(&self) -> &'static str {
        "safe-spymaster"
    }
}
