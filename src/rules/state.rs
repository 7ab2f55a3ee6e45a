//! Match state: board, graph, and the turn/scoring state machine.
//!
//! `MatchState` holds everything about a match except the strategies and
//! event subscribers, so it can be cloned, inspected by tests, and
//! snapshotted with bincode.
//!
//! ## Turn flow
//!
//! ```text
//! AwaitingClue(spymaster) --clue N--> AwaitingGuesses(operative, N)
//!     --reveal*--> (guesses exhausted / wrong entry / pass)
//!     --> AwaitingClue(next spymaster) ... --> Terminal(outcome)
//! ```
//!
//! ## Scoring
//!
//! - Hazard: the revealing team loses; guesses drop to 0.
//! - Neutral: guesses drop to 0.
//! - Own team's entry: counter +1, one guess consumed.
//! - Opponent's entry: opponent's counter +1, guesses drop to 0.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardData, Category, EntryId};
use crate::clues::{normalize_word, Clue, SuggestionGraph};
use crate::core::{ClueRejection, GameConfig, GameError, Role, Seat, Team, TeamMap};

use super::outcome::Outcome;
use super::turn::{Phase, TurnState};

/// Strategy-free state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    config: GameConfig,
    board: Board,
    graph: SuggestionGraph,
    starting_team: Team,
    seats: [Seat; 4],
    player_index: usize,
    round: u32,
    turn: TurnState,
    current_clue: Option<Clue>,
    revealed: TeamMap<u32>,
    hazard_revealed: bool,
    outcome: Outcome,
}

impl MatchState {
    /// Lay out the board, build the suggestion graph, and seat the
    /// starting team's spymaster.
    pub fn new(config: GameConfig, data: &BoardData) -> Result<Self, GameError> {
        let mut board = Board::new(&config, &data.words, &data.layout)?;
        let graph = SuggestionGraph::build(&mut board, |word| data.clues_for(word).to_vec());
        let starting_team = data.layout.starting_team;

        Ok(Self {
            seats: Seat::turn_order(starting_team),
            config,
            board,
            graph,
            starting_team,
            player_index: 0,
            round: 1,
            turn: TurnState::AwaitingClue,
            current_clue: None,
            revealed: TeamMap::default(),
            hazard_revealed: false,
            outcome: Outcome::Undecided,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn graph(&self) -> &SuggestionGraph {
        &self.graph
    }

    #[must_use]
    pub fn starting_team(&self) -> Team {
        self.starting_team
    }

    /// Seats in turn order.
    #[must_use]
    pub fn seats(&self) -> &[Seat; 4] {
        &self.seats
    }

    #[must_use]
    pub fn player_index(&self) -> usize {
        self.player_index
    }

    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.seats[self.player_index]
    }

    #[must_use]
    pub fn current_team(&self) -> Team {
        self.current_seat().team
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    #[must_use]
    pub fn guesses_left(&self) -> u32 {
        self.turn.guesses_left()
    }

    #[must_use]
    pub fn current_clue(&self) -> Option<&Clue> {
        self.current_clue.as_ref()
    }

    /// Entries of `team` revealed so far, by either side.
    #[must_use]
    pub fn revealed(&self, team: Team) -> u32 {
        self.revealed[team]
    }

    /// Entries `team` must have revealed to win.
    #[must_use]
    pub fn target(&self, team: Team) -> u32 {
        self.config.target_for(team, self.starting_team)
    }

    #[must_use]
    pub fn hazard_revealed(&self) -> bool {
        self.hazard_revealed
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        self.outcome.winner()
    }

    #[must_use]
    pub fn loser(&self) -> Option<Team> {
        self.outcome.loser()
    }

    /// What the match is waiting for.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.outcome.is_decided() {
            return Phase::Terminal(self.outcome);
        }
        match self.turn {
            TurnState::AwaitingClue => Phase::AwaitingClue(self.current_seat()),
            TurnState::AwaitingGuesses { guesses_left } => Phase::AwaitingGuesses {
                seat: Seat::operative(self.current_team()),
                guesses_left,
            },
        }
    }

    // === Transitions ===

    /// Submit the current spymaster's clue.
    ///
    /// The word is normalized and must not be an unrevealed board word; the
    /// count must be at least 1. The stored clue carries the graph's current
    /// suggestion counts for that word, if the graph knows it.
    pub fn set_current_clue(&mut self, clue: Clue) -> Result<&Clue, GameError> {
        self.ensure_live()?;
        let seat = self.current_seat();
        if seat.role != Role::Spymaster || self.turn != TurnState::AwaitingClue {
            return Err(GameError::WrongPhase {
                seat,
                action: "give a clue",
            });
        }

        let word = normalize_word(clue.word());
        let count = clue.declared_count();
        let rejection = if word.is_empty() {
            Some(ClueRejection::EmptyWord)
        } else if count == 0 {
            Some(ClueRejection::ZeroCount)
        } else if self.board.is_live_word(&word) {
            Some(ClueRejection::BoardWord)
        } else {
            None
        };
        if let Some(reason) = rejection {
            log::warn!("{seat} clue '{word}' rejected: {reason}");
            return Err(GameError::IllegalClue { word, reason });
        }

        let mut accepted = match self.graph.clue(&word) {
            Some(known) => known.clone(),
            None => Clue::new(&word),
        }
        .with_count(count);
        // a revealed board word is legal but still flagged
        accepted.set_board_word(self.board.contains_word(&word));

        log::info!("{seat} gives clue '{accepted}'");
        self.turn = TurnState::AwaitingGuesses { guesses_left: count };
        Ok(&*self.current_clue.insert(accepted))
    }

    /// Reveal an entry on behalf of the current operative.
    ///
    /// Rejected without touching any counter if the entry is unknown or
    /// already revealed, if it is not an operative's turn, or if no
    /// guesses remain. Runs [`MatchState::check_winner`] afterwards.
    pub fn reveal_entry(&mut self, id: EntryId) -> Result<Category, GameError> {
        self.ensure_live()?;
        let seat = self.current_seat();
        if seat.role != Role::Operative {
            return Err(GameError::WrongPhase {
                seat,
                action: "reveal an entry",
            });
        }
        let guesses_left = match self.turn {
            TurnState::AwaitingGuesses { guesses_left } if guesses_left > 0 => guesses_left,
            TurnState::AwaitingGuesses { .. } => return Err(GameError::NoGuessesLeft),
            TurnState::AwaitingClue => {
                return Err(GameError::WrongPhase {
                    seat,
                    action: "reveal an entry",
                })
            }
        };

        let category = self.board.reveal(id)?;
        self.graph.pick_entry(id, category);

        let team = seat.team;
        let remaining = match category {
            Category::Hazard => {
                self.hazard_revealed = true;
                self.outcome = Outcome::Lost(team);
                0
            }
            Category::Neutral => 0,
            Category::Team(owner) => {
                self.revealed[owner] += 1;
                if owner == team {
                    guesses_left - 1
                } else {
                    0
                }
            }
        };
        self.turn = TurnState::AwaitingGuesses {
            guesses_left: remaining,
        };

        log::debug!(
            "{seat} reveals {} '{}' ({category:?}), {remaining} guesses left",
            id,
            self.board.entry(id).map(|e| e.word()).unwrap_or_default()
        );

        self.check_winner();
        Ok(category)
    }

    /// Decide whether the match is over, recording the outcome.
    ///
    /// A revealed hazard ends the match against the revealing team.
    /// Otherwise the first team whose counter reaches its target wins.
    ///
    /// Panics if a counter has overshot its target, which means a win was
    /// missed.
    pub fn check_winner(&mut self) -> bool {
        if self.hazard_revealed {
            return true;
        }
        if self.outcome.is_decided() {
            return true;
        }

        for team in Team::ALL {
            let target = self.target(team);
            let revealed = self.revealed[team];
            assert!(
                revealed <= target,
                "{team} revealed {revealed} entries, past its target of {target}"
            );
            if revealed == target {
                self.outcome = Outcome::Won(team);
                log::info!("{}", self.outcome);
                return true;
            }
        }
        false
    }

    /// End the current seat's sub-turn and move to the next seat.
    ///
    /// Returns the new round number when the seat order wraps around.
    pub fn complete_sub_turn(&mut self) -> Result<Option<u32>, GameError> {
        self.ensure_live()?;
        let seat = self.current_seat();

        match seat.role {
            Role::Spymaster => {
                if self.turn == TurnState::AwaitingClue {
                    return Err(GameError::ClueNotGiven(seat));
                }
            }
            Role::Operative => {
                self.turn = TurnState::AwaitingClue;
                self.current_clue = None;
            }
        }

        self.player_index = (self.player_index + 1) % self.seats.len();
        log::debug!("{seat} done, {} to play", self.current_seat());

        if self.player_index == 0 {
            self.round += 1;
            return Ok(Some(self.round));
        }
        Ok(None)
    }

    fn ensure_live(&self) -> Result<(), GameError> {
        if self.outcome.is_decided() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    // === Snapshots ===

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`MatchState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
