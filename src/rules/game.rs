//! A match in progress: state, seated strategies, and notifications.

use crate::board::{Board, BoardData, Category, EntryId};
use crate::clues::{Clue, SuggestionGraph};
use crate::core::{GameConfig, GameError, Seat, Team};
use crate::events::{GameEvents, SubscriptionId};
use crate::strategy::{PlayStatus, Strategy};

use super::outcome::Outcome;
use super::state::MatchState;
use super::turn::Phase;

/// A seat and the strategy playing it.
#[derive(Debug)]
pub struct Player {
    seat: Seat,
    // taken out while the strategy plays
    strategy: Option<Box<dyn Strategy>>,
}

impl Player {
    pub fn new(seat: Seat, strategy: impl Strategy + 'static) -> Self {
        Self::boxed(seat, Box::new(strategy))
    }

    #[must_use]
    pub fn boxed(seat: Seat, strategy: Box<dyn Strategy>) -> Self {
        Self {
            seat,
            strategy: Some(strategy),
        }
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Strategy name, or `None` while it is playing.
    #[must_use]
    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }
}

/// One match: the rules state plus four seated players.
///
/// All mutation goes through [`Game::set_current_clue`],
/// [`Game::reveal_entry`] and [`Game::enter_next_game_turn`]; there is a
/// single writer at any time.
#[derive(Debug)]
pub struct Game {
    state: MatchState,
    players: Vec<Player>,
    events: GameEvents,
}

impl Game {
    /// Set up a match from board data and four players, in any order.
    pub fn new(config: GameConfig, data: &BoardData, players: Vec<Player>) -> Result<Self, GameError> {
        let state = MatchState::new(config, data)?;
        let game = Self::resume(state, players)?;

        log::info!(
            "match start: {} begins, targets {} {} / {} {}",
            game.state.starting_team(),
            Team::Red,
            game.state.target(Team::Red),
            Team::Blue,
            game.state.target(Team::Blue)
        );
        Ok(game)
    }

    /// Rebuild a match from a snapshot and a fresh set of players.
    pub fn resume(state: MatchState, players: Vec<Player>) -> Result<Self, GameError> {
        let players = seat_players(state.seats(), players)?;
        Ok(Self {
            state,
            players,
            events: GameEvents::new(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn graph(&self) -> &SuggestionGraph {
        self.state.graph()
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.state.current_seat()
    }

    #[must_use]
    pub fn current_clue(&self) -> Option<&Clue> {
        self.state.current_clue()
    }

    #[must_use]
    pub fn guesses_left(&self) -> u32 {
        self.state.guesses_left()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        self.state.winner()
    }

    #[must_use]
    pub fn loser(&self) -> Option<Team> {
        self.state.loser()
    }

    /// Copy of the strategy-free state, for persistence.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    // === Operations ===

    /// Submit the current spymaster's clue and notify `clue_given`
    /// subscribers.
    pub fn set_current_clue(&mut self, clue: Clue) -> Result<Clue, GameError> {
        let accepted = self.state.set_current_clue(clue)?.clone();
        self.events.clue_given.invoke(&accepted);
        Ok(accepted)
    }

    /// Reveal an entry for the current operative.
    pub fn reveal_entry(&mut self, id: EntryId) -> Result<Category, GameError> {
        self.state.reveal_entry(id).inspect_err(|err| {
            log::warn!("reveal of {id} rejected: {err}");
        })
    }

    /// Reveal the entry at a grid position.
    pub fn reveal_at(&mut self, row: usize, col: usize) -> Result<Category, GameError> {
        let id = self.state.board().id_at(row, col)?;
        self.reveal_entry(id)
    }

    /// Whether the match is over.
    pub fn check_winner(&mut self) -> bool {
        self.state.check_winner()
    }

    /// Broadcast a phase label to `phase_changed` subscribers.
    pub fn set_phase(&mut self, label: impl Into<String>) {
        let label = label.into();
        self.events.phase_changed.invoke(&label);
    }

    /// End the current sub-turn without going through a strategy.
    ///
    /// Returns the new round number if a round was completed, after
    /// notifying `round_changed` subscribers.
    pub fn complete_sub_turn(&mut self) -> Result<Option<u32>, GameError> {
        let round = self.state.complete_sub_turn()?;
        if let Some(round) = round {
            log::debug!("round {round}");
            self.events.round_changed.invoke(&round);
        }
        Ok(round)
    }

    /// Let the current seat's strategy play once.
    ///
    /// Emits the seat label on `phase_changed` first. If the strategy
    /// reports [`PlayStatus::Finished`] and the match is still undecided,
    /// the turn passes to the next seat.
    pub fn enter_next_game_turn(&mut self) -> Result<PlayStatus, GameError> {
        if self.state.outcome().is_decided() {
            return Err(GameError::GameOver);
        }

        let index = self.state.player_index();
        let seat = self.state.current_seat();
        let mut strategy = self.players[index]
            .strategy
            .take()
            .ok_or(GameError::StrategyBusy(seat))?;

        self.set_phase(seat.to_string());
        let played = strategy.play(self, seat);
        self.players[index].strategy = Some(strategy);

        let status = played?;
        if status == PlayStatus::Finished && !self.state.outcome().is_decided() {
            self.complete_sub_turn()?;
        }
        Ok(status)
    }

    // === Notifications ===

    #[must_use]
    pub fn events(&self) -> &GameEvents {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut GameEvents {
        &mut self.events
    }

    pub fn on_clue_given(&mut self, callback: impl FnMut(&Clue) + 'static) -> SubscriptionId {
        self.events.clue_given.subscribe(callback)
    }

    pub fn on_phase_changed(&mut self, callback: impl FnMut(&String) + 'static) -> SubscriptionId {
        self.events.phase_changed.subscribe(callback)
    }

    pub fn on_round_changed(&mut self, callback: impl FnMut(&u32) + 'static) -> SubscriptionId {
        self.events.round_changed.subscribe(callback)
    }
}

/// Check there is exactly one player per seat and order them like `seats`.
fn seat_players(seats: &[Seat; 4], players: Vec<Player>) -> Result<Vec<Player>, GameError> {
    if players.len() != seats.len() {
        return Err(GameError::WrongPlayerCount(players.len()));
    }

    let mut slots: [Option<Player>; 4] = Default::default();
    for player in players {
        // four players with distinct seats cover all four seats
        let slot = seats
            .iter()
            .position(|&s| s == player.seat)
            .ok_or(GameError::DuplicateSeat(player.seat))?;
        if slots[slot].is_some() {
            return Err(GameError::DuplicateSeat(player.seat));
        }
        slots[slot] = Some(player);
    }

    Ok(slots.into_iter().flatten().collect())
}
