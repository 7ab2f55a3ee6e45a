//! Seeded construction of complete matches.

use crate::board::{BoardData, BoardSource};
use crate::core::{GameConfig, GameError, GameRng, Role, Seat, Team, TeamMap};
use crate::strategy::StrategyKind;

use super::game::{Game, Player};

/// Builder for a [`Game`] with built-in strategies on every seat.
///
/// Each seat's strategy gets its own RNG stream forked from the seed in a
/// fixed seat order, so the same seed and board replay the same match.
///
/// ```
/// use rust_codenames::board::{BoardData, BoardLayout};
/// use rust_codenames::core::Team;
/// use rust_codenames::rules::GameBuilder;
/// use rust_codenames::strategy::StrategyKind;
///
/// let layout = BoardLayout::parse("red", "RRRRR RRRRB BBBBB BBHNN NNNNN").unwrap();
/// let words = (0..25).map(|i| format!("word{i}")).collect();
/// let data = BoardData::new(layout, words);
///
/// let game = GameBuilder::new(42)
///     .with_strategy(Team::Blue, StrategyKind::Random)
///     .build(&data)
///     .unwrap();
/// assert_eq!(game.state().target(Team::Red), 9);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: GameConfig,
    seed: u64,
    spymasters: TeamMap<StrategyKind>,
    operatives: TeamMap<StrategyKind>,
}

impl GameBuilder {
    /// Standard configuration, smart strategies everywhere.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            config: GameConfig::default(),
            seed,
            spymasters: TeamMap::default(),
            operatives: TeamMap::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `kind` for both of `team`'s seats.
    #[must_use]
    pub fn with_strategy(mut self, team: Team, kind: StrategyKind) -> Self {
        self.spymasters[team] = kind;
        self.operatives[team] = kind;
        self
    }

    /// Use `kind` for one seat.
    #[must_use]
    pub fn with_seat(mut self, seat: Seat, kind: StrategyKind) -> Self {
        match seat.role {
            Role::Spymaster => self.spymasters[seat.team] = kind,
            Role::Operative => self.operatives[seat.team] = kind,
        }
        self
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn players(&self) -> Vec<Player> {
        let mut rng = GameRng::new(self.seed);
        Team::ALL
            .into_iter()
            .flat_map(|team| [Seat::spymaster(team), Seat::operative(team)])
            .map(|seat| {
                let kind = match seat.role {
                    Role::Spymaster => self.spymasters[seat.team],
                    Role::Operative => self.operatives[seat.team],
                };
                Player::boxed(seat, kind.build(seat.role, rng.fork()))
            })
            .collect()
    }

    /// Build a match on the given board.
    pub fn build(&self, data: &BoardData) -> Result<Game, GameError> {
        Game::new(self.config.clone(), data, self.players())
    }

    /// Draw a board from `source` and build a match on it.
    pub fn build_from_source(&self, source: &mut impl BoardSource) -> Result<Game, GameError> {
        let data = BoardData::from_source(source, &self.config)?;
        self.build(&data)
    }
}
