//! Match configuration.
//!
//! `GameConfig` fixes the board shape and the category counts every layout
//! must satisfy. The default is the standard 5×5 game: 9 entries for the
//! starting team, 8 for the other, 1 hazard, 7 neutral.

use serde::{Deserialize, Serialize};

use super::team::Team;

/// Board shape and scoring targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid rows.
    pub rows: usize,

    /// Grid columns.
    pub cols: usize,

    /// Entries the second team must find.
    pub base_target: u32,

    /// Extra entries the starting team must find.
    ///
    /// The starting team plays the first, uncontested turn.
    pub starting_bonus: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            base_target: 8,
            starting_bonus: 1,
        }
    }
}

impl GameConfig {
    /// Every board has exactly one hazard entry.
    pub const HAZARD_COUNT: usize = 1;

    /// Largest grid whose cells fit in an `EntryId`.
    pub const MAX_CELLS: usize = u16::MAX as usize + 1;

    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the second team's target.
    #[must_use]
    pub fn with_base_target(mut self, target: u32) -> Self {
        assert!(target > 0, "Target must be at least 1");
        self.base_target = target;
        self
    }

    /// Set the starting team's extra target.
    #[must_use]
    pub fn with_starting_bonus(mut self, bonus: u32) -> Self {
        self.starting_bonus = bonus;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Entries `team` must reveal to win.
    #[must_use]
    pub fn target_for(&self, team: Team, starting_team: Team) -> u32 {
        if team == starting_team {
            self.base_target + self.starting_bonus
        } else {
            self.base_target
        }
    }

    /// Neutral entries implied by the other counts.
    ///
    /// Panics if the team and hazard entries do not fit on the board.
    #[must_use]
    pub fn neutral_count(&self) -> usize {
        let colored = (2 * self.base_target + self.starting_bonus) as usize + Self::HAZARD_COUNT;
        assert!(
            colored <= self.board_size(),
            "{} team/hazard entries do not fit on a {}x{} board",
            colored,
            self.rows,
            self.cols
        );
        self.board_size() - colored
    }
}
