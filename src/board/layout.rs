//! Board layouts: which category sits in which cell, and who starts.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameError, GameRng, Team};

use super::entry::Category;

/// Category assignment for every cell, row-major, plus the starting team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub starting_team: Team,
    pub categories: Vec<Category>,
}

impl BoardLayout {
    /// Build a layout from explicit categories.
    #[must_use]
    pub fn new(starting_team: Team, categories: Vec<Category>) -> Self {
        Self {
            starting_team,
            categories,
        }
    }

    /// Random layout with the standard category counts for `config`.
    ///
    /// ```
    /// use rust_codenames::board::{BoardLayout, Category};
    /// use rust_codenames::core::{GameConfig, GameRng, Team};
    ///
    /// let config = GameConfig::default();
    /// let layout = BoardLayout::standard(Team::Red, &config, &mut GameRng::new(1));
    ///
    /// assert_eq!(layout.count(Category::Team(Team::Red)), 9);
    /// assert_eq!(layout.count(Category::Team(Team::Blue)), 8);
    /// assert_eq!(layout.count(Category::Hazard), 1);
    /// assert!(layout.validate(&config).is_ok());
    /// ```
    #[must_use]
    pub fn standard(starting_team: Team, config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut categories = Vec::with_capacity(config.board_size());
        for team in Team::ALL {
            let target = config.target_for(team, starting_team) as usize;
            categories.extend(std::iter::repeat(Category::Team(team)).take(target));
        }
        categories.extend(std::iter::repeat(Category::Hazard).take(GameConfig::HAZARD_COUNT));
        categories.extend(std::iter::repeat(Category::Neutral).take(config.neutral_count()));
        rng.shuffle(&mut categories);

        Self::new(starting_team, categories)
    }

    /// Parse a provider layout: a team name and one symbol per cell
    /// (`R`, `B`, `N`, `H`; whitespace ignored).
    pub fn parse(starting_team: &str, pattern: &str) -> Result<Self, GameError> {
        let team = Team::parse(starting_team)
            .ok_or_else(|| GameError::InvalidLayout(format!("unknown team '{starting_team}'")))?;

        let categories = pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Category::from_symbol(c)
                    .ok_or_else(|| GameError::InvalidLayout(format!("unknown cell symbol '{c}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(team, categories))
    }

    /// Number of cells with the given category.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.categories.iter().filter(|&&c| c == category).count()
    }

    /// Check the layout against the configured shape and counts.
    pub fn validate(&self, config: &GameConfig) -> Result<(), GameError> {
        if config.board_size() > GameConfig::MAX_CELLS {
            return Err(GameError::InvalidLayout(format!(
                "a {}x{} board has too many cells (at most {})",
                config.rows,
                config.cols,
                GameConfig::MAX_CELLS
            )));
        }
        if self.categories.len() != config.board_size() {
            return Err(GameError::InvalidLayout(format!(
                "{} cells for a {}x{} board",
                self.categories.len(),
                config.rows,
                config.cols
            )));
        }

        let hazards = self.count(Category::Hazard);
        if hazards != GameConfig::HAZARD_COUNT {
            return Err(GameError::InvalidLayout(format!(
                "expected {} hazard entry, found {}",
                GameConfig::HAZARD_COUNT,
                hazards
            )));
        }

        for team in Team::ALL {
            let expected = config.target_for(team, self.starting_team) as usize;
            let found = self.count(Category::Team(team));
            if found != expected {
                return Err(GameError::InvalidLayout(format!(
                    "expected {expected} {team} entries, found {found}"
                )));
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for BoardLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.starting_team)?;
        for category in &self.categories {
            write!(f, "{}", category.symbol())?;
        }
        Ok(())
    }
}
