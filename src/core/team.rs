//! Teams, roles, seats, and per-team data storage.
//!
//! ## Team
//!
//! The two competing sides. Every API that needs "the other side" goes
//! through [`Team::opponent`] so the two-team assumption lives in one place.
//!
//! ## Seat
//!
//! A (team, role) pair. A match has exactly four seats: one spymaster and
//! one operative per team.
//!
//! ## TeamMap
//!
//! Per-team data storage with O(1) access, indexable by `Team`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// Both teams, in a fixed order.
    pub const ALL: [Team; 2] = [Team::Red, Team::Blue];

    /// The opposing team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// Stable index (Red = 0, Blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Team::Red => 0,
            Team::Blue => 1,
        }
    }

    /// Parse a team name, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use rust_codenames::core::Team;
    ///
    /// assert_eq!(Team::parse(" RED "), Some(Team::Red));
    /// assert_eq!(Team::parse("blue"), Some(Team::Blue));
    /// assert_eq!(Team::parse("green"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "red" => Some(Team::Red),
            "blue" => Some(Team::Blue),
            _ => None,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => write!(f, "Red"),
            Team::Blue => write!(f, "Blue"),
        }
    }
}

/// What a seat does on its sub-turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Gives one clue per sub-turn.
    Spymaster,
    /// Reveals entries until the guesses run out or it passes.
    Operative,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Spymaster => write!(f, "Spymaster"),
            Role::Operative => write!(f, "Operative"),
        }
    }
}

/// A team/role combination. There are exactly four per match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat {
    pub team: Team,
    pub role: Role,
}

impl Seat {
    #[must_use]
    pub const fn new(team: Team, role: Role) -> Self {
        Self { team, role }
    }

    #[must_use]
    pub const fn spymaster(team: Team) -> Self {
        Self::new(team, Role::Spymaster)
    }

    #[must_use]
    pub const fn operative(team: Team) -> Self {
        Self::new(team, Role::Operative)
    }

    /// Turn order for a match: starting team first, spymaster before operative.
    #[must_use]
    pub fn turn_order(starting_team: Team) -> [Seat; 4] {
        let second = starting_team.opponent();
        [
            Seat::spymaster(starting_team),
            Seat::operative(starting_team),
            Seat::spymaster(second),
            Seat::operative(second),
        ]
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.team, self.role)
    }
}

/// Per-team data storage.
///
/// ## Example
///
/// ```
/// use rust_codenames::core::{Team, TeamMap};
///
/// let mut revealed: TeamMap<u32> = TeamMap::default();
/// revealed[Team::Blue] += 1;
///
/// assert_eq!(revealed[Team::Red], 0);
/// assert_eq!(revealed[Team::Blue], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 2],
}

impl<T> TeamMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Team) -> T) -> Self {
        Self {
            data: [factory(Team::Red), factory(Team::Blue)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, team: Team) -> &T {
        &self.data[team.index()]
    }

    pub fn get_mut(&mut self, team: Team) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (Team, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        Team::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        self.get_mut(team)
    }
}
