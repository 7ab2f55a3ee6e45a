//! Board model: entries, the grid, layouts, and board-data providers.
//!
//! - [`Entry`]: one word slot with a hidden [`Category`]
//! - [`Board`]: the fixed grid, addressed by [`EntryId`], coordinate or word
//! - [`BoardLayout`]: category per cell plus the starting team
//! - [`BoardSource`] / [`BoardData`]: the external word and clue supply

mod entry;
mod grid;
mod layout;
mod source;

pub use entry::{Category, Entry, EntryId};
pub use grid::Board;
pub use layout::BoardLayout;
pub use source::{BoardData, BoardSource, WordPool};
