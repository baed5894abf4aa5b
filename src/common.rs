//! Common types for Salvo: coordinates, shot outcomes and error enums.

use core::fmt;

use crate::config::ConfigError;
use crate::ship::{Orientation, ShipKind};

/// A zero-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed (row, col) delta. `None` when the result would be negative.
    pub fn offset(self, delta: Delta) -> Option<Coord> {
        let row = self.row.checked_add_signed(delta.row)?;
        let col = self.col.checked_add_signed(delta.col)?;
        Some(Coord { row, col })
    }

    /// Signed difference `self - other`.
    pub fn delta_from(self, other: Coord) -> Delta {
        Delta {
            row: self.row as isize - other.row as isize,
            col: self.col as isize - other.col as isize,
        }
    }
}

/// Renders as column letter followed by a 1-based row, e.g. `C4`. Columns
/// past `Z` fall back to `(row, col)`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.col).ok().filter(|&c| c < 26) {
            Some(c) => write!(f, "{}{}", (b'A' + c) as char, self.row + 1),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

/// Signed step between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub row: isize,
    pub col: isize,
}

impl Delta {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

/// Result of resolving a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Hit,
    Miss,
}

impl Outcome {
    pub fn is_hit(self) -> bool {
        matches!(self, Outcome::Hit)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Some cell of the ship would be off the grid or on another ship.
    #[error("cannot place {ship} at {origin} ({orientation:?}): out of bounds or overlapping")]
    PlacementConflict {
        ship: ShipKind,
        origin: Coord,
        orientation: Orientation,
    },
    /// Shot outside the grid or at an already resolved cell.
    #[error("invalid target {0}: out of bounds or already fired upon")]
    InvalidTarget(Coord),
}

/// Fatal errors while setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("could not place {ship} after {attempts} attempts")]
    PlacementExhausted { ship: ShipKind, attempts: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors returned by the game orchestrator. None of them change game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("it is not {0}'s turn")]
    NotYourTurn(crate::game::Side),
    #[error("the game is over")]
    GameOver,
    #[error("invalid target {0}")]
    InvalidTarget(Coord),
    #[error("no targetable cells left on the {0} board")]
    NoTargetsLeft(crate::game::Side),
    #[error(transparent)]
    Board(#[from] BoardError),
}
