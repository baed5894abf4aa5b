//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Coord, Game, GameConfig, GameError, Orientation, Outcome, Phase, Player, ShipKind,
    Side, TargetingAi, Visibility,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, parse_coord, print_player_view, render_board, CliPlayer};
