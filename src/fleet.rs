//! Random fleet placement.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::{Coord, SetupError};
use crate::ship::{Orientation, ShipKind};

/// Place each ship of `fleet`, in order, at a random orientation and origin.
///
/// Origins are drawn from the whole grid, so a draw that runs off the edge
/// counts as a failed attempt just like an overlap does. Each ship gets
/// `attempts` draws; running out is fatal.
pub fn place_fleet<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &[ShipKind],
    attempts: usize,
    rng: &mut R,
) -> Result<(), SetupError> {
    let size = board.size();
    for &kind in fleet {
        let mut placed = false;
        for _ in 0..attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
            if let Ok(id) = board.place(kind, origin, orientation) {
                debug!("placed {} #{} at {} {:?}", kind, id.0, origin, orientation);
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(SetupError::PlacementExhausted { ship: kind, attempts });
        }
    }
    Ok(())
}
