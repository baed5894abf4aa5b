//! Ship kinds and placed ship geometry.

use core::fmt;

use crate::common::{Coord, Delta};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Grows along the columns of its origin row.
    Horizontal,
    /// Grows along the rows of its origin column.
    Vertical,
}

impl Orientation {
    /// Unit step from one ship cell to the next.
    pub fn step(self) -> Delta {
        match self {
            Orientation::Horizontal => Delta::new(0, 1),
            Orientation::Vertical => Delta::new(1, 0),
        }
    }
}

/// The five ship classes. Name and length are fixed by the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// The standard fleet in descending length order.
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Submarine,
        ShipKind::Destroyer,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "carrier",
            ShipKind::Battleship => "battleship",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Submarine => "submarine",
            ShipKind::Destroyer => "destroyer",
        }
    }

    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of a ship in its board's placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

/// A ship placed on the board. Immutable once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    origin: Coord,
    orientation: Orientation,
}

impl Ship {
    pub fn new(kind: ShipKind, origin: Coord, orientation: Orientation) -> Self {
        Self {
            kind,
            origin,
            orientation,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship, origin first. Does not check the board
    /// bounds; coordinates saturate at `usize::MAX`.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let Delta { row: dr, col: dc } = self.orientation.step();
        (0..self.length()).map(move |i| Coord {
            row: self.origin.row.saturating_add(i * dr as usize),
            col: self.origin.col.saturating_add(i * dc as usize),
        })
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Whether every cell fits on a `size`×`size` grid.
    pub fn fits(&self, size: usize) -> bool {
        let Coord { row, col } = self.origin;
        if row >= size || col >= size {
            return false;
        }
        let room = match self.orientation {
            Orientation::Horizontal => size - col,
            Orientation::Vertical => size - row,
        };
        self.length() <= room
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn vertical_cells_run_down_the_column() {
        let ship = Ship::new(ShipKind::Battleship, Coord::new(0, 0), Orientation::Vertical);
        let cells: Vec<_> = ship.cells().collect();
        assert_eq!(
            cells,
            [(0, 0), (1, 0), (2, 0), (3, 0)].map(Coord::from).to_vec()
        );
        assert!(ship.contains(Coord::new(3, 0)));
        assert!(!ship.contains(Coord::new(4, 0)));
    }

    #[test]
    fn fits_checks_the_far_end() {
        let ship = Ship::new(ShipKind::Cruiser, Coord::new(4, 7), Orientation::Horizontal);
        assert!(ship.fits(10));
        let ship = Ship::new(ShipKind::Cruiser, Coord::new(4, 8), Orientation::Horizontal);
        assert!(!ship.fits(10));
    }

    #[test]
    fn far_off_origin_does_not_fit() {
        let ship = Ship::new(ShipKind::Destroyer, Coord::new(0, usize::MAX), Orientation::Horizontal);
        assert!(!ship.fits(10));
        assert!(!ship.contains(Coord::new(0, 0)));
        let ship = Ship::new(ShipKind::Carrier, Coord::new(usize::MAX - 1, 3), Orientation::Vertical);
        assert!(!ship.fits(10));
    }
}
