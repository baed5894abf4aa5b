//! Board state: a grid of tagged cells plus the ships placed on it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord, Outcome};
use crate::ship::{Orientation, Ship, ShipId, ShipKind};

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Occupied(ShipId),
    Hit,
    Miss,
}

impl Cell {
    /// Not yet fired upon.
    pub fn is_targetable(self) -> bool {
        matches!(self, Cell::Empty | Cell::Occupied(_))
    }
}

/// Whether a board is shown to its owner or to the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Reveal,
    Conceal,
}

/// What a renderer may show for a cell under a given [`Visibility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Open water, or an unresolved cell on a concealed board.
    Water,
    Ship(ShipKind),
    Hit,
    Miss,
}

/// Square grid of cells and the ships placed on it, in placement order.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty `size`×`size` board (no ships placed).
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord).then(|| coord.row * self.size + coord.col)
    }

    /// Cell state at `coord`, or `None` when out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Ships in placement order; a ship's position is its [`ShipId`].
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// The ship covering `coord`, whether or not that cell has been hit.
    pub fn ship_at(&self, coord: Coord) -> Option<ShipId> {
        if !self.in_bounds(coord) {
            return None;
        }
        self.ships
            .iter()
            .position(|s| s.contains(coord))
            .map(ShipId)
    }

    /// A ship is sunk once every one of its cells is `Hit`.
    pub fn is_sunk(&self, id: ShipId) -> bool {
        self.ship(id)
            .is_some_and(|ship| ship.cells().all(|c| self.cell(c) == Some(Cell::Hit)))
    }

    /// Place a ship of `kind` with its first cell at `origin`.
    pub fn place(
        &mut self,
        kind: ShipKind,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        let ship = Ship::new(kind, origin, orientation);
        let conflict = BoardError::PlacementConflict {
            ship: kind,
            origin,
            orientation,
        };
        if !ship.fits(self.size) {
            return Err(conflict);
        }
        if ship.cells().any(|c| self.cell(c) != Some(Cell::Empty)) {
            return Err(conflict);
        }
        let id = ShipId(self.ships.len());
        for c in ship.cells() {
            let i = c.row * self.size + c.col;
            self.cells[i] = Cell::Occupied(id);
        }
        self.ships.push(ship);
        Ok(id)
    }

    /// Fire at `coord`. Each cell can be resolved once; repeats are rejected
    /// without touching the board.
    pub fn resolve_shot(&mut self, coord: Coord) -> Result<Outcome, BoardError> {
        let i = self.index(coord).ok_or(BoardError::InvalidTarget(coord))?;
        let (next, outcome) = match self.cells[i] {
            Cell::Occupied(_) => (Cell::Hit, Outcome::Hit),
            Cell::Empty => (Cell::Miss, Outcome::Miss),
            Cell::Hit | Cell::Miss => return Err(BoardError::InvalidTarget(coord)),
        };
        self.cells[i] = next;
        Ok(outcome)
    }

    /// Returns `true` when no cell is still `Occupied`.
    pub fn all_ships_sunk(&self) -> bool {
        !self.cells.iter().any(|c| matches!(c, Cell::Occupied(_)))
    }

    pub fn cell_is_targetable(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(Cell::is_targetable)
    }

    /// Every coordinate of the grid in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord { row, col }))
    }

    /// Unresolved cells in row-major order.
    pub fn targetable_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(move |&c| self.cell_is_targetable(c))
    }

    /// Number of cells still `Occupied`.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Occupied(_)))
            .count()
    }

    /// Render-facing view of a cell. Concealed boards hide unhit ships.
    pub fn view(&self, coord: Coord, visibility: Visibility) -> Option<CellView> {
        let view = match self.cell(coord)? {
            Cell::Hit => CellView::Hit,
            Cell::Miss => CellView::Miss,
            Cell::Empty => CellView::Water,
            Cell::Occupied(id) => match visibility {
                Visibility::Conceal => CellView::Water,
                Visibility::Reveal => CellView::Ship(self.ships[id.0].kind()),
            },
        };
        Some(view)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {}, ships: {:?} }}", self.size, self.ships)?;
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.cells[row * self.size + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(_) => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
