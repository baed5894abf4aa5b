// Hunt/target shot selection against the opponent board.
//
// Hunting samples a checkerboard of unresolved cells, which is enough to
// intersect every ship of length two or more. After a hit the AI pursues the
// ship through the neighbours of its latest hit, and once two hits fix the
// ship's axis it keeps extending along it.

use alloc::vec::Vec;

use log::trace;
use rand::Rng;

use crate::{
    board::Board,
    common::{Coord, Delta},
    config::ResetPolicy,
};

/// Neighbour offsets of a hit, in the order they are considered.
const NEIGHBOURS: [Delta; 4] = [
    Delta::new(0, 1),
    Delta::new(0, -1),
    Delta::new(1, 0),
    Delta::new(-1, 0),
];

/// Targeting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No ship located; parity search.
    Hunt,
    /// Pursuing a located ship.
    Target,
}

/// Stateful computer opponent. State persists for the whole game.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetingAi {
    mode: Mode,
    last_hit: Option<Coord>,
    direction: Option<Delta>,
    hits: Vec<Coord>,
    reset_policy: ResetPolicy,
}

impl Default for TargetingAi {
    fn default() -> Self {
        Self::new(ResetPolicy::default())
    }
}

impl TargetingAi {
    pub fn new(reset_policy: ResetPolicy) -> Self {
        Self {
            mode: Mode::Hunt,
            last_hit: None,
            direction: None,
            hits: Vec::new(),
            reset_policy,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_hit(&self) -> Option<Coord> {
        self.last_hit
    }

    /// Axis of the pursued ship, once two hits have fixed it.
    pub fn direction(&self) -> Option<Delta> {
        self.direction
    }

    /// Hits recorded on the ship currently pursued, oldest first.
    pub fn hits(&self) -> &[Coord] {
        &self.hits
    }

    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    /// Pick the next cell to fire at on `board`. `None` only when every cell
    /// has already been resolved.
    pub fn choose_target<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Coord> {
        match (self.mode, self.last_hit) {
            (Mode::Target, Some(last)) => self.pursue(board, last, rng),
            _ => hunt(board, rng),
        }
    }

    fn pursue<R: Rng + ?Sized>(&self, board: &Board, last: Coord, rng: &mut R) -> Option<Coord> {
        if let Some(next) = self
            .direction
            .and_then(|d| last.offset(d))
            .filter(|&c| board.cell_is_targetable(c))
        {
            trace!("continuing along {:?} to {}", self.direction, next);
            return Some(next);
        }

        let around: Vec<Coord> = NEIGHBOURS
            .iter()
            .filter_map(|&d| last.offset(d))
            .filter(|&c| board.cell_is_targetable(c))
            .collect();
        if around.is_empty() {
            trace!("no open neighbours around {}, hunting", last);
            return hunt(board, rng);
        }
        Some(around[rng.random_range(0..around.len())])
    }

    /// Feed back the result of the last shot.
    pub fn update_targeting<R: Rng + ?Sized>(&mut self, coord: Coord, hit: bool, rng: &mut R) {
        if hit {
            self.mode = Mode::Target;
            self.last_hit = Some(coord);
            self.hits.push(coord);
            if let [first, second, ..] = self.hits.as_slice() {
                self.direction = Some(second.delta_from(*first));
            }
            return;
        }

        if self.mode == Mode::Target && self.hits.len() >= 2 {
            if let ResetPolicy::Probabilistic { p } = self.reset_policy {
                if rng.random_bool(p) {
                    trace!("giving up pursuit after miss at {}", coord);
                    self.reset();
                }
            }
        }
    }

    /// Report that the last hit sank a ship. Only [`ResetPolicy::OnSunk`]
    /// acts on it.
    pub fn ship_sunk(&mut self) {
        if self.reset_policy == ResetPolicy::OnSunk {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.mode = Mode::Hunt;
        self.last_hit = None;
        self.direction = None;
        self.hits.clear();
    }
}

/// Unresolved cells with even `row + col`, row-major.
pub fn hunt_candidates(board: &Board) -> Vec<Coord> {
    board
        .targetable_cells()
        .filter(|c| (c.row + c.col) % 2 == 0)
        .collect()
}

/// Uniform choice among parity candidates, or among all unresolved cells
/// once the checkerboard is exhausted.
pub fn hunt<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let mut candidates = hunt_candidates(board);
    if candidates.is_empty() {
        candidates = board.targetable_cells().collect();
    }
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
