use rand::Rng;

use crate::{ai::TargetingAi, board::Board, common::Coord, game::ShotReport};

/// Something that picks shots against an opponent board: the terminal user
/// or a [`TargetingAi`] standing in for them.
pub trait Player {
    /// Choose the next target. `None` means the player has quit or has
    /// nothing left to shoot at.
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, opponent: &Board) -> Option<Coord>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result<R: Rng + ?Sized>(&mut self, _report: &ShotReport, _rng: &mut R) {}
}

impl Player for TargetingAi {
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, opponent: &Board) -> Option<Coord> {
        self.choose_target(opponent, rng)
    }

    fn handle_shot_result<R: Rng + ?Sized>(&mut self, report: &ShotReport, rng: &mut R) {
        self.update_targeting(report.coord, report.outcome.is_hit(), rng);
        if report.sunk.is_some() {
            self.ship_sunk();
        }
    }
}
