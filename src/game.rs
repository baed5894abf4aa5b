//! Turn sequencing between the human side and the targeting AI.

use core::fmt;

use log::{info, warn};
use rand::Rng;

use crate::{
    ai::TargetingAi,
    board::Board,
    common::{Coord, GameError, Outcome, SetupError},
    config::GameConfig,
    fleet::place_fleet,
    player::Player,
    ship::ShipKind,
};

/// One side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Side::Player => "player",
            Side::Ai => "AI",
        })
    }
}

/// Current phase. Setup happens inside [`Game::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    AiTurn,
    GameOver { winner: Side, turns: u32 },
}

/// A resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: Side,
    pub coord: Coord,
    pub outcome: Outcome,
    /// Ship sunk by this shot, if any.
    pub sunk: Option<ShipKind>,
}

/// A game session owning both boards and the AI.
#[derive(Debug, Clone)]
pub struct Game {
    player_board: Board,
    ai_board: Board,
    ai: TargetingAi,
    phase: Phase,
    turns: u32,
}

impl Game {
    /// Populate both boards with the configured fleet. The human side moves first.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, SetupError> {
        config.validate()?;
        let mut player_board = Board::new(config.board_size);
        let mut ai_board = Board::new(config.board_size);
        place_fleet(&mut player_board, &config.fleet, config.placement_attempts, rng)?;
        place_fleet(&mut ai_board, &config.fleet, config.placement_attempts, rng)?;
        Ok(Self::from_boards(
            player_board,
            ai_board,
            TargetingAi::new(config.reset_policy),
        ))
    }

    /// Start from prepared boards.
    pub fn from_boards(player_board: Board, ai_board: Board, ai: TargetingAi) -> Self {
        Self {
            player_board,
            ai_board,
            ai,
            phase: Phase::PlayerTurn,
            turns: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed AI turns.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// The human's own board.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The board the human fires at.
    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    pub fn ai(&self) -> &TargetingAi {
        &self.ai
    }

    fn expect_turn(&self, side: Side) -> Result<(), GameError> {
        match self.phase {
            Phase::GameOver { .. } => Err(GameError::GameOver),
            Phase::PlayerTurn if side == Side::Player => Ok(()),
            Phase::AiTurn if side == Side::Ai => Ok(()),
            _ => Err(GameError::NotYourTurn(side)),
        }
    }

    /// Resolve the human's shot at `coord` on the AI board. Rejected shots
    /// leave the game untouched.
    pub fn player_fire(&mut self, coord: Coord) -> Result<ShotReport, GameError> {
        self.expect_turn(Side::Player)?;
        if !self.ai_board.cell_is_targetable(coord) {
            warn!("ignoring player shot at {}: not a valid target", coord);
            return Err(GameError::InvalidTarget(coord));
        }
        let outcome = self.ai_board.resolve_shot(coord)?;
        let report = self.report(Side::Player, coord, outcome);
        self.finish_shot(Side::Player);
        Ok(report)
    }

    /// Let the AI choose, resolve and learn from one shot at the player board.
    pub fn ai_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ShotReport, GameError> {
        self.expect_turn(Side::Ai)?;
        let coord = self
            .ai
            .choose_target(&self.player_board, rng)
            .ok_or(GameError::NoTargetsLeft(Side::Player))?;
        let outcome = self.player_board.resolve_shot(coord)?;
        self.ai.update_targeting(coord, outcome.is_hit(), rng);
        let report = self.report(Side::Ai, coord, outcome);
        if report.sunk.is_some() {
            self.ai.ship_sunk();
        }
        self.turns += 1;
        self.finish_shot(Side::Ai);
        Ok(report)
    }

    /// Advance one phase: the human side's shot comes from `player`, the AI
    /// shoots on its own. Returns `Ok(None)` when the player quits.
    pub fn play_turn<P, R>(
        &mut self,
        player: &mut P,
        rng: &mut R,
    ) -> Result<Option<ShotReport>, GameError>
    where
        P: Player,
        R: Rng + ?Sized,
    {
        match self.phase {
            Phase::GameOver { .. } => Err(GameError::GameOver),
            Phase::AiTurn => self.ai_turn(rng).map(Some),
            Phase::PlayerTurn => {
                let Some(coord) = player.select_target(rng, &self.ai_board) else {
                    return Ok(None);
                };
                let report = self.player_fire(coord)?;
                player.handle_shot_result(&report, rng);
                Ok(Some(report))
            }
        }
    }

    fn report(&self, shooter: Side, coord: Coord, outcome: Outcome) -> ShotReport {
        let target = self.board(shooter.opponent());
        let sunk = match outcome {
            Outcome::Hit => target
                .ship_at(coord)
                .filter(|&id| target.is_sunk(id))
                .and_then(|id| target.ship(id))
                .map(|ship| ship.kind()),
            Outcome::Miss => None,
        };
        match outcome {
            Outcome::Hit => info!("{} hit at {}", shooter, coord),
            Outcome::Miss => info!("{} missed at {}", shooter, coord),
        }
        if let Some(kind) = sunk {
            info!("{} sank the {}", shooter, kind);
        }
        ShotReport {
            shooter,
            coord,
            outcome,
            sunk,
        }
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Ai => &self.ai_board,
        }
    }

    fn finish_shot(&mut self, shooter: Side) {
        if self.board(shooter.opponent()).all_ships_sunk() {
            info!("{} wins in {} turns!", shooter, self.turns);
            self.phase = Phase::GameOver {
                winner: shooter,
                turns: self.turns,
            };
        } else {
            self.phase = match shooter.opponent() {
                Side::Ai => Phase::AiTurn,
                Side::Player => Phase::PlayerTurn,
            };
        }
    }
}
