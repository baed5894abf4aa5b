use salvo::{
    Board, Coord, Game, GameConfig, GameError, Mode, Orientation, Outcome, Phase, ResetPolicy,
    SetupError, ShipKind, Side, TargetingAi, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Always yields zero, so every uniform choice picks the first candidate.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

fn board_with(kind: ShipKind, origin: Coord, orientation: Orientation) -> Board {
    let mut board = Board::new(10);
    board.place(kind, origin, orientation).unwrap();
    board
}

fn destroyer_game() -> Game {
    Game::from_boards(
        board_with(ShipKind::Destroyer, Coord::new(0, 0), Orientation::Horizontal),
        board_with(ShipKind::Destroyer, Coord::new(9, 8), Orientation::Horizontal),
        TargetingAi::default(),
    )
}

#[test]
fn new_game_populates_both_boards() {
    let mut rng = SmallRng::seed_from_u64(17);
    let game = Game::new(&GameConfig::default(), &mut rng).unwrap();
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.turns(), 0);
    assert_eq!(game.player_board().occupied_count(), TOTAL_SHIP_CELLS);
    assert_eq!(game.ai_board().occupied_count(), TOTAL_SHIP_CELLS);
    assert_eq!(game.ai().mode(), Mode::Hunt);
}

#[test]
fn ai_sinks_lone_destroyer_in_two_turns() {
    let mut game = destroyer_game();
    let mut rng = ZeroRng;

    let report = game.player_fire(Coord::new(5, 5)).unwrap();
    assert_eq!(report.outcome, Outcome::Miss);
    assert_eq!(game.phase(), Phase::AiTurn);

    let report = game.ai_turn(&mut rng).unwrap();
    assert_eq!(report.coord, Coord::new(0, 0));
    assert_eq!(report.outcome, Outcome::Hit);
    assert_eq!(report.sunk, None);
    assert_eq!(game.ai().mode(), Mode::Target);
    assert_eq!(game.ai().last_hit(), Some(Coord::new(0, 0)));
    assert_eq!(game.phase(), Phase::PlayerTurn);

    game.player_fire(Coord::new(5, 6)).unwrap();

    let report = game.ai_turn(&mut rng).unwrap();
    assert_eq!(report.coord, Coord::new(0, 1));
    assert_eq!(report.outcome, Outcome::Hit);
    assert_eq!(report.sunk, Some(ShipKind::Destroyer));
    assert!(game.player_board().all_ships_sunk());
    assert_eq!(
        game.phase(),
        Phase::GameOver {
            winner: Side::Ai,
            turns: 2
        }
    );
    assert_eq!(game.winner(), Some(Side::Ai));
}

#[test]
fn player_wins_by_sinking_the_ai_fleet() {
    let mut game = destroyer_game();
    let mut rng = SmallRng::seed_from_u64(4);

    game.player_fire(Coord::new(9, 8)).unwrap();
    game.ai_turn(&mut rng).unwrap();
    let report = game.player_fire(Coord::new(9, 9)).unwrap();
    assert_eq!(report.sunk, Some(ShipKind::Destroyer));
    assert_eq!(
        game.phase(),
        Phase::GameOver {
            winner: Side::Player,
            turns: 1
        }
    );
}

#[test]
fn invalid_player_input_is_ignored() {
    let mut game = destroyer_game();
    let before = game.ai_board().clone();

    assert_eq!(
        game.player_fire(Coord::new(10, 0)),
        Err(GameError::InvalidTarget(Coord::new(10, 0)))
    );
    assert_eq!(game.ai_board(), &before);
    assert_eq!(game.phase(), Phase::PlayerTurn);

    game.player_fire(Coord::new(3, 3)).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    game.ai_turn(&mut rng).unwrap();
    let before = game.ai_board().clone();
    assert_eq!(
        game.player_fire(Coord::new(3, 3)),
        Err(GameError::InvalidTarget(Coord::new(3, 3)))
    );
    assert_eq!(game.ai_board(), &before);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn turns_strictly_alternate() {
    let mut game = destroyer_game();
    let mut rng = SmallRng::seed_from_u64(8);

    assert_eq!(
        game.ai_turn(&mut rng).unwrap_err(),
        GameError::NotYourTurn(Side::Ai)
    );
    game.player_fire(Coord::new(4, 4)).unwrap();
    assert_eq!(
        game.player_fire(Coord::new(4, 5)).unwrap_err(),
        GameError::NotYourTurn(Side::Player)
    );
    assert_eq!(game.turns(), 0);
    game.ai_turn(&mut rng).unwrap();
    assert_eq!(game.turns(), 1);
}

#[test]
fn game_over_rejects_further_shots() {
    let mut game = destroyer_game();
    let mut rng = SmallRng::seed_from_u64(4);
    game.player_fire(Coord::new(9, 8)).unwrap();
    game.ai_turn(&mut rng).unwrap();
    game.player_fire(Coord::new(9, 9)).unwrap();
    assert!(game.is_over());

    assert_eq!(game.player_fire(Coord::new(0, 0)), Err(GameError::GameOver));
    assert_eq!(game.ai_turn(&mut rng), Err(GameError::GameOver));
    let mut stand_in = TargetingAi::default();
    assert_eq!(
        game.play_turn(&mut stand_in, &mut rng),
        Err(GameError::GameOver)
    );
}

#[test]
fn on_sunk_policy_returns_to_hunting_after_a_sink() {
    let mut player_board =
        board_with(ShipKind::Destroyer, Coord::new(0, 0), Orientation::Horizontal);
    player_board
        .place(ShipKind::Cruiser, Coord::new(5, 5), Orientation::Vertical)
        .unwrap();
    let mut game = Game::from_boards(
        player_board,
        board_with(ShipKind::Carrier, Coord::new(9, 0), Orientation::Horizontal),
        TargetingAi::new(ResetPolicy::OnSunk),
    );
    let mut rng = ZeroRng;

    game.player_fire(Coord::new(2, 2)).unwrap();
    game.ai_turn(&mut rng).unwrap();
    game.player_fire(Coord::new(2, 3)).unwrap();
    let report = game.ai_turn(&mut rng).unwrap();
    assert_eq!(report.sunk, Some(ShipKind::Destroyer));
    assert!(!game.is_over());
    assert_eq!(game.ai().mode(), Mode::Hunt);
}

#[test]
fn stand_in_ai_finishes_a_full_game() {
    for seed in [1u64, 2, 3] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = GameConfig::default();
        let mut game = Game::new(&config, &mut rng).unwrap();
        let mut stand_in = TargetingAi::new(config.reset_policy);

        let mut shots = 0;
        while !game.is_over() {
            game.play_turn(&mut stand_in, &mut rng).unwrap().unwrap();
            shots += 1;
            assert!(shots <= 200, "game took too many shots");
        }
        let winner = game.winner().unwrap();
        assert!(game.board(winner.opponent()).all_ships_sunk());
        assert!(!game.board(winner).all_ships_sunk());
    }
}

#[test]
fn new_game_rejects_invalid_config() {
    let config = GameConfig {
        reset_policy: ResetPolicy::Probabilistic { p: 1.5 },
        ..GameConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(matches!(
        Game::new(&config, &mut rng),
        Err(SetupError::Config(_))
    ));
}
