use rand::{rngs::SmallRng, SeedableRng};
use salvo::{Game, GameConfig, Side, TargetingAi};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::default();
    let mut game = Game::new(&config, &mut rng)?;
    let mut stand_in = TargetingAi::new(config.reset_policy);

    let mut shots = [0usize; 2];
    let mut hits = [0usize; 2];
    while !game.is_over() {
        let Some(report) = game.play_turn(&mut stand_in, &mut rng)? else {
            break;
        };
        let i = match report.shooter {
            Side::Player => 0,
            Side::Ai => 1,
        };
        shots[i] += 1;
        hits[i] += usize::from(report.outcome.is_hit());
    }

    let result = json!({
        "seed": seed,
        "player": {"shots": shots[0], "hits": hits[0]},
        "ai": {"shots": shots[1], "hits": hits[1]},
        "winner": game.winner(),
        "turns": game.turns(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
