#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::prelude::*;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "TOML file overriding board size, fleet or AI settings")]
        config: Option<PathBuf>,
    },
    /// Let a second targeting AI play the human side and print every shot.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "TOML file overriding board size, fleet or AI settings")]
        config: Option<PathBuf>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn load_config(path: Option<PathBuf>) -> anyhow::Result<GameConfig> {
    match path {
        Some(p) => Ok(GameConfig::load(&p)?),
        None => Ok(GameConfig::default()),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, config } => {
            let config = load_config(config)?;
            let mut rng = make_rng(seed);
            let mut game = Game::new(&config, &mut rng)?;
            let mut player = CliPlayer::stdin();
            while !game.is_over() {
                if game.phase() == Phase::PlayerTurn {
                    println!("\n=== YOUR TURN ===");
                    print_player_view(&game);
                }
                if game.play_turn(&mut player, &mut rng)?.is_none() {
                    println!("Game abandoned.");
                    return Ok(());
                }
            }
            finish(&game);
        }
        Commands::Watch { seed, config } => {
            let config = load_config(config)?;
            let mut rng = make_rng(seed);
            let mut game = Game::new(&config, &mut rng)?;
            let mut stand_in = TargetingAi::new(config.reset_policy);
            while !game.is_over() {
                let Some(report) = game.play_turn(&mut stand_in, &mut rng)? else {
                    break;
                };
                println!(
                    "{:>6} -> {} {:?}{}",
                    report.shooter,
                    report.coord,
                    report.outcome,
                    report
                        .sunk
                        .map(|k| format!(" (sank {})", k))
                        .unwrap_or_default()
                );
            }
            finish(&game);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn finish(game: &Game) {
    println!("\n=== GAME OVER ===");
    print_player_view(game);
    if let Phase::GameOver { winner, turns } = game.phase() {
        match winner {
            Side::Player => println!("\nVICTORY! You sank every enemy ship in {} turns.", turns),
            Side::Ai => println!("\nDEFEAT. The AI sank your fleet in {} turns.", turns),
        }
    }
}
