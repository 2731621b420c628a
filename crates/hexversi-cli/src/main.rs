//! Hexversi terminal front end.
//!
//! Seats two players (human or computer) at a hexagonal Reversi board and
//! plays the game out on stdin/stdout.

use anyhow::Context;
use clap::Parser;
use hexversi_core::{
    Color, ComputerPlayer, GameListener, GameState, Player, PlayerKind, Session, SessionOutcome,
    StrategyKind, TextView, DEFAULT_RADIUS,
};
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod human;

use human::HumanPlayer;

#[derive(Parser, Debug)]
#[command(name = "hexversi")]
#[command(about = "Reversi on a hexagonal board")]
struct Cli {
    /// Board radius (distance from the center to each edge)
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    radius: u32,

    /// Who plays Black: human or computer
    #[arg(long, default_value = "computer")]
    black: PlayerKind,

    /// Strategy for a computer Black player
    #[arg(long, default_value = "composite")]
    black_strategy: StrategyKind,

    /// Who plays White: human or computer
    #[arg(long, default_value = "human")]
    white: PlayerKind,

    /// Strategy for a computer White player
    #[arg(long, default_value = "composite")]
    white_strategy: StrategyKind,

    /// Print the final position as JSON
    #[arg(long)]
    json: bool,
}

/// Prints turn changes and the final result
struct ConsoleListener;

impl GameListener for ConsoleListener {
    fn on_player_turn(&mut self, player: Color) {
        info!("{} to move", player);
    }

    fn on_game_over(&mut self, winner: Option<Color>) {
        match winner {
            Some(color) => println!("Game over: {} wins", color),
            None => println!("Game over: tie"),
        }
    }
}

fn seat(kind: &PlayerKind, color: Color, strategy: StrategyKind) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(color, io::stdin().lock(), io::stdout())),
        PlayerKind::Computer => Box::new(ComputerPlayer::new(color, strategy)),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let game = GameState::new(cli.radius).context("could not create board")?;
    info!(
        radius = cli.radius,
        black = %cli.black,
        white = %cli.white,
        "Starting Hexversi"
    );

    let black = seat(&cli.black, Color::Black, cli.black_strategy);
    let white = seat(&cli.white, Color::White, cli.white_strategy);
    let mut session = Session::new(game, black, white);

    let outcome = session
        .run(&mut ConsoleListener)
        .context("game stopped on a rule violation")?;

    println!("\n{}\n", TextView::new(session.game().board()));
    match outcome {
        SessionOutcome::Finished { scores, .. } | SessionOutcome::Stalled { scores } => {
            println!("Black {} - White {}", scores.black, scores.white);
        }
        SessionOutcome::Abandoned { by } => println!("{} left the game", by),
    }
    if let SessionOutcome::Stalled { .. } = outcome {
        println!("Both players kept passing; game stopped");
    }

    if cli.json {
        let json = session
            .game()
            .snapshot()
            .to_json()
            .context("could not serialize final position")?;
        println!("{}", json);
    }

    Ok(())
}
