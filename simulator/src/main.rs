use anyhow::Context;
use clap::Parser;
use craps_execution::casino::{DiceSource, EntropyDice, GameRng};
use craps_execution::{Layer, LeaderboardStore};
use craps_simulator::{Api, JsonLeaderboard};
use craps_types::casino::Leaderboard;
use std::{path::PathBuf, sync::Arc};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Seed for reproducible dice (OS entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file backing the leaderboard (in memory when omitted)
    #[arg(short, long)]
    leaderboard: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Choose dice
    let dice: Box<dyn DiceSource + Send> = match args.seed {
        Some(seed) => {
            info!(seed, "using seeded dice");
            Box::new(GameRng::new(seed, 0))
        }
        None => Box::new(EntropyDice::new()),
    };

    // Open leaderboard
    let store: Box<dyn LeaderboardStore + Send> = match &args.leaderboard {
        Some(path) => Box::new(
            JsonLeaderboard::open(path)
                .with_context(|| format!("failed to open leaderboard {}", path.display()))?,
        ),
        None => Box::new(Leaderboard::default()),
    };

    let api = Api::new(Arc::new(Layer::new(dice, store)));
    let app = api.router();

    // Start server
    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("axum server error")?;

    Ok(())
}
