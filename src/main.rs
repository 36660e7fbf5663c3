use std::io;

use clap::Parser;
use super_trunfo::{default_matchup, Game, GameConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Play one Super Trunfo round between Brazil and Japan
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut game = Game::new(default_matchup(), GameConfig::default(), stdin, stdout);

    match game.play() {
        Ok(report) => info!(verdict = %report.verdict(), "game finished"),
        Err(e) if e.is_end_of_input() => {
            // Closed input is a clean abort
            println!();
            info!("input closed, aborting round");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
