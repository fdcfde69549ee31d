use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use tracing::{error, info};

use one_line_scrabble::config::GameConfig;
use one_line_scrabble::game::GameSession;

/// Plays one game to the end: every turn lays the whole rack from square 0.
fn play_game(session: &mut GameSession) -> Result<(u32, u32)> {
    let mut turns = 0;
    session.restart();

    while !session.rack().is_empty() {
        let letters: Vec<char> = session.rack().letters().to_vec();
        for (square, letter) in letters.into_iter().take(session.board().width()).enumerate() {
            session
                .place(square, letter)
                .with_context(|| format!("placing {} on square {}", letter, square))?;
        }

        let score = session.submit_word()?;
        turns += 1;
        info!(turn = turns, score, total = session.total_score(), "Turn played");
    }

    Ok((turns, session.total_score()))
}

fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let games = env::args()
        .nth(1)
        .map(|arg| arg.parse::<u32>())
        .transpose()
        .context("game count must be a number")?
        .unwrap_or(1);

    let base = GameConfig::from_env();
    let base_seed = base.seed.clone().unwrap_or_else(|| "autoplay".to_string());
    info!("Starting autoplay for {} games", games);

    let mut best = 0;
    for game in 1..=games {
        // Same seed string, same deals
        let config = GameConfig {
            seed: Some(format!("{}:{}", base_seed, game)),
            ..base.clone()
        };
        let mut session = GameSession::from_config(&config)?;

        match play_game(&mut session) {
            Ok((turns, total)) => {
                info!("Game {} finished in {} turns with {} points", game, turns, total);
                best = best.max(total);
            }
            Err(e) => {
                error!("Game {} aborted: {}", game, e);
                std::process::exit(1);
            }
        }
    }

    info!("Autoplay finished, best score {}", best);
    Ok(())
}
