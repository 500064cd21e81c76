//! Ten-pin scorekeeper (default binary).
//!
//! Plays the built-in demo scenarios, or a roll sequence from the command line,
//! and prints a scorecard for each game.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tenpin::config::{parse_args, OutputFormat, RunConfig, RunMode, MIXED_GAME};
use tenpin::core::{final_score, is_final, Game};
use tenpin::term::{ConsoleRenderer, Scorecard};
use tenpin::types::{ScoreEntry, MAX_ROLLS_PER_GAME, PIN_COUNT};

#[derive(Debug, Serialize)]
struct GameReport<'a> {
    scenario: &'a str,
    entries: Vec<ScoreEntry>,
    total: u32,
    complete: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args, RunConfig::from_env())?;

    let scenarios: Vec<(&str, Vec<i32>)> = match &config.mode {
        RunMode::Demo => vec![
            ("Perfect game", vec![PIN_COUNT as i32; 12]),
            ("Gutter game", vec![0; MAX_ROLLS_PER_GAME - 1]),
            ("Mixed game", MIXED_GAME.to_vec()),
        ],
        RunMode::Play(rolls) => vec![("Custom game", rolls.clone())],
    };

    let mut renderer = ConsoleRenderer::stdout(config.color);
    for (i, (name, rolls)) in scenarios.iter().enumerate() {
        let game = play(name, rolls)?;
        let entries = game.scores();

        match config.format {
            OutputFormat::Table => {
                if i > 0 {
                    renderer.blank()?;
                }
                renderer.draw_title(&format!("Scenario: {}", name))?;
                renderer.draw(&Scorecard::build(game.frames(), &entries))?;
            }
            OutputFormat::Json => {
                let report = GameReport {
                    scenario: name,
                    total: final_score(&entries),
                    complete: is_final(&entries),
                    entries,
                };
                println!("{}", serde_json::to_string(&report)?);
            }
        }
    }

    Ok(())
}

fn play(name: &str, rolls: &[i32]) -> Result<Game> {
    info!(scenario = name, rolls = rolls.len(), "playing");

    let mut game = Game::new();
    for (n, &pins) in rolls.iter().enumerate() {
        let accepted = game
            .roll(pins)
            .with_context(|| format!("{}: roll #{} ({} pins)", name, n + 1, pins))?;
        if !accepted {
            warn!(
                scenario = name,
                roll = n + 1,
                pins,
                frame = game.current_frame().number(),
                "roll rejected"
            );
        }
    }

    info!(scenario = name, score = game.score(), complete = game.is_complete(), "finished");
    Ok(game)
}
