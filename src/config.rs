//! Run configuration for the `tenpin` binary.
//!
//! Environment variables provide defaults, command-line arguments override them.
//!
//! - `TENPIN_FORMAT`: `table` (default) or `json`
//! - `TENPIN_NO_COLOR` / `NO_COLOR`: any non-empty value disables colors
//!
//! ```text
//! tenpin                      # demo scenarios
//! tenpin demo --json
//! tenpin play 10 10 9 1 5 4
//! tenpin play 10,10,9,1 --no-color
//! ```

use anyhow::{anyhow, Result};

/// Showcase rolls for the "mixed game" demo scenario (final score 133).
pub const MIXED_GAME: [i32; 19] = [1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Play the built-in scenarios.
    Demo,
    /// Play the given rolls in order.
    Play(Vec<i32>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: RunMode,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Demo,
            format: OutputFormat::Table,
            color: true,
        }
    }
}

impl RunConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let format = lookup("TENPIN_FORMAT")
            .and_then(|s| OutputFormat::from_str(&s))
            .unwrap_or(OutputFormat::Table);

        let no_color = ["TENPIN_NO_COLOR", "NO_COLOR"]
            .iter()
            .any(|key| lookup(key).is_some_and(|v| !v.trim().is_empty()));

        Self {
            mode: RunMode::Demo,
            format,
            color: !no_color,
        }
    }
}

/// Overlay command-line arguments (without the program name) onto `base`.
pub fn parse_args(args: &[String], base: RunConfig) -> Result<RunConfig> {
    let mut config = base;
    let mut rest = args;

    match args.first().map(String::as_str) {
        Some("demo") => rest = &args[1..],
        Some("play") => {
            config.mode = RunMode::Play(Vec::new());
            rest = &args[1..];
        }
        _ => {}
    }

    for arg in rest {
        match arg.as_str() {
            "--json" => config.format = OutputFormat::Json,
            "--table" => config.format = OutputFormat::Table,
            "--no-color" => config.color = false,
            flag if flag.starts_with("--") => {
                return Err(anyhow!("unknown argument: {}", flag));
            }
            value => {
                let RunMode::Play(rolls) = &mut config.mode else {
                    return Err(anyhow!("unexpected argument: {} (use `play <pins>...`)", value));
                };
                for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                    let pins = part
                        .parse::<i32>()
                        .map_err(|_| anyhow!("play: invalid pin count: {}", part))?;
                    rolls.push(pins);
                }
            }
        }
    }

    if config.mode == RunMode::Play(Vec::new()) {
        return Err(anyhow!("play: expected at least one pin count"));
    }

    Ok(config)
}
