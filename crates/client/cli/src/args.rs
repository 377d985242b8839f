//! Command line arguments.
use std::path::PathBuf;
use std::time::Duration;

use arena_runtime::RuntimeConfig;
use clap::{Args, Parser, Subcommand};

/// Gladiator arena in the terminal
#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Fight your way through the Colosseum", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Content directory with player.ron, roster.ron, items.ron and config.toml
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Fixed market seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Pause between half-turns in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Leaderboard file
    #[arg(long, global = true)]
    pub ranking: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Shop, fight every adversary and record the result (default)
    Play(PlayArgs),

    /// Show the adversaries of the run
    Roster,

    /// Roll a market visit and list its offers
    Market,

    /// Print the leaderboard
    Ranking {
        /// Number of rows to show
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

#[derive(Args, Default)]
pub struct PlayArgs {
    /// Gladiator name (uppercase first letter, letters and spaces, at most 20)
    #[arg(long)]
    pub name: Option<String>,

    /// Item to buy before the first fight; repeat for several items
    #[arg(long = "buy", value_name = "ITEM")]
    pub buy: Vec<String>,

    /// Do not store the result on the leaderboard
    #[arg(long)]
    pub no_save: bool,
}

impl Cli {
    /// Applies command line overrides on top of the environment settings.
    pub fn runtime_config(&self, mut config: RuntimeConfig) -> RuntimeConfig {
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(seed) = self.seed {
            config.market_seed = Some(seed);
        }
        if let Some(millis) = self.delay_ms {
            config.turn_delay = Duration::from_millis(millis);
        }
        if let Some(path) = &self.ranking {
            config.ranking_path = Some(path.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment() {
        let cli = Cli::parse_from([
            "arena",
            "--seed",
            "7",
            "--delay-ms",
            "0",
            "play",
            "--buy",
            "Escudo Scutum",
            "--buy",
            "Casco de Pretoriano",
        ]);
        let config = cli.runtime_config(RuntimeConfig::default());

        assert_eq!(config.market_seed, Some(7));
        assert!(config.turn_delay.is_zero());
        match cli.command {
            Some(Command::Play(play)) => assert_eq!(play.buy.len(), 2),
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn play_is_optional() {
        let cli = Cli::parse_from(["arena"]);
        assert!(cli.command.is_none());
    }
}
