//! framescrub CLI entry point

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "framescrub",
    version,
    about = "Frame-accurate timeline scrubbing over a media track",
    long_about = None
)]
struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive terminal scrubber
    Play {
        /// Track duration in seconds
        #[arg(long)]
        duration: Option<f64>,
        /// Frame rate
        #[arg(long)]
        fps: Option<f64>,
        /// Simulated seek latency in milliseconds
        #[arg(long, value_name = "MS")]
        latency_ms: Option<u64>,
    },
    /// Print the frame math for a track
    Inspect {
        /// Track duration in seconds
        #[arg(long)]
        duration: f64,
        /// Frame rate
        #[arg(long)]
        fps: Option<f64>,
        /// Show the frame displayed at this time (seconds)
        #[arg(long)]
        time: Option<f64>,
        /// Show the seek target for this frame (1-indexed)
        #[arg(long)]
        frame: Option<u32>,
        /// Show the frame under a pointer at this x coordinate
        #[arg(long, allow_hyphen_values = true)]
        pointer: Option<f64>,
        /// Left edge of the timeline, for --pointer
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        left: f64,
        /// Width of the timeline, for --pointer
        #[arg(long, default_value_t = 100.0)]
        width: f64,
    },
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config;

    match cli.command {
        Commands::Play {
            duration,
            fps,
            latency_ms,
        } => commands::play::handle(config_path.as_deref(), duration, fps, latency_ms),
        Commands::Inspect {
            duration,
            fps,
            time,
            frame,
            pointer,
            left,
            width,
        } => {
            let query = commands::inspect::Query {
                duration,
                fps,
                time,
                frame,
                pointer,
                left,
                width,
            };
            commands::inspect::handle(config_path.as_deref(), &query)
        }
        Commands::Config(ConfigCommands::Show) => {
            commands::config::handle_show(config_path.as_deref())
        }
        Commands::Config(ConfigCommands::Path) => {
            commands::config::handle_path(config_path.as_deref())
        }
        Commands::Config(ConfigCommands::Init { force }) => {
            commands::config::handle_init(config_path.as_deref(), force)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "framescrub", &mut std::io::stdout());
            Ok(())
        }
    }
}
