//! Command-line interface.

pub mod builds;
pub mod capacity;
pub mod completions;
pub mod connect;
pub mod node;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::plane::GameLift;
use crate::error::Result;

/// liftkit - operator toolkit for GameLift fleets.
#[derive(Parser)]
#[command(
    name = "liftkit",
    about = "Operator toolkit for GameLift fleets",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (default: ./liftkit.toml if present)
    #[arg(short, long, global = true, env = "LIFTKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// AWS region, overriding config and environment
    #[arg(long, global = true)]
    pub region: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write temporary compute credentials for a fleet instance to env.sh
    Connect {
        /// The ID of the GameLift fleet
        fleet_id: String,
    },

    /// Manage builds
    Builds {
        #[command(subcommand)]
        action: BuildsAction,
    },

    /// Update the instance capacity of a fleet
    Capacity {
        /// ID of the GameLift fleet
        #[arg(long)]
        fleet_id: String,
        /// Desired number of instances
        #[arg(long)]
        instances: u32,
        /// Minimum size (defaults to --instances)
        #[arg(long)]
        min: Option<u32>,
        /// Maximum size (defaults to --instances)
        #[arg(long)]
        max: Option<u32>,
    },

    /// Download a Node.js runtime archive
    Node {
        /// Node.js version (e.g., v20.9.0)
        version: String,
        /// Platform suffix (e.g., linux-x64, darwin-arm64)
        #[arg(long)]
        platform: Option<String>,
        /// Directory to store the archive in
        #[arg(long)]
        target_dir: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Build subcommands.
#[derive(Subcommand)]
pub enum BuildsAction {
    /// List builds
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete every build
    Purge {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Loaded configuration with global overrides applied.
pub struct Context {
    pub config: Config,
}

impl Context {
    /// Load configuration and apply `--region`.
    pub fn load(config_path: Option<&Path>, region: Option<String>) -> Result<Self> {
        let mut config = Config::load(config_path)?;
        if region.is_some() {
            config.aws.region = region;
        }
        Ok(Self { config })
    }

    /// Construct the control-plane client for this invocation.
    pub fn plane(&self) -> Result<GameLift> {
        Ok(GameLift::connect(&self.config.aws)?)
    }
}

/// Execute a parsed command line.
///
/// Configuration is only loaded for commands that use it.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let Cli {
        config,
        region,
        command,
        ..
    } = cli;
    let ctx = || Context::load(config.as_deref(), region.clone());

    match command {
        Connect { fleet_id } => connect::execute(&ctx()?, &fleet_id),
        Builds { action } => match action {
            BuildsAction::List { json } => builds::list(&ctx()?, json),
            BuildsAction::Purge { yes } => builds::purge(&ctx()?, yes),
        },
        Capacity {
            fleet_id,
            instances,
            min,
            max,
        } => capacity::execute(&ctx()?, &fleet_id, instances, min, max),
        Node {
            version,
            platform,
            target_dir,
        } => node::execute(&ctx()?, &version, platform, target_dir),
        Completions { shell } => completions::execute(shell),
    }
}
