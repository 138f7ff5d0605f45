use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "packwright.toml";

#[derive(Parser, Debug)]
#[command(
    name = "packwright",
    version,
    about = "Android, Windows installer and macOS bundle packaging driver"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CONFIG_FILE,
        help = "Pipeline configuration file (missing file means defaults)"
    )]
    pub config: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Project root; defaults to the config file's directory"
    )]
    pub project_dir: Option<PathBuf>,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (stderr)"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create, decorate, build and package the Android project.
    Android,
    /// Compile the Windows installer.
    Windows,
    /// Install bundling dependencies and build the macOS app bundle.
    Macos,
    /// Print the stages a pipeline would run without running them.
    Plan {
        #[arg(value_enum)]
        target: Target,
    },
    /// Check configured tools and inputs.
    Doctor {
        #[arg(long, value_enum)]
        target: Option<Target>,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Write a default configuration file.
    Init {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Android,
    Windows,
    Macos,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Android, Target::Windows, Target::Macos];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Android => "android",
            Target::Windows => "windows",
            Target::Macos => "macos",
        }
    }
}
