//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Scan Go sources for `$` command directives and asset directories
//! - `init`: Initialize gosift configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// The scan result as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Go file, directory, or inline Go source (default: `sourceRoot` from config)
    pub source: Option<String>,

    /// Read Go source from standard input
    #[arg(long, conflicts_with = "source")]
    pub stdin: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Configuration file (default: nearest .gosiftrc.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find `$` command directives and HandleDir asset directories in Go sources
    Scan(ScanCommand),
    /// Initialize a new .gosiftrc.json configuration file
    Init,
}
