//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Create a `.langpackrc.json` configuration file
//! - `languages`: List languages with a catalog file
//! - `get`: Print one translated string
//! - `export`: Print the client-side translation script

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Languages(cmd)) => cmd.common.verbose,
            Some(Command::Get(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory containing <code>.json catalogs (overrides config file)
    #[arg(long)]
    pub lang_root: Option<PathBuf>,

    /// Baseline language loaded before the requested one (overrides config file)
    #[arg(long)]
    pub default_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Namespace of the string, e.g. General
    pub namespace: String,

    /// Key inside the namespace, e.g. Save
    pub key: String,

    /// Language to load (defaults to the configured default language)
    #[arg(short, long, env = "LANGPACK_LANGUAGE")]
    pub lang: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Language to load (defaults to the configured default language)
    #[arg(short, long, env = "LANGPACK_LANGUAGE")]
    pub lang: Option<String>,

    /// Extra fully-qualified keys to export, in addition to `clientSideKeys`
    /// Can be specified multiple times: --key General_Save --key General_Cancel
    #[arg(long = "key")]
    pub keys: Vec<String>,

    /// Fail if any exported key is missing from the catalog
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .langpackrc.json configuration file
    Init,
    /// List languages that have a catalog file
    Languages(LanguagesCommand),
    /// Print a single translated string
    Get(GetCommand),
    /// Print the client-side translation script
    Export(ExportCommand),
}
