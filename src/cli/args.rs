//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Vitrine artwork catalogue CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: vitrine.toml)
    #[arg(short = 'C', long, global = true, default_value = "vitrine.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan the image directory and write the catalogue export
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print every catalogue entry as JSON, in catalogue order
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Print the entry for a slug or a detail page path (e.g. `/art/sunset`)
    #[command(visible_alias = "s")]
    Show {
        /// Slug (`sunset-2`) or page path (`/art/sunset-2/`)
        target: String,

        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Image directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub assets: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// URL prefix under which images are served (e.g. `/assets`)
    #[arg(short = 'U', long = "url-prefix")]
    pub url_prefix: Option<String>,

    /// Pretty-print the JSON export
    #[arg(short, long)]
    pub pretty: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Shared arguments of the `list` and `show` commands
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether verbose output was requested for the current command.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Build { build_args } => build_args.verbose,
            Commands::List { args } | Commands::Show { args, .. } => args.verbose,
        }
    }
}
