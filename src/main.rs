//! Vitrine - An artwork catalogue builder for portfolio sites.

#![allow(dead_code)]

mod asset;
mod catalogue;
mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_catalogue};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { build_args } => {
            build_catalogue(&config, build_args.pretty).map(|_| ())
        }
        Commands::List { args } => cli::query::run_list(args, &config),
        Commands::Show { target, args } => cli::query::run_show(target, args, &config),
    }
}
