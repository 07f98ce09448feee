//! Bundlemin - a manifest-driven JS/CSS bundler.

#![allow(dead_code)]

mod bundle;
mod cli;
mod config;
mod core;
mod logger;
mod manifest;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ToolConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = ToolConfig::load(cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_bundles(&config).map(|_| ()),
        Commands::Inspect { json, .. } => cli::inspect::inspect_bundles(&config, *json),
    }
}
