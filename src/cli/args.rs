//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Bundlemin JS/CSS bundler CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Source root for manifest input paths (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Target root for bundle outputs (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub target: Option<PathBuf>,

    /// Config file path (default: bundlemin.toml)
    #[arg(short = 'C', long, default_value = "bundlemin.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Concatenate, minify and write all configured bundles
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Report the resolved bundle plan without writing anything
    #[command(visible_alias = "i")]
    Inspect {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Emit the report as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Shared arguments for Build and Inspect commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Release identifier stamped into bundle filenames.
    ///
    /// Overrides `build.release` from the config file. May contain the
    /// `datestamp` / `timestamp` substitution tokens.
    #[arg(short, long)]
    pub release_tag: Option<String>,

    /// Treat output path collisions as errors instead of overwriting
    #[arg(short = 'D', long)]
    pub deny_collisions: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_inspect(&self) -> bool {
        matches!(self.command, Commands::Inspect { .. })
    }
}
