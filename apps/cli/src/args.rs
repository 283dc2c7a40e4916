//! # CLI Argument Definitions
//!
//! Command-line interface of the `uni` binary, built with `clap`.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uni::domain::options::{BuildCommand, Platform};

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "uni")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Build-time feature defines and web-invoke dispatch for uni projects")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to daily rolling files in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Print the __UNI_FEATURE_*__ defines of a project
    Features(FeaturesArgs),
    /// Decode and dispatch one web-invoke message
    Invoke(InvokeArgs),
}

#[derive(Debug, Args)]
pub struct FeaturesArgs {
    /// Project options file (toml, json or yaml); defaults to an optional `uni.*`
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding pages.json and manifest.json
    #[arg(short, long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Target platform (h5, app, mp-weixin, ...)
    #[arg(short, long)]
    pub platform: Option<Platform>,

    /// Bundler mode; only `build` trims nvue and navigation bar features
    #[arg(long = "command", default_value_t = BuildCommand::Serve)]
    pub build_command: BuildCommand,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON object
    Json,
    /// One `KEY=VALUE` line per define
    Define,
}

#[derive(Debug, Args)]
pub struct InvokeArgs {
    /// Message JSON, e.g. '{"name":"navigateTo","arg":{"url":"/pages/a"}}'
    #[arg(short, long)]
    pub message: String,

    /// Originating page id; repeat for several pages
    #[arg(long = "page-id", value_name = "ID", default_value = "0")]
    pub page_ids: Vec<u64>,
}
