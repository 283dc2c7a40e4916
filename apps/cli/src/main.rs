#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{AppCommands, Cli};
use crate::handlers::{features, invoke};
use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use uni_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(true)
        .ansi(std::io::stderr().is_terminal())
        .level(Logger::level_for_verbosity(cli.verbose));
    let _logger = match &cli.log_dir {
        Some(dir) => builder.path(dir).init()?,
        None => builder.init()?,
    };

    match cli.command {
        AppCommands::Features(args) => features::print_features(&args)?,
        AppCommands::Invoke(args) => invoke::dispatch_message(&args)?,
    }

    Ok(())
}
