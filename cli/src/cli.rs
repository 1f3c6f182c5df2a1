//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::app::{AppContext, OutputFlags};
use crate::commands;

/// Local service stacks and package linting
#[derive(Parser)]
#[command(
    name = "stackctl",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lint the package
    #[command(long_about = commands::lint::LINT_LONG_ABOUT)]
    Lint,

    /// Manage the local stack
    #[command(subcommand)]
    Stack(commands::stack::StackCommand),

    /// Show version
    Version {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            quiet,
            no_color,
            verbose,
            command,
        } = self;
        crate::logging::init(verbose)?;
        let app = AppContext::new(&OutputFlags { no_color, quiet });

        match command {
            Command::Lint => commands::lint::run(&app).await,
            Command::Stack(cmd) => commands::stack::run(&app, cmd).await,
            Command::Version { json } => {
                commands::version::run(&app.build, json);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
