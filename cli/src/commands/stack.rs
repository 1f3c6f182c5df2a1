//! `stackctl stack` — manage the local service stack.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::services::install::InstallOutcome;
use crate::commands::logs::{self, DumpArgs, LogsArgs};
use crate::domain::StackOptions;
use crate::domain::stack::DEFAULT_STACK_VERSION;

/// Stack subcommands.
#[derive(Subcommand)]
pub enum StackCommand {
    /// Boot up the stack
    Up(UpArgs),

    /// Take down the stack
    Down,

    /// Build images of the stack services
    Build(ServicesArgs),

    /// Pull the stack images for a stack version
    Update(UpdateArgs),

    /// Print the logs of one stack service
    Logs(LogsArgs),

    /// Write the logs of every stack service to files
    Dump(DumpArgs),
}

/// Service selection shared by the stack subcommands.
#[derive(Args, Debug, Default)]
pub struct ServicesArgs {
    /// Services to operate on (comma-separated); all services when omitted
    #[arg(long, value_delimiter = ',')]
    pub services: Vec<String>,
}

/// Stack version selection.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Stack version whose images are used
    #[arg(long, default_value = DEFAULT_STACK_VERSION)]
    pub stack_version: String,
}

/// Arguments for `stack up`.
#[derive(Args, Debug)]
pub struct UpArgs {
    /// Run the stack in the background
    #[arg(short, long)]
    pub daemon: bool,

    #[command(flatten)]
    pub services: ServicesArgs,

    #[command(flatten)]
    pub version: VersionArgs,
}

/// Arguments for `stack update`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub services: ServicesArgs,

    #[command(flatten)]
    pub version: VersionArgs,
}

/// Run a stack subcommand.
///
/// # Errors
///
/// Returns an error if the stack resources cannot be installed or the
/// lifecycle operation fails.
pub async fn run(app: &AppContext, cmd: StackCommand) -> Result<ExitCode> {
    if app.ensure_installed()? == InstallOutcome::Installed {
        app.output.info("Stack resources installed");
    }
    let stack = app.stack();
    let ctx = &app.output;

    match cmd {
        StackCommand::Up(args) => {
            let options = StackOptions {
                services: args.services.services,
                stack_version: args.version.stack_version,
                daemon_mode: args.daemon,
            };
            ctx.info(&format!(
                "Boot up the stack (version {})",
                options.stack_version
            ));
            stack.up(&options).await?;
            if options.daemon_mode {
                ctx.success("Stack is running");
            }
        }
        StackCommand::Down => {
            ctx.info("Take down the stack");
            stack.down().await?;
            ctx.success("Stack is down");
        }
        StackCommand::Build(args) => {
            let options = StackOptions {
                services: args.services,
                ..StackOptions::default()
            };
            ctx.info("Build the stack services");
            stack.build(&options).await?;
            ctx.success("Stack services built");
        }
        StackCommand::Update(args) => {
            let options = StackOptions {
                services: args.services.services,
                stack_version: args.version.stack_version,
                daemon_mode: false,
            };
            ctx.info(&format!(
                "Update the stack images (version {})",
                options.stack_version
            ));
            stack.pull(&options).await?;
            ctx.success("Stack images updated");
        }
        StackCommand::Logs(args) => logs::print(&stack, &args).await?,
        StackCommand::Dump(args) => logs::dump(app, &stack, &args).await?,
    }

    Ok(ExitCode::SUCCESS)
}
