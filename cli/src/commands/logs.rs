//! `stack logs` and `stack dump` — read service logs from the stack.

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::{AppContext, ProductionStack};
use crate::application::ports::LocalFs as _;

/// Arguments for `stack logs`.
#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Service whose logs are printed
    pub service: String,
}

/// Arguments for `stack dump`.
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Directory the log files are written to
    #[arg(long, default_value = "stack-dump")]
    pub output: PathBuf,
}

/// Write the raw logs of one service to stdout.
///
/// # Errors
///
/// Returns an error if the logs cannot be read or written.
pub async fn print(stack: &ProductionStack, args: &LogsArgs) -> Result<()> {
    let out = stack.logs(&args.service).await?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&out).context("writing logs to stdout")?;
    stdout.flush().context("writing logs to stdout")
}

/// Write `<service>.log` for every stack service into the output directory.
///
/// # Errors
///
/// Returns an error if any service's logs cannot be read or written.
pub async fn dump(app: &AppContext, stack: &ProductionStack, args: &DumpArgs) -> Result<()> {
    let dumps = stack.dump().await?;
    app.fs.create_dir_all(&args.output)?;
    for (service, out) in dumps {
        let path = args.output.join(format!("{service}.log"));
        app.fs.write(&path, &out)?;
        app.output.kv(&service, &path.display().to_string());
    }
    app.output
        .success(&format!("Logs written to {}", args.output.display()));
    Ok(())
}
