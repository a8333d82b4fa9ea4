use std::io;

use anyhow::Context;

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub type Result<T> = anyhow::Result<T>;

/// Rendered outcome of a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// One line of JSON, without the trailing newline.
    pub output: String,
    pub exit_code: i32,
}

/// Runs an action for an argument vector that excludes the program name.
///
/// Input errors are part of the rendered output; the `Err` case only covers
/// a failure of the JSON encoder itself.
pub fn dispatch<I, S>(arguments: I) -> Result<Dispatch>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args = cli::Args::from_arguments(arguments);
    let result = commands::execute(&args);
    let output = result.to_line().context("failed to encode result")?;
    Ok(Dispatch {
        output,
        exit_code: result.exit_code(),
    })
}

/// Entry point used by the binary crate. Returns the process exit code.
pub fn run() -> Result<i32> {
    init_tracing();

    let result = dispatch(cli::env_arguments())?;
    output::emit(&mut io::stdout().lock(), &result.output).context("failed to write result")?;
    Ok(result.exit_code)
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    });
}
