use crate::error::CommandResult;
use crate::output::PluginOutput;

pub const DEFAULT_NAME: &str = "World";

/// Greets the first argument, or [`DEFAULT_NAME`] when none is given.
pub fn message(args: &[String]) -> CommandResult<PluginOutput> {
    let name = args.first().map(String::as_str).unwrap_or(DEFAULT_NAME);
    Ok(PluginOutput::greeting(format!("Hello, {name}!")))
}
