use crate::error::CommandResult;
use crate::output::PluginOutput;

/// Version reported by the `version` action; kept in step with `plugin.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reports the plugin version. Arguments are ignored.
pub fn report(_args: &[String]) -> CommandResult<PluginOutput> {
    Ok(PluginOutput::version(VERSION))
}
