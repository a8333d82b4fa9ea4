pub mod greet;
pub mod version;

use crate::cli::Args;
use crate::error::{CommandResult, PluginError};
use crate::output::PluginOutput;

/// Dispatches execution to the handler named by the action.
///
/// Input errors are folded into [`PluginOutput::Error`]; this never fails.
pub fn execute(args: &Args) -> PluginOutput {
    match route(args) {
        Ok(output) => output,
        Err(err) => {
            tracing::debug!(error = %err, "action rejected");
            err.into()
        }
    }
}

fn route(args: &Args) -> CommandResult<PluginOutput> {
    let action = args.action.as_deref().ok_or(PluginError::NoAction)?;
    tracing::debug!(action, arg_count = args.args.len(), "dispatching action");

    match action {
        "greet" => greet::message(&args.args),
        "version" => version::report(&args.args),
        other => Err(PluginError::UnknownAction(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_action_is_an_error() {
        let output = execute(&Args::default());
        assert_eq!(output, PluginOutput::error("No action specified"));
    }

    #[test]
    fn routes_greet() {
        let output = execute(&Args::from_arguments(["greet", "Ada"]));
        assert_eq!(output, PluginOutput::greeting("Hello, Ada!"));
    }

    #[test]
    fn routes_version_ignoring_arguments() {
        let output = execute(&Args::from_arguments(["version", "--verbose"]));
        assert_eq!(output, PluginOutput::version("0.1.0"));
    }

    #[test]
    fn unknown_action_is_reported_verbatim() {
        let output = execute(&Args::from_arguments(["Greet"]));
        assert_eq!(output, PluginOutput::error("Unknown action: Greet"));
    }

    #[test]
    fn route_surfaces_typed_errors() {
        assert_eq!(route(&Args::default()), Err(PluginError::NoAction));
        assert_eq!(
            route(&Args::from_arguments(["foo"])),
            Err(PluginError::UnknownAction("foo".into()))
        );
    }
}
