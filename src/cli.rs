use std::env;

/// Invocation arguments for the hello-world plugin.
///
/// The plugin host passes the action and its arguments positionally, so
/// tokens are split by position only. `--` and hyphenated tokens are plain
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Action to run (`greet` or `version`).
    pub action: Option<String>,
    /// Arguments passed to the action.
    pub args: Vec<String>,
}

impl Args {
    /// Builds arguments from an argument vector that excludes the program name.
    pub fn from_arguments<I, S>(arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut arguments = arguments.into_iter().map(Into::into);
        let action = arguments.next();
        Self {
            action,
            args: arguments.collect(),
        }
    }
}

/// Process arguments without the program name. Non-UTF-8 text is
/// converted lossily.
pub fn env_arguments() -> Vec<String> {
    env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_action_from_arguments() {
        let args = Args::from_arguments(["greet", "Ada", "Lovelace"]);
        assert_eq!(args.action.as_deref(), Some("greet"));
        assert_eq!(args.args, vec!["Ada".to_string(), "Lovelace".to_string()]);
    }

    #[test]
    fn empty_vector_has_no_action() {
        let args = Args::from_arguments(Vec::<String>::new());
        assert_eq!(args, Args::default());
    }

    #[test]
    fn double_dash_is_an_ordinary_token() {
        let args = Args::from_arguments(["--"]);
        assert_eq!(args.action.as_deref(), Some("--"));

        let args = Args::from_arguments(["greet", "--", "Ada"]);
        assert_eq!(args.action.as_deref(), Some("greet"));
        assert_eq!(args.args, vec!["--".to_string(), "Ada".to_string()]);
    }
}
