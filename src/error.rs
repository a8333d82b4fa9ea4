use thiserror::Error;

pub type CommandResult<T> = Result<T, PluginError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    #[error("No action specified")]
    NoAction,
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}
