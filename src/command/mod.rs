mod commands;
mod context;
mod dispatcher;
mod history;

pub use commands::Command;
pub use context::CommandContext;
pub use dispatcher::{DispatchOutcome, dispatch, dispatch_named};
pub use history::{MAX_HISTORY, SnapshotHistory};

/// Result type for command operations
pub type CommandResult<T = ()> = Result<T, CommandError>;

/// Errors that can occur during command handling
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The toolbar sent a name no command answers to
    #[error("unknown editor command `{0}`")]
    UnknownCommand(String),
}
