use super::{Command, CommandContext, CommandResult};
use crate::surface::EditorSurface;

/// What a dispatched command did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The surface changed and a snapshot was recorded
    Recorded,
    /// Nothing changed (collapsed selection, empty stacks, identical content)
    Unchanged,
    /// The surface was stepped back one snapshot
    Undone,
    /// The surface was stepped forward one snapshot
    Redone,
}

/// Runs `command` against the context's surface.
///
/// Content commands are followed by the content-changed hook, so every
/// mutation is captured the same way. Undo and redo move through the
/// history and apply the resulting state to the surface.
pub fn dispatch<S: EditorSurface + ?Sized>(
    command: Command,
    ctx: &mut CommandContext<'_, S>,
) -> DispatchOutcome {
    match command {
        Command::Undo => {
            let current = ctx.surface.snapshot();
            match ctx.history.undo(&current) {
                Some(previous) => {
                    ctx.surface.restore(&previous);
                    ctx.record();
                    DispatchOutcome::Undone
                }
                None => {
                    log::debug!("undo ignored: history is empty");
                    DispatchOutcome::Unchanged
                }
            }
        }
        Command::Redo => {
            let current = ctx.surface.snapshot();
            match ctx.history.redo(&current) {
                Some(next) => {
                    ctx.surface.restore(&next);
                    ctx.record();
                    DispatchOutcome::Redone
                }
                None => {
                    log::debug!("redo ignored: nothing to redo");
                    DispatchOutcome::Unchanged
                }
            }
        }
        command => {
            if !command.execute(&mut *ctx.surface) {
                log::debug!("{command} ignored: no selection");
                return DispatchOutcome::Unchanged;
            }
            if ctx.record() {
                DispatchOutcome::Recorded
            } else {
                DispatchOutcome::Unchanged
            }
        }
    }
}

/// Parses a toolbar command name and dispatches it
pub fn dispatch_named<S: EditorSurface + ?Sized>(
    name: &str,
    ctx: &mut CommandContext<'_, S>,
) -> CommandResult<DispatchOutcome> {
    let command = name.parse::<Command>()?;
    Ok(dispatch(command, ctx))
}
