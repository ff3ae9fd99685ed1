use std::fmt;
use std::str::FromStr;

use super::CommandError;
use crate::surface::{BlockFormat, EditorSurface, InlineMark, ListKind};

/// Toolbar actions the editor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Bold,
    Italic,
    Underline,
    /// Convert the current block(s) to a heading
    Heading1,
    Heading2,
    Heading3,
    Blockquote,
    /// Insert a divider at the caret
    HorizontalRule,
    BulletList,
    NumberedList,
    /// Wrap the selection in a highlight span
    Highlight,
    Undo,
    Redo,
}

impl Command {
    /// Every command in toolbar order
    pub const ALL: [Command; 13] = [
        Command::Bold,
        Command::Italic,
        Command::Underline,
        Command::Heading1,
        Command::Heading2,
        Command::Heading3,
        Command::Blockquote,
        Command::HorizontalRule,
        Command::BulletList,
        Command::NumberedList,
        Command::Highlight,
        Command::Undo,
        Command::Redo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Bold => "bold",
            Command::Italic => "italic",
            Command::Underline => "underline",
            Command::Heading1 => "heading-1",
            Command::Heading2 => "heading-2",
            Command::Heading3 => "heading-3",
            Command::Blockquote => "blockquote",
            Command::HorizontalRule => "horizontal-rule",
            Command::BulletList => "bullet-list",
            Command::NumberedList => "numbered-list",
            Command::Highlight => "highlight",
            Command::Undo => "undo",
            Command::Redo => "redo",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            Command::Bold => "B",
            Command::Italic => "I",
            Command::Underline => "U",
            Command::Heading1 => "H1",
            Command::Heading2 => "H2",
            Command::Heading3 => "H3",
            Command::Blockquote => "Quote",
            Command::HorizontalRule => "Garis",
            Command::BulletList => "• Bullet",
            Command::NumberedList => "1. Number",
            Command::Highlight => "Highlight",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
        }
    }

    /// Undo and redo operate on the history itself and are never recorded
    pub fn is_history_operation(&self) -> bool {
        matches!(self, Command::Undo | Command::Redo)
    }

    /// Applies a content command to `surface`.
    ///
    /// Returns false when the surface was deliberately left untouched
    /// (highlight without a selection). Undo and redo are handled by the
    /// dispatcher and do nothing here.
    pub fn execute<S: EditorSurface + ?Sized>(&self, surface: &mut S) -> bool {
        match self {
            Command::Bold => surface.toggle_inline_style(InlineMark::Bold),
            Command::Italic => surface.toggle_inline_style(InlineMark::Italic),
            Command::Underline => surface.toggle_inline_style(InlineMark::Underline),
            Command::Heading1 => surface.set_block_format(BlockFormat::Heading(1)),
            Command::Heading2 => surface.set_block_format(BlockFormat::Heading(2)),
            Command::Heading3 => surface.set_block_format(BlockFormat::Heading(3)),
            Command::Blockquote => surface.set_block_format(BlockFormat::Blockquote),
            Command::HorizontalRule => surface.insert_divider(),
            Command::BulletList => surface.toggle_list_format(ListKind::Bullet),
            Command::NumberedList => surface.toggle_list_format(ListKind::Numbered),
            Command::Highlight => return surface.wrap_selection(),
            Command::Undo | Command::Redo => return false,
        }
        true
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let command = match name.trim() {
            "bold" => Command::Bold,
            "italic" => Command::Italic,
            "underline" => Command::Underline,
            "heading-1" | "h1" => Command::Heading1,
            "heading-2" | "h2" => Command::Heading2,
            "heading-3" | "h3" => Command::Heading3,
            "blockquote" | "quote" => Command::Blockquote,
            "horizontal-rule" | "hr" => Command::HorizontalRule,
            "bullet-list" | "insertUnorderedList" => Command::BulletList,
            "numbered-list" | "insertOrderedList" => Command::NumberedList,
            "highlight" => Command::Highlight,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}
