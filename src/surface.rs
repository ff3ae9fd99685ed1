//! The editable surface behind the toolbar.
//!
//! [`EditorSurface`] is the capability set the command dispatcher relies on;
//! [`DocumentSurface`] implements it over a [`StructuredContent`] value.

use crate::content::{Block, BlockKind, InlineStyle, StructuredContent};
use crate::selection::{Position, Selection};
use crate::state::EditorState;

/// Inline marks toggled by the bold/italic/underline buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineMark {
    Bold,
    Italic,
    Underline,
}

impl InlineMark {
    fn is_set(&self, style: &InlineStyle) -> bool {
        match self {
            InlineMark::Bold => style.bold,
            InlineMark::Italic => style.italic,
            InlineMark::Underline => style.underline,
        }
    }

    fn set(&self, style: &mut InlineStyle, on: bool) {
        match self {
            InlineMark::Bold => style.bold = on,
            InlineMark::Italic => style.italic = on,
            InlineMark::Underline => style.underline = on,
        }
    }
}

/// Block formats that replace the kind of the current block(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFormat {
    Heading(u8),
    Blockquote,
}

impl BlockFormat {
    fn kind(&self) -> BlockKind {
        match self {
            BlockFormat::Heading(level) => BlockKind::Heading((*level).clamp(1, 3)),
            BlockFormat::Blockquote => BlockKind::Blockquote,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    fn kind(&self) -> BlockKind {
        BlockKind::ListItem {
            ordered: matches!(self, ListKind::Numbered),
        }
    }
}

/// Editing capabilities of a rich-text surface.
///
/// Commands act on the current selection. When the surface has no
/// selection, block-level commands apply to the block at the start of the
/// document and inline commands do nothing.
pub trait EditorSurface {
    fn content(&self) -> &StructuredContent;

    /// Replaces the whole content; the selection is clamped into it
    fn set_content(&mut self, content: StructuredContent);

    fn selection(&self) -> Option<Selection>;

    fn set_selection(&mut self, selection: Option<Selection>);

    /// Toggles `mark` over a non-collapsed selection
    fn toggle_inline_style(&mut self, mark: InlineMark);

    fn set_block_format(&mut self, format: BlockFormat);

    /// Inserts a divider at the caret
    fn insert_divider(&mut self);

    fn toggle_list_format(&mut self, kind: ListKind);

    /// Wraps a non-empty selection in a highlight. Returns false when there
    /// was nothing to wrap.
    fn wrap_selection(&mut self) -> bool;

    /// Types `text` at the caret, replacing the selection
    fn insert_text(&mut self, text: &str);

    /// Backspace
    fn delete_backward(&mut self);

    fn snapshot(&self) -> EditorState {
        EditorState::capture(self.content())
    }

    fn restore(&mut self, state: &EditorState) {
        self.set_content(state.content().clone());
    }
}

/// [`EditorSurface`] over an owned [`StructuredContent`]
#[derive(Debug, Clone, Default)]
pub struct DocumentSurface {
    content: StructuredContent,
    selection: Option<Selection>,
}

impl DocumentSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: StructuredContent) -> Self {
        Self {
            content,
            selection: None,
        }
    }

    /// The caret, clamped into the content
    pub fn caret(&self) -> Position {
        self.clamp(self.selection.map(|s| s.focus).unwrap_or_default())
    }

    fn clamp(&self, position: Position) -> Position {
        let Some(last) = self.content.blocks.len().checked_sub(1) else {
            return Position::default();
        };
        let block = position.block.min(last);
        let offset = position.offset.min(self.content.blocks[block].len());
        Position::new(block, offset)
    }

    fn move_caret(&mut self, to: Position) {
        self.selection = Some(Selection::caret(to));
    }

    /// The ordered, clamped selection if it is not collapsed
    fn expanded_selection(&self) -> Option<(Position, Position)> {
        let selection = self.selection?;
        let (start, end) = selection.ordered();
        let (start, end) = (self.clamp(start), self.clamp(end));
        (start != end).then_some((start, end))
    }

    /// Per-block char ranges covered by `start..end`
    fn spans(&self, start: Position, end: Position) -> Vec<(usize, usize, usize)> {
        (start.block..=end.block)
            .map(|index| {
                let from = if index == start.block { start.offset } else { 0 };
                let to = if index == end.block {
                    end.offset
                } else {
                    self.content.blocks[index].len()
                };
                (index, from, to)
            })
            .filter(|(_, from, to)| from < to)
            .collect()
    }

    /// Indices of the blocks touched by the selection, or the caret block
    fn touched_blocks(&self) -> std::ops::RangeInclusive<usize> {
        match self.selection {
            Some(selection) => {
                let (start, end) = selection.ordered();
                self.clamp(start).block..=self.clamp(end).block
            }
            None => {
                let caret = self.caret();
                caret.block..=caret.block
            }
        }
    }

    fn ensure_block(&mut self) {
        if self.content.blocks.is_empty() {
            self.content.blocks.push(Block::new(BlockKind::Paragraph));
        }
    }

    /// Deletes the selected content and collapses the caret to its start.
    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.expanded_selection() else {
            return false;
        };
        let blocks = &mut self.content.blocks;
        if start.block == end.block {
            blocks[start.block].remove_range(start.offset, end.offset);
        } else {
            let tail = blocks[end.block].split_off(end.offset);
            blocks[start.block].split_off(start.offset);
            blocks.drain(start.block + 1..=end.block);
            let head = &mut blocks[start.block];
            if head.kind.is_divider() {
                head.kind = BlockKind::Paragraph;
            }
            head.runs.extend(tail);
            head.normalize();
        }
        self.move_caret(start);
        true
    }

    /// Splits the block at `at` (Enter) and returns the start of the new block.
    fn split_block(&mut self, at: Position) -> Position {
        let block = &mut self.content.blocks[at.block];
        let tail = block.split_off(at.offset);
        let kind = match block.kind {
            BlockKind::Heading(_) | BlockKind::Divider => BlockKind::Paragraph,
            other => other,
        };
        self.content
            .blocks
            .insert(at.block + 1, Block::with_runs(kind, tail));
        Position::new(at.block + 1, 0)
    }
}

impl EditorSurface for DocumentSurface {
    fn content(&self) -> &StructuredContent {
        &self.content
    }

    fn set_content(&mut self, content: StructuredContent) {
        self.content = content;
        self.selection = self
            .selection
            .map(|s| Selection::new(self.clamp(s.anchor), self.clamp(s.focus)));
    }

    fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection.map(|s| Selection::new(self.clamp(s.anchor), self.clamp(s.focus)));
    }

    fn toggle_inline_style(&mut self, mark: InlineMark) {
        let Some((start, end)) = self.expanded_selection() else {
            return;
        };
        let spans = self.spans(start, end);
        if spans.is_empty() {
            return;
        }
        let already = spans.iter().all(|&(index, from, to)| {
            self.content.blocks[index].all_in_range(from, to, |style| mark.is_set(style))
        });
        for (index, from, to) in spans {
            self.content.blocks[index].map_range(from, to, |style| mark.set(style, !already));
        }
    }

    fn set_block_format(&mut self, format: BlockFormat) {
        self.ensure_block();
        let kind = format.kind();
        for index in self.touched_blocks() {
            let block = &mut self.content.blocks[index];
            if !block.kind.is_divider() {
                block.kind = kind;
            }
        }
    }

    fn insert_divider(&mut self) {
        self.delete_selection();
        if self.content.blocks.is_empty() {
            self.content.blocks.push(Block::divider());
            self.content.blocks.push(Block::new(BlockKind::Paragraph));
            self.move_caret(Position::new(1, 0));
            return;
        }

        let caret = self.caret();
        let index = caret.block;
        let block = &mut self.content.blocks[index];

        if block.kind.is_divider() || caret.offset >= block.len() {
            self.content.blocks.insert(index + 1, Block::divider());
            if index + 2 >= self.content.blocks.len() {
                self.content.blocks.push(Block::new(BlockKind::Paragraph));
            }
            self.move_caret(Position::new(index + 2, 0));
        } else if caret.offset == 0 {
            self.content.blocks.insert(index, Block::divider());
            self.move_caret(Position::new(index + 1, 0));
        } else {
            let tail = block.split_off(caret.offset);
            let kind = block.kind;
            self.content.blocks.insert(index + 1, Block::divider());
            self.content
                .blocks
                .insert(index + 2, Block::with_runs(kind, tail));
            self.move_caret(Position::new(index + 2, 0));
        }
    }

    fn toggle_list_format(&mut self, kind: ListKind) {
        self.ensure_block();
        let target = kind.kind();
        let indices: Vec<usize> = self
            .touched_blocks()
            .filter(|&index| !self.content.blocks[index].kind.is_divider())
            .collect();
        let all_listed = !indices.is_empty()
            && indices
                .iter()
                .all(|&index| self.content.blocks[index].kind == target);
        for index in indices {
            self.content.blocks[index].kind = if all_listed {
                BlockKind::Paragraph
            } else {
                target
            };
        }
    }

    fn wrap_selection(&mut self) -> bool {
        let Some((start, end)) = self.expanded_selection() else {
            return false;
        };
        let spans = self.spans(start, end);
        if spans.is_empty() {
            return false;
        }
        for (index, from, to) in spans {
            self.content.blocks[index].map_range(from, to, |style| {
                style.highlight = style.highlight.saturating_add(1)
            });
        }
        true
    }

    fn insert_text(&mut self, text: &str) {
        self.delete_selection();
        self.ensure_block();
        let mut caret = self.caret();
        if self.content.blocks[caret.block].kind.is_divider() {
            self.content
                .blocks
                .insert(caret.block + 1, Block::new(BlockKind::Paragraph));
            caret = Position::new(caret.block + 1, 0);
        }

        for (line_index, line) in text.split('\n').enumerate() {
            if line_index > 0 {
                caret = self.split_block(caret);
            }
            if line.is_empty() {
                continue;
            }
            let block = &mut self.content.blocks[caret.block];
            let style = block.style_at(caret.offset);
            block.insert_str(caret.offset, line, style);
            caret.offset += line.chars().count();
        }
        self.move_caret(caret);
    }

    fn delete_backward(&mut self) {
        if self.delete_selection() || self.content.blocks.is_empty() {
            return;
        }
        let caret = self.caret();
        let blocks = &mut self.content.blocks;

        if caret.offset > 0 {
            blocks[caret.block].remove_range(caret.offset - 1, caret.offset);
            self.move_caret(Position::new(caret.block, caret.offset - 1));
            return;
        }
        if caret.block == 0 {
            if blocks[0].kind.is_divider() {
                blocks.remove(0);
                self.move_caret(Position::default());
            }
            return;
        }

        let previous = caret.block - 1;
        if blocks[previous].kind.is_divider() {
            blocks.remove(previous);
            self.move_caret(Position::new(previous, 0));
        } else if blocks[caret.block].kind.is_divider() {
            blocks.remove(caret.block);
            let offset = blocks[previous].len();
            self.move_caret(Position::new(previous, offset));
        } else {
            let runs = blocks.remove(caret.block).runs;
            let head = &mut blocks[previous];
            let offset = head.len();
            head.runs.extend(runs);
            head.normalize();
            self.move_caret(Position::new(previous, offset));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Run;

    fn surface_with(texts: &[&str]) -> DocumentSurface {
        DocumentSurface::with_content(StructuredContent::from_blocks(
            texts.iter().map(|t| Block::paragraph(*t)).collect(),
        ))
    }

    fn select(surface: &mut DocumentSurface, from: (usize, usize), to: (usize, usize)) {
        surface.set_selection(Some(Selection::new(
            Position::new(from.0, from.1),
            Position::new(to.0, to.1),
        )));
    }

    #[test]
    fn test_bold_toggles_on_then_off() {
        let mut surface = surface_with(&["kata kerja"]);
        select(&mut surface, (0, 0), (0, 4));

        surface.toggle_inline_style(InlineMark::Bold);
        assert_eq!(surface.content().to_markup(), "<p><strong>kata</strong> kerja</p>");

        surface.toggle_inline_style(InlineMark::Bold);
        assert_eq!(surface.content().to_markup(), "<p>kata kerja</p>");
    }

    #[test]
    fn test_partial_bold_selection_applies_bold_to_all() {
        let mut surface = DocumentSurface::with_content(StructuredContent::from_blocks(vec![
            Block::with_runs(
                BlockKind::Paragraph,
                vec![Run::new("ab", InlineStyle::bold()), Run::plain("cd")],
            ),
        ]));
        select(&mut surface, (0, 0), (0, 4));

        surface.toggle_inline_style(InlineMark::Bold);

        assert_eq!(surface.content().to_markup(), "<p><strong>abcd</strong></p>");
    }

    #[test]
    fn test_inline_toggle_with_collapsed_selection_is_noop() {
        let mut surface = surface_with(&["kata"]);
        select(&mut surface, (0, 2), (0, 2));
        let before = surface.snapshot();

        surface.toggle_inline_style(InlineMark::Italic);

        assert_eq!(surface.snapshot(), before);
    }

    #[test]
    fn test_block_format_applies_to_caret_block() {
        let mut surface = surface_with(&["satu", "dua"]);
        select(&mut surface, (1, 1), (1, 1));

        surface.set_block_format(BlockFormat::Heading(1));

        assert_eq!(surface.content().to_markup(), "<p>satu</p><h1>dua</h1>");
    }

    #[test]
    fn test_block_format_on_empty_surface_creates_block() {
        let mut surface = DocumentSurface::new();
        surface.set_block_format(BlockFormat::Blockquote);
        assert_eq!(surface.content().to_markup(), "<blockquote></blockquote>");
    }

    #[test]
    fn test_list_toggle_round_trip() {
        let mut surface = surface_with(&["a", "b"]);
        select(&mut surface, (0, 0), (1, 1));

        surface.toggle_list_format(ListKind::Bullet);
        assert_eq!(surface.content().to_markup(), "<ul><li>a</li><li>b</li></ul>");

        surface.toggle_list_format(ListKind::Numbered);
        assert_eq!(surface.content().to_markup(), "<ol><li>a</li><li>b</li></ol>");

        surface.toggle_list_format(ListKind::Numbered);
        assert_eq!(surface.content().to_markup(), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_divider_splits_block_at_caret() {
        let mut surface = surface_with(&["abcd"]);
        select(&mut surface, (0, 2), (0, 2));

        surface.insert_divider();

        assert_eq!(surface.content().to_markup(), "<p>ab</p><hr><p>cd</p>");
        assert_eq!(surface.caret(), Position::new(2, 0));
    }

    #[test]
    fn test_divider_at_end_adds_trailing_paragraph() {
        let mut surface = surface_with(&["abcd"]);
        select(&mut surface, (0, 4), (0, 4));

        surface.insert_divider();

        assert_eq!(surface.content().to_markup(), "<p>abcd</p><hr><p></p>");
        assert_eq!(surface.caret(), Position::new(2, 0));
    }

    #[test]
    fn test_highlight_nests_on_repeat() {
        let mut surface = surface_with(&["kata"]);
        select(&mut surface, (0, 0), (0, 4));

        assert!(surface.wrap_selection());
        assert!(surface.wrap_selection());

        assert_eq!(
            surface.content().to_markup(),
            r#"<p><span class="highlight"><span class="highlight">kata</span></span></p>"#
        );
    }

    #[test]
    fn test_highlight_requires_selection() {
        let mut surface = surface_with(&["kata"]);
        assert!(!surface.wrap_selection());

        select(&mut surface, (0, 1), (0, 1));
        assert!(!surface.wrap_selection());
        assert_eq!(surface.content().to_markup(), "<p>kata</p>");
    }

    #[test]
    fn test_insert_text_inherits_style_and_splits_lines() {
        let mut surface = DocumentSurface::with_content(StructuredContent::from_blocks(vec![
            Block::with_runs(BlockKind::Heading(2), vec![Run::new("Tajuk", InlineStyle::bold())]),
        ]));
        select(&mut surface, (0, 5), (0, 5));

        surface.insert_text("!\nisi");

        assert_eq!(
            surface.content().to_markup(),
            "<h2><strong>Tajuk!</strong></h2><p>isi</p>"
        );
        assert_eq!(surface.caret(), Position::new(1, 3));
    }

    #[test]
    fn test_insert_text_replaces_selection_across_blocks() {
        let mut surface = surface_with(&["abc", "def"]);
        select(&mut surface, (0, 1), (1, 2));

        surface.insert_text("X");

        assert_eq!(surface.content().to_markup(), "<p>aXf</p>");
    }

    #[test]
    fn test_backspace_merges_blocks_and_removes_dividers() {
        let mut surface = surface_with(&["ab", "cd"]);
        select(&mut surface, (1, 0), (1, 0));
        surface.delete_backward();
        assert_eq!(surface.content().to_markup(), "<p>abcd</p>");
        assert_eq!(surface.caret(), Position::new(0, 2));

        surface.delete_backward();
        assert_eq!(surface.content().to_markup(), "<p>acd</p>");

        select(&mut surface, (0, 1), (0, 1));
        surface.insert_divider();
        assert_eq!(surface.content().to_markup(), "<p>a</p><hr><p>cd</p>");
        surface.delete_backward();
        assert_eq!(surface.content().to_markup(), "<p>a</p><p>cd</p>");
    }
}
