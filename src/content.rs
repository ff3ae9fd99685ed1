//! Structured rich-text content held by the editor surface.
//!
//! A document is a flat list of blocks. Each block carries a [`BlockKind`]
//! and a sequence of styled text runs. Consecutive list items are grouped
//! when the content is serialised to markup, which is also the form used to
//! compare two snapshots and the form persisted for an element.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Kind of a single block in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Paragraph,
    /// Heading level, 1 to 3
    Heading(u8),
    Blockquote,
    ListItem { ordered: bool },
    /// Horizontal rule; carries no text
    Divider,
}

impl BlockKind {
    fn tag(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "p",
            BlockKind::Heading(1) => "h1",
            BlockKind::Heading(2) => "h2",
            BlockKind::Heading(_) => "h3",
            BlockKind::Blockquote => "blockquote",
            BlockKind::ListItem { .. } => "li",
            BlockKind::Divider => "hr",
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, BlockKind::Divider)
    }
}

/// Inline formatting of a run of text.
///
/// `highlight` counts how many highlight spans enclose the run, so wrapping
/// an already highlighted run nests another span around it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub highlight: u8,
}

impl InlineStyle {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }
}

/// A piece of text sharing one [`InlineStyle`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub style: InlineStyle,
}

impl Run {
    pub fn new(text: impl Into<String>, style: InlineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, InlineStyle::default())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn write_markup(&self, out: &mut String) {
        for _ in 0..self.style.highlight {
            out.push_str(r#"<span class="highlight">"#);
        }
        if self.style.bold {
            out.push_str("<strong>");
        }
        if self.style.italic {
            out.push_str("<em>");
        }
        if self.style.underline {
            out.push_str("<u>");
        }
        escape_into(&self.text, out);
        if self.style.underline {
            out.push_str("</u>");
        }
        if self.style.italic {
            out.push_str("</em>");
        }
        if self.style.bold {
            out.push_str("</strong>");
        }
        for _ in 0..self.style.highlight {
            out.push_str("</span>");
        }
    }
}

/// One block of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub runs: Vec<Run>,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            runs: Vec::new(),
        }
    }

    pub fn with_runs(kind: BlockKind, runs: Vec<Run>) -> Self {
        let mut block = Self { kind, runs };
        block.normalize();
        block
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::with_runs(BlockKind::Paragraph, vec![Run::plain(text)])
    }

    pub fn divider() -> Self {
        Self::new(BlockKind::Divider)
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::char_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }

    /// Drops empty runs and merges neighbours with identical styles.
    pub(crate) fn normalize(&mut self) {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.style == run.style => last.text.push_str(&run.text),
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }

    /// Ensures a run boundary at `offset` and returns the index of the run
    /// starting there (or `runs.len()` when the offset is at the end).
    fn boundary(&mut self, offset: usize) -> usize {
        let mut seen = 0;
        for index in 0..self.runs.len() {
            if offset == seen {
                return index;
            }
            let len = self.runs[index].char_len();
            if offset < seen + len {
                let at = byte_index(&self.runs[index].text, offset - seen);
                let tail = self.runs[index].text.split_off(at);
                let style = self.runs[index].style;
                self.runs.insert(index + 1, Run::new(tail, style));
                return index + 1;
            }
            seen += len;
        }
        self.runs.len()
    }

    /// Style a char typed at `offset` inherits: the style of the preceding
    /// char, or of the first run at the start of the block.
    pub(crate) fn style_at(&self, offset: usize) -> InlineStyle {
        let mut seen = 0;
        let mut style = self.runs.first().map(|run| run.style).unwrap_or_default();
        for run in &self.runs {
            if seen >= offset {
                break;
            }
            style = run.style;
            seen += run.char_len();
        }
        style
    }

    pub(crate) fn insert_str(&mut self, offset: usize, text: &str, style: InlineStyle) {
        let index = self.boundary(offset.min(self.len()));
        self.runs.insert(index, Run::new(text, style));
        self.normalize();
    }

    pub(crate) fn remove_range(&mut self, start: usize, end: usize) {
        let start_index = self.boundary(start);
        let end_index = self.boundary(end);
        self.runs.drain(start_index..end_index);
        self.normalize();
    }

    /// Splits the block at `offset`, keeping the head and returning the tail runs.
    pub(crate) fn split_off(&mut self, offset: usize) -> Vec<Run> {
        let index = self.boundary(offset.min(self.len()));
        let tail = self.runs.split_off(index);
        self.normalize();
        tail
    }

    pub(crate) fn map_range(&mut self, start: usize, end: usize, mut f: impl FnMut(&mut InlineStyle)) {
        if start >= end {
            return;
        }
        let start_index = self.boundary(start);
        let end_index = self.boundary(end);
        for run in &mut self.runs[start_index..end_index] {
            f(&mut run.style);
        }
        self.normalize();
    }

    /// True when every char in `start..end` satisfies `pred`; false for an empty range.
    pub(crate) fn all_in_range(&self, start: usize, end: usize, pred: impl Fn(&InlineStyle) -> bool) -> bool {
        if start >= end {
            return false;
        }
        let mut seen = 0;
        for run in &self.runs {
            let len = run.char_len();
            let overlaps = seen < end && start < seen + len;
            if overlaps && !pred(&run.style) {
                return false;
            }
            seen += len;
        }
        true
    }
}

/// The structured body of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredContent {
    pub blocks: Vec<Block>,
}

impl StructuredContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// True when the serialised markup is empty after trimming; an element
    /// cannot be saved like this. A text-less heading or list still counts.
    pub fn is_blank(&self) -> bool {
        self.to_markup().trim().is_empty()
    }

    /// Block texts joined by newlines
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serialises the content to markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        let mut open_list: Option<bool> = None;

        for block in &self.blocks {
            let list = match block.kind {
                BlockKind::ListItem { ordered } => Some(ordered),
                _ => None,
            };
            if open_list != list {
                if let Some(ordered) = open_list {
                    out.push_str(if ordered { "</ol>" } else { "</ul>" });
                }
                if let Some(ordered) = list {
                    out.push_str(if ordered { "<ol>" } else { "<ul>" });
                }
                open_list = list;
            }

            if block.kind.is_divider() {
                out.push_str("<hr>");
                continue;
            }
            let tag = block.kind.tag();
            let _ = write!(out, "<{tag}>");
            for run in &block.runs {
                run.write_markup(&mut out);
            }
            let _ = write!(out, "</{tag}>");
        }

        if let Some(ordered) = open_list {
            out.push_str(if ordered { "</ol>" } else { "</ul>" });
        }
        out
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Byte index of the char at `char_index`, or the string length past the end.
pub(crate) fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_groups_list_items() {
        let content = StructuredContent::from_blocks(vec![
            Block::paragraph("intro"),
            Block::with_runs(BlockKind::ListItem { ordered: false }, vec![Run::plain("a")]),
            Block::with_runs(BlockKind::ListItem { ordered: false }, vec![Run::plain("b")]),
            Block::with_runs(BlockKind::ListItem { ordered: true }, vec![Run::plain("c")]),
            Block::divider(),
        ]);

        assert_eq!(
            content.to_markup(),
            "<p>intro</p><ul><li>a</li><li>b</li></ul><ol><li>c</li></ol><hr>"
        );
    }

    #[test]
    fn test_markup_nests_inline_styles() {
        let style = InlineStyle {
            bold: true,
            italic: true,
            underline: false,
            highlight: 2,
        };
        let content = StructuredContent::from_blocks(vec![Block::with_runs(
            BlockKind::Heading(2),
            vec![Run::new("x < y", style)],
        )]);

        assert_eq!(
            content.to_markup(),
            r#"<h2><span class="highlight"><span class="highlight"><strong><em>x &lt; y</em></strong></span></span></h2>"#
        );
    }

    #[test]
    fn test_split_and_map_range_respect_multibyte_chars() {
        let mut block = Block::paragraph("héllo");
        block.map_range(1, 3, |style| style.bold = true);

        assert_eq!(block.runs.len(), 3);
        assert_eq!(block.runs[1].text, "él");
        assert!(block.runs[1].style.bold);

        let tail = block.split_off(4);
        assert_eq!(block.text(), "héll");
        assert_eq!(tail.iter().map(|r| r.text.as_str()).collect::<String>(), "o");
    }

    #[test]
    fn test_blank_content() {
        assert!(StructuredContent::new().is_blank());
        assert!(!StructuredContent::from_blocks(vec![Block::paragraph("  ")]).is_blank());
        assert!(!StructuredContent::from_blocks(vec![Block::new(BlockKind::Heading(1))]).is_blank());
        assert!(!StructuredContent::from_blocks(vec![Block::divider()]).is_blank());
        assert!(!StructuredContent::from_blocks(vec![Block::paragraph("kata")]).is_blank());
    }
}
