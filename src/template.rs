//! Starting structures for new elements and the category each maps to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::{Block, BlockKind, InlineStyle, Run, StructuredContent};
use crate::selection::{Position, Selection};
use crate::surface::EditorSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Template {
    /// Example sentences with meaning and notes
    Sentence,
    /// Essay paragraphs
    Paragraph,
    /// Short note with examples
    Note,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Sentence, Template::Paragraph, Template::Note];

    pub fn name(&self) -> &'static str {
        match self {
            Template::Sentence => "sentence",
            Template::Paragraph => "paragraph",
            Template::Note => "note",
        }
    }

    /// Caption in the template picker
    pub fn label(&self) -> &'static str {
        match self {
            Template::Sentence => "Ayat Biasa",
            Template::Paragraph => "Perenggan Karangan",
            Template::Note => "Nota Ringkas",
        }
    }

    /// Title proposed when the title field is still empty
    pub fn default_title(&self) -> &'static str {
        match self {
            Template::Sentence => "Ayat contoh",
            Template::Paragraph => "Karangan pendek",
            Template::Note => "Nota ringkas",
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Template::Sentence => ElementKind::Ayat,
            Template::Paragraph => ElementKind::Karangan,
            Template::Note => ElementKind::Nota,
        }
    }

    /// The skeleton of headings and placeholders for this template
    pub fn skeleton(&self) -> StructuredContent {
        fn heading(text: &str) -> Block {
            Block::with_runs(BlockKind::Heading(2), vec![Run::plain(text)])
        }
        fn labelled(kind: BlockKind, label: &str) -> Block {
            Block::with_runs(
                kind,
                vec![Run::new(label, InlineStyle::bold()), Run::plain(" ...")],
            )
        }
        let p = BlockKind::Paragraph;
        let li = BlockKind::ListItem { ordered: false };

        let blocks = match self {
            Template::Sentence => vec![
                heading("Ayat Contoh"),
                labelled(p, "Ayat 1:"),
                labelled(p, "Ayat 2:"),
                labelled(p, "Maksud:"),
                labelled(p, "Catatan:"),
            ],
            Template::Paragraph => vec![
                heading("Perenggan Karangan"),
                labelled(p, "Perenggan 1:"),
                labelled(p, "Perenggan 2:"),
                labelled(p, "Perenggan 3:"),
                labelled(p, "Penutup:"),
            ],
            Template::Note => vec![
                heading("Nota Ringkas"),
                labelled(p, "Definisi:"),
                labelled(li, "Contoh 1:"),
                labelled(li, "Contoh 2:"),
                labelled(p, "Catatan lain:"),
            ],
        };
        StructuredContent::from_blocks(blocks)
    }

    /// Replaces the surface content with the skeleton and fills `title`
    /// with the default title if it is empty. Returns the new content.
    pub fn apply<S: EditorSurface + ?Sized>(&self, surface: &mut S, title: &mut String) -> StructuredContent {
        let content = self.skeleton();
        surface.set_content(content.clone());
        surface.set_selection(Some(Selection::caret(Position::default())));
        if title.is_empty() {
            title.push_str(self.default_title());
        }
        content
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised template name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template `{0}`")]
pub struct UnknownTemplate(pub String);

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|template| template.name() == name.trim())
            .ok_or_else(|| UnknownTemplate(name.to_string()))
    }
}

/// Category label an element is stored under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Ayat,
    Karangan,
    Nota,
    #[default]
    Umum,
}

impl ElementKind {
    /// Maps the chosen template (if any) to its category
    pub fn from_template(template: Option<Template>) -> Self {
        template.map(|t| t.kind()).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Ayat => "Ayat",
            ElementKind::Karangan => "Karangan",
            ElementKind::Nota => "Nota",
            ElementKind::Umum => "Umum",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
