//! Flat event stream produced from the Markdown syntax tree.

/// One event in the document stream.
///
/// Block structure is expressed as balanced `Start*`/`End*` pairs; inline content
/// stays nested inside [`Event::Inline`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    StartDocument,
    EndDocument,
    /// `text` is the plain text of the heading, used for fallback identifiers.
    /// `attrs` are extra attributes carried through to the element unchanged.
    StartHeading {
        level: u8,
        text: String,
        attrs: Vec<(String, String)>,
    },
    EndHeading(u8),
    StartParagraph,
    EndParagraph,
    StartBlockQuote,
    EndBlockQuote,
    StartList {
        ordered: bool,
        start: usize,
    },
    EndList,
    /// `task` is `Some(checked)` for GFM task list items.
    StartListItem {
        task: Option<bool>,
    },
    EndListItem,
    CodeBlock {
        language: Option<String>,
        literal: String,
    },
    ThematicBreak,
    StartTable,
    EndTable,
    StartTableHead,
    EndTableHead,
    StartTableBody,
    EndTableBody,
    StartTableRow,
    EndTableRow,
    StartTableCell {
        header: bool,
        align: CellAlignment,
    },
    EndTableCell,
    Inline(InlineContent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl CellAlignment {
    /// Inline style for the cell, if any.
    pub fn style(self) -> Option<&'static str> {
        match self {
            CellAlignment::None => None,
            CellAlignment::Left => Some("text-align: left"),
            CellAlignment::Center => Some("text-align: center"),
            CellAlignment::Right => Some("text-align: right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InlineContent {
    Text(String),
    Code(String),
    Strong(Vec<InlineContent>),
    Emphasis(Vec<InlineContent>),
    Strikethrough(Vec<InlineContent>),
    Link {
        url: String,
        title: Option<String>,
        children: Vec<InlineContent>,
    },
    Image {
        src: String,
        alt: String,
        title: Option<String>,
    },
    SoftBreak,
    LineBreak,
}
