//! Markdown parsing (Markdown → events)
//!
//! Pipeline: Markdown string → comrak AST → flat [`Event`] stream

use super::events::{CellAlignment, Event, InlineContent};
use super::MarkdownOptions;
use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse Markdown into a balanced event stream.
///
/// Parsing never fails: anything comrak does not understand is plain text.
pub fn parse_to_events(source: &str, options: &MarkdownOptions) -> Vec<Event> {
    let arena = Arena::new();
    let comrak_options = comrak_options(options);
    let root = parse_document(&arena, source, &comrak_options);

    let mut events = vec![Event::StartDocument];
    for child in root.children() {
        collect_block(child, &mut events, options, false);
    }
    events.push(Event::EndDocument);
    events
}

fn comrak_options(options: &MarkdownOptions) -> ComrakOptions<'static> {
    let mut comrak = ComrakOptions::default();
    comrak.extension.table = true;
    comrak.extension.strikethrough = true;
    comrak.extension.autolink = true;
    comrak.extension.tasklist = true;
    if options.front_matter {
        comrak.extension.front_matter_delimiter = Some("---".to_string());
    }
    comrak
}

/// Flatten one block node. `tight` is set for direct children of a tight list
/// item, whose paragraphs render without a `<p>` wrapper.
fn collect_block<'a>(
    node: &'a AstNode<'a>,
    events: &mut Vec<Event>,
    options: &MarkdownOptions,
    tight: bool,
) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Document => {
            for child in node.children() {
                collect_block(child, events, options, false);
            }
        }

        NodeValue::Heading(heading) => {
            let level = heading.level;
            let mut attrs = Vec::new();
            if options.sourcepos {
                let pos = node_data.sourcepos;
                attrs.push((
                    "data-sourcepos".to_string(),
                    format!(
                        "{}:{}-{}:{}",
                        pos.start.line, pos.start.column, pos.end.line, pos.end.column
                    ),
                ));
            }

            events.push(Event::StartHeading {
                level,
                text: collect_text_from_children(node),
                attrs,
            });
            collect_inlines(node, events);
            events.push(Event::EndHeading(level));
        }

        NodeValue::Paragraph => {
            if tight {
                collect_inlines(node, events);
            } else {
                events.push(Event::StartParagraph);
                collect_inlines(node, events);
                events.push(Event::EndParagraph);
            }
        }

        NodeValue::BlockQuote => {
            events.push(Event::StartBlockQuote);
            for child in node.children() {
                collect_block(child, events, options, false);
            }
            events.push(Event::EndBlockQuote);
        }

        NodeValue::List(list) => {
            events.push(Event::StartList {
                ordered: matches!(list.list_type, ListType::Ordered),
                start: list.start,
            });
            for item in node.children() {
                collect_list_item(item, events, options, list.tight);
            }
            events.push(Event::EndList);
        }

        NodeValue::CodeBlock(code_block) => {
            let language = code_block
                .info
                .split_whitespace()
                .next()
                .map(str::to_string);
            events.push(Event::CodeBlock {
                language,
                literal: code_block.literal.clone(),
            });
        }

        NodeValue::ThematicBreak => events.push(Event::ThematicBreak),

        NodeValue::Table(table) => {
            let alignments: Vec<CellAlignment> =
                table.alignments.iter().map(cell_alignment).collect();
            collect_table(node, &alignments, events);
        }

        NodeValue::FrontMatter(_) | NodeValue::HtmlBlock(_) => {
            // Not rendered
        }

        _ => {
            for child in node.children() {
                collect_block(child, events, options, false);
            }
        }
    }
}

fn collect_list_item<'a>(
    item: &'a AstNode<'a>,
    events: &mut Vec<Event>,
    options: &MarkdownOptions,
    tight: bool,
) {
    let task = match &item.data.borrow().value {
        NodeValue::TaskItem(symbol) => Some(symbol.is_some()),
        _ => None,
    };

    events.push(Event::StartListItem { task });
    for child in item.children() {
        collect_block(child, events, options, tight);
    }
    events.push(Event::EndListItem);
}

fn collect_table<'a>(node: &'a AstNode<'a>, alignments: &[CellAlignment], events: &mut Vec<Event>) {
    events.push(Event::StartTable);

    let mut in_body = false;
    for row in node.children() {
        let header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
        if header {
            events.push(Event::StartTableHead);
        } else if !in_body {
            events.push(Event::StartTableBody);
            in_body = true;
        }

        events.push(Event::StartTableRow);
        for (column, cell) in row.children().enumerate() {
            let align = alignments.get(column).copied().unwrap_or_default();
            events.push(Event::StartTableCell { header, align });
            collect_inlines(cell, events);
            events.push(Event::EndTableCell);
        }
        events.push(Event::EndTableRow);

        if header {
            events.push(Event::EndTableHead);
        }
    }

    if in_body {
        events.push(Event::EndTableBody);
    }
    events.push(Event::EndTable);
}

fn cell_alignment(alignment: &TableAlignment) -> CellAlignment {
    match alignment {
        TableAlignment::Left => CellAlignment::Left,
        TableAlignment::Center => CellAlignment::Center,
        TableAlignment::Right => CellAlignment::Right,
        TableAlignment::None => CellAlignment::None,
    }
}

fn collect_inlines<'a>(node: &'a AstNode<'a>, events: &mut Vec<Event>) {
    for child in node.children() {
        if let Some(inline) = inline_content(child) {
            events.push(Event::Inline(inline));
        }
    }
}

fn inline_children<'a>(node: &'a AstNode<'a>) -> Vec<InlineContent> {
    node.children().filter_map(inline_content).collect()
}

/// Convert one inline node. Inline HTML and unknown inline kinds yield `None`.
fn inline_content<'a>(node: &'a AstNode<'a>) -> Option<InlineContent> {
    let node_data = node.data.borrow();

    let inline = match &node_data.value {
        NodeValue::Text(text) => InlineContent::Text(text.clone()),
        NodeValue::Code(code) => InlineContent::Code(code.literal.clone()),
        NodeValue::Strong => InlineContent::Strong(inline_children(node)),
        NodeValue::Emph => InlineContent::Emphasis(inline_children(node)),
        NodeValue::Strikethrough => InlineContent::Strikethrough(inline_children(node)),
        NodeValue::Link(link) => InlineContent::Link {
            url: link.url.clone(),
            title: non_empty(&link.title),
            children: inline_children(node),
        },
        NodeValue::Image(link) => InlineContent::Image {
            src: link.url.clone(),
            alt: collect_text_from_children(node),
            title: non_empty(&link.title),
        },
        NodeValue::SoftBreak => InlineContent::SoftBreak,
        NodeValue::LineBreak => InlineContent::LineBreak,
        _ => return None,
    };

    Some(inline)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn collect_text_from_children<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.children() {
        collect_text_content(child, &mut text);
    }
    text
}

/// Recursively collect the plain text of a node
fn collect_text_content<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text_content(child, output);
            }
        }
    }
}
