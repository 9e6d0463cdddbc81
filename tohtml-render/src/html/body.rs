//! Event stream → article DOM

use super::dom::{append, create_element, create_text, text_element};
use super::reconcile::{HeadingElement, HeadingIds, HeadingOverrides};
use crate::error::BuildError;
use crate::markdown::{Event, InlineContent};
use markup5ever_rcdom::Handle;

/// Render the events of one document into an `<article class="markdown-body">`.
///
/// Every heading takes its identifier from `ids` and its element from
/// `overrides`, in emission order. An unbalanced stream is an error.
pub fn render_body(
    events: &[Event],
    ids: &mut HeadingIds,
    overrides: &HeadingOverrides,
) -> Result<Handle, BuildError> {
    let article = create_element("article", vec![("class", "markdown-body")]);
    let mut tree = TreeBuilder::new(article.clone());

    for event in events {
        match event {
            Event::StartDocument | Event::EndDocument => {}

            Event::StartHeading { level, text, attrs } => {
                let id = ids.next_id(text);
                let heading = overrides.render(&HeadingElement {
                    level: *level,
                    id: &id,
                    attrs,
                });
                tree.open(heading);
            }
            Event::EndHeading(_) => tree.close("heading")?,

            Event::StartParagraph => tree.open(create_element("p", vec![])),
            Event::EndParagraph => tree.close("paragraph")?,

            Event::StartBlockQuote => tree.open(create_element("blockquote", vec![])),
            Event::EndBlockQuote => tree.close("block quote")?,

            Event::StartList { ordered, start } => {
                let list = if !*ordered {
                    create_element("ul", vec![])
                } else if *start != 1 {
                    let start = start.to_string();
                    create_element("ol", vec![("start", start.as_str())])
                } else {
                    create_element("ol", vec![])
                };
                tree.open(list);
            }
            Event::EndList => tree.close("list")?,

            Event::StartListItem { task } => match task {
                None => tree.open(create_element("li", vec![])),
                Some(checked) => {
                    let item = create_element("li", vec![("class", "task-list-item")]);
                    let mut attrs = vec![("type", "checkbox"), ("disabled", "")];
                    if *checked {
                        attrs.push(("checked", ""));
                    }
                    append(&item, create_element("input", attrs));
                    append(&item, create_text(" "));
                    tree.open(item);
                }
            },
            Event::EndListItem => tree.close("list item")?,

            Event::CodeBlock { language, literal } => {
                let class = language.as_ref().map(|lang| format!("language-{lang}"));
                let attrs = match &class {
                    Some(class) => vec![("class", class.as_str())],
                    None => vec![],
                };
                let pre = create_element("pre", vec![]);
                append(&pre, text_element("code", attrs, literal));
                append(tree.current(), pre);
            }

            Event::ThematicBreak => append(tree.current(), create_element("hr", vec![])),

            Event::StartTable => tree.open(create_element("table", vec![])),
            Event::EndTable => tree.close("table")?,
            Event::StartTableHead => tree.open(create_element("thead", vec![])),
            Event::EndTableHead => tree.close("table head")?,
            Event::StartTableBody => tree.open(create_element("tbody", vec![])),
            Event::EndTableBody => tree.close("table body")?,
            Event::StartTableRow => tree.open(create_element("tr", vec![])),
            Event::EndTableRow => tree.close("table row")?,
            Event::StartTableCell { header, align } => {
                let tag = if *header { "th" } else { "td" };
                let attrs = match align.style() {
                    Some(style) => vec![("style", style)],
                    None => vec![],
                };
                tree.open(create_element(tag, attrs));
            }
            Event::EndTableCell => tree.close("table cell")?,

            Event::Inline(inline) => render_inline(tree.current(), inline),
        }
    }

    tree.finish()?;
    Ok(article)
}

/// Parent stack over the tree under construction
struct TreeBuilder {
    current: Handle,
    stack: Vec<Handle>,
}

impl TreeBuilder {
    fn new(root: Handle) -> Self {
        Self {
            current: root,
            stack: Vec::new(),
        }
    }

    fn current(&self) -> &Handle {
        &self.current
    }

    fn open(&mut self, element: Handle) {
        append(&self.current, element.clone());
        let parent = std::mem::replace(&mut self.current, element);
        self.stack.push(parent);
    }

    fn close(&mut self, what: &str) -> Result<(), BuildError> {
        self.current = self
            .stack
            .pop()
            .ok_or_else(|| BuildError::Render(format!("Unbalanced {what} end")))?;
        Ok(())
    }

    fn finish(self) -> Result<(), BuildError> {
        if self.stack.is_empty() {
            Ok(())
        } else {
            Err(BuildError::Render(format!(
                "{} element(s) left open at end of document",
                self.stack.len()
            )))
        }
    }
}

fn render_inline(parent: &Handle, inline: &InlineContent) {
    match inline {
        InlineContent::Text(text) => append(parent, create_text(text)),
        InlineContent::Code(code) => append(parent, text_element("code", vec![], code)),
        InlineContent::Strong(children) => append(parent, wrap("strong", vec![], children)),
        InlineContent::Emphasis(children) => append(parent, wrap("em", vec![], children)),
        InlineContent::Strikethrough(children) => append(parent, wrap("del", vec![], children)),
        InlineContent::Link {
            url,
            title,
            children,
        } => {
            let mut attrs = vec![("href", url.as_str())];
            if let Some(title) = title {
                attrs.push(("title", title.as_str()));
            }
            append(parent, wrap("a", attrs, children));
        }
        InlineContent::Image { src, alt, title } => {
            let mut attrs = vec![("src", src.as_str()), ("alt", alt.as_str())];
            if let Some(title) = title {
                attrs.push(("title", title.as_str()));
            }
            append(parent, create_element("img", attrs));
        }
        InlineContent::SoftBreak => append(parent, create_text("\n")),
        InlineContent::LineBreak => append(parent, create_element("br", vec![])),
    }
}

fn wrap(tag: &str, attrs: Vec<(&str, &str)>, children: &[InlineContent]) -> Handle {
    let element = create_element(tag, attrs);
    for child in children {
        render_inline(&element, child);
    }
    element
}
