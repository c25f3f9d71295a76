// SPDX-License-Identifier: MPL-2.0
//! Page markup reading and writing.
//!
//! Pages are read as XHTML-style markup with `quick-xml`, relaxed for the
//! HTML habits a hand-written landing page has: void elements may stay
//! unclosed, attributes may omit their value, and `script`/`style` bodies
//! are kept verbatim. Named HTML entities other than the five XML ones are
//! not understood; write the characters directly.

use super::{Document, NodeId, NodeKind};
use crate::error::{Error, Result};
use quick_xml::escape::{escape, partial_escape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Elements that never have content and need no end tag.
const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose text content is not escaped.
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag)
}

/// Parses page markup into a [`Document`].
pub fn parse(source: &str) -> Result<Document> {
    let mut reader = Reader::from_str(source);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;

    let mut document = Document::new();
    let mut stack: Vec<NodeId> = vec![document.root()];

    loop {
        let parent = stack.last().copied().unwrap_or_else(|| document.root());
        let event = reader.read_event().map_err(|err| {
            Error::Markup(format!("{err} at position {}", reader.error_position()))
        })?;

        match event {
            Event::Start(start) => {
                let node = open_element(&mut document, parent, &start)?;
                let tag = document.tag_name(node).unwrap_or_default();
                let (raw, void) = (is_raw_text(tag), is_void(tag));
                if raw {
                    // Body runs verbatim to the matching end tag, `<` included.
                    let body = reader.read_text(start.name()).map_err(|err| {
                        Error::Markup(format!("{err} at position {}", reader.error_position()))
                    })?;
                    if !body.is_empty() {
                        document.append_text(node, &body);
                    }
                } else if !void {
                    stack.push(node);
                }
            }
            Event::Empty(start) => {
                open_element(&mut document, parent, &start)?;
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).to_ascii_lowercase();
                if let Some(depth) = stack
                    .iter()
                    .rposition(|&node| document.tag_name(node) == Some(name.as_str()))
                {
                    stack.truncate(depth);
                }
            }
            Event::Text(text) => {
                let content = text.unescape().map_err(|err| {
                    Error::Markup(format!("{err} at position {}", reader.buffer_position()))
                })?;
                if !content.is_empty() {
                    document.append_text(parent, &content);
                }
            }
            Event::CData(data) => {
                document.append_text(parent, &String::from_utf8_lossy(&data.into_inner()));
            }
            Event::Comment(comment) => {
                document.append_comment(parent, &String::from_utf8_lossy(&comment.into_inner()));
            }
            Event::DocType(doctype) => {
                let text = String::from_utf8_lossy(&doctype.into_inner()).trim().to_string();
                document.append_doctype(parent, &text);
            }
            Event::Decl(_) | Event::PI(_) => {}
            Event::Eof => break,
        }
    }

    Ok(document)
}

fn open_element(document: &mut Document, parent: NodeId, start: &BytesStart<'_>) -> Result<NodeId> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in start.html_attributes() {
        let attr = attr.map_err(|err| Error::Markup(format!("invalid attribute on <{tag}>: {err}")))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| Error::Markup(format!("invalid value for {name} on <{tag}>: {err}")))?
            .into_owned();
        attributes.push((name, value));
    }

    Ok(document.create_element(parent, &tag, attributes))
}

/// Writes a [`Document`] back to markup.
#[must_use]
pub fn serialize(document: &Document) -> String {
    let mut out = String::new();
    for &child in document.children(document.root()) {
        write_node(document, child, &mut out);
    }
    out
}

fn write_node(document: &Document, node: NodeId, out: &mut String) {
    match document.kind(node) {
        NodeKind::Document => {
            for &child in document.children(node) {
                write_node(document, child, out);
            }
        }
        NodeKind::Doctype(text) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(text);
            out.push('>');
        }
        NodeKind::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        NodeKind::Text(text) => {
            let raw = document
                .parent(node)
                .and_then(|parent| document.tag_name(parent))
                .is_some_and(is_raw_text);
            if raw {
                out.push_str(text);
            } else {
                out.push_str(&partial_escape(text.as_str()));
            }
        }
        NodeKind::Element(data) => {
            out.push('<');
            out.push_str(&data.tag);
            for (name, value) in &data.attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape(value.as_str()));
                out.push('"');
            }

            if is_void(&data.tag) {
                out.push_str(" />");
                return;
            }

            out.push('>');
            for &child in document.children(node) {
                write_node(document, child, out);
            }
            out.push_str("</");
            out.push_str(&data.tag);
            out.push('>');
        }
    }
}
