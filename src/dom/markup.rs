//! Markup parsing and serialisation.
//!
//! Parsing goes through html5ever's fragment parser (the same algorithm a
//! browser uses for `innerHTML`) and is then imported into our own arena.
//! Serialisation walks the arena directly.

use html5ever::tendril::TendrilSink;
use html5ever::{LocalName, Namespace, ParseOpts, QualName, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// A node produced by the parser, not yet owned by any document
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedNode {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<ParsedNode>,
    },
    Text(String),
}

/// Parse markup as the content of a `<body>` element.
pub(crate) fn parse_markup(markup: &str) -> Vec<ParsedNode> {
    let context = QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from("body"),
    );
    let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new())
        .one(markup);

    fragment_roots(&dom.document)
        .iter()
        .filter_map(convert)
        .collect()
}

/// The fragment parser nests its output under a synthetic `<html>` element.
fn fragment_roots(document: &Handle) -> Vec<Handle> {
    let children = document.children.borrow();
    let roots = match children.first() {
        Some(html) if element_name(html).as_deref() == Some("html") => {
            html.children.borrow().clone()
        }
        _ => children.clone(),
    };
    roots
}

fn element_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

fn convert(handle: &Handle) -> Option<ParsedNode> {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let attributes = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            let children = handle.children.borrow().iter().filter_map(convert).collect();
            Some(ParsedNode::Element {
                tag: name.local.to_string(),
                attributes,
                children,
            })
        }
        NodeData::Text { contents } => Some(ParsedNode::Text(contents.borrow().to_string())),
        // Comments, doctypes and processing instructions are not editable content
        _ => None,
    }
}

pub(crate) fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub(crate) fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

pub(crate) fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
