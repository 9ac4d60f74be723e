//! In-memory document tree the editor operates on.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. Removing a node tombstones its whole subtree; ids are never
//! reused, so a stale id resolves to nothing instead of to a different node.
//!
//! ## Modules
//!
//! - `error` - `DomError` and the `DomResult` alias
//! - `markup` - html5ever fragment parsing and serialisation helpers
//! - `style` - inline style declarations and computed style values

mod error;
mod markup;
mod style;

pub use error::*;
pub use style::*;

use serde::{Deserialize, Serialize};

use crate::color::computed_color;
use markup::{ParsedNode, escape_attribute, escape_text, is_void_element, parse_markup};

/// Opaque handle to a node of a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    style: InlineStyle,
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed document tree with a `<body>` root.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Option<Node>>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.create_element("body");
        doc
    }

    /// Build a document whose body holds the given markup.
    pub fn from_markup(markup: &str) -> Self {
        let mut doc = Self::new();
        let root = doc.root;
        for node in doc.parse_fragment(markup) {
            // Freshly parsed nodes are detached, so appending cannot fail
            let _ = doc.append_child(root, node);
        }
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.node(id)?.kind {
            NodeKind::Element(data) => Some(data),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        let node = self.node_mut(id).ok_or(DomError::UnknownNode(id))?;
        match &mut node.kind {
            NodeKind::Element(data) => Ok(data),
            NodeKind::Text(_) => Err(DomError::NotAnElement(id)),
        }
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node {
            kind,
            parent: None,
            children: Vec::new(),
        }));
        id
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// Create a detached element. The tag is stored lowercase.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push_node(NodeKind::Element(ElementData {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: Vec::new(),
            style: InlineStyle::new(),
        }))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push_node(NodeKind::Text(text.to_string()))
    }

    /// Parse markup into detached top-level nodes owned by this document.
    pub fn parse_fragment(&mut self, markup: &str) -> Vec<NodeId> {
        parse_markup(markup)
            .into_iter()
            .map(|parsed| self.import(parsed))
            .collect()
    }

    fn import(&mut self, parsed: ParsedNode) -> NodeId {
        match parsed {
            ParsedNode::Text(text) => self.create_text(&text),
            ParsedNode::Element {
                tag,
                attributes,
                children,
            } => {
                let id = self.create_element(&tag);
                for (name, value) in attributes {
                    // The node was just created as an element
                    let _ = self.set_attribute(id, &name, &value);
                }
                for child in children {
                    let child_id = self.import(child);
                    self.attach(id, child_id);
                }
                id
            }
        }
    }

    // ------------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------------

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Whether the node is reachable from the root
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(id) && (id == self.root || self.ancestors(id).any(|a| a == self.root))
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Element children only, skipping text nodes
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.is_element(c))
            .collect()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Iterate from the parent of `id` up to the topmost ancestor.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: self.parent(id),
        }
    }

    /// Nearest element, starting at `id` itself, for which `predicate` holds.
    pub fn closest<F>(&self, id: NodeId, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Document, NodeId) -> bool,
    {
        std::iter::once(id)
            .filter(|&n| self.contains(n))
            .chain(self.ancestors(id))
            .find(|&n| self.is_element(n) && predicate(self, n))
    }

    /// All nodes below `id` in document (pre-)order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Connected elements carrying `class`, in document order.
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if !self.contains(child) {
            return Err(DomError::UnknownNode(child));
        }
        self.element_mut(parent)?;
        if child == parent || self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::Cycle { parent, child });
        }
        if child == self.root {
            return Err(DomError::Cycle { parent, child });
        }
        self.detach(child);
        self.attach(parent, child);
        Ok(())
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.parent(child) else { return };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|&c| c != child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = None;
        }
    }

    /// Detach `id` from the tree and drop its whole subtree.
    pub fn remove(&mut self, id: NodeId) -> DomResult<()> {
        if id == self.root {
            return Err(DomError::RootRemoval);
        }
        if !self.contains(id) {
            return Err(DomError::UnknownNode(id));
        }
        self.detach(id);
        let mut doomed = self.descendants(id);
        doomed.push(id);
        for dead in doomed {
            self.nodes[dead.0] = None;
        }
        Ok(())
    }

    fn clear_children(&mut self, id: NodeId) {
        let children = self.children(id).to_vec();
        for child in children {
            let _ = self.remove(child);
        }
    }

    // ------------------------------------------------------------------------
    // Element data
    // ------------------------------------------------------------------------

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> DomResult<()> {
        let element = self.element_mut(id)?;
        if !element.classes.iter().any(|c| c == class) {
            element.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> DomResult<()> {
        self.element_mut(id)?.classes.retain(|c| c != class);
        Ok(())
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.element(id).map(|e| e.classes.as_slice()).unwrap_or(&[])
    }

    /// The class attribute as a space separated string
    pub fn class_name(&self, id: NodeId) -> String {
        self.classes(id).join(" ")
    }

    /// Replace the whole class attribute with a raw string.
    pub fn set_class_name(&mut self, id: NodeId, raw: &str) -> DomResult<()> {
        let element = self.element_mut(id)?;
        element.classes.clear();
        for class in raw.split_whitespace() {
            if !element.classes.iter().any(|c| c == class) {
                element.classes.push(class.to_string());
            }
        }
        Ok(())
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        let element = self.element(id)?;
        match name.to_ascii_lowercase().as_str() {
            "class" if !element.classes.is_empty() => Some(element.classes.join(" ")),
            "class" => None,
            "style" if !element.style.is_empty() => Some(element.style.to_css_text()),
            "style" => None,
            name => element
                .attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone()),
        }
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        match name.to_ascii_lowercase().as_str() {
            "class" => self.set_class_name(id, value),
            "style" => {
                self.element_mut(id)?.style = InlineStyle::parse(value);
                Ok(())
            }
            name => {
                let element = self.element_mut(id)?;
                match element.attributes.iter_mut().find(|(n, _)| n == name) {
                    Some(slot) => slot.1 = value.to_string(),
                    None => element.attributes.push((name.to_string(), value.to_string())),
                }
                Ok(())
            }
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<()> {
        let element = self.element_mut(id)?;
        match name.to_ascii_lowercase().as_str() {
            "class" => element.classes.clear(),
            "style" => element.style = InlineStyle::new(),
            name => element.attributes.retain(|(n, _)| n != name),
        }
        Ok(())
    }

    pub fn inline_style(&self, id: NodeId) -> Option<&InlineStyle> {
        self.element(id).map(|e| &e.style)
    }

    pub fn set_style(
        &mut self,
        id: NodeId,
        property: StyleProperty,
        value: impl Into<String>,
    ) -> DomResult<()> {
        self.element_mut(id)?.style.set_property(property, value);
        Ok(())
    }

    /// Resolve the editable properties of an element.
    ///
    /// Inline values win when they are understood. Colours come out as
    /// `rgb(r, g, b)` and lengths as pixels. `color` and `font-size` fall
    /// back to the parent's computed value; everything else falls back to
    /// its initial value.
    pub fn computed_style(&self, id: NodeId) -> Option<ComputedStyle> {
        let element = self.element(id)?;
        let parent = self
            .parent(id)
            .filter(|p| self.is_element(*p))
            .and_then(|p| self.computed_style(p));
        let mut computed = ComputedStyle::default();

        if let Some(parent) = &parent {
            computed.color = parent.color.clone();
        }
        if let Some(color) = element.style.property(StyleProperty::Color).and_then(computed_color) {
            computed.color = color;
        }
        if let Some(background) = element
            .style
            .property(StyleProperty::BackgroundColor)
            .and_then(computed_color)
        {
            computed.background_color = background;
        }

        let parent_px = parent
            .as_ref()
            .and_then(|p| px_number(&p.font_size))
            .unwrap_or(ROOT_FONT_SIZE_PX);
        let font_px = element
            .style
            .property(StyleProperty::FontSize)
            .and_then(|v| resolve_font_size(v, parent_px))
            .unwrap_or(parent_px);
        computed.font_size = format_px(font_px);

        for property in [StyleProperty::Padding, StyleProperty::Margin] {
            if let Some(value) = element.style.property(property) {
                let value = match resolve_length(value, font_px) {
                    Some(px) => format_px(px),
                    None => value.trim().to_string(),
                };
                computed.set(property, value);
            }
        }
        Some(computed)
    }

    // ------------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------------

    /// Concatenated text of the node and all its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.node(id) else {
            return String::new();
        };
        match &node.kind {
            NodeKind::Text(text) => text.clone(),
            NodeKind::Element(_) => self
                .descendants(id)
                .into_iter()
                .filter_map(|d| match &self.node(d)?.kind {
                    NodeKind::Text(text) => Some(text.as_str()),
                    NodeKind::Element(_) => None,
                })
                .collect(),
        }
    }

    /// Replace all children with a single text node. Nested elements are
    /// destroyed.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        let node = self.node_mut(id).ok_or(DomError::UnknownNode(id))?;
        if let NodeKind::Text(existing) = &mut node.kind {
            *existing = text.to_string();
            return Ok(());
        }
        self.clear_children(id);
        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.attach(id, text_node);
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Serialisation
    // ------------------------------------------------------------------------

    /// Serialise the node including its own tag.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    /// Serialise the node's children only.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            self.write_node(child, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else { return };
        let element = match &node.kind {
            NodeKind::Text(text) => {
                escape_text(text, out);
                return;
            }
            NodeKind::Element(element) => element,
        };

        out.push('<');
        out.push_str(&element.tag);
        if !element.classes.is_empty() {
            out.push_str(" class=\"");
            escape_attribute(&element.classes.join(" "), out);
            out.push('"');
        }
        if !element.style.is_empty() {
            out.push_str(" style=\"");
            escape_attribute(&element.style.to_css_text(), out);
            out.push('"');
        }
        for (name, value) in &element.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attribute(value, out);
            out.push('"');
        }
        out.push('>');

        if is_void_element(&element.tag) {
            return;
        }
        for &child in &node.children {
            self.write_node(child, out);
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}

/// Iterator over the ancestors of a node, nearest first.
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}
