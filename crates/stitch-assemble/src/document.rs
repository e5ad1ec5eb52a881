//! Parsed HTML document tree.
//!
//! Wraps a kuchikiki tree so the rest of the crate deals in elements and
//! markup strings rather than parser plumbing.

use std::io;

use kuchikiki::traits::*;
use kuchikiki::{ElementData, NodeDataRef, NodeRef};

use crate::error::AssembleError;

/// A mutable, queryable HTML document.
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse HTML text into a document.
    ///
    /// Never fails: malformed input is repaired the way a browser would,
    /// including the implied `<html>`, `<head>` and `<body>` elements.
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchikiki::parse_html().one(html),
        }
    }

    /// The document node.
    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// Snapshot of every element carrying `attribute`, in document order.
    ///
    /// The list is collected before the caller mutates anything, so elements
    /// inserted while working through it are never visited.
    pub fn elements_with_attribute(&self, attribute: &str) -> Vec<NodeDataRef<ElementData>> {
        self.root
            .descendants()
            .elements()
            .filter(|element| element.attributes.borrow().contains(attribute))
            .collect()
    }

    /// Serialize the document back to HTML text.
    ///
    /// `<template>` contents are written out as the element's children.
    pub fn serialize(&self) -> Result<String, AssembleError> {
        let moved = inline_template_contents(&self.root);

        let mut bytes = Vec::new();
        let written = self.root.serialize(&mut bytes);
        restore_template_contents(moved);
        written.map_err(AssembleError::Serialize)?;

        String::from_utf8(bytes)
            .map_err(|e| AssembleError::Serialize(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// Replace an element's children with parsed markup.
///
/// The markup is parsed as a fragment in the element's own context, so text
/// destined for `<style>` or `<script>` stays raw rather than being escaped.
pub fn set_inner_html(element: &NodeDataRef<ElementData>, markup: &str) {
    let fragment = kuchikiki::parse_fragment(element.name.clone(), Vec::new()).one(markup);

    let node = element.as_node();
    clear_children(node);

    // Fragment parsing hangs the nodes off a synthetic <html> root.
    if let Some(context_root) = fragment.first_child() {
        for child in context_root.children().collect::<Vec<_>>() {
            node.append(child);
        }
    }
}

/// Replace an element's children with a single text node.
pub fn set_inner_text(element: &NodeDataRef<ElementData>, text: &str) {
    let node = element.as_node();
    clear_children(node);
    node.append(NodeRef::new_text(text));
}

/// Elements whose text content is serialized without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

/// Inner HTML of an element.
pub fn inner_html(node: &NodeRef) -> String {
    let raw_text = node
        .as_element()
        .is_some_and(|e| RAW_TEXT_ELEMENTS.contains(&&*e.name.local));

    node.children()
        .map(|child| match child.as_text() {
            Some(text) if raw_text => text.borrow().clone(),
            _ => child.to_string(),
        })
        .collect()
}

/// Move each `<template>`'s content fragment under the element itself.
///
/// The serializer only walks ordinary children, so template contents must be
/// in the tree to be written. Returns the `(template, fragment)` pairs moved,
/// outermost first.
pub(crate) fn inline_template_contents(root: &NodeRef) -> Vec<(NodeRef, NodeRef)> {
    let mut moved = Vec::new();

    // Nested templates only become reachable once their parent is inlined.
    loop {
        let pending: Vec<(NodeRef, NodeRef)> = root
            .descendants()
            .filter_map(|node| {
                let contents = node.as_element()?.template_contents.clone()?;
                if contents.first_child().is_some() {
                    Some((node, contents))
                } else {
                    None
                }
            })
            .collect();

        if pending.is_empty() {
            return moved;
        }

        for (template, contents) in pending {
            for child in contents.children().collect::<Vec<_>>() {
                template.append(child);
            }
            moved.push((template, contents));
        }
    }
}

/// Undo [`inline_template_contents`].
fn restore_template_contents(moved: Vec<(NodeRef, NodeRef)>) {
    for (template, contents) in moved.into_iter().rev() {
        for child in template.children().collect::<Vec<_>>() {
            contents.append(child);
        }
    }
}

fn clear_children(node: &NodeRef) {
    for child in node.children().collect::<Vec<_>>() {
        child.detach();
    }
}
