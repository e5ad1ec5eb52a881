//! HTML pretty-printing.

use kuchikiki::traits::*;
use kuchikiki::{ElementData, NodeData, NodeRef};

use crate::document::inline_template_contents;
use crate::stylesheet::format_css;

/// Elements with no content or end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is whitespace-sensitive or opaque.
const VERBATIM_ELEMENTS: &[&str] = &["pre", "textarea", "script"];

/// Phrasing elements kept on the same line as their surrounding text.
const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "br", "button", "cite", "code", "data", "del", "dfn", "em",
    "i", "img", "input", "ins", "kbd", "label", "mark", "q", "s", "samp", "select", "small",
    "span", "strong", "sub", "sup", "time", "u", "var", "wbr",
];

/// Re-indent an HTML document with one block element per line.
///
/// Runs of adjacent text and inline elements stay together on one line.
/// Whitespace-only text between blocks is dropped, and `<style>` contents
/// are re-printed as CSS.
pub fn beautify(html: &str) -> String {
    let document = kuchikiki::parse_html().one(html);
    inline_template_contents(&document);

    let mut ctx = Beautifier {
        out: String::with_capacity(html.len() + html.len() / 2),
        indent_level: 0,
    };

    for child in document.children() {
        ctx.node(&child);
    }

    ctx.out
}

struct Beautifier {
    out: String,
    indent_level: usize,
}

impl Beautifier {
    fn line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn node(&mut self, node: &NodeRef) {
        match node.data() {
            NodeData::Doctype(doctype) => self.line(&format!("<!DOCTYPE {}>", doctype.name)),
            NodeData::Comment(_) | NodeData::ProcessingInstruction(_) => {
                self.line(&node.to_string())
            }
            NodeData::Text(text) => {
                if !text.borrow().trim().is_empty() {
                    self.line(node.to_string().trim());
                }
            }
            NodeData::Element(element) => self.element(node, element),
            NodeData::Document(_) | NodeData::DocumentFragment => {
                for child in node.children() {
                    self.node(&child);
                }
            }
        }
    }

    fn element(&mut self, node: &NodeRef, element: &ElementData) {
        let name = &*element.name.local;

        if name == "style" {
            self.style(node, element);
            return;
        }

        if VOID_ELEMENTS.contains(&name)
            || VERBATIM_ELEMENTS.contains(&name)
            || is_inline_content(node)
        {
            self.line(&node.to_string());
            return;
        }

        self.line(&open_tag(element));
        self.indent_level += 1;

        let mut run = String::new();
        for child in node.children() {
            if is_inline_node(&child) {
                run.push_str(&child.to_string());
            } else {
                self.flush_run(&mut run);
                self.node(&child);
            }
        }
        self.flush_run(&mut run);

        self.indent_level -= 1;
        self.line(&format!("</{}>", name));
    }

    /// Emit a run of inline siblings as one line.
    ///
    /// Only the whitespace bordering block siblings is trimmed.
    fn flush_run(&mut self, run: &mut String) {
        let trimmed = run.trim();
        if !trimmed.is_empty() {
            self.line(trimmed);
        }
        run.clear();
    }

    fn style(&mut self, node: &NodeRef, element: &ElementData) {
        let css = node.text_contents();
        if css.trim().is_empty() {
            self.line(&node.to_string());
            return;
        }

        let formatted = format_css(&css).unwrap_or_else(|e| {
            tracing::warn!("Leaving <style> content as-is: {}", e);
            css.trim().to_string()
        });

        self.line(&open_tag(element));
        self.indent_level += 1;
        for css_line in formatted.lines().filter(|l| !l.trim().is_empty()) {
            self.line(css_line);
        }
        self.indent_level -= 1;
        self.line("</style>");
    }
}

/// Whether every descendant is text or a phrasing element.
fn is_inline_content(node: &NodeRef) -> bool {
    node.children().all(|child| is_inline_node(&child))
}

fn is_inline_node(node: &NodeRef) -> bool {
    match node.data() {
        NodeData::Text(_) | NodeData::Comment(_) => true,
        NodeData::Element(element) => {
            INLINE_ELEMENTS.contains(&&*element.name.local) && is_inline_content(node)
        }
        _ => false,
    }
}

fn open_tag(element: &ElementData) -> String {
    let mut tag = format!("<{}", &*element.name.local);

    for (name, attr) in element.attributes.borrow().map.iter() {
        tag.push(' ');
        if let Some(prefix) = &attr.prefix {
            tag.push_str(prefix);
            tag.push(':');
        }
        tag.push_str(&name.local);
        tag.push_str("=\"");
        tag.push_str(&escape_attribute(&attr.value));
        tag.push('"');
    }

    tag.push('>');
    tag
}

fn escape_attribute(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            _ => result.push(c),
        }
    }
    result
}
