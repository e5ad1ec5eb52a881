//! Marker substitution passes.
//!
//! Each pass sweeps the document once for a single marker attribute. The
//! matching elements are snapshotted up front, then for each one the
//! attribute is stripped before the producer runs and the element's content
//! is replaced with whatever the producer returns.

use std::path::Path;

use kuchikiki::{ElementData, NodeDataRef};

use crate::document::{set_inner_html, set_inner_text, Document};
use crate::error::AssembleError;
use crate::loader::resolve;
use crate::producers::Content;

/// Run a file-based pass.
///
/// The attribute value is resolved against `base_dir` and handed to
/// `produce` along with the element. The first producer error aborts the pass.
/// Returns the number of elements substituted.
pub fn substitute_file<F>(
    document: &Document,
    attribute: &str,
    base_dir: &Path,
    mut produce: F,
) -> Result<usize, AssembleError>
where
    F: FnMut(&ElementData, &Path) -> Result<Content, AssembleError>,
{
    let elements = document.elements_with_attribute(attribute);

    for element in &elements {
        let value = take_attribute(element, attribute);
        let path = resolve(base_dir, &value);

        tracing::debug!("{}: embedding {}", attribute, path.display());

        let data: &ElementData = element;
        let content = produce(data, &path)?;
        apply(element, content);
    }

    Ok(elements.len())
}

/// Run a metadata pass. The attribute value, if any, is ignored.
pub fn substitute_metadata<F>(document: &Document, attribute: &str, mut produce: F) -> usize
where
    F: FnMut(&ElementData) -> Content,
{
    let elements = document.elements_with_attribute(attribute);

    for element in &elements {
        take_attribute(element, attribute);

        tracing::debug!("{}: filling <{}>", attribute, &*element.name.local);

        let data: &ElementData = element;
        let content = produce(data);
        apply(element, content);
    }

    elements.len()
}

/// Remove the attribute and return its value.
fn take_attribute(element: &NodeDataRef<ElementData>, attribute: &str) -> String {
    element
        .attributes
        .borrow_mut()
        .remove(attribute)
        .map(|attr| attr.value)
        .unwrap_or_default()
}

fn apply(element: &NodeDataRef<ElementData>, content: Content) {
    match content {
        Content::Markup(markup) => set_inner_html(element, &markup),
        Content::Text(text) => set_inner_text(element, &text),
    }
}
