//! HTML minification.

use minify_html::Cfg;

use crate::error::AssembleError;

/// Minify HTML, including the contents of `<style>` and `<script>`.
///
/// Closing tags and the `<html>`/`<head>` opening tags are kept so the
/// output parses back to the same element tree.
pub fn minify(html: &str) -> Result<String, AssembleError> {
    let cfg = Cfg {
        minify_css: true,
        minify_js: true,
        keep_closing_tags: true,
        keep_html_and_head_opening_tags: true,
        ..Cfg::new()
    };

    let bytes = minify_html::minify(html.as_bytes(), &cfg);
    String::from_utf8(bytes).map_err(|e| AssembleError::Minify(e.to_string()))
}
