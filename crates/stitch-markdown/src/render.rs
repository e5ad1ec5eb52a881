//! Markdown to HTML rendering.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};
use serde::Deserialize;

/// Markdown extensions enabled during rendering.
///
/// Defaults follow markdown-it's default preset: tables and strikethrough
/// on, raw HTML escaped, everything else off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Pass raw HTML in the source through instead of escaping it
    pub html: bool,

    /// GitHub-style pipe tables
    pub tables: bool,

    /// `~~struck~~` text
    pub strikethrough: bool,

    /// `[^1]` footnote references and definitions
    pub footnotes: bool,

    /// `- [ ]` task list items
    pub tasklists: bool,

    /// Curly quotes, en/em dashes and ellipses
    pub smart_punctuation: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            html: false,
            tables: true,
            strikethrough: true,
            footnotes: false,
            tasklists: false,
            smart_punctuation: false,
        }
    }
}

impl MarkdownOptions {
    fn to_parser_options(self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options.set(Options::ENABLE_SMART_PUNCTUATION, self.smart_punctuation);
        options
    }
}

/// Render Markdown source to an HTML fragment.
///
/// With `html` off, raw HTML is rendered as escaped text and HTML blocks
/// become paragraphs.
pub fn render_markdown(source: &str, options: MarkdownOptions) -> String {
    let allow_html = options.html;
    let parser = Parser::new_ext(source, options.to_parser_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) if !allow_html => Event::Text(raw),
        Event::Start(Tag::HtmlBlock) if !allow_html => Event::Start(Tag::Paragraph),
        Event::End(TagEnd::HtmlBlock) if !allow_html => Event::End(TagEnd::Paragraph),
        event => event,
    });

    let mut html_output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut html_output, parser);

    html_output
}
