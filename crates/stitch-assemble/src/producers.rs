//! Content producers, one per marker kind.

use std::path::Path;

use chrono::{DateTime, Utc};
use stitch_markdown::{render_markdown, MarkdownOptions};

use crate::error::AssembleError;
use crate::loader::read_text;
use crate::stylesheet::{self, StylesheetOptions};

/// New content for a marked element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Markup parsed into the element's children
    Markup(String),
    /// Plain text, escaped on output
    Text(String),
}

/// Embed a file verbatim. The contents are treated as markup.
pub fn embed_raw(path: &Path) -> Result<Content, AssembleError> {
    read_text(path).map(Content::Markup)
}

/// Embed a Markdown file rendered to HTML.
pub fn embed_markdown(path: &Path, options: MarkdownOptions) -> Result<Content, AssembleError> {
    let source = read_text(path)?;
    Ok(Content::Markup(render_markdown(&source, options)))
}

/// Embed a Sass/SCSS file compiled to CSS.
pub fn embed_stylesheet(
    path: &Path,
    options: &StylesheetOptions,
) -> Result<Content, AssembleError> {
    stylesheet::compile(path, options).map(Content::Markup)
}

/// The generation time as an HTTP-date, e.g. `Wed, 21 Oct 2015 07:28:00 GMT`.
pub fn generation_date(now: DateTime<Utc>) -> Content {
    Content::Text(now.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn raw_embed_is_verbatim() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("part.html");
        fs::write(&path, "<b>hi</b>").unwrap();

        assert_eq!(
            embed_raw(&path).unwrap(),
            Content::Markup("<b>hi</b>".to_string())
        );
    }

    #[test]
    fn markdown_embed_renders() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("intro.md");
        fs::write(&path, "# Title").unwrap();

        let Content::Markup(html) = embed_markdown(&path, MarkdownOptions::default()).unwrap()
        else {
            panic!("expected markup");
        };
        assert!(html.contains("<h1>Title</h1>"));
    }

    #[test]
    fn formats_http_date() {
        let when = Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap();

        assert_eq!(
            generation_date(when),
            Content::Text("Wed, 21 Oct 2015 07:28:00 GMT".to_string())
        );
    }

    #[test]
    fn single_digit_day_is_padded() {
        let when = Utc.with_ymd_and_hms(2022, 3, 4, 9, 5, 7).unwrap();

        assert_eq!(
            generation_date(when),
            Content::Text("Fri, 04 Mar 2022 09:05:07 GMT".to_string())
        );
    }
}
