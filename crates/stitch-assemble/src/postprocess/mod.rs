//! Optional post-processing of the serialized document.

mod beautify;
mod minify;

pub use beautify::beautify;
pub use minify::minify;

use crate::error::AssembleError;

/// What to do with the serialized HTML before it is written.
///
/// Beautifying and minifying are alternatives; there is no way to ask for
/// both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostProcess {
    /// Write the serializer's output unchanged
    #[default]
    None,
    /// Re-indent one element per line
    Beautify,
    /// Minify HTML along with embedded CSS and JavaScript
    Minify,
}

impl PostProcess {
    /// Apply the post-processing step to serialized HTML.
    pub fn apply(self, html: String) -> Result<String, AssembleError> {
        tracing::debug!("Post-processing: {:?}", self);

        match self {
            PostProcess::None => Ok(html),
            PostProcess::Beautify => Ok(beautify(&html)),
            PostProcess::Minify => minify(&html),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchikiki::traits::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Page</title>
    <style>
        .a .b { color: red; }
    </style>
</head>
<body>
    <main>
        <h1>Title</h1>
        <ul>
            <li>one</li>
            <li>two <em>three</em></li>
        </ul>
    </main>
    <script>
        const answer = 40 + 2;
        console.log(answer);
    </script>
</body>
</html>"#;

    fn element_names(html: &str) -> Vec<String> {
        kuchikiki::parse_html()
            .one(html)
            .descendants()
            .elements()
            .map(|e| e.name.local.to_string())
            .collect()
    }

    #[test]
    fn none_passes_through() {
        let out = PostProcess::None.apply(PAGE.to_string()).unwrap();
        assert_eq!(out, PAGE);
    }

    #[test]
    fn minified_and_beautified_share_structure() {
        let beautified = PostProcess::Beautify.apply(PAGE.to_string()).unwrap();
        let minified = PostProcess::Minify.apply(PAGE.to_string()).unwrap();

        assert!(minified.len() < beautified.len());
        assert_eq!(element_names(&minified), element_names(&beautified));
        assert_eq!(element_names(&beautified), element_names(PAGE));
    }
}
