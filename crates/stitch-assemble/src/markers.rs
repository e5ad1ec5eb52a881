//! Marker attributes recognised in templates.

use std::fmt;

/// A kind of substitution, identified by the attribute that requests it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Embed a file verbatim as markup
    Embed,
    /// Embed a Markdown file rendered to HTML
    EmbedMarkdown,
    /// Embed a Sass/SCSS file compiled to CSS
    EmbedSass,
    /// Fill in the time the document was generated
    GenerationDate,
}

impl Marker {
    /// Every marker, in the order its pass runs.
    pub const ALL: [Marker; 4] = [
        Marker::Embed,
        Marker::EmbedMarkdown,
        Marker::EmbedSass,
        Marker::GenerationDate,
    ];

    /// The attribute name that carries this marker.
    pub fn attribute(self) -> &'static str {
        match self {
            Marker::Embed => "data-embed",
            Marker::EmbedMarkdown => "data-embed-markdown",
            Marker::EmbedSass => "data-embed-sass",
            Marker::GenerationDate => "data-metadata-generation-date",
        }
    }

    /// Whether the attribute value names a file to embed.
    pub fn is_file_based(self) -> bool {
        !matches!(self, Marker::GenerationDate)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}
