//! Document assembler.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use stitch_markdown::MarkdownOptions;

use crate::document::Document;
use crate::error::AssembleError;
use crate::loader::{base_dir, read_text};
use crate::markers::Marker;
use crate::output::write_output;
use crate::postprocess::PostProcess;
use crate::producers::{
    embed_markdown, embed_raw, embed_stylesheet, generation_date, Content,
};
use crate::stylesheet::StylesheetOptions;
use crate::substitute::{substitute_file, substitute_metadata};

/// Everything a single run needs, gathered up front.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Template to read
    pub input: PathBuf,

    /// Where the assembled document goes
    pub output: PathBuf,

    /// Post-processing applied after serialization
    pub post_process: PostProcess,

    /// Extensions for embedded Markdown
    pub markdown: MarkdownOptions,

    /// Options for embedded stylesheets
    pub stylesheet: StylesheetOptions,
}

impl AssembleOptions {
    /// Options for `input` -> `output` with everything else defaulted.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            post_process: PostProcess::None,
            markdown: MarkdownOptions::default(),
            stylesheet: StylesheetOptions::default(),
        }
    }
}

/// Result of an assembly run.
#[derive(Debug)]
pub struct AssembleResult {
    /// Number of marked elements substituted
    pub substitutions: usize,

    /// Size of the written document in bytes
    pub bytes: usize,

    /// Total run time in milliseconds
    pub duration_ms: u64,

    /// Output path
    pub output: PathBuf,
}

/// Assembles one output document from one template.
pub struct Assembler {
    options: AssembleOptions,
}

impl Assembler {
    /// Create a new assembler.
    pub fn new(options: AssembleOptions) -> Self {
        Self { options }
    }

    /// Run the whole pipeline and write the output file.
    ///
    /// The output is only touched once every substitution and the
    /// post-processing step have succeeded.
    pub fn assemble(&self) -> Result<AssembleResult, AssembleError> {
        let start = Instant::now();

        tracing::info!("Assembling {}", self.options.input.display());

        let (html, substitutions) = self.render()?;
        write_output(&self.options.output, &html)?;

        Ok(AssembleResult {
            substitutions,
            bytes: html.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output: self.options.output.clone(),
        })
    }

    /// Read, substitute, serialize and post-process, without writing.
    ///
    /// Returns the final HTML and the number of substitutions made.
    pub fn render(&self) -> Result<(String, usize), AssembleError> {
        let source = read_text(&self.options.input)?;
        let document = Document::parse(&source);

        let substitutions = self.substitute(&document)?;

        let html = document.serialize()?;
        let html = self.options.post_process.apply(html)?;

        Ok((html, substitutions))
    }

    /// Run one pass per marker kind over the document, in the fixed order.
    pub fn substitute(&self, document: &Document) -> Result<usize, AssembleError> {
        let base_dir = base_dir(&self.options.input);
        let mut total = 0;

        for marker in Marker::ALL {
            let attribute = marker.attribute();

            let count = if marker.is_file_based() {
                substitute_file(document, attribute, &base_dir, |_, path| {
                    self.produce_file(marker, path)
                })?
            } else {
                substitute_metadata(document, attribute, |_| generation_date(Utc::now()))
            };

            tracing::debug!("{}: {} element(s)", marker, count);
            total += count;
        }

        Ok(total)
    }

    fn produce_file(&self, marker: Marker, path: &Path) -> Result<Content, AssembleError> {
        match marker {
            Marker::Embed => embed_raw(path),
            Marker::EmbedMarkdown => embed_markdown(path, self.options.markdown),
            Marker::EmbedSass => embed_stylesheet(path, &self.options.stylesheet),
            Marker::GenerationDate => Ok(generation_date(Utc::now())),
        }
    }
}
