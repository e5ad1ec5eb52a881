//! Markdown rendering for embedded documents.
//!
//! Turns Markdown source into an HTML fragment suitable for dropping into a
//! template element. Raw HTML in the source is passed through untouched.

pub mod render;

pub use render::{render_markdown, MarkdownOptions};
