//! Single-pass HTML document assembly.
//!
//! Parses a template, fills elements carrying marker attributes with content
//! from embedded files or run metadata, then serializes and optionally
//! beautifies or minifies the result before writing it out.

pub mod assembler;
pub mod document;
pub mod error;
pub mod loader;
pub mod markers;
pub mod output;
pub mod postprocess;
pub mod producers;
pub mod stylesheet;
pub mod substitute;

pub use assembler::{AssembleOptions, AssembleResult, Assembler};
pub use document::Document;
pub use error::AssembleError;
pub use markers::Marker;
pub use postprocess::PostProcess;
pub use stylesheet::StylesheetOptions;
