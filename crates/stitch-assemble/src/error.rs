//! Errors raised while assembling a document.

use std::io;
use std::path::PathBuf;

/// Errors that can occur during assembly.
///
/// Every variant is fatal to the run; nothing is written once one is raised.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to compile stylesheet {}: {message}", path.display())]
    Stylesheet { path: PathBuf, message: String },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] io::Error),

    #[error("Failed to minify output: {0}")]
    Minify(String),
}

impl AssembleError {
    /// Whether the error was caused by a file that does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => {
                source.kind() == io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
