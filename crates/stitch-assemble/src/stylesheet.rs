//! Stylesheet compilation and formatting.

use std::fs::File;
use std::path::{Path, PathBuf};

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use serde::Deserialize;

use crate::error::AssembleError;

/// Options for compiling embedded stylesheets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StylesheetOptions {
    /// Extra directories searched by `@use` and `@import`
    pub load_paths: Vec<PathBuf>,
}

/// Compile a Sass/SCSS file to plain CSS.
///
/// Imports are resolved relative to the file first, then against the
/// configured load paths. The syntax is picked from the file extension.
pub fn compile(path: &Path, options: &StylesheetOptions) -> Result<String, AssembleError> {
    // Missing or unreadable sources are IO errors, not compile errors.
    File::open(path).map_err(|source| AssembleError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut grass_options = grass::Options::default().style(grass::OutputStyle::Expanded);
    for load_path in &options.load_paths {
        grass_options = grass_options.load_path(load_path);
    }

    grass::from_path(path, &grass_options).map_err(|e| AssembleError::Stylesheet {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Pretty-print CSS using lightningcss.
pub fn format_css(css: &str) -> Result<String, String> {
    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| format!("CSS parse error: {}", e))?;

    let printed = stylesheet
        .to_css(PrinterOptions {
            minify: false,
            ..Default::default()
        })
        .map_err(|e| format!("CSS print error: {}", e))?;

    Ok(printed.code)
}
