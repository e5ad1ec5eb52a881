//! Document build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use stitch_assemble::{AssembleOptions, Assembler, PostProcess, StylesheetOptions};
use stitch_markdown::MarkdownOptions;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    markdown: MarkdownOptions,
    #[serde(default)]
    stylesheet: StylesheetOptions,
}

/// Load the config file if one was given.
///
/// Relative stylesheet load paths are taken relative to the config file.
fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    let Some(path) = path else {
        return Ok(ConfigFile::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let mut config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;

    let config_dir = path.parent().unwrap_or(Path::new(""));
    for load_path in &mut config.stylesheet.load_paths {
        *load_path = config_dir.join(&*load_path);
    }

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Run the build command.
pub fn run(
    input: PathBuf,
    output: PathBuf,
    post_process: PostProcess,
    config: Option<PathBuf>,
) -> Result<()> {
    let file_config = load_config(config.as_deref())?;

    let options = AssembleOptions {
        input,
        output,
        post_process,
        markdown: file_config.markdown,
        stylesheet: file_config.stylesheet,
    };

    let result = Assembler::new(options).assemble()?;

    tracing::info!(
        "Made {} substitutions, wrote {} bytes in {}ms",
        result.substitutions,
        result.bytes,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_without_config() {
        let config = load_config(None).unwrap();

        assert_eq!(config.markdown, MarkdownOptions::default());
        assert!(config.stylesheet.load_paths.is_empty());
    }

    #[test]
    fn loads_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("stitch.toml");
        fs::write(
            &path,
            r#"
[markdown]
footnotes = true
tables = false

[stylesheet]
load_paths = ["vendor/scss"]
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert!(config.markdown.footnotes);
        assert!(!config.markdown.tables);
        assert!(config.markdown.strikethrough);
        assert_eq!(
            config.stylesheet.load_paths,
            vec![temp.path().join("vendor/scss")]
        );
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("stitch.toml");
        fs::write(&path, "[markdown\nfootnotes = ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn missing_config_is_an_error() {
        let temp = tempdir().unwrap();
        assert!(load_config(Some(&temp.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn builds_with_config() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("index.html"),
            r#"<div data-embed-markdown="notes.md"></div>"#,
        )
        .unwrap();
        fs::write(temp.path().join("notes.md"), "Text[^1]\n\n[^1]: A footnote.\n").unwrap();

        let config = temp.path().join("stitch.toml");
        fs::write(&config, "[markdown]\nfootnotes = true\n").unwrap();

        let output = temp.path().join("dist/index.html");
        run(
            temp.path().join("index.html"),
            output.clone(),
            PostProcess::Beautify,
            Some(config),
        )
        .unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains("footnote-definition"));
        assert!(html.starts_with("<html>\n"));
    }
}
