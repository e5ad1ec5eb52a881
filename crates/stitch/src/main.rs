//! Stitch CLI - assemble a single HTML document from a template and embedded files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use stitch_assemble::PostProcess;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "stitch")]
#[command(about = "Assemble a single HTML document from a template and embedded files")]
#[command(version)]
pub struct Cli {
    /// The input file
    #[arg(short, long)]
    input: PathBuf,

    /// The output file
    #[arg(short, long)]
    output: PathBuf,

    /// Beautify the resulting source
    #[arg(short, long, conflicts_with = "minify")]
    beautify: bool,

    /// Minify the resulting source
    #[arg(short, long)]
    minify: bool,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn post_process(&self) -> PostProcess {
        if self.beautify {
            PostProcess::Beautify
        } else if self.minify {
            PostProcess::Minify
        } else {
            PostProcess::None
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let post_process = cli.post_process();
    commands::build::run(cli.input, cli.output, post_process, cli.config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["stitch", "-i", "src/index.html", "-o", "dist/index.html", "-b"])
            .unwrap();

        assert_eq!(cli.input, PathBuf::from("src/index.html"));
        assert_eq!(cli.output, PathBuf::from("dist/index.html"));
        assert_eq!(cli.post_process(), PostProcess::Beautify);
    }

    #[test]
    fn parses_long_flags() {
        let cli = Cli::try_parse_from([
            "stitch", "--input", "a.html", "--output", "b.html", "--minify", "--config",
            "stitch.toml",
        ])
        .unwrap();

        assert_eq!(cli.post_process(), PostProcess::Minify);
        assert_eq!(cli.config, Some(PathBuf::from("stitch.toml")));
    }

    #[test]
    fn no_post_processing_by_default() {
        let cli = Cli::try_parse_from(["stitch", "-i", "a.html", "-o", "b.html"]).unwrap();
        assert_eq!(cli.post_process(), PostProcess::None);
    }

    #[test]
    fn rejects_beautify_with_minify() {
        let err = Cli::try_parse_from(["stitch", "-i", "a.html", "-o", "b.html", "-b", "-m"])
            .err()
            .unwrap();

        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn requires_input_and_output() {
        let err = Cli::try_parse_from(["stitch", "-i", "a.html"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["stitch", "-o", "b.html"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn verifies_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
