//! Text loading and marker path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AssembleError;

/// Read a file's full contents as text.
///
/// Nothing is cached; every call goes back to storage.
pub fn read_text(path: &Path) -> Result<String, AssembleError> {
    fs::read_to_string(path).map_err(|source| AssembleError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Directory that marker paths in `input` are resolved against.
pub fn base_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Join a marker's file path onto the input document's directory.
///
/// A leading separator does not make the value absolute; marker paths always
/// stay under the input directory's namespace.
pub fn resolve(base_dir: &Path, value: &str) -> PathBuf {
    let relative = value.trim_start_matches(['/', '\\']);
    base_dir.join(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolves_against_input_directory() {
        let base = base_dir(Path::new("docs/page.html"));
        assert_eq!(
            resolve(&base, "styles/main.scss"),
            PathBuf::from("docs/styles/main.scss")
        );
    }

    #[test]
    fn bare_input_name_resolves_relative() {
        let base = base_dir(Path::new("page.html"));
        assert_eq!(resolve(&base, "part.html"), PathBuf::from("part.html"));
    }

    #[test]
    fn leading_separator_stays_relative() {
        let base = base_dir(Path::new("/srv/site/index.html"));
        assert_eq!(
            resolve(&base, "/partials/nav.html"),
            PathBuf::from("/srv/site/partials/nav.html")
        );
    }

    #[test]
    fn reads_file_contents() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("hello.txt");
        fs::write(&path, "<b>hi</b>").unwrap();

        assert_eq!(read_text(&path).unwrap(), "<b>hi</b>");
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = tempdir().unwrap();
        let err = read_text(&temp.path().join("nope.md")).unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("nope.md"));
    }
}
