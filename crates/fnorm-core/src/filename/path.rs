//! Splitting a raw filename into directory, stem and extension candidate.

use std::ffi::OsStr;
use std::path::Path;

/// Pieces of a raw filename before cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PathParts<'a> {
    /// Directory part; `None` when absent or just `.`.
    pub dirname: Option<&'a str>,
    /// Final segment without its last `.suffix`.
    pub stem: &'a str,
    /// Text after the last `.` of the final segment. A leading dot alone
    /// (`.bashrc`) does not start an extension.
    pub extension: Option<&'a str>,
}

impl<'a> PathParts<'a> {
    /// Components that take part in the basename, in path order.
    pub fn components(&self) -> impl Iterator<Item = &'a str> {
        self.dirname.into_iter().chain(std::iter::once(self.stem))
    }
}

/// Decomposes `raw` using the host's path separator convention.
pub(crate) fn decompose(raw: &str) -> PathParts<'_> {
    let path = Path::new(raw);
    let dirname = path
        .parent()
        .and_then(Path::to_str)
        .filter(|d| !d.is_empty() && *d != ".");
    let stem = path.file_stem().and_then(OsStr::to_str).unwrap_or("");
    let extension = path.extension().and_then(OsStr::to_str);

    PathParts {
        dirname,
        stem,
        extension,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name() {
        let parts = decompose("test.pdf");
        assert_eq!(parts.dirname, None);
        assert_eq!(parts.stem, "test");
        assert_eq!(parts.extension, Some("pdf"));
    }

    #[test]
    fn nested_directories() {
        let parts = decompose("path/to/file/report.final.pdf");
        assert_eq!(parts.dirname, Some("path/to/file"));
        assert_eq!(parts.stem, "report.final");
        assert_eq!(parts.extension, Some("pdf"));
        assert_eq!(
            parts.components().collect::<Vec<_>>(),
            vec!["path/to/file", "report.final"]
        );
    }

    #[test]
    fn no_extension() {
        let parts = decompose("Fußball (HSV)");
        assert_eq!(parts.stem, "Fußball (HSV)");
        assert_eq!(parts.extension, None);
        assert_eq!(parts.components().count(), 1);
    }

    #[test]
    fn leading_dot_is_not_an_extension() {
        let parts = decompose(".pdf");
        assert_eq!(parts.stem, ".pdf");
        assert_eq!(parts.extension, None);
    }

    #[test]
    fn trailing_dot_yields_empty_extension() {
        let parts = decompose("name.");
        assert_eq!(parts.stem, "name");
        assert_eq!(parts.extension, Some(""));
    }

    #[test]
    fn empty_and_root() {
        let empty = decompose("");
        assert_eq!(empty.components().collect::<Vec<_>>(), vec![""]);
        assert_eq!(empty.extension, None);

        let root = decompose("/");
        assert_eq!(root.dirname, None);
        assert_eq!(root.stem, "");
    }

    #[test]
    fn current_dir_prefix_is_dropped() {
        let parts = decompose("./notes.txt");
        assert_eq!(parts.dirname, None);
        assert_eq!(parts.stem, "notes");
    }
}
