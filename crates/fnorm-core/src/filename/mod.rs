//! Filename normalization.
//!
//! Turns an arbitrary, possibly user-supplied filename (directories,
//! diacritics, whitespace, punctuation, mixed case) into a lowercase
//! basename plus an optional extension that the registry recognises.

mod clean;
mod error;
mod path;
mod substitutions;

pub use clean::clean;
pub use error::FilenameError;
pub use substitutions::{Substitution, Substitutions};

use std::fmt;

use mime::Mime;
use serde::Serialize;

use crate::registry::{ExtensionRegistry, MimeRegistry};

/// A cleaned filename: lowercase basename and an optional known extension.
///
/// # Examples
///
/// - `"test pdf.pdf"` → `"test_pdf.pdf"`
/// - `"Profi/Bäcker(1).pdf"` → `"profi_baecker(1).pdf"`
/// - `"Fußball (HSV)"` → `"fussball_(hsv)"` (no extension)
pub struct NormalizedFilename<'r> {
    basename: String,
    extension: Option<String>,
    registry: &'r dyn ExtensionRegistry,
}

impl NormalizedFilename<'static> {
    /// Normalizes `raw` with the default substitution table and the shared
    /// standard registry.
    pub fn new(raw: &str) -> Self {
        NormalizedFilename::with_registry(
            raw,
            &Substitutions::default_table(),
            MimeRegistry::shared(),
        )
    }

    /// Like [`NormalizedFilename::new`] with a caller-supplied table.
    pub fn with_substitutions(raw: &str, substitutions: &Substitutions) -> Self {
        NormalizedFilename::with_registry(raw, substitutions, MimeRegistry::shared())
    }
}

impl<'r> NormalizedFilename<'r> {
    /// Normalizes `raw` against `registry`. An empty `substitutions` table
    /// selects [`Substitutions::default_table`].
    pub fn with_registry(
        raw: &str,
        substitutions: &Substitutions,
        registry: &'r dyn ExtensionRegistry,
    ) -> Self {
        let parts = path::decompose(raw);

        let mut normalized = Self {
            basename: String::new(),
            extension: None,
            registry,
        };
        if let Some(ext) = parts.extension {
            normalized.set_extension(ext);
        }

        let default_table;
        let substitutions = if substitutions.is_empty() {
            default_table = Substitutions::default_table();
            &default_table
        } else {
            substitutions
        };

        normalized.basename = parts
            .components()
            .map(|component| {
                let cleaned = clean(component, substitutions);
                tracing::trace!(component, cleaned = %cleaned, "cleaned filename component");
                cleaned
            })
            .filter(|cleaned| !cleaned.is_empty())
            .map(|cleaned| cleaned.to_lowercase())
            .collect::<Vec<_>>()
            .join("_");

        normalized
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    /// Replaces the extension if the lowercased `candidate` is known to the
    /// registry. Unknown candidates are ignored and keep the current value.
    pub fn set_extension(&mut self, candidate: &str) {
        let candidate = candidate.to_lowercase();
        if self.registry.is_known(&candidate) {
            self.extension = Some(candidate);
        } else {
            tracing::debug!(extension = %candidate, "ignoring unknown extension");
        }
    }

    /// MIME type of the current extension, if any.
    pub fn mime_type(&self) -> Option<Mime> {
        self.extension
            .as_deref()
            .and_then(|ext| self.registry.lookup(ext))
    }

    /// Truncates the basename to at most `max` bytes.
    ///
    /// Basenames are ASCII after cleaning, so bytes and characters coincide;
    /// the cut is still floored to a char boundary. Separators left at the
    /// end by the cut are kept.
    pub fn limit_length(&mut self, max: usize) -> Result<(), FilenameError> {
        if max == 0 {
            return Err(FilenameError::InvalidLength(max));
        }

        if self.basename.len() > max {
            let mut take = max;
            while take > 0 && !self.basename.is_char_boundary(take) {
                take -= 1;
            }
            tracing::debug!(from = self.basename.len(), to = take, "truncating basename");
            self.basename.truncate(take);
        }
        Ok(())
    }

    /// `basename.extension`, or just the basename without an extension.
    pub fn assemble(&self) -> String {
        match &self.extension {
            Some(ext) => format!("{}.{}", self.basename, ext),
            None => self.basename.clone(),
        }
    }

    /// A filename is usable only with a non-empty basename and a known extension.
    pub fn is_valid(&self) -> bool {
        !self.basename.is_empty() && self.has_extension()
    }

    /// Serializable snapshot of the current state, tagged with the raw `input`.
    pub fn summary(&self, input: &str) -> FilenameSummary {
        FilenameSummary {
            input: input.to_string(),
            basename: self.basename.clone(),
            extension: self.extension.clone(),
            mime: self.mime_type().map(|m| m.essence_str().to_string()),
            filename: self.assemble(),
            valid: self.is_valid(),
        }
    }
}

impl fmt::Debug for NormalizedFilename<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedFilename")
            .field("basename", &self.basename)
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for NormalizedFilename<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.assemble())
    }
}

/// Result of normalizing one input, as reported by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilenameSummary {
    pub input: String,
    pub basename: String,
    pub extension: Option<String>,
    pub mime: Option<String>,
    pub filename: String,
    pub valid: bool,
}
