//! Extension → MIME oracle used to decide which extensions are kept.

use std::collections::HashMap;

use mime::Mime;
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::config::FnormConfig;

/// Answers whether an extension is known, and which MIME type it maps to.
///
/// Lookups are exact: callers pass the extension already lowercased and
/// without the leading dot.
pub trait ExtensionRegistry {
    fn lookup(&self, extension: &str) -> Option<Mime>;

    fn is_known(&self, extension: &str) -> bool {
        self.lookup(extension).is_some()
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid MIME type {mime:?} for extension {extension:?}")]
    InvalidMime { extension: String, mime: String },
}

/// Non-standard mappings layered over the base table for compatibility.
const COMPAT_MAPPINGS: &[(&str, &str)] = &[
    ("gzip", "application/gzip"),
    ("gz", "application/gzip"),
    ("msg", "application/vnd.ms-outlook"),
    ("dat", "application/dat"),
];

static SHARED: Lazy<MimeRegistry> = Lazy::new(MimeRegistry::standard);

/// Registry backed by `mime_guess` plus an override table.
#[derive(Debug, Clone)]
pub struct MimeRegistry {
    overrides: HashMap<String, Mime>,
    use_base: bool,
}

impl MimeRegistry {
    /// Base table plus the compatibility mappings.
    pub fn standard() -> Self {
        let mut registry = Self {
            overrides: HashMap::new(),
            use_base: true,
        };
        for (ext, mime) in COMPAT_MAPPINGS {
            match mime.parse() {
                Ok(parsed) => registry.insert(ext, parsed),
                Err(e) => tracing::warn!(ext, mime, "skipping compat mapping: {}", e),
            }
        }
        registry
    }

    /// Registry that knows nothing until mappings are added.
    pub fn empty() -> Self {
        Self {
            overrides: HashMap::new(),
            use_base: false,
        }
    }

    /// Process-wide standard registry.
    pub fn shared() -> &'static MimeRegistry {
        &SHARED
    }

    /// Standard registry extended with the `[extensions]` table from config.
    pub fn from_config(cfg: &FnormConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::standard();
        for (ext, mime) in &cfg.extensions {
            let parsed: Mime = mime.parse().map_err(|_| RegistryError::InvalidMime {
                extension: ext.clone(),
                mime: mime.clone(),
            })?;
            registry.insert(ext, parsed);
        }
        Ok(registry)
    }

    pub fn with_mapping(mut self, extension: impl Into<String>, mime: Mime) -> Self {
        self.insert(&extension.into(), mime);
        self
    }

    fn insert(&mut self, extension: &str, mime: Mime) {
        let key = extension.trim_start_matches('.').to_lowercase();
        self.overrides.insert(key, mime);
    }
}

impl Default for MimeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ExtensionRegistry for MimeRegistry {
    fn lookup(&self, extension: &str) -> Option<Mime> {
        // Keys are stored lowercase; anything else is not an exact match.
        if extension.is_empty() || extension.bytes().any(|b| b.is_ascii_uppercase()) {
            return None;
        }
        if let Some(mime) = self.overrides.get(extension) {
            return Some(mime.clone());
        }
        if self.use_base {
            mime_guess::from_ext(extension).first()
        } else {
            None
        }
    }
}
