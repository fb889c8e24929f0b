pub mod config;
pub mod filename;
pub mod logging;
pub mod registry;

pub use filename::{clean, FilenameError, NormalizedFilename, Substitutions};
pub use registry::{ExtensionRegistry, MimeRegistry};
