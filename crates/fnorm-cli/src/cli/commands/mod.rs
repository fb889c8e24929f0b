//! CLI command handlers, one per file.

mod clean;
mod lookup;
mod normalize;

pub use clean::run_clean;
pub use lookup::run_lookup;
pub use normalize::run_normalize;
