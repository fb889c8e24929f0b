//! `fnorm lookup <ext>` – show the MIME type the registry holds for an extension.

use anyhow::{bail, Result};
use fnorm_core::{ExtensionRegistry, MimeRegistry};

pub fn run_lookup(registry: &MimeRegistry, extension: &str) -> Result<()> {
    let ext = extension.trim_start_matches('.').to_lowercase();
    match registry.lookup(&ext) {
        Some(mime) => println!("{}\t{}", ext, mime.essence_str()),
        None => bail!("unknown extension: {}", extension),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown() {
        let registry = MimeRegistry::standard();
        assert!(run_lookup(&registry, ".PDF").is_ok());
        assert!(run_lookup(&registry, "gz").is_ok());
        assert!(run_lookup(&registry, "weirdext").is_err());
    }
}
