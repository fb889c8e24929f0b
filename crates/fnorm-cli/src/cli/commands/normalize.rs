//! `fnorm normalize <name>...` – normalize filenames and print the results.

use anyhow::{bail, Result};
use fnorm_core::config::FnormConfig;
use fnorm_core::{MimeRegistry, NormalizedFilename, Substitutions};

use crate::cli::NormalizeArgs;

pub fn run_normalize(cfg: &FnormConfig, registry: &MimeRegistry, args: &NormalizeArgs) -> Result<()> {
    let table = cfg.substitutions();
    let require_valid = args.require_valid || cfg.require_valid;
    let mut invalid = Vec::new();

    for name in &args.names {
        let normalized = normalize_one(cfg, registry, &table, args, name)?;
        if args.json {
            println!("{}", serde_json::to_string(&normalized.summary(name))?);
        } else {
            println!("{}", normalized.assemble());
        }
        if !normalized.is_valid() {
            tracing::debug!(input = %name, result = %normalized, "normalized name is not valid");
            invalid.push(name.as_str());
        }
    }

    if require_valid && !invalid.is_empty() {
        bail!(
            "{} name(s) did not normalize to a valid filename: {}",
            invalid.len(),
            invalid.join(", ")
        );
    }
    Ok(())
}

fn normalize_one<'r>(
    cfg: &FnormConfig,
    registry: &'r MimeRegistry,
    table: &Substitutions,
    args: &NormalizeArgs,
    name: &str,
) -> Result<NormalizedFilename<'r>> {
    let mut normalized = NormalizedFilename::with_registry(name, table, registry);
    if let Some(ext) = &args.extension {
        normalized.set_extension(ext.trim_start_matches('.'));
    }
    if let Some(max) = args.max_length.or(cfg.max_length) {
        normalized.limit_length(max)?;
    }
    Ok(normalized)
}
