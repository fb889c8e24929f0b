//! CLI for the fnorm filename normalizer.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fnorm_core::config::{self, FnormConfig};
use fnorm_core::MimeRegistry;
use std::path::PathBuf;

use commands::{run_clean, run_lookup, run_normalize};

/// Top-level CLI for fnorm.
#[derive(Debug, Parser)]
#[command(name = "fnorm")]
#[command(about = "fnorm: normalize filenames into safe, canonical names", long_about = None)]
pub struct Cli {
    /// Load configuration from this file instead of ~/.config/fnorm/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options for `fnorm normalize`.
#[derive(Debug, Clone, Default, Args)]
pub struct NormalizeArgs {
    /// Raw filenames (may include directories) to normalize.
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Truncate basenames to at most N bytes (overrides config max_length).
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Extension to apply when the registry knows it (replaces the detected one).
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Fail if any name lacks a known extension or has an empty basename.
    #[arg(long)]
    pub require_valid: bool,

    /// Print one JSON object per name instead of the bare filename.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize one or more filenames.
    Normalize(NormalizeArgs),

    /// Run the clean transform on a single string and print the result.
    Clean {
        /// Text to clean (case is preserved).
        text: String,

        /// Skip the substitution table (no umlaut folding).
        #[arg(long)]
        no_substitutions: bool,
    },

    /// Print the MIME type registered for an extension.
    Lookup {
        /// Extension, with or without the leading dot.
        extension: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let registry = registry_for(&cfg)?;

        match cli.command {
            CliCommand::Normalize(args) => run_normalize(&cfg, &registry, &args)?,
            CliCommand::Clean {
                text,
                no_substitutions,
            } => run_clean(&cfg, &text, no_substitutions),
            CliCommand::Lookup { extension } => run_lookup(&registry, &extension)?,
        }

        Ok(())
    }
}

fn registry_for(cfg: &FnormConfig) -> Result<MimeRegistry> {
    MimeRegistry::from_config(cfg).context("building extension registry from config")
}

#[cfg(test)]
mod tests;
