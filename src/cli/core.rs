
use anyhow::bail;
use clap::Parser;
use lazy_static::lazy_static;
use std::path::Path;

use crate::cli::convert::ConvertSettings;

lazy_static! {
    /// Stores the full version string we plan to use, which is generated in build.rs
    /// # Examples
    /// * `0.2.1-6bb9635-dirty` - while on a dirty branch
    /// * `0.2.1-6bb9635` - with a fresh commit
    pub static ref FULL_VERSION: String = format!("{}-{}", env!("CARGO_PKG_VERSION"), env!("VERGEN_GIT_DESCRIBE"));
}

/// Flarebed merges consecutive local-ancestry calls (e.g. FLARE output) that share
/// an ancestry assignment into BED regions.
#[derive(Parser)]
#[clap(author,
    version = &**FULL_VERSION,
    about)]
pub struct Cli {
    #[clap(flatten)]
    pub settings: ConvertSettings
}

pub fn get_cli() -> Cli {
    Cli::parse()
}

/// Checks if a file exists and will otherwise exit
/// # Arguments
/// * `filename` - the file path to check for
/// * `label` - the label to use for error messages
pub fn check_required_filename(filename: &Path, label: &str) -> anyhow::Result<()> {
    if !filename.exists() {
        bail!("{} does not exist: \"{}\"", label, filename.display());
    }

    // file exists
    Ok(())
}
