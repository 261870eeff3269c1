use anyhow::{Result, bail};
use std::env;
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::scan::DEFAULT_EXTENSION;

pub const EXTENSION_ENV: &str = "JAVA_RENAMER_EXT";

static IDENTIFIER: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[\p{XID_Start}_$][\p{XID_Continue}$]*$")
        .expect("identifier pattern is valid")
});

/// Knobs shared by both renamers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// Source file extension, without the leading dot.
    pub extension: String,
    /// Report what would change without touching the filesystem.
    pub dry_run: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

impl RenameOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            extension: resolve_extension(cli),
            dry_run: cli.dry_run,
        }
    }
}

pub fn resolve_extension(cli: &Cli) -> String {
    let raw = match cli.ext.clone() {
        Some(ext) => ext,
        None => env::var(EXTENSION_ENV).unwrap_or_else(|_| DEFAULT_EXTENSION.to_string()),
    };
    normalize_extension(&raw)
}

fn normalize_extension(raw: &str) -> String {
    let ext = raw.trim().trim_start_matches('.');
    if ext.is_empty() {
        DEFAULT_EXTENSION.to_string()
    } else {
        ext.to_string()
    }
}

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() || !name.split('.').all(|segment| IDENTIFIER.is_match(segment)) {
        bail!("Invalid package name: {name:?} (expected dot-separated Java identifiers)");
    }
    Ok(())
}

pub fn validate_class_name(name: &str) -> Result<()> {
    if !IDENTIFIER.is_match(name) {
        bail!("Invalid class name: {name:?} (expected a single Java identifier)");
    }
    Ok(())
}
