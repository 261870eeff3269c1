use anyhow::{Context, Result, bail};
use clap::Parser;
use java_renamer::cli::{Cli, Commands, OutputFormat};
use java_renamer::config::{
    RenameOptions, init_logging, validate_class_name, validate_package_name,
};
use java_renamer::{RenameResult, rename_class_with, rename_package_with};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let options = RenameOptions::from_cli(&cli);

    let result = match cli.command.clone() {
        Commands::RenamePackage {
            root,
            old_package,
            new_package,
        } => {
            validate_package_pair(&old_package, &new_package)?;
            run_package(&root, &old_package, &new_package, &options)?
        }
        Commands::RenameClass {
            root,
            old_class,
            new_class,
        } => {
            validate_class_pair(&old_class, &new_class)?;
            run_class(&root, &old_class, &new_class, &options)?
        }
        Commands::RenameAll {
            root,
            package,
            class,
        } => {
            if package.is_none() && class.is_none() {
                bail!("rename-all needs at least one of --package or --class");
            }

            // Every pair is checked before the first rename touches the tree.
            let package = package
                .as_deref()
                .map(|values| split_pair(values).context("--package takes exactly one OLD NEW pair"))
                .transpose()?;
            let class = class
                .as_deref()
                .map(|values| split_pair(values).context("--class takes exactly one OLD NEW pair"))
                .transpose()?;
            if let Some((old, new)) = package {
                validate_package_pair(old, new)?;
            }
            if let Some((old, new)) = class {
                validate_class_pair(old, new)?;
            }

            let mut result = RenameResult::new();
            if let Some((old, new)) = package {
                result.merge(run_package(&root, old, new, &options)?);
            }
            if let Some((old, new)) = class {
                result.merge(run_class(&root, old, new, &options)?);
            }
            result
        }
    };

    write_output(&result, cli.format)
}

fn validate_package_pair(old: &str, new: &str) -> Result<()> {
    validate_package_name(old)?;
    validate_package_name(new)
}

fn validate_class_pair(old: &str, new: &str) -> Result<()> {
    validate_class_name(old)?;
    validate_class_name(new)
}

fn run_package(root: &Path, old: &str, new: &str, options: &RenameOptions) -> Result<RenameResult> {
    tracing::info!(root = %root.display(), old, new, "renaming package");
    rename_package_with(root, old, new, options)
        .with_context(|| format!("Package rename failed: {old} -> {new}"))
}

fn run_class(root: &Path, old: &str, new: &str, options: &RenameOptions) -> Result<RenameResult> {
    tracing::info!(root = %root.display(), old, new, "renaming class");
    rename_class_with(root, old, new, options)
        .with_context(|| format!("Class rename failed: {old} -> {new}"))
}

fn split_pair(values: &[String]) -> Option<(&str, &str)> {
    match values {
        [old, new] => Some((old.as_str(), new.as_str())),
        _ => None,
    }
}

fn write_output(result: &RenameResult, format: OutputFormat) -> Result<()> {
    let content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Text => result.render_text(),
    };

    print!("{content}");
    if !content.ends_with('\n') {
        println!();
    }
    Ok(())
}
