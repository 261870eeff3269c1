use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::RenameOptions;
use crate::result::RenameResult;
use crate::rewrite::{Pass, SPACE, WORD, change_entry, literal, rewrite_file};
use crate::scan::{package_dir, scan_source_files};

pub fn rename_package(root: &Path, old_package: &str, new_package: &str) -> Result<RenameResult> {
    rename_package_with(root, old_package, new_package, &RenameOptions::default())
}

/// Moves the directory backing `old_package` and rewrites every source file
/// under `root` to the new name.
///
/// A missing old directory is reported and nothing else happens. An existing
/// destination is reported as a conflict and the move is skipped, but the
/// textual rewrite still runs over the whole tree.
pub fn rename_package_with(
    root: &Path,
    old_package: &str,
    new_package: &str,
    options: &RenameOptions,
) -> Result<RenameResult> {
    let mut result = RenameResult::new();
    let old_path = package_dir(root, old_package);
    let new_path = package_dir(root, new_package);

    if !old_path.is_dir() {
        let issue = format!(
            "Error: Old package directory not found: {}",
            old_path.display()
        );
        tracing::warn!("{issue}");
        result.add_potential_issue(issue);
        return Ok(result);
    }

    if new_path.exists() {
        let issue = format!(
            "Warning: New package directory already exists: {}. This might lead to conflicts.",
            new_path.display()
        );
        tracing::warn!("{issue}");
        result.add_potential_issue(issue);
    } else {
        if !options.dry_run {
            if let Some(parent) = new_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::rename(&old_path, &new_path).with_context(|| {
                format!(
                    "Failed to move package directory: {} -> {}",
                    old_path.display(),
                    new_path.display()
                )
            })?;
            tracing::info!(from = %old_path.display(), to = %new_path.display(), "moved package directory");
        }
        result.add_changed_file(change_entry(
            options,
            format!(
                "Directory renamed: {} -> {}",
                old_path.display(),
                new_path.display()
            ),
        ));
    }

    let passes = package_passes(old_package, new_package)?;
    for file in scan_source_files(root, &options.extension)? {
        rewrite_file(&file, &passes, options, &mut result)?;
    }

    Ok(result)
}

pub fn package_passes(old_package: &str, new_package: &str) -> Result<Vec<Pass>> {
    let old = literal(old_package);

    let declaration = format!("package {new_package};");
    let import_prefix = format!("import {new_package}.");
    let qualified_prefix = format!("{new_package}.");

    Ok(vec![
        Pass::first(
            "package declaration",
            &format!(r"(?m)^package{SPACE}+{old}{SPACE}*;"),
            move |_| declaration.clone(),
        )?,
        Pass::all(
            "import statements",
            &format!(r"import{SPACE}+{old}\.([^;]+);"),
            move |caps| format!("{import_prefix}{};", group(caps, 1)),
        )?,
        Pass::all(
            "fully qualified name references",
            &format!(r"(?<!{WORD}){old}\.({WORD}+)"),
            move |caps| format!("{qualified_prefix}{}", group(caps, 1)),
        )?,
    ])
}

fn group<'t>(caps: &fancy_regex::Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}
