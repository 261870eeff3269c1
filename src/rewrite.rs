use anyhow::{Context, Result};
use fancy_regex::{Captures, Regex};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::config::RenameOptions;
use crate::result::RenameResult;

/// ASCII word character, used for the identifier-boundary guards.
pub const WORD: &str = "[A-Za-z0-9_]";

/// ASCII whitespace, matching Java's default `\s`.
pub const SPACE: &str = "[ \t\n\u{0B}\u{0C}\r]";

type Replacement = Box<dyn Fn(&Captures<'_>) -> String>;

/// One substitution category applied to a whole file.
pub struct Pass {
    label: &'static str,
    regex: Regex,
    limit: Option<usize>,
    replacement: Replacement,
}

impl Pass {
    pub fn all(
        label: &'static str,
        pattern: &str,
        replacement: impl Fn(&Captures<'_>) -> String + 'static,
    ) -> Result<Self> {
        Self::build(label, pattern, None, Box::new(replacement))
    }

    pub fn first(
        label: &'static str,
        pattern: &str,
        replacement: impl Fn(&Captures<'_>) -> String + 'static,
    ) -> Result<Self> {
        Self::build(label, pattern, Some(1), Box::new(replacement))
    }

    fn build(
        label: &'static str,
        pattern: &str,
        limit: Option<usize>,
        replacement: Replacement,
    ) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Failed to compile {label} pattern: {pattern}"))?;
        Ok(Self {
            label,
            regex,
            limit,
            replacement,
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Rewrites `text`, returning it borrowed when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Result<Cow<'t, str>> {
        let mut out = String::new();
        let mut last = 0usize;
        let mut replaced = 0usize;

        for caps in self.regex.captures_iter(text) {
            if self.limit.is_some_and(|limit| replaced >= limit) {
                break;
            }
            let caps = caps.with_context(|| format!("Failed to match {} pattern", self.label))?;
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&text[last..whole.start()]);
            out.push_str(&(self.replacement)(&caps));
            last = whole.end();
            replaced += 1;
        }

        if replaced == 0 {
            return Ok(Cow::Borrowed(text));
        }
        out.push_str(&text[last..]);
        Ok(Cow::Owned(out))
    }
}

/// Quotes `name` so it matches literally inside a pattern.
pub fn literal(name: &str) -> String {
    regex::escape(name)
}

/// Runs `passes` over one file in order, each on the previous pass's output.
///
/// A pass that changes the text is written back immediately and logged as
/// `Modified <label> in: <path>`. Returns how many passes changed the file.
pub fn rewrite_file(
    path: &Path,
    passes: &[Pass],
    options: &RenameOptions,
    result: &mut RenameResult,
) -> Result<usize> {
    let mut content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    let mut changed = 0usize;

    for pass in passes {
        let updated = match pass.apply(&content)? {
            Cow::Borrowed(_) => continue,
            Cow::Owned(updated) if updated == content => continue,
            Cow::Owned(updated) => updated,
        };

        if options.dry_run {
            tracing::debug!(path = %path.display(), pass = pass.label(), "would rewrite");
        } else {
            fs::write(path, &updated)
                .with_context(|| format!("Failed to write source file: {}", path.display()))?;
            tracing::info!(path = %path.display(), pass = pass.label(), "rewrote");
        }

        result.add_changed_file(change_entry(
            options,
            format!("Modified {} in: {}", pass.label(), path.display()),
        ));
        content = updated;
        changed += 1;
    }

    Ok(changed)
}

pub(crate) fn change_entry(options: &RenameOptions, entry: String) -> String {
    if options.dry_run {
        format!("[SIMULATED] {entry}")
    } else {
        entry
    }
}
