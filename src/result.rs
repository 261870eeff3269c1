use serde::{Deserialize, Serialize};

/// Ordered log of what a rename touched and what it could not handle.
///
/// Both lists are append-only and keep insertion order. Nothing is ever
/// deduplicated, so the same file can show up once per rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameResult {
    pub changed_files: Vec<String>,
    pub potential_issues: Vec<String>,
}

impl RenameResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changed_files(&self) -> &[String] {
        &self.changed_files
    }

    pub fn potential_issues(&self) -> &[String] {
        &self.potential_issues
    }

    pub fn add_changed_file(&mut self, entry: impl Into<String>) {
        self.changed_files.push(entry.into());
    }

    pub fn add_potential_issue(&mut self, issue: impl Into<String>) {
        self.potential_issues.push(issue.into());
    }

    pub fn has_issues(&self) -> bool {
        !self.potential_issues.is_empty()
    }

    pub fn merge(&mut self, other: RenameResult) {
        self.changed_files.extend(other.changed_files);
        self.potential_issues.extend(other.potential_issues);
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("changed_files: {}\n", self.changed_files.len()));
        for entry in &self.changed_files {
            out.push_str(&format!("- {entry}\n"));
        }
        out.push_str(&format!(
            "potential_issues: {}\n",
            self.potential_issues.len()
        ));
        for issue in &self.potential_issues {
            out.push_str(&format!("- {issue}\n"));
        }
        out
    }
}
