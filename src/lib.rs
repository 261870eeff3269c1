//! # java-renamer
//!
//! Bulk package and class renames for Java source trees, done as ordered
//! regex substitutions over whole files. There is no parser: anything that
//! textually looks like the old name (comments and string literals included)
//! is rewritten.
//!
//! ## Architecture
//!
//! - **package**: package directory move plus declaration, import and qualified-name rewrites
//! - **class**: class definition, reference and constructor-call rewrites
//! - **rewrite**: substitution passes and the per-file rewrite loop
//! - **scan**: source file discovery and package-to-directory mapping
//! - **result**: the ordered change/issue log returned by every rename
//! - **config**: rename options, name validation and logging setup
//! - **cli**: command-line definition

pub mod class;
pub mod cli;
pub mod config;
pub mod package;
pub mod result;
pub mod rewrite;
pub mod scan;

pub use class::{rename_class, rename_class_with};
pub use config::RenameOptions;
pub use package::{rename_package, rename_package_with};
pub use result::RenameResult;
