use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "java-renamer")]
#[command(about = "Rename Java packages and classes across a source tree")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Source file extension to rewrite (falls back to $JAVA_RENAMER_EXT, then "java")
    #[arg(long, value_name = "EXT", global = true)]
    pub ext: Option<String>,

    /// Report what would change without touching any file
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Move a package directory and rewrite declarations, imports and qualified names
    RenamePackage {
        root: PathBuf,
        old_package: String,
        new_package: String,
    },
    /// Rewrite a class definition, its references and constructor calls
    RenameClass {
        root: PathBuf,
        old_class: String,
        new_class: String,
    },
    /// Rename a package, then a class, and report the combined result
    RenameAll {
        root: PathBuf,

        #[arg(long, num_args = 2, value_names = ["OLD", "NEW"])]
        package: Option<Vec<String>>,

        #[arg(long, num_args = 2, value_names = ["OLD", "NEW"])]
        class: Option<Vec<String>>,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
