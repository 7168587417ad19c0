// src/cli.rs

//! Command-line interface definition.

use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

/// Assembles the text files of one or more directory trees into a single
/// Markdown document (or a size-bounded series of them).
#[derive(Parser, Debug)]
#[command(
    name = "files2md",
    author,
    version,
    about = "Collect a directory tree's source files into one Markdown document",
    group(
        ArgGroup::new("output_naming")
            .required(true)
            .args(["out_file", "autoname_output"])
    )
)]
pub struct Cli {
    /// Input directories to scan.
    #[arg(value_name = "DIR")]
    pub in_dirs: Vec<PathBuf>,

    /// Write the document to this file.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub out_file: Option<PathBuf>,

    /// Derive the output file name from the input directory names.
    #[arg(short = 'O', long)]
    pub autoname_output: bool,

    /// Extension used with --autoname-output.
    #[arg(long, value_name = "EXT", default_value = "txt")]
    pub output_extension: String,

    /// Include patterns (gitignore-style); applied after all excludes, so
    /// they re-include files the defaults or --exclude-patterns dropped.
    #[arg(short = 'g', long, value_name = "GLOB", num_args = 1..)]
    pub glob_patterns: Vec<String>,

    /// Exclude patterns (gitignore-style).
    #[arg(short = 'x', long, value_name = "GLOB", num_args = 1..)]
    pub exclude_patterns: Vec<String>,

    /// Disable the built-in default exclude patterns.
    #[arg(short = 'D', long)]
    pub no_default_patterns: bool,

    /// Cap the rendered lines per file; 0 disables the cap.
    #[arg(short = 'l', long, value_name = "N", default_value_t = 0)]
    pub max_lines_per_file: i64,

    /// Tolerance, as a percent of the cap, under which a file renders whole
    /// instead of being truncated.
    #[arg(long, value_name = "PCT", default_value_t = crate::constants::DEFAULT_APPROX_PCT)]
    pub mlpf_approx_pct: u32,

    /// Render sections even for files with no visible content.
    #[arg(long)]
    pub include_empty: bool,

    /// Enumerate files with `git ls-files` instead of walking the tree.
    #[arg(short = 't', long)]
    pub git_ls_files: bool,

    /// Split the output into numbered files of roughly this many KB; 0 keeps
    /// a single file.
    #[arg(short = 'p', long, value_name = "KB", default_value_t = 0)]
    pub split: u64,

    /// Tab-separated regex substitution rules applied to each file's content.
    #[arg(short = 's', long, value_name = "FILE")]
    pub sub_rules_file: Option<PathBuf>,

    /// Overwrite an existing output file.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Increase report verbosity (repeatable).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease report verbosity (repeatable).
    #[arg(short = 'q', long, action = ArgAction::Count)]
    pub quiet: u8,
}
