// src/lib.rs

//! files2md assembles the text files of one or more directory trees into a
//! single Markdown document, or into a size-bounded series of them.
//!
//! A run goes through three stages:
//!
//! 1. **Collect** ([`collect`]): walk the input roots (or ask `git ls-files`)
//!    and filter with an ordered, last-match-wins pattern set.
//! 2. **Classify** ([`classify`]): decide per file whether it is renderable
//!    text, a binary, or excluded outright by its MIME type.
//! 3. **Render** ([`render`]): write the document header and one fenced
//!    section per file into an [`sink::OutputSink`], applying the line cap
//!    and any substitution rules on the way.
//!
//! The library surface is [`ConfigBuilder`] plus [`run`]; the binary in
//! `main.rs` is a thin CLI shim over them.

pub mod classify;
pub mod cli;
pub mod collect;
pub mod config;
pub mod constants;
pub mod errors;
pub mod patterns;
pub mod render;
pub mod report;
pub mod sink;
pub mod summary;
pub mod tables;

pub use config::{Config, ConfigBuilder};
pub use errors::{Error, Result};
pub use summary::RunSummary;

use log::info;
use render::substitute::SubstitutionEngine;
use sink::{OutputSink, SingleFileSink, SplitSink};
use std::path::PathBuf;

/// Everything a finished run reports back.
#[derive(Debug, Default)]
pub struct RunReport {
    /// The collected candidate files, sorted.
    pub files: Vec<PathBuf>,
    /// The pattern lines that filtered the collection, in order.
    pub applied_patterns: Vec<String>,
    /// Per-file statistics accumulated during rendering.
    pub summary: RunSummary,
    /// Every physical output file written.
    pub output_paths: Vec<PathBuf>,
}

/// Executes one full run: collect, render, report back.
///
/// # Errors
///
/// Fails on unreadable substitution rules, on git listing failures in
/// `git ls-files` mode, and on any I/O error touching the output files.
/// Per-input-file problems (unreadable entries, undecodable content) degrade
/// to warnings or placeholders instead.
pub fn run(config: &Config) -> Result<RunReport> {
    let collected = collect::collect_files(config)?;
    info!("Collected {} candidate files", collected.files.len());

    let subs = match &config.sub_rules_file {
        Some(path) => {
            let engine = SubstitutionEngine::from_file(path)?;
            info!("Loaded {} substitution rules", engine.len());
            engine
        }
        None => SubstitutionEngine::default(),
    };

    let assembler = render::Assembler::new(config, subs);
    let (summary, output_paths) = match config.split_kb {
        Some(kb) => {
            let mut sink = SplitSink::create(&config.out_file, kb)?;
            let summary = assembler.run(&collected.files, &mut sink)?;
            (summary, sink.current_file_paths())
        }
        None => {
            let mut sink = SingleFileSink::create(&config.out_file)?;
            let summary = assembler.run(&collected.files, &mut sink)?;
            (summary, sink.current_file_paths())
        }
    };

    Ok(RunReport {
        files: collected.files,
        applied_patterns: collected.applied_patterns,
        summary,
        output_paths,
    })
}
