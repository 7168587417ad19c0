// src/report.rs

//! The post-run report printed to stdout, gated by verbosity.
//!
//! The document itself goes to files, so stdout is free for human-facing
//! output. Each section has a minimum verbosity level; at the default level
//! (1) only the closing summary appears, and `-q` silences even that.

use crate::config::Config;
use crate::RunReport;
use std::fmt::Write as _;

const RULE_WIDTH: usize = 78;

/// Verbosity-gated stdout printer.
pub struct Reporter {
    verbosity: i32,
}

impl Reporter {
    pub fn new(verbosity: i32) -> Self {
        Reporter { verbosity }
    }

    fn enabled(&self, level: i32) -> bool {
        self.verbosity >= level
    }

    /// Prints a titled section when verbosity allows it.
    pub fn section<I, S>(&self, level: i32, title: &str, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.enabled(level) {
            return;
        }
        println!("{:-^width$}", format!(" {title} "), width = RULE_WIDTH);
        for line in lines {
            println!("{}", line.as_ref());
        }
    }
}

/// Prints every report section the configured verbosity admits.
pub fn print_report(config: &Config, report: &RunReport) {
    let reporter = Reporter::new(config.verbosity);

    reporter.section(2, "arguments", argument_lines(config));
    reporter.section(
        3,
        "applied patterns",
        report.applied_patterns.iter().map(String::as_str),
    );
    reporter.section(3, "file count by suffix", suffix_lines(report));
    reporter.section(4, "files", file_lines(config, report));
    reporter.section(1, "summary", summary_lines(report));
}

fn argument_lines(config: &Config) -> Vec<String> {
    let mut lines = Vec::new();
    for dir in &config.in_dirs {
        lines.push(format!("input dir:          {}", dir.display()));
    }
    lines.push(format!("output file:        {}", config.out_file.display()));
    lines.push(format!("project name:       {}", config.project_name));
    lines.push(format!("default patterns:   {}", config.use_default_patterns));
    lines.push(format!("include patterns:   {:?}", config.glob_patterns));
    lines.push(format!("exclude patterns:   {:?}", config.exclude_patterns));
    lines.push(format!("max lines per file: {}", config.max_lines_per_file));
    lines.push(format!("line cap tolerance: {}%", config.mlpf_approx_pct));
    lines.push(format!("include empty:      {}", config.include_empty));
    lines.push(format!("git ls-files:       {}", config.git_ls_files));
    match config.split_kb {
        Some(kb) => lines.push(format!("split:              {kb} KB")),
        None => lines.push("split:              off".to_string()),
    }
    if let Some(rules) = &config.sub_rules_file {
        lines.push(format!("substitution rules: {}", rules.display()));
    }
    lines
}

fn suffix_lines(report: &RunReport) -> Vec<String> {
    report
        .summary
        .suffix_to_file_count
        .iter()
        .map(|(suffix, count)| format!("{count:>6}  {suffix}"))
        .collect()
}

fn file_lines(config: &Config, report: &RunReport) -> Vec<String> {
    let mut entries: Vec<(usize, &std::path::PathBuf)> = report
        .summary
        .included_files
        .iter()
        .map(|file| {
            let chars = report
                .summary
                .files_to_char_count
                .get(file)
                .copied()
                .unwrap_or(0);
            (chars, file)
        })
        .collect();
    // Largest files first; `t` marks truncation, `x` content exclusion.
    entries.sort_by(|a, b| b.0.cmp(&a.0));
    entries
        .into_iter()
        .map(|(chars, file)| {
            let mut flags = String::new();
            if report.summary.truncated_files.contains(file) {
                flags.push('t');
            }
            if report.summary.content_excluded_files.contains(file) {
                flags.push('x');
            }
            format!("{chars:>10} {flags:<2} {}", config.display_path(file))
        })
        .collect()
}

fn summary_lines(report: &RunReport) -> Vec<String> {
    let rendered = report.summary.included_files.len() - report.summary.content_excluded_files.len();
    let mut lines = vec![format!(
        "{} files rendered, {} excluded by content, {} truncated",
        rendered,
        report.summary.content_excluded_files.len(),
        report.summary.truncated_files.len()
    )];

    let mut total_bytes: u64 = 0;
    for path in &report.output_paths {
        if let Ok(meta) = std::fs::metadata(path) {
            total_bytes += meta.len();
        }
    }
    let mut out_line = format!("wrote {}: ", human_size(total_bytes));
    for (i, path) in report.output_paths.iter().enumerate() {
        if i > 0 {
            let _ = write!(out_line, ", ");
        }
        let _ = write!(out_line, "{}", path.display());
    }
    lines.push(out_line);
    lines
}

/// Formats a byte count in binary units with one decimal place.
pub fn human_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} {}", UNITS[0])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
