// src/render/mod.rs

//! Markdown assembly: the header, then one section per collected file.

pub mod fence;
pub mod substitute;
pub mod window;

use crate::classify::{self, Classification};
use crate::config::Config;
use crate::constants::GENERATOR_MARKER_PHRASE;
use crate::errors::Result;
use crate::sink::OutputSink;
use crate::summary::RunSummary;
use fence::fence_for_content;
use log::{debug, info};
use std::path::{Path, PathBuf};
use substitute::SubstitutionEngine;
use window::{split_keeping_terminators, window};

/// Renders the collected files into a sink as one Markdown document.
pub struct Assembler<'a> {
    config: &'a Config,
    subs: SubstitutionEngine,
    marker_line: String,
}

/// One file's rendering outcome.
struct Rendered {
    /// The section text, or `None` when the file is excluded by content.
    section: Option<String>,
    truncated: bool,
    excluded: bool,
    chars: usize,
}

impl<'a> Assembler<'a> {
    pub fn new(config: &'a Config, subs: SubstitutionEngine) -> Self {
        let marker_line = format!(
            "({} v{})",
            GENERATOR_MARKER_PHRASE, config.generator_version
        );
        Assembler {
            config,
            subs,
            marker_line,
        }
    }

    /// Writes the header and every section, in sorted path order.
    ///
    /// Files that coincide with the sink's own output paths are skipped
    /// entirely, including re-checks as a splitting sink grows its path list
    /// mid-run.
    pub fn run(&self, files: &[PathBuf], sink: &mut dyn OutputSink) -> Result<RunSummary> {
        let mut files: Vec<PathBuf> = files.to_vec();
        files.sort();
        let own = sink.current_file_paths();
        files.retain(|f| {
            let keep = !own.contains(f);
            if !keep {
                info!("Skipping own output file '{}'", f.display());
            }
            keep
        });

        sink.write(&self.render_header(&files))?;
        sink.on_after_header()?;

        let mut summary = RunSummary::default();
        for file in &files {
            if sink.current_file_paths().contains(file) {
                info!("Skipping own output file '{}'", file.display());
                continue;
            }
            let rendered = self.render_file(file)?;
            if let Some(section) = &rendered.section {
                sink.write(section)?;
                sink.on_after_section()?;
            }
            summary.track_file(file, rendered.chars, rendered.truncated, rendered.excluded);
        }

        sink.on_complete()?;
        Ok(summary)
    }

    /// The document header: project line, generator marker, file listing
    /// sorted by display path.
    fn render_header(&self, files: &[PathBuf]) -> String {
        let mut header = format!(
            "# Project: {}\n{}\n## File listing:\n",
            self.config.project_name, self.marker_line
        );
        let mut displays: Vec<String> =
            files.iter().map(|f| self.config.display_path(f)).collect();
        displays.sort();
        for display in displays {
            header.push('`');
            header.push_str(&display);
            header.push_str("`\n");
        }
        header
    }

    fn render_file(&self, file: &Path) -> Result<Rendered> {
        let display = self.config.display_path(file);
        match classify::classify(file) {
            Classification::Binary => Ok(self.placeholder(&display, "(likely a binary file)")),
            Classification::MimeExcluded(mime) => {
                Ok(self.placeholder(&display, &format!("(skipped due to MIME type `{mime}`)")))
            }
            Classification::Text(encoding) => self.render_text(file, &display, encoding),
        }
    }

    fn placeholder(&self, display: &str, note: &str) -> Rendered {
        Rendered {
            section: Some(format!("\n### {display}\n{note}\n")),
            truncated: false,
            excluded: false,
            chars: note.chars().count(),
        }
    }

    fn render_text(&self, file: &Path, display: &str, encoding: &str) -> Result<Rendered> {
        let text = classify::read_text(file, encoding)?;
        let lines = split_keeping_terminators(&text);
        let (kept, omitted) = window(
            lines,
            self.config.max_lines_per_file,
            self.config.mlpf_approx_pct,
        );
        let truncated = !omitted.is_empty();
        let content = self.subs.apply(&kept.concat());

        // A file carrying the generator marker is almost certainly a previous
        // run's output; rendering it would nest documents.
        if content.contains(GENERATOR_MARKER_PHRASE) {
            debug!("Excluding '{}': carries the generator marker", display);
            return Ok(Rendered {
                section: None,
                truncated: false,
                excluded: true,
                chars: 0,
            });
        }
        if content.trim().is_empty() && !self.config.include_empty {
            debug!("Excluding '{}': no visible content", display);
            return Ok(Rendered {
                section: None,
                truncated: false,
                excluded: true,
                chars: 0,
            });
        }

        let chars = content.chars().count();
        let fence = fence_for_content(&content);
        let lang = crate::tables::md_lang_for_extension(&classify::dotted_extension(file));

        let mut section = format!("\n### {display}\n{fence}{lang}\n{content}");
        if !content.is_empty() && !content.ends_with('\n') {
            section.push('\n');
        }
        section.push_str(&fence);
        section.push('\n');
        if truncated {
            section.push_str(&format!(
                "(NB: {} lines omitted for brevity)\n",
                omitted.len()
            ));
        }

        Ok(Rendered {
            section: Some(section),
            truncated,
            excluded: false,
            chars,
        })
    }
}
