// src/sink.rs

//! Output sinks: a single growing file, or a size-bounded rotating sequence.
//!
//! Both variants share one capability set so the assembler never knows which
//! it is writing to. Rotation happens only in the hooks, never inside a
//! `write`, so a section is always wholly contained in one physical file.

use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Destination for rendered Markdown.
pub trait OutputSink {
    /// Appends text to the current physical file.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Called once, immediately after the header has been written.
    fn on_after_header(&mut self) -> Result<()>;

    /// Called after each complete section has been written.
    fn on_after_section(&mut self) -> Result<()>;

    /// Flushes and closes; called exactly once at run end.
    fn on_complete(&mut self) -> Result<()>;

    /// Every physical path produced so far: finalized files plus the one
    /// currently open. Used for self-reference checks.
    fn current_file_paths(&self) -> Vec<PathBuf>;
}

/// Writes everything to one file; the rotation hooks are no-ops.
pub struct SingleFileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl SingleFileSink {
    /// Creates (truncating) the output file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
        Ok(SingleFileSink {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }
}

impl OutputSink for SingleFileSink {
    fn write(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(|e| io_error_with_path(e, &self.path))
    }

    fn on_after_header(&mut self) -> Result<()> {
        Ok(())
    }

    fn on_after_section(&mut self) -> Result<()> {
        Ok(())
    }

    fn on_complete(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| io_error_with_path(e, &self.path))
    }

    fn current_file_paths(&self) -> Vec<PathBuf> {
        vec![self.path.clone()]
    }
}

/// Rotating sink: opens `<stem>-1.<ext>` immediately and starts a new file
/// whenever the current one has grown past the byte threshold.
///
/// Rotation is lazy: finishing a file only closes it, and the successor is
/// opened by the next `write`. A rotation at the very end of a run therefore
/// leaves no empty trailing file behind.
///
/// Invariants: at most one file handle is open at a time, finalized paths are
/// never reopened, and rotation only happens between sections.
pub struct SplitSink {
    dir: PathBuf,
    stem: String,
    extension: Option<String>,
    threshold_bytes: u64,
    seq: u32,
    bytes_in_current: u64,
    /// The open file, or `None` between a finalize and the next write.
    current: Option<(PathBuf, BufWriter<File>)>,
    finalized: Vec<PathBuf>,
}

impl SplitSink {
    /// Derives the naming scheme from `initial_path` and opens file #1.
    pub fn create(initial_path: &Path, kb_per_file: u64) -> Result<Self> {
        let dir = initial_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let stem = initial_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let extension = initial_path
            .extension()
            .map(|e| e.to_string_lossy().into_owned());

        let seq = 1;
        let first_path = Self::path_for_seq(&dir, &stem, extension.as_deref(), seq);
        let file = File::create(&first_path).map_err(|e| io_error_with_path(e, &first_path))?;

        Ok(SplitSink {
            dir,
            stem,
            extension,
            threshold_bytes: kb_per_file * 1024,
            seq,
            bytes_in_current: 0,
            current: Some((first_path, BufWriter::new(file))),
            finalized: Vec::new(),
        })
    }

    fn path_for_seq(dir: &Path, stem: &str, extension: Option<&str>, seq: u32) -> PathBuf {
        match extension {
            Some(ext) => dir.join(format!("{stem}-{seq}.{ext}")),
            None => dir.join(format!("{stem}-{seq}")),
        }
    }

    /// Flushes and closes the current file; the next write opens a new one.
    fn finalize_current(&mut self) -> Result<()> {
        if let Some((path, mut writer)) = self.current.take() {
            writer.flush().map_err(|e| io_error_with_path(e, &path))?;
            debug!("Finished output part '{}'", path.display());
            self.finalized.push(path);
            self.bytes_in_current = 0;
        }
        Ok(())
    }
}

impl OutputSink for SplitSink {
    fn write(&mut self, text: &str) -> Result<()> {
        if self.current.is_none() {
            self.seq += 1;
            let path = Self::path_for_seq(&self.dir, &self.stem, self.extension.as_deref(), self.seq);
            let file = File::create(&path).map_err(|e| io_error_with_path(e, &path))?;
            self.current = Some((path, BufWriter::new(file)));
        }
        // The open file is guaranteed just above.
        if let Some((path, writer)) = self.current.as_mut() {
            writer
                .write_all(text.as_bytes())
                .map_err(|e| io_error_with_path(e, path))?;
            self.bytes_in_current += text.len() as u64;
        }
        Ok(())
    }

    fn on_after_header(&mut self) -> Result<()> {
        // The header never shares a physical file with the first section.
        self.finalize_current()
    }

    fn on_after_section(&mut self) -> Result<()> {
        if self.bytes_in_current > self.threshold_bytes {
            self.finalize_current()?;
        }
        Ok(())
    }

    fn on_complete(&mut self) -> Result<()> {
        self.finalize_current()
    }

    fn current_file_paths(&self) -> Vec<PathBuf> {
        let mut paths = self.finalized.clone();
        if let Some((path, _)) = &self.current {
            paths.push(path.clone());
        }
        paths
    }
}
