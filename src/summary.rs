// src/summary.rs

//! Per-run statistics, accumulated once per processed file.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Accumulated statistics for one run.
///
/// Updated by the assembler as files are processed and read-only afterwards;
/// it is threaded through and returned rather than held in global state.
/// Every included file lands in exactly one extension bucket and has exactly
/// one char-count entry.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Included-file count per extension (with leading dot); files without an
    /// extension are keyed by their filename.
    pub suffix_to_file_count: BTreeMap<String, usize>,
    /// Every file that got a section, in processing order.
    pub included_files: Vec<PathBuf>,
    /// Files whose rendered content was truncated by the line cap.
    pub truncated_files: BTreeSet<PathBuf>,
    /// Files excluded by content (empty, or carrying the generator marker).
    pub content_excluded_files: BTreeSet<PathBuf>,
    /// Rendered character count per file.
    pub files_to_char_count: BTreeMap<PathBuf, usize>,
}

impl RunSummary {
    /// Records one processed file.
    pub fn track_file(&mut self, path: &Path, chars: usize, truncated: bool, excluded: bool) {
        let key = Self::bucket_key(path);
        *self.suffix_to_file_count.entry(key).or_insert(0) += 1;
        self.included_files.push(path.to_path_buf());
        self.files_to_char_count.insert(path.to_path_buf(), chars);
        if truncated {
            self.truncated_files.insert(path.to_path_buf());
        }
        if excluded {
            self.content_excluded_files.insert(path.to_path_buf());
        }
    }

    fn bucket_key(path: &Path) -> String {
        let ext = crate::classify::dotted_extension(path);
        if !ext.is_empty() {
            return ext;
        }
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
