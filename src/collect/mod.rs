// src/collect/mod.rs

//! File collection: walk the input roots (or ask the VCS), apply the pattern
//! set, and produce one deduplicated, sorted list of absolute paths.

pub mod gitls;

use crate::config::Config;
use crate::errors::Result;
use crate::patterns::PatternSet;
use ignore::WalkBuilder;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// The outcome of collection: the files to render plus the pattern lines that
/// were applied, kept for reporting.
#[derive(Debug)]
pub struct Collected {
    /// Absolute file paths, deduplicated and sorted.
    pub files: Vec<PathBuf>,
    /// The effective pattern lines, in application order.
    pub applied_patterns: Vec<String>,
}

/// Collects the candidate files for a run.
///
/// In walk mode every file under every root is tested against the full
/// pattern set (defaults, excludes, includes) using its root-relative,
/// forward-slash path. In `git ls-files` mode the VCS provides the candidate
/// list and only the user's own patterns filter it; the built-in defaults are
/// meant to approximate a `.gitignore` and would be redundant there.
///
/// Overlapping roots cannot produce duplicates: paths land in one set keyed
/// by their absolute form.
pub fn collect_files(config: &Config) -> Result<Collected> {
    if config.git_ls_files {
        collect_from_git(config)
    } else {
        collect_from_walk(config)
    }
}

fn collect_from_walk(config: &Config) -> Result<Collected> {
    let patterns = PatternSet::assemble(
        config.use_default_patterns,
        &config.exclude_patterns,
        &config.glob_patterns,
    );

    let mut selected: BTreeSet<PathBuf> = BTreeSet::new();
    for root in &config.in_dirs {
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .build();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Skipping unreadable entry under '{}': {}", root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if let Some(rel) = relative_key(path, root) {
                if patterns.is_selected(&rel) {
                    selected.insert(path.to_path_buf());
                } else {
                    debug!("Deselected by patterns: {rel}");
                }
            }
        }
    }

    Ok(Collected {
        files: selected.into_iter().collect(),
        applied_patterns: patterns.lines().to_vec(),
    })
}

fn collect_from_git(config: &Config) -> Result<Collected> {
    let patterns = PatternSet::assemble_user_only(&config.exclude_patterns, &config.glob_patterns);

    let mut selected: BTreeSet<PathBuf> = BTreeSet::new();
    for path in gitls::git_list_files(&config.in_dirs)? {
        if !path.is_file() {
            continue;
        }
        let rel = config
            .in_dirs
            .iter()
            .find_map(|root| relative_key(&path, root))
            .unwrap_or_else(|| path.display().to_string().replace('\\', "/"));
        if patterns.is_selected(&rel) {
            selected.insert(path);
        } else {
            debug!("Deselected by patterns: {rel}");
        }
    }

    Ok(Collected {
        files: selected.into_iter().collect(),
        applied_patterns: patterns.lines().to_vec(),
    })
}

/// The root-relative, forward-slash form of `path`, or `None` when it is not
/// under `root`.
fn relative_key(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
    )
}
