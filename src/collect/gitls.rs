// src/collect/gitls.rs

//! Version-control file enumeration via `git ls-files`.
//!
//! For each configured root, every repository beneath it (located by its
//! `.git` entry) is listed three ways: tracked (`--cached`), untracked
//! (`--others`) and deleted (`--deleted`). The reconciled set is
//! `(tracked ∪ untracked) − deleted`, so files removed from the working tree
//! but still in the index do not appear.

use crate::errors::{Error, Result};
use ignore::WalkBuilder;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Lists the existing VCS-known files under each root, absolute and sorted.
pub fn git_list_files(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut all: BTreeSet<PathBuf> = BTreeSet::new();
    for root in roots {
        for repo_root in find_repo_roots(root) {
            all.extend(list_repo_files(&repo_root)?);
        }
    }
    Ok(all.into_iter().collect())
}

/// Finds directories containing a `.git` entry beneath (or at) `root`.
fn find_repo_roots(root: &Path) -> Vec<PathBuf> {
    let mut repo_roots = Vec::new();
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
        if entry.file_name() == ".git" {
            if let Some(parent) = entry.path().parent() {
                debug!("Found git repository at '{}'", parent.display());
                repo_roots.push(parent.to_path_buf());
            }
        }
    }
    repo_roots
}

fn list_repo_files(repo_root: &Path) -> Result<BTreeSet<PathBuf>> {
    let cached = paths_from_git(repo_root, &["--cached"])?;
    let untracked = paths_from_git(repo_root, &["--others"])?;
    let deleted = paths_from_git(repo_root, &["--deleted"])?;

    Ok(cached
        .union(&untracked)
        .filter(|p| !deleted.contains(*p))
        .cloned()
        .collect())
}

fn paths_from_git(repo_root: &Path, mode_args: &[&str]) -> Result<BTreeSet<PathBuf>> {
    let mut cmd = Command::new("git");
    cmd.arg("ls-files")
        .arg("--exclude-standard")
        .args(mode_args)
        .current_dir(repo_root);

    let output = cmd.output().map_err(|e| Error::GitListing {
        root: repo_root.display().to_string(),
        reason: format!("failed to run git: {e}"),
    })?;
    if !output.status.success() {
        return Err(Error::GitListing {
            root: repo_root.display().to_string(),
            reason: format!(
                "git ls-files {} exited with {}: {}",
                mode_args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| repo_root.join(line))
        .collect())
}
