// src/patterns.rs

//! The ordered include/exclude pattern matcher.
//!
//! A [`PatternSet`] is an ordered list of gitignore-style glob rules with a
//! polarity. A path's final inclusion is decided by the *last* rule that
//! matches it, so later rules override earlier ones. This keeps the collector
//! free of glob-syntax detail: it only asks "is this relative path selected?".
//!
//! Rule syntax follows git wildmatch conventions:
//! - a leading `!` flips the rule to an exclude,
//! - a trailing `/` makes it a directory rule, matching everything beneath,
//! - a rule without an inner `/` matches at any depth,
//! - a rule with an inner `/` is anchored to the root being scanned.

use globset::{GlobBuilder, GlobMatcher};
use log::warn;

/// Whether a matching rule selects or deselects a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// The rule selects matching paths.
    Include,
    /// The rule deselects matching paths.
    Exclude,
}

/// One compiled rule: its polarity and the matchers derived from it.
#[derive(Debug)]
struct PatternRule {
    polarity: Polarity,
    /// Matches the path itself (absent for directory-only rules).
    self_matcher: Option<GlobMatcher>,
    /// Matches any path beneath a matching directory.
    descendant_matcher: Option<GlobMatcher>,
}

impl PatternRule {
    /// Compiles one rule line. Returns `None` for lines that are empty or
    /// whose glob fails to compile (invalid rules are skipped, not fatal).
    fn compile(line: &str) -> Option<Self> {
        let (polarity, rest) = match line.strip_prefix('!') {
            Some(rest) => (Polarity::Exclude, rest),
            None => (Polarity::Include, line),
        };
        if rest.is_empty() {
            return None;
        }

        let (body, dir_only) = match rest.strip_suffix('/') {
            Some(body) => (body, true),
            None => (rest, false),
        };
        if body.is_empty() {
            return None;
        }

        // A rule with no slash floats to any depth; a leading or inner slash
        // anchors it to the scanned root.
        let (anchored, body) = match body.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (body.contains('/'), body),
        };
        let normalized = if anchored {
            body.to_string()
        } else {
            format!("**/{body}")
        };

        let self_matcher = if dir_only {
            None
        } else {
            Some(compile_glob(&normalized, line)?)
        };
        let descendant_matcher = Some(compile_glob(&format!("{normalized}/**"), line)?);

        Some(PatternRule {
            polarity,
            self_matcher,
            descendant_matcher,
        })
    }

    fn matches(&self, rel_path: &str) -> bool {
        if let Some(m) = &self.self_matcher {
            if m.is_match(rel_path) {
                return true;
            }
        }
        if let Some(m) = &self.descendant_matcher {
            if m.is_match(rel_path) {
                return true;
            }
        }
        false
    }
}

fn compile_glob(pattern: &str, raw: &str) -> Option<GlobMatcher> {
    match GlobBuilder::new(pattern).literal_separator(true).build() {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(e) => {
            warn!("Skipping invalid pattern '{}': {}", raw, e);
            None
        }
    }
}

/// An ordered set of include/exclude glob rules with last-match-wins
/// semantics.
#[derive(Debug)]
pub struct PatternSet {
    rules: Vec<PatternRule>,
    lines: Vec<String>,
}

impl PatternSet {
    /// Compiles a pattern set from rule lines in order. Invalid lines are
    /// skipped with a warning.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Vec::new();
        let mut kept_lines = Vec::new();
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            if let Some(rule) = PatternRule::compile(line) {
                rules.push(rule);
            }
            kept_lines.push(line.to_string());
        }
        PatternSet {
            rules,
            lines: kept_lines,
        }
    }

    /// Builds the effective rule order for a run: match-everything, then the
    /// built-in defaults (when enabled), then user excludes, then user
    /// includes, so explicit `--glob-patterns` always win over excludes.
    pub fn assemble(
        use_default_patterns: bool,
        exclude_patterns: &[String],
        glob_patterns: &[String],
    ) -> Self {
        let mut lines: Vec<String> = vec!["**".to_string()];
        if use_default_patterns {
            lines.extend(crate::tables::DEFAULT_PATTERNS.iter().map(|s| s.to_string()));
        }
        lines.extend(exclude_patterns.iter().map(|p| format!("!{p}")));
        lines.extend(glob_patterns.iter().cloned());
        Self::from_lines(&lines)
    }

    /// Like [`PatternSet::assemble`] but without the built-in defaults.
    ///
    /// Used against VCS-sourced file lists, which are already curated.
    pub fn assemble_user_only(exclude_patterns: &[String], glob_patterns: &[String]) -> Self {
        Self::assemble(false, exclude_patterns, glob_patterns)
    }

    /// Returns whether `rel_path` (forward-slash separated, relative to the
    /// scanned root) is selected: the polarity of the last matching rule.
    pub fn is_selected(&self, rel_path: &str) -> bool {
        let mut decision = false;
        for rule in &self.rules {
            if rule.matches(rel_path) {
                decision = rule.polarity == Polarity::Include;
            }
        }
        decision
    }

    /// The rule lines this set was built from, for reporting.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(lines: &[&str]) -> PatternSet {
        PatternSet::from_lines(lines.iter().copied())
    }

    #[test]
    fn test_match_everything() {
        let ps = set(&["**"]);
        assert!(ps.is_selected("a.txt"));
        assert!(ps.is_selected("deep/nested/dir/file.rs"));
    }

    #[test]
    fn test_last_match_wins_reinclude() {
        // Default-style exclude followed by an explicit re-include.
        let ps = set(&["**", "!*.log", "*.log"]);
        assert!(ps.is_selected("build/output.log"));

        let ps = set(&["**", "!*.log"]);
        assert!(!ps.is_selected("build/output.log"));
        assert!(ps.is_selected("build/output.txt"));
    }

    #[test]
    fn test_directory_rule_excludes_contents() {
        let ps = set(&["**", "!.git/"]);
        assert!(!ps.is_selected(".git/config"));
        assert!(!ps.is_selected("sub/.git/objects/ab/cdef"));
        // A plain file named ".git" is not covered by a directory rule.
        assert!(ps.is_selected("notes/.git"));
        assert!(ps.is_selected("src/main.rs"));
    }

    #[test]
    fn test_reinclude_under_excluded_directory() {
        let ps = set(&["**", "!node_modules/", "node_modules/left-pad/index.js"]);
        assert!(!ps.is_selected("node_modules/lodash/lodash.js"));
        assert!(ps.is_selected("node_modules/left-pad/index.js"));
    }

    #[test]
    fn test_anchored_rule() {
        let ps = set(&["**", "!/out/"]);
        assert!(!ps.is_selected("out/artifact.bin"));
        // Only the top-level "out" directory is anchored.
        assert!(ps.is_selected("src/out/keep.txt"));
    }

    #[test]
    fn test_anchored_file_rule() {
        let ps = set(&["**", "!/secrets.txt"]);
        assert!(!ps.is_selected("secrets.txt"));
        assert!(ps.is_selected("sub/secrets.txt"));
    }

    #[test]
    fn test_default_anchored_dirs_only_match_top_level() {
        let ps = PatternSet::assemble(true, &[], &[]);
        assert!(!ps.is_selected("out/artifact.bin"));
        assert!(!ps.is_selected("dist/bundle.js"));
        assert!(ps.is_selected("src/out/keep.txt"));
        assert!(ps.is_selected("lib/dist/mod.rs"));
    }

    #[test]
    fn test_floating_name_rule() {
        let ps = set(&["**", "!__pycache__/"]);
        assert!(!ps.is_selected("__pycache__/mod.pyc"));
        assert!(!ps.is_selected("pkg/sub/__pycache__/mod.pyc"));
    }

    #[test]
    fn test_bare_filename_include() {
        let ps = set(&["**", "!*.md", "README.md"]);
        assert!(!ps.is_selected("docs/guide.md"));
        assert!(ps.is_selected("README.md"));
        assert!(ps.is_selected("sub/README.md"));
    }

    #[test]
    fn test_empty_and_invalid_lines_skipped() {
        let ps = set(&["**", "", "!", "*.rs"]);
        assert!(ps.is_selected("lib.rs"));
        assert!(ps.is_selected("data.csv"));
    }

    #[test]
    fn test_assemble_order() {
        let excludes = vec!["*.log".to_string()];
        let includes = vec!["keep.log".to_string()];
        let ps = PatternSet::assemble(false, &excludes, &includes);
        assert!(!ps.is_selected("run.log"));
        assert!(ps.is_selected("keep.log"));
        assert!(ps.is_selected("src/main.rs"));
    }

    #[test]
    fn test_assemble_with_defaults_excludes_git_dir() {
        let ps = PatternSet::assemble(true, &[], &[]);
        assert!(!ps.is_selected(".git/HEAD"));
        assert!(!ps.is_selected("node_modules/pkg/index.js"));
        assert!(ps.is_selected("src/lib.rs"));
        // Defaults re-include READMEs even though *.md stays included anyway.
        assert!(ps.is_selected("README.md"));
    }

    #[test]
    fn test_default_binary_extensions_excluded() {
        let ps = PatternSet::assemble(true, &[], &[]);
        assert!(!ps.is_selected("target/release/app.so"));
        assert!(!ps.is_selected("obj/main.o"));
        assert!(!ps.is_selected("__pycache__/x.pyc"));
    }
}
