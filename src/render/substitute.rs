// src/render/substitute.rs

//! Ordered text substitution loaded from an external rules file.
//!
//! The rules file is line-oriented: `pattern<TAB+>replacement`, with
//! `#`-prefixed comment lines (escape as `\#` for a pattern that really
//! starts with `#`). Malformed or uncompilable lines are skipped, never
//! fatal. Rules apply in file order to the whole windowed content of each
//! text file, each rule's output feeding the next.

use crate::errors::{io_error_with_path, Result};
use log::warn;
use regex::Regex;
use std::path::Path;

/// One compiled rewrite.
#[derive(Debug)]
pub struct SubstitutionRule {
    pattern: Regex,
    replacement: String,
}

/// The ordered rule list for a run. An empty engine applies nothing.
#[derive(Debug, Default)]
pub struct SubstitutionEngine {
    rules: Vec<SubstitutionRule>,
}

impl SubstitutionEngine {
    /// Loads rules from a file. Missing separator tabs, empty patterns and
    /// invalid regexes skip the line with a warning.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
        Ok(Self::from_rules_text(&text))
    }

    /// Parses rules from already-loaded text.
    pub fn from_rules_text(text: &str) -> Self {
        let mut rules = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            // "\#..." escapes a literal leading '#' in the pattern; any other
            // leading backslash belongs to the regex itself.
            let line = if line.starts_with("\\#") {
                &line[1..]
            } else {
                line
            };

            let Some((pattern_str, replacement)) = line.split_once('\t') else {
                warn!("substitution rules line {}: no tab separator, skipped", lineno + 1);
                continue;
            };
            let replacement = replacement.trim_start_matches('\t');
            if pattern_str.is_empty() {
                warn!("substitution rules line {}: empty pattern, skipped", lineno + 1);
                continue;
            }
            match Regex::new(pattern_str) {
                Ok(pattern) => rules.push(SubstitutionRule {
                    pattern,
                    replacement: replacement.to_string(),
                }),
                Err(e) => {
                    warn!(
                        "substitution rules line {}: invalid pattern '{}': {}",
                        lineno + 1,
                        pattern_str,
                        e
                    );
                }
            }
        }
        SubstitutionEngine { rules }
    }

    /// Applies every rule in order to `content`.
    pub fn apply(&self, content: &str) -> String {
        let mut current = content.to_string();
        for rule in &self.rules {
            current = rule
                .pattern
                .replace_all(&current, rule.replacement.as_str())
                .into_owned();
        }
        current
    }

    /// Number of loaded rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules were loaded.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
