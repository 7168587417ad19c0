// src/config/mod.rs

//! Run configuration: what to scan, what to emit, and how.
//!
//! [`Config`] is the validated, immutable description of one run. It is built
//! through [`ConfigBuilder`], either from parsed command-line arguments or
//! programmatically in tests; all path checks happen in
//! [`ConfigBuilder::build`], so a `Config` in hand means the inputs exist and
//! the output path is writable territory.

mod validation;

pub use validation::{absolutize, ensure_input_dir, ensure_output_path};

use crate::cli::Cli;
use crate::constants::DEFAULT_APPROX_PCT;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

/// The validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input roots, absolute, each verified to be an existing directory.
    pub in_dirs: Vec<PathBuf>,
    /// The output path (absolute). With splitting active this is the naming
    /// base; the physical files carry `-1`, `-2`, ... suffixes.
    pub out_file: PathBuf,
    /// Project name rendered into the document header.
    pub project_name: String,
    /// User include patterns, applied after excludes.
    pub glob_patterns: Vec<String>,
    /// User exclude patterns.
    pub exclude_patterns: Vec<String>,
    /// Whether the built-in default pattern list participates.
    pub use_default_patterns: bool,
    /// Per-file line cap; zero or negative disables capping.
    pub max_lines_per_file: i64,
    /// Tolerance (percent of the cap) under which truncation is skipped.
    pub mlpf_approx_pct: u32,
    /// Render sections for files with no visible content.
    pub include_empty: bool,
    /// Enumerate files via `git ls-files` instead of walking.
    pub git_ls_files: bool,
    /// Split threshold in KB; `None` writes a single file.
    pub split_kb: Option<u64>,
    /// Optional substitution rules file.
    pub sub_rules_file: Option<PathBuf>,
    /// Report verbosity (0 silences everything but errors).
    pub verbosity: i32,
    /// Version string rendered into the generator marker line.
    pub generator_version: String,
}

/// Builder for [`Config`]; validation is deferred to [`ConfigBuilder::build`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    in_dirs: Vec<PathBuf>,
    out_file: Option<PathBuf>,
    autoname_output: bool,
    output_extension: String,
    glob_patterns: Vec<String>,
    exclude_patterns: Vec<String>,
    use_default_patterns: bool,
    max_lines_per_file: i64,
    mlpf_approx_pct: u32,
    include_empty: bool,
    git_ls_files: bool,
    split_kb: Option<u64>,
    sub_rules_file: Option<PathBuf>,
    force: bool,
    verbosity: i32,
    generator_version: String,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            output_extension: "txt".to_string(),
            use_default_patterns: true,
            mlpf_approx_pct: DEFAULT_APPROX_PCT,
            verbosity: 1,
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            ..ConfigBuilder::default()
        }
    }

    /// Seeds a builder from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        ConfigBuilder {
            in_dirs: cli.in_dirs,
            out_file: cli.out_file,
            autoname_output: cli.autoname_output,
            output_extension: cli.output_extension,
            glob_patterns: cli.glob_patterns,
            exclude_patterns: cli.exclude_patterns,
            use_default_patterns: !cli.no_default_patterns,
            max_lines_per_file: cli.max_lines_per_file,
            mlpf_approx_pct: cli.mlpf_approx_pct,
            include_empty: cli.include_empty,
            git_ls_files: cli.git_ls_files,
            split_kb: (cli.split > 0).then_some(cli.split),
            sub_rules_file: cli.sub_rules_file,
            force: cli.force,
            verbosity: 1 + i32::from(cli.verbose) - i32::from(cli.quiet),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.in_dirs.push(dir.into());
        self
    }

    pub fn out_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_file = Some(path.into());
        self
    }

    pub fn glob_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.glob_patterns.push(pattern.into());
        self
    }

    pub fn exclude_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    pub fn use_default_patterns(mut self, yes: bool) -> Self {
        self.use_default_patterns = yes;
        self
    }

    pub fn max_lines_per_file(mut self, cap: i64) -> Self {
        self.max_lines_per_file = cap;
        self
    }

    pub fn include_empty(mut self, yes: bool) -> Self {
        self.include_empty = yes;
        self
    }

    pub fn split_kb(mut self, kb: u64) -> Self {
        self.split_kb = Some(kb);
        self
    }

    pub fn force(mut self, yes: bool) -> Self {
        self.force = yes;
        self
    }

    pub fn verbosity(mut self, level: i32) -> Self {
        self.verbosity = level;
        self
    }

    /// Validates all paths and produces the final [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when an input root is missing or not a
    /// directory, when no output naming was chosen, or when the output file
    /// exists and `force` is off.
    pub fn build(self) -> Result<Config> {
        let raw_dirs = if self.in_dirs.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.in_dirs
        };
        let mut in_dirs = Vec::with_capacity(raw_dirs.len());
        for dir in &raw_dirs {
            in_dirs.push(ensure_input_dir(dir)?);
        }

        let project_name = in_dirs
            .iter()
            .map(root_name)
            .collect::<Vec<_>>()
            .join(", ");

        let out_file = match self.out_file {
            Some(path) => path,
            None if self.autoname_output => {
                let stem = in_dirs.iter().map(root_name).collect::<Vec<_>>().join("_");
                PathBuf::from(format!("{stem}_md.{}", self.output_extension))
            }
            None => {
                return Err(Error::Config(
                    "no output file: pass --out-file or --autoname-output".to_string(),
                ));
            }
        };
        let out_file = ensure_output_path(&out_file, self.force)?;

        if let Some(rules) = &self.sub_rules_file {
            if !rules.is_file() {
                return Err(Error::Config(format!(
                    "substitution rules file '{}' does not exist",
                    rules.display()
                )));
            }
        }

        Ok(Config {
            in_dirs,
            out_file,
            project_name,
            glob_patterns: self.glob_patterns,
            exclude_patterns: self.exclude_patterns,
            use_default_patterns: self.use_default_patterns,
            max_lines_per_file: self.max_lines_per_file,
            mlpf_approx_pct: self.mlpf_approx_pct,
            include_empty: self.include_empty,
            git_ls_files: self.git_ls_files,
            split_kb: self.split_kb,
            sub_rules_file: self.sub_rules_file,
            verbosity: self.verbosity,
            generator_version: self.generator_version,
        })
    }
}

/// The display name of an input root: its final component, falling back to
/// the whole path for roots like `/`.
fn root_name(dir: &PathBuf) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

impl Config {
    /// The display path for `file`: `<root-name>/<relative>` under the first
    /// root that contains it, forward slashes throughout; files outside every
    /// root keep their absolute form.
    pub fn display_path(&self, file: &Path) -> String {
        for root in &self.in_dirs {
            if let Ok(rel) = file.strip_prefix(root) {
                let rel = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                return format!("{}/{}", root_name(root), rel);
            }
        }
        file.display().to_string().replace('\\', "/")
    }
}
