// src/constants.rs

/// Fixed phrase embedded in the generator marker line of every output document.
///
/// Files whose content contains this phrase verbatim are assumed to be the
/// product of a previous run and are excluded from rendering.
pub const GENERATOR_MARKER_PHRASE: &str = "generated by files2md";

/// Minimum number of backticks used for a Markdown code fence.
pub const MIN_FENCE_LEN: usize = 3;

/// Maximum number of backticks used for a Markdown code fence. Content that
/// already contains a run of this length falls back to it regardless.
pub const MAX_FENCE_LEN: usize = 12;

/// Maximum number of bytes sampled from a file for text/encoding detection.
pub const ENCODING_SAMPLE_BYTES: usize = 100_000;

/// Default tolerance, in percent of the line cap, below which an omitted tail
/// is folded back instead of being reported as a truncation.
pub const DEFAULT_APPROX_PCT: u32 = 25;
