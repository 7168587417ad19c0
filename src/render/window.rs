// src/render/window.rs

//! Line-count truncation with an approximate tolerance.

/// Splits decoded lines into a kept window and an omitted tail.
///
/// With `max_lines <= 0` everything is kept. Otherwise the first `max_lines`
/// lines are kept and the rest tentatively omitted; when the omitted count is
/// within `max_lines * tolerance_pct / 100` (integer division) the tail is
/// folded back so a negligible overshoot is not reported as a truncation.
///
/// Lines are expected to carry their trailing terminators, so the kept window
/// can be re-joined without inventing or losing newlines.
pub fn window(lines: Vec<String>, max_lines: i64, tolerance_pct: u32) -> (Vec<String>, Vec<String>) {
    if max_lines <= 0 || lines.len() <= max_lines as usize {
        return (lines, Vec::new());
    }
    let max = max_lines as usize;
    let mut kept = lines;
    let omitted = kept.split_off(max);

    let wiggle_room = max * tolerance_pct as usize / 100;
    if omitted.len() <= wiggle_room {
        kept.extend(omitted);
        return (kept, Vec::new());
    }
    (kept, omitted)
}

/// Splits text into lines that keep their terminators.
pub fn split_keeping_terminators(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}
