// src/render/fence.rs

//! Safe code-fence selection.

use crate::constants::{MAX_FENCE_LEN, MIN_FENCE_LEN};

/// Chooses the shortest run of 3 to 12 backticks that does not occur verbatim
/// in `content`, so the fence cannot be confused with embedded backtick runs.
///
/// Content that already contains a 12-backtick run gets the 12-length fence
/// anyway; a Markdown consumer cannot be protected against that input, and it
/// is a documented limitation rather than an error.
pub fn fence_for_content(content: &str) -> String {
    for len in MIN_FENCE_LEN..=MAX_FENCE_LEN {
        let fence = "`".repeat(len);
        if !content.contains(&fence) {
            return fence;
        }
    }
    "`".repeat(MAX_FENCE_LEN)
}
