// src/classify.rs

//! Per-file content classification: text (with an encoding), binary, or
//! MIME-excluded.
//!
//! The checks run in a deliberate order. The MIME gate comes first so that
//! media and other opaque files are excluded from their extension alone,
//! without ever being opened. Only files that pass the gate have a byte
//! sample read and inspected.

use crate::constants::ENCODING_SAMPLE_BYTES;
use crate::errors::{io_error_with_path, Result};
use crate::tables;
use content_inspector::ContentType;
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The outcome of classifying one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Decodable text in the named encoding.
    Text(&'static str),
    /// No confident text encoding was found.
    Binary,
    /// Excluded from rendering because of its guessed MIME type (named).
    MimeExcluded(String),
}

/// Returns the extension of `path` with its leading dot (`".rs"`), or an
/// empty string when the path has none.
pub fn dotted_extension(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{ext}"),
        None => String::new(),
    }
}

/// Classifies a file as text, binary, or MIME-excluded.
///
/// Order of checks matters for both correctness and cost:
/// 1. Guess the MIME type from the extension. An allow-listed MIME type is
///    text immediately. A block-listed supertype excludes the file without
///    reading it, unless the extension has a known language mapping (the
///    mapping always wins, so e.g. `.proto` renders despite its
///    `application/*` MIME guess).
/// 2. Otherwise read a bounded byte sample and run the statistical detector.
///    No confident text encoding means `Binary`.
///
/// I/O failures degrade to `Binary` rather than erroring: a file that cannot
/// be sampled is conservatively treated as non-text.
pub fn classify(path: &Path) -> Classification {
    if let Some(mime) = mime_guess::from_path(path).first() {
        let essence = mime.essence_str();
        if tables::OK_MIMETYPES.contains(&essence) {
            debug!("{}: MIME '{}' on allow-list, text", path.display(), essence);
            return Classification::Text("utf-8");
        }
        let supertype = mime.type_().as_str();
        if tables::IGNORE_MIME_SUPERTYPES.contains(&supertype) {
            let ext = dotted_extension(path);
            if tables::md_lang_for_extension(&ext).is_empty() {
                debug!("{}: MIME '{}' excluded by supertype", path.display(), essence);
                return Classification::MimeExcluded(essence.to_string());
            }
            // Known language mapping overrides the MIME exclusion.
        }
    }

    match read_sample(path) {
        Ok(sample) => classify_sample(&sample),
        Err(e) => {
            warn!("Could not sample '{}', treating as binary: {}", path.display(), e);
            Classification::Binary
        }
    }
}

fn read_sample(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut sample = Vec::with_capacity(8192);
    file.take(ENCODING_SAMPLE_BYTES as u64)
        .read_to_end(&mut sample)?;
    Ok(sample)
}

/// Classifies a byte sample without touching the filesystem.
pub fn classify_sample(sample: &[u8]) -> Classification {
    match content_inspector::inspect(sample) {
        ContentType::UTF_8 | ContentType::UTF_8_BOM => {
            if is_valid_utf8_prefix(sample) {
                Classification::Text("utf-8")
            } else {
                Classification::Binary
            }
        }
        ContentType::UTF_16LE => Classification::Text("utf-16le"),
        ContentType::UTF_16BE => Classification::Text("utf-16be"),
        _ => Classification::Binary,
    }
}

/// Validates UTF-8, tolerating a multi-byte character cut off by the sample
/// size cap at the very end of the buffer.
fn is_valid_utf8_prefix(sample: &[u8]) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}

/// Reads and decodes a whole file in the given encoding.
///
/// Undecodable byte sequences become U+FFFD replacement characters; a leading
/// byte-order mark is stripped. Only the encodings produced by [`classify`]
/// are understood; anything else decodes as UTF-8.
pub fn read_text(path: &Path, encoding: &str) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(decode_bytes(&bytes, encoding))
}

fn decode_bytes(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding {
        "utf-16le" => decode_utf16_bytes(bytes, u16::from_le_bytes),
        "utf-16be" => decode_utf16_bytes(bytes, u16::from_be_bytes),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };
    match decoded.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => decoded,
    }
}

fn decode_utf16_bytes(bytes: &[u8], combine: fn([u8; 2]) -> u16) -> String {
    let mut units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();
    // A trailing odd byte cannot form a code unit; surface it as a
    // replacement character instead of dropping it silently.
    if bytes.len() % 2 != 0 {
        units.push(0xFFFD);
    }
    char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
