//! Code point extraction
//!
//! Decodes text into the scalar sequence the segmenter consumes. The zero
//! width non-joiner (U+200C) is an artifact marker in stored words and is
//! removed wherever it occurs.

use crate::types::ScalarSequence;

/// Zero width non-joiner, stripped during extraction
pub const ZWNJ: char = '\u{200C}';

/// Decode `text` into its scalar values, dropping every ZWNJ
pub fn extract(text: &str) -> ScalarSequence {
    text.chars().filter(|&ch| ch != ZWNJ).collect()
}

/// Decode raw bytes as UTF-8, then extract
///
/// Invalid input never fails: malformed sequences decode to U+FFFD, the
/// same replacement `String::from_utf8_lossy` performs.
/// The result does not depend on the language being processed.
pub fn extract_bytes(bytes: &[u8]) -> ScalarSequence {
    extract(&String::from_utf8_lossy(bytes))
}
