//! Hidden-message extraction.
//!
//! The extraction rule: for every trigger mark in the cover text, count
//! qualifying characters forward and take the one the offset lands on.
//! Counting aborts when the next trigger mark or the end of the text arrives
//! first; an aborted window extracts nothing. Windows are independent per
//! trigger occurrence and may overlap.

use serde::Serialize;

use crate::params::CipherParams;

/// The message recovered from a cover text, with source positions.
///
/// `indices` holds the character position of each extracted character in the
/// cover text. Positions are strictly increasing and align one-to-one with
/// `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Extracted characters in trigger order.
    pub message: String,
    /// Character positions of the extracted characters in the source text.
    pub indices: Vec<usize>,
}

impl ExtractionResult {
    /// Returns the number of extracted characters.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Extracts the hidden message from a cover text.
///
/// Scans the text left to right. At each trigger mark, counts forward from
/// the next character: whitespace is skipped (not counted) unless
/// `count_spaces` is set, and reaching another trigger mark before the offset
/// aborts the window with no extraction. The character the offset lands on
/// is appended to the message together with its position.
///
/// Pure and deterministic; empty text or an empty punctuation set yields an
/// empty result.
pub fn extract(text: &str, params: &CipherParams) -> ExtractionResult {
    let chars: Vec<char> = text.chars().collect();
    let mut message = String::new();
    let mut indices = Vec::new();

    for (i, ch) in chars.iter().enumerate() {
        if !params.punctuation.contains(*ch) {
            continue;
        }

        let mut steps = 0;
        for (j, &c) in chars.iter().enumerate().skip(i + 1) {
            // The next trigger mark closes the window
            if params.punctuation.contains(c) {
                break;
            }

            if !params.count_spaces && c.is_whitespace() {
                continue;
            }

            steps += 1;
            if steps == params.offset {
                message.push(c);
                indices.push(j);
                break;
            }
        }
    }

    ExtractionResult { message, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(punctuation: &str, offset: usize, count_spaces: bool) -> CipherParams {
        CipherParams::new(punctuation, offset, count_spaces)
    }

    #[test]
    fn test_extract_basic() {
        // After ',' at 1: b(1) c(2) -> 'c' at 3; after '.' at 5: d(1) e(2) -> 'e' at 6
        let result = extract("a,bc.de", &params(",.", 2, true));
        assert_eq!(result.message, "ce");
        assert_eq!(result.indices, vec![3, 6]);
    }

    #[test]
    fn test_extract_empty_text() {
        let result = extract("", &params(",.", 3, true));
        assert!(result.is_empty());
        assert_eq!(result.message, "");
    }

    #[test]
    fn test_extract_empty_punctuation() {
        let result = extract("some text, with marks.", &params("", 3, true));
        assert!(result.is_empty());
    }

    #[test]
    fn test_extract_window_aborts_at_next_trigger() {
        // After ',' only 'a' follows before '.', so offset 2 never lands
        let result = extract("x,a.bcd", &params(",.", 2, true));
        assert_eq!(result.message, "c");
        assert_eq!(result.indices, vec![5]);
    }

    #[test]
    fn test_extract_window_aborts_at_end_of_text() {
        let result = extract("word,ab", &params(",.", 3, true));
        assert!(result.is_empty());
    }

    #[test]
    fn test_extract_skips_whitespace_when_not_counted() {
        // ',' then " a b": spaces skipped, a(1) b(2) -> 'b'
        let result = extract("x, a b", &params(",", 2, false));
        assert_eq!(result.message, "b");
        assert_eq!(result.indices, vec![5]);
    }

    #[test]
    fn test_extract_counts_whitespace_when_requested() {
        // ',' then ' '(1) 'a'(2) -> 'a'
        let result = extract("x, ab", &params(",", 2, true));
        assert_eq!(result.message, "a");
        assert_eq!(result.indices, vec![3]);
    }

    #[test]
    fn test_extract_indices_strictly_increasing() {
        let text = "one, two. three! four? five; six: seven";
        let result = extract(text, &params(",.!?;:", 3, false));
        assert_eq!(result.message.chars().count(), result.indices.len());
        for pair in result.indices.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        let len = text.chars().count();
        assert!(result.indices.iter().all(|&i| i < len));
    }

    #[test]
    fn test_extract_is_deterministic() {
        let p = params("、。,.!?;:'", 3, true);
        let text = "Dear friend, the weather. Is lovely!";
        assert_eq!(extract(text, &p), extract(text, &p));
    }

    #[test]
    fn test_extract_japanese_text() {
        // After '、': た(1) す(2) け(3) -> 'け'
        let result = extract("こんにちは、たすけてください", &params("、。", 3, true));
        assert_eq!(result.message, "け");
        assert_eq!(result.indices, vec![8]);
    }

    #[test]
    fn test_extract_offset_one_takes_next_char() {
        let result = extract("x,a.bz", &params(",.", 1, true));
        assert_eq!(result.message, "ab");
        assert_eq!(result.indices, vec![2, 4]);
    }
}
