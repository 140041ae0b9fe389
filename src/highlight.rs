//! Span classification for display consumers.
//!
//! The extraction indices exist so a renderer can mark up the cover text:
//! extracted characters one way, trigger marks another. This module does the
//! classification and leaves the actual markup (ANSI, HTML, whatever) to the
//! consumer.

use std::collections::HashSet;

use serde::Serialize;

use crate::params::PunctuationSet;

/// How a run of characters should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// Ordinary cover text.
    Plain,
    /// A trigger punctuation mark.
    Trigger,
    /// A character the extraction picked.
    Extracted,
}

/// A run of consecutive characters sharing one classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    /// The run's text.
    pub text: String,
    /// Its classification.
    pub kind: SpanKind,
}

/// Classifies a cover text into display spans.
///
/// `indices` are character positions as produced by extraction and are used
/// untransformed. An extracted character wins over a trigger mark at the
/// same position; consecutive characters of the same kind merge into one
/// span.
pub fn highlight(text: &str, indices: &[usize], punctuation: &PunctuationSet) -> Vec<Span> {
    let extracted: HashSet<usize> = indices.iter().copied().collect();

    let mut spans: Vec<Span> = Vec::new();
    for (i, ch) in text.chars().enumerate() {
        let kind = if extracted.contains(&i) {
            SpanKind::Extracted
        } else if punctuation.contains(ch) {
            SpanKind::Trigger
        } else {
            SpanKind::Plain
        };

        match spans.last_mut() {
            Some(last) if last.kind == kind => last.text.push(ch),
            _ => spans.push(Span {
                text: ch.to_string(),
                kind,
            }),
        }
    }

    spans
}
