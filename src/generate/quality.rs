//! Quality scoring and ranked candidate generation.
//!
//! A candidate's score is the fraction of expected characters the extraction
//! reproduces. The ranker keeps generating until enough candidates clear the
//! acceptance threshold or the attempt budget (three per requested candidate)
//! runs out, then returns them best first.

use rand::RngCore;
use serde::Serialize;

use crate::params::CipherParams;
use crate::verify::check_constraints;

use super::style::Style;
use super::CandidateGenerator;

/// Minimum score for a candidate to be accepted by the ranker.
pub const QUALITY_THRESHOLD: f64 = 0.7;

/// How a candidate cover text scores against its plaintext.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Quality {
    /// `matches / expected_length`, or 0 when nothing is expected.
    pub score: f64,
    /// Matching positions.
    pub matches: usize,
    /// Expected characters.
    pub total: usize,
    /// True when the cover encodes the plaintext exactly.
    pub is_valid: bool,
}

/// Scores a cover text against a plaintext under the given parameters.
pub fn evaluate_quality(plaintext: &str, covertext: &str, params: &CipherParams) -> Quality {
    let report = check_constraints(plaintext, covertext, params);

    let score = if report.expected_length > 0 {
        report.matches as f64 / report.expected_length as f64
    } else {
        0.0
    };

    Quality {
        score,
        matches: report.matches,
        total: report.expected_length,
        is_valid: report.is_valid,
    }
}

impl CandidateGenerator {
    /// Generates up to `target_count` quality-ranked candidates.
    ///
    /// Up to `3 * target_count` covers are generated; those scoring at least
    /// [`QUALITY_THRESHOLD`] are kept, sorted by descending score (ties stay
    /// in generation order) and truncated to `target_count`. When nothing
    /// clears the threshold, plain generation fills in so the result is
    /// never empty for non-empty plaintext.
    pub fn ranked_candidates(
        &self,
        plaintext: &str,
        params: &CipherParams,
        style: Style,
        target_count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<String> {
        let target_count = target_count.max(1);
        let max_attempts = target_count * 3;

        let mut accepted: Vec<(String, f64)> = Vec::new();
        for _ in 0..max_attempts {
            if accepted.len() >= target_count {
                break;
            }

            let candidate = self.generate(plaintext, params.offset, style, rng);
            let quality = evaluate_quality(plaintext, &candidate, params);
            if quality.score >= QUALITY_THRESHOLD {
                accepted.push((candidate, quality.score));
            }
        }

        if accepted.is_empty() {
            return (0..target_count.min(5))
                .map(|_| self.generate(plaintext, params.offset, style, rng))
                .collect();
        }

        accepted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        accepted.truncate(target_count);
        accepted.into_iter().map(|(text, _)| text).collect()
    }
}
