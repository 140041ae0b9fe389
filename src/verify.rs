//! Constraint verification.
//!
//! Checks whether a cover text, under given parameters, encodes a specific
//! plaintext. The plaintext is reduced by stripping whitespace; the cover
//! text goes through extraction; the two character sequences are then walked
//! position by position and classified. The resulting report is the scoring
//! primitive for both verification and generation quality.

use serde::Serialize;

use crate::extract::extract;
use crate::params::CipherParams;
use crate::script::chars_eq_ignore_case;

/// Classification of a single compared position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    /// Expected and extracted characters agree (case-insensitive).
    Match,
    /// Both exist but differ.
    Mismatch,
    /// Expected a character but extraction ran out.
    Missing,
    /// Extraction produced a character past the expected length.
    Extra,
}

/// One compared position of the expected/actual walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionDetail {
    /// Position in the compared sequences (0-based).
    pub index: usize,
    /// Expected plaintext character, if any.
    pub expected: Option<char>,
    /// Actually extracted character, if any.
    pub actual: Option<char>,
    /// Character position in the cover text the actual character came from.
    pub cover_index: Option<usize>,
    /// Classification of this position.
    pub status: PositionStatus,
}

/// Position-level diff between a plaintext and what a cover text encodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintReport {
    /// True only when every expected character matches and nothing is
    /// missing, mismatched or extra.
    pub is_valid: bool,
    /// Characters expected (plaintext with whitespace removed).
    pub expected_length: usize,
    /// Characters actually extracted.
    pub actual_length: usize,
    /// Number of matching positions.
    pub matches: usize,
    /// Every compared position in order.
    pub details: Vec<PositionDetail>,
    /// Positions classified as mismatches.
    pub mismatches: Vec<usize>,
    /// Positions where an expected character had no extraction.
    pub missing: Vec<usize>,
    /// Positions where extraction exceeded the expected length.
    pub extra: Vec<usize>,
}

/// Verifies that `covertext` encodes `plaintext` under `params`.
///
/// Whitespace is stripped from the plaintext (case is preserved, comparison
/// is case-insensitive). Positions `0..max(expected, actual)` are classified
/// as match, mismatch, missing or extra. Pure and deterministic.
pub fn check_constraints(
    plaintext: &str,
    covertext: &str,
    params: &CipherParams,
) -> ConstraintReport {
    let expected: Vec<char> = plaintext.chars().filter(|c| !c.is_whitespace()).collect();

    let extraction = extract(covertext, params);
    let actual: Vec<char> = extraction.message.chars().collect();

    let mut matches = 0;
    let mut details = Vec::new();
    let mut mismatches = Vec::new();
    let mut missing = Vec::new();
    let mut extra = Vec::new();

    let compared = expected.len().max(actual.len());
    for index in 0..compared {
        let exp = expected.get(index).copied();
        let act = actual.get(index).copied();
        let cover_index = extraction.indices.get(index).copied();

        let status = match (exp, act) {
            (Some(e), Some(a)) if chars_eq_ignore_case(e, a) => {
                matches += 1;
                PositionStatus::Match
            }
            (Some(_), Some(_)) => {
                mismatches.push(index);
                PositionStatus::Mismatch
            }
            (Some(_), None) => {
                missing.push(index);
                PositionStatus::Missing
            }
            (None, Some(_)) => {
                extra.push(index);
                PositionStatus::Extra
            }
            (None, None) => unreachable!("walk is bounded by the longer sequence"),
        };

        details.push(PositionDetail {
            index,
            expected: exp,
            actual: act,
            cover_index,
            status,
        });
    }

    let is_valid = matches == expected.len()
        && mismatches.is_empty()
        && missing.is_empty()
        && extra.is_empty();

    ConstraintReport {
        is_valid,
        expected_length: expected.len(),
        actual_length: actual.len(),
        matches,
        details,
        mismatches,
        missing,
        extra,
    }
}
