//! Cover-text generation.
//!
//! The generator assembles a cover text around a plaintext: an opening
//! phrase, then one word per hidden character chosen from the position
//! index so the trigger-offset constraint holds as closely as possible,
//! joined by style connectors, then a closing phrase.
//!
//! Generation NEVER fails. When no database word fits a character the
//! lookup falls back through nearby positions, then to any word containing
//! the character, and finally to a synthesized filler segment that satisfies
//! the constraint by construction.

pub mod quality;
pub mod style;

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::script::{chars_eq_ignore_case, ScriptKind};
use crate::words::{Lexicon, MAX_POSITION, MIN_POSITION};

use self::style::{Style, StyleElements, INTENSIFIERS};

/// Probability of prepending an enhancement token to a selected word.
const ENHANCEMENT_PROBABILITY: f64 = 0.25;

/// Offset deltas tried, in order, when the exact position has no words.
const FALLBACK_DELTAS: [isize; 4] = [1, -1, 2, -2];

/// A source of cover-text candidates for the search loop.
///
/// The production implementation is [`GeneratorSource`]; tests substitute
/// deterministic stubs.
pub trait CandidateSource {
    /// Produces the next candidate cover text.
    fn next_candidate(&mut self, rng: &mut dyn RngCore) -> String;
}

/// Builds synthetic cover texts from position-indexed word databases.
///
/// Holds both script lexicons; the one matching the detected script of the
/// plaintext is used per call. Construction builds the indexes once, after
/// which the generator is read-only and can be shared.
#[derive(Debug)]
pub struct CandidateGenerator {
    latin: Lexicon,
    japanese: Lexicon,
}

impl CandidateGenerator {
    /// Builds both lexicons and their position indexes.
    pub fn new() -> Self {
        Self {
            latin: Lexicon::latin(),
            japanese: Lexicon::japanese(),
        }
    }

    fn lexicon(&self, script: ScriptKind) -> &Lexicon {
        match script {
            ScriptKind::Latin => &self.latin,
            ScriptKind::Japanese => &self.japanese,
        }
    }

    /// Generates one cover text for `plaintext`.
    ///
    /// The plaintext is reduced to its processing alphabet; an empty
    /// reduction yields an empty cover. Randomness comes entirely from
    /// `rng`, so a seeded generator reproduces its output.
    pub fn generate(
        &self,
        plaintext: &str,
        offset: usize,
        style: Style,
        rng: &mut dyn RngCore,
    ) -> String {
        let offset = offset.max(1);
        let script = ScriptKind::detect(plaintext);
        let chars: Vec<char> = script.reduce(plaintext).chars().collect();

        if chars.is_empty() {
            return String::new();
        }

        let style = style.resolve(script);
        let elements = style.elements();
        let lexicon = self.lexicon(script);

        let mut used: HashSet<&'static str> = HashSet::new();
        let mut cover = String::new();

        cover.push_str(choose(elements.starters, rng));

        for (idx, &target) in chars.iter().enumerate() {
            let candidates = self.words_with_fallback(lexicon, target, offset, &used);

            if candidates.is_empty() {
                cover.push_str(&filler_segment(script, target, offset, lexicon, rng));
                continue;
            }

            let word = select_best(&candidates, target, offset, rng);
            used.insert(word);

            cover.push_str(&select_connector(idx, chars.len(), elements, script, rng));
            cover.push_str(&enhancement(elements, script, rng));
            cover.push_str(word);
        }

        let ender = choose(elements.enders, rng);
        match script {
            ScriptKind::Latin => {
                cover.push_str(". Yours ");
                cover.push_str(ender);
                cover.push('.');
            }
            ScriptKind::Japanese => {
                cover.push('。');
                cover.push_str(ender);
                cover.push('。');
            }
        }

        cover
    }

    /// Word lookup with the full fallback chain: exact position, then
    /// offset±1 and ±2, then any word containing the character.
    fn words_with_fallback(
        &self,
        lexicon: &Lexicon,
        target: char,
        offset: usize,
        used: &HashSet<&'static str>,
    ) -> Vec<&'static str> {
        let mut words = lexicon.words_at(offset, target, used);

        if words.is_empty() {
            for delta in FALLBACK_DELTAS {
                let position = offset as isize + delta;
                if position < MIN_POSITION as isize || position > MAX_POSITION as isize {
                    continue;
                }
                words = lexicon.words_at(position as usize, target, used);
                if !words.is_empty() {
                    break;
                }
            }
        }

        if words.is_empty() {
            words = lexicon.words_containing(target, used);
        }

        words
    }
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// [`CandidateSource`] backed by a [`CandidateGenerator`] with fixed
/// plaintext, offset and style.
pub struct GeneratorSource<'a> {
    generator: &'a CandidateGenerator,
    plaintext: String,
    offset: usize,
    style: Style,
}

impl<'a> GeneratorSource<'a> {
    /// Binds a generator to one plaintext/offset/style combination.
    pub fn new(
        generator: &'a CandidateGenerator,
        plaintext: impl Into<String>,
        offset: usize,
        style: Style,
    ) -> Self {
        Self {
            generator,
            plaintext: plaintext.into(),
            offset,
            style,
        }
    }
}

impl CandidateSource for GeneratorSource<'_> {
    fn next_candidate(&mut self, rng: &mut dyn RngCore) -> String {
        self.generator
            .generate(&self.plaintext, self.offset, self.style, rng)
    }
}

fn choose<'a>(items: &[&'a str], rng: &mut dyn RngCore) -> &'a str {
    items
        .choose(rng)
        .copied()
        .expect("template sets are not empty")
}

/// Prefers words whose character at the offset equals the target; the index
/// already guarantees this on the exact-position path, fallback paths are
/// re-checked here. Ties break uniformly at random.
fn select_best(
    candidates: &[&'static str],
    target: char,
    offset: usize,
    rng: &mut dyn RngCore,
) -> &'static str {
    let exact: Vec<&'static str> = candidates
        .iter()
        .copied()
        .filter(|word| {
            word.chars()
                .nth(offset - 1)
                .map_or(false, |c| chars_eq_ignore_case(c, target))
        })
        .collect();

    let pool = if exact.is_empty() { candidates } else { &exact[..] };
    pool.choose(rng)
        .copied()
        .expect("candidate pool is not empty")
}

/// First word gets a fixed short connector, the last a terminal one; in
/// between, a weighted pick favouring the first half of the style's list
/// 1.5:1 over the second.
fn select_connector(
    idx: usize,
    total: usize,
    elements: &StyleElements,
    script: ScriptKind,
    rng: &mut dyn RngCore,
) -> String {
    if idx == 0 {
        return match script {
            ScriptKind::Latin => ", ",
            ScriptKind::Japanese => "、",
        }
        .to_string();
    }
    if idx + 1 == total {
        return match script {
            ScriptKind::Latin => ". ",
            ScriptKind::Japanese => "。",
        }
        .to_string();
    }

    let connectors = elements.connectors;
    let half = connectors.len() as f64 / 2.0;
    let weights: Vec<f64> = (0..connectors.len())
        .map(|i| if (i as f64) < half { 1.5 } else { 1.0 })
        .collect();
    let total_weight: f64 = weights.iter().sum();

    let mut roll = rng.gen::<f64>() * total_weight;
    let mut picked = connectors[0];
    for (&connector, weight) in connectors.iter().zip(&weights) {
        roll -= weight;
        if roll <= 0.0 {
            picked = connector;
            break;
        }
    }

    match script {
        ScriptKind::Latin => format!("{} ", picked),
        ScriptKind::Japanese => picked.to_string(),
    }
}

/// With probability 0.25, an adjective from the style or a generic
/// intensifier (Latin only; Japanese enhancements stay adjectives).
fn enhancement(elements: &StyleElements, script: ScriptKind, rng: &mut dyn RngCore) -> String {
    if rng.gen::<f64>() >= ENHANCEMENT_PROBABILITY {
        return String::new();
    }

    match script {
        ScriptKind::Latin => {
            let adjective_count = elements.adjectives.len();
            let pick = rng.gen_range(0..adjective_count + INTENSIFIERS.len());
            if pick < adjective_count {
                format!("{} ", elements.adjectives[pick])
            } else {
                INTENSIFIERS[pick - adjective_count].to_string()
            }
        }
        ScriptKind::Japanese => choose(elements.adjectives, rng).to_string(),
    }
}

/// Synthesizes a segment that satisfies the constraint by construction:
/// a trigger mark, exactly `offset - 1` padding characters from the filler
/// vocabulary, then the target character itself.
fn filler_segment(
    script: ScriptKind,
    target: char,
    offset: usize,
    lexicon: &Lexicon,
    rng: &mut dyn RngCore,
) -> String {
    let trigger = match script {
        ScriptKind::Latin => ',',
        ScriptKind::Japanese => '、',
    };

    let pad_len = offset - 1;
    let mut padding = String::new();
    let mut padded = 0;
    while padded < pad_len {
        let filler = choose(lexicon.fillers(), rng);
        let filler_len = filler.chars().count();
        if padded + filler_len <= pad_len {
            padding.push_str(filler);
            padded += filler_len;
        } else {
            for _ in padded..pad_len {
                padding.push(lexicon.pad_char());
            }
            padded = pad_len;
        }
    }

    let mut segment = String::with_capacity(padding.len() + 8);
    segment.push(trigger);
    segment.push_str(&padding);
    segment.push(target);
    segment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CipherParams;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_generate_empty_plaintext() {
        let generator = CandidateGenerator::new();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(generator.generate("", 3, Style::Formal, &mut rng), "");
        // Digits reduce to nothing under the Latin alphabet
        assert_eq!(generator.generate("123", 3, Style::Formal, &mut rng), "");
    }

    #[test]
    fn test_generate_is_seed_deterministic() {
        let generator = CandidateGenerator::new();
        let mut a = ChaCha20Rng::seed_from_u64(42);
        let mut b = ChaCha20Rng::seed_from_u64(42);
        assert_eq!(
            generator.generate("hello", 3, Style::Formal, &mut a),
            generator.generate("hello", 3, Style::Formal, &mut b),
        );
    }

    #[test]
    fn test_generate_never_fails_on_unmatched_char() {
        // No database word contains 'q'; the filler path must cover it
        let generator = CandidateGenerator::new();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let cover = generator.generate("q", 3, Style::Formal, &mut rng);

        assert!(cover.contains(','));
        let params = CipherParams::new(",.", 3, false);
        let extracted = crate::extract::extract(&cover, &params);
        assert!(extracted.message.starts_with('q'));
    }

    #[test]
    fn test_generate_japanese_uses_japanese_templates() {
        let generator = CandidateGenerator::new();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let cover = generator.generate("たすけて", 3, Style::Formal, &mut rng);

        assert!(cover.contains('、') || cover.contains('。'));
        assert!(cover.ends_with('。'));
        assert!(!cover.contains("Yours"));
    }

    #[test]
    fn test_filler_segment_exact_length() {
        let lexicon = Lexicon::latin();
        let mut rng = ChaCha20Rng::seed_from_u64(9);

        for offset in 1..=6 {
            let segment = filler_segment(ScriptKind::Latin, 'z', offset, &lexicon, &mut rng);
            let chars: Vec<char> = segment.chars().collect();
            assert_eq!(chars[0], ',');
            // trigger + (offset - 1) padding + target
            assert_eq!(chars.len(), offset + 1);
            assert_eq!(*chars.last().unwrap(), 'z');
        }
    }

    #[test]
    fn test_select_best_prefers_exact_position() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        // Only "the" has 'e' at position 3
        let picked = select_best(&["and", "the", "for"], 'e', 3, &mut rng);
        assert_eq!(picked, "the");
    }

    #[test]
    fn test_select_connector_fixed_ends() {
        let elements = Style::Formal.elements();
        let mut rng = ChaCha20Rng::seed_from_u64(11);

        assert_eq!(
            select_connector(0, 5, elements, ScriptKind::Latin, &mut rng),
            ", "
        );
        assert_eq!(
            select_connector(4, 5, elements, ScriptKind::Latin, &mut rng),
            ". "
        );
        let middle = select_connector(2, 5, elements, ScriptKind::Latin, &mut rng);
        assert!(middle.ends_with(' '));
        assert!(elements
            .connectors
            .iter()
            .any(|c| middle.trim_end() == *c));
    }

    #[test]
    fn test_generator_source_produces_candidates() {
        let generator = CandidateGenerator::new();
        let mut source = GeneratorSource::new(&generator, "hi", 3, Style::Casual);
        let mut rng = ChaCha20Rng::seed_from_u64(2);

        let candidate = source.next_candidate(&mut rng);
        assert!(!candidate.is_empty());
    }
}
