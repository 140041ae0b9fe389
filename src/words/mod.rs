//! Word databases and position-indexed lookup.
//!
//! A [`Lexicon`] bundles one script's word database, its prebuilt
//! [`PositionIndex`] and the filler vocabulary used for synthesized padding.
//! Lexicons are built once and only read afterwards.

pub mod english;
pub mod index;
pub mod japanese;

use std::collections::HashSet;

use crate::script::chars_eq_ignore_case;

pub use index::{PositionIndex, MAX_POSITION, MIN_POSITION};

/// One script's word database with its position index.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: &'static [&'static str],
    fillers: &'static [&'static str],
    pad_char: char,
    index: PositionIndex,
}

impl Lexicon {
    /// Builds the English lexicon (alphabet `a..=z`, case-insensitive).
    pub fn latin() -> Self {
        Self {
            words: english::ENGLISH_WORDS,
            fillers: english::ENGLISH_FILLERS,
            pad_char: english::ENGLISH_PAD_CHAR,
            index: PositionIndex::build(english::ENGLISH_WORDS, 'a'..='z'),
        }
    }

    /// Builds the Japanese lexicon, indexed over the hiragana block.
    ///
    /// Katakana and kanji lookups miss the index and resolve through the
    /// containing-character fallback instead.
    pub fn japanese() -> Self {
        let hiragana = ('\u{3040}'..='\u{309F}').filter(|c| char::is_alphabetic(*c));
        Self {
            words: japanese::JAPANESE_WORDS,
            fillers: japanese::JAPANESE_FILLERS,
            pad_char: japanese::JAPANESE_PAD_CHAR,
            index: PositionIndex::build(japanese::JAPANESE_WORDS, hiragana),
        }
    }

    /// The full word database.
    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// The filler vocabulary for synthesized padding.
    pub fn fillers(&self) -> &'static [&'static str] {
        self.fillers
    }

    /// Character used to top up filler padding to an exact length.
    pub fn pad_char(&self) -> char {
        self.pad_char
    }

    /// Words with `ch` at the 1-based `position`, excluding already-used ones.
    pub fn words_at(
        &self,
        position: usize,
        ch: char,
        used: &HashSet<&'static str>,
    ) -> Vec<&'static str> {
        self.index
            .lookup(position, ch)
            .iter()
            .copied()
            .filter(|word| !used.contains(word))
            .collect()
    }

    /// Any database word containing `ch` (case-insensitive), excluding
    /// already-used ones. Last lookup stage before filler synthesis.
    pub fn words_containing(&self, ch: char, used: &HashSet<&'static str>) -> Vec<&'static str> {
        self.words
            .iter()
            .copied()
            .filter(|word| {
                !used.contains(word) && word.chars().any(|c| chars_eq_ignore_case(c, ch))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_lexicon_lookup() {
        let lexicon = Lexicon::latin();
        let used = HashSet::new();

        let words = lexicon.words_at(3, 'e', &used);
        assert!(words.contains(&"the"));
        assert!(words.contains(&"she"));
    }

    #[test]
    fn test_words_at_excludes_used() {
        let lexicon = Lexicon::latin();
        let mut used = HashSet::new();
        used.insert("the");

        let words = lexicon.words_at(3, 'e', &used);
        assert!(!words.contains(&"the"));
        assert!(words.contains(&"she"));
    }

    #[test]
    fn test_words_containing() {
        let lexicon = Lexicon::latin();
        let used = HashSet::new();

        let words = lexicon.words_containing('z', &used);
        assert!(words.is_empty());

        let words = lexicon.words_containing('Q', &used);
        assert!(words.is_empty());

        let words = lexicon.words_containing('x', &used);
        assert!(words.iter().all(|w| w.contains('x')));
    }

    #[test]
    fn test_japanese_lexicon_lookup() {
        let lexicon = Lexicon::japanese();
        let used = HashSet::new();

        let words = lexicon.words_at(1, 'あ', &used);
        assert!(words.contains(&"あの"));
        assert!(words.iter().all(|w| w.starts_with('あ')));
    }

    #[test]
    fn test_japanese_kanji_misses_index() {
        let lexicon = Lexicon::japanese();
        let used = HashSet::new();
        assert!(lexicon.words_at(1, '漢', &used).is_empty());
    }
}
