//! Script detection and plaintext reduction.
//!
//! A plaintext is reduced to its processing alphabet before encoding:
//! lower-cased Latin letters, or kana/kanji when the text contains Japanese
//! script. The script is resolved once at entry and carried as a tagged
//! variant rather than re-detected at each call site.

/// The script a plaintext is processed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    /// Latin letters, lower-cased, everything else stripped.
    Latin,
    /// Hiragana, katakana and common kanji, everything else stripped.
    Japanese,
}

impl ScriptKind {
    /// Detects the script by scanning for Japanese characters.
    ///
    /// Any hiragana, katakana or common-kanji character makes the whole
    /// plaintext Japanese; otherwise it is treated as Latin.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_japanese_char) {
            ScriptKind::Japanese
        } else {
            ScriptKind::Latin
        }
    }

    /// Reduces a plaintext to this script's processing alphabet.
    pub fn reduce(self, text: &str) -> String {
        match self {
            ScriptKind::Latin => text
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .map(|c| c.to_ascii_lowercase())
                .collect(),
            ScriptKind::Japanese => text.chars().filter(|c| is_japanese_char(*c)).collect(),
        }
    }
}

/// Returns true for hiragana (U+3040-309F), katakana (U+30A0-30FF) and
/// common kanji (U+4E00-9FAF).
pub fn is_japanese_char(ch: char) -> bool {
    matches!(ch, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FAF}')
}

/// Compares two characters ignoring case. Case folding only matters for
/// Latin input; kana and kanji compare by identity.
pub fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
