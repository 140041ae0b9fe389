//! Position-indexed word lookup.
//!
//! For positions 1..=10 and every character of the script's alphabet, the
//! index precomputes the words whose character at that 1-based position
//! equals the key. Built once per word database; read-only afterwards, so it
//! is safe to share across concurrent readers.

use std::collections::HashMap;

use crate::script::chars_eq_ignore_case;

/// Lowest indexed character position (1-based).
pub const MIN_POSITION: usize = 1;

/// Highest indexed character position.
pub const MAX_POSITION: usize = 10;

/// Immutable map from (position, character) to matching words.
#[derive(Debug, Clone)]
pub struct PositionIndex {
    // by_position[p - 1] holds the map for 1-based position p
    by_position: Vec<HashMap<char, Vec<&'static str>>>,
}

impl PositionIndex {
    /// Builds the index for a word database over the given alphabet.
    ///
    /// Latin keys are expected in lowercase; lookups fold case so the match
    /// is case-insensitive.
    pub fn build<I>(words: &'static [&'static str], alphabet: I) -> Self
    where
        I: Iterator<Item = char> + Clone,
    {
        let mut by_position = Vec::with_capacity(MAX_POSITION);

        for position in MIN_POSITION..=MAX_POSITION {
            let mut map: HashMap<char, Vec<&'static str>> = HashMap::new();
            for key in alphabet.clone() {
                let matching: Vec<&'static str> = words
                    .iter()
                    .copied()
                    .filter(|word| {
                        word.chars()
                            .nth(position - 1)
                            .map_or(false, |c| chars_eq_ignore_case(c, key))
                    })
                    .collect();
                map.insert(key, matching);
            }
            by_position.push(map);
        }

        Self { by_position }
    }

    /// Words whose character at `position` (1-based) equals `ch`.
    ///
    /// Returns an empty slice for positions outside 1..=10 or characters
    /// outside the indexed alphabet.
    pub fn lookup(&self, position: usize, ch: char) -> &[&'static str] {
        if !(MIN_POSITION..=MAX_POSITION).contains(&position) {
            return &[];
        }
        let key = ch.to_lowercase().next().unwrap_or(ch);
        self.by_position[position - 1]
            .get(&key)
            .map(|words| words.as_slice())
            .unwrap_or(&[])
    }
}
