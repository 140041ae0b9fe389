//! Cover-text styles and their phrase templates.
//!
//! Each style carries the phrase material the generator assembles covers
//! from: opening phrases, connectors, closing phrases and adjectives.
//! Japanese plaintext always resolves to the Japanese template set, whatever
//! style was requested.

use std::fmt;
use std::str::FromStr;

use crate::script::ScriptKind;

/// Phrase template set for one style.
#[derive(Debug)]
pub struct StyleElements {
    /// Connector phrases, each starting with its trigger mark.
    pub connectors: &'static [&'static str],
    /// Opening phrases.
    pub starters: &'static [&'static str],
    /// Closing phrases.
    pub enders: &'static [&'static str],
    /// Adjectives used as enhancement tokens.
    pub adjectives: &'static [&'static str],
}

const FORMAL: StyleElements = StyleElements {
    connectors: &[
        ", and", ", but", ", therefore", ", furthermore", ", consequently",
        ". Moreover", ". However", ". Nevertheless", ". Subsequently", ". Additionally",
    ],
    starters: &[
        "Honoured Sir", "Distinguished colleague", "Esteemed friend", "Dear Sir",
        "Worthy Sir", "Respected friend", "My dear Sir", "Kind Sir",
    ],
    enders: &[
        "respectfully yours", "most faithfully", "with highest regards",
        "your devoted servant", "most respectfully", "with sincere devotion",
    ],
    adjectives: &["worthy", "esteemed", "distinguished", "honourable", "respected", "noble"],
};

const CASUAL: StyleElements = StyleElements {
    connectors: &[
        ", and", ", but", ", so", ", plus", ", anyway",
        ". Then", ". Also", ". Well", ". You know", ". Actually",
    ],
    starters: &[
        "Hey there", "Hi friend", "Hello", "What's up", "Hi buddy",
        "Hey mate", "Greetings", "How are things", "Hope you're well",
    ],
    enders: &[
        "cheers", "take care", "see you soon", "best wishes",
        "talk soon", "catch you later", "all the best", "stay cool",
    ],
    adjectives: &["great", "nice", "cool", "awesome", "good", "fine", "okay"],
};

const LITERARY: StyleElements = StyleElements {
    connectors: &[
        ", whereupon", ", whilst", ", thus", ", hence", ", perchance",
        ". Verily", ". Forsooth", ". Indeed", ". Behold", ". Mayhap",
    ],
    starters: &[
        "Dearest companion", "Noble friend", "Gentle reader", "Kind soul",
        "Beloved friend", "Fair friend", "Good sir", "Gracious friend",
    ],
    enders: &[
        "ever faithfully", "with deepest affection", "in eternal friendship",
        "with fondest regards", "most devotedly", "with heartfelt sincerity",
    ],
    adjectives: &["fair", "gentle", "noble", "gracious", "blessed", "divine", "wondrous"],
};

const JAPANESE: StyleElements = StyleElements {
    connectors: &[
        "、そして", "、また", "、しかし", "、それで", "、さらに",
        "。それから", "。しかしながら", "。ところが", "。なお", "。そのため",
    ],
    starters: &[
        "こんにちは", "いつもお世話になっております", "お疲れさまです", "おはようございます",
        "お忙しい中", "いつもありがとうございます", "ご連絡いたします", "お元気ですか",
    ],
    enders: &[
        "よろしくお願いします", "ありがとうございます", "お疲れさまでした",
        "どうぞよろしく", "お体に気をつけて", "またお会いしましょう", "では失礼します",
    ],
    adjectives: &["すてきな", "すばらしい", "たいせつな", "おもしろい", "うつくしい", "あたらしい", "たのしい"],
};

/// Generic intensifiers mixed into the Latin enhancement pool.
pub const INTENSIFIERS: &[&str] = &["most ", "very ", "quite ", "rather ", "truly "];

/// A cover-text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Formal correspondence.
    Formal,
    /// Casual notes.
    Casual,
    /// Archaic literary prose.
    Literary,
    /// Japanese correspondence.
    Japanese,
}

impl Style {
    /// The phrase templates for this style.
    pub fn elements(self) -> &'static StyleElements {
        match self {
            Style::Formal => &FORMAL,
            Style::Casual => &CASUAL,
            Style::Literary => &LITERARY,
            Style::Japanese => &JAPANESE,
        }
    }

    /// Resolves the effective style for a script: Japanese plaintext always
    /// generates from the Japanese templates.
    pub fn resolve(self, script: ScriptKind) -> Style {
        match script {
            ScriptKind::Japanese => Style::Japanese,
            ScriptKind::Latin => self,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::Formal
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Formal => "formal",
            Style::Casual => "casual",
            Style::Literary => "literary",
            Style::Japanese => "japanese",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "formal" => Ok(Style::Formal),
            "casual" => Ok(Style::Casual),
            "literary" => Ok(Style::Literary),
            "japanese" => Ok(Style::Japanese),
            other => Err(format!(
                "unknown style '{}' (expected formal, casual, literary or japanese)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_japanese_overrides_latin_styles() {
        assert_eq!(Style::Formal.resolve(ScriptKind::Japanese), Style::Japanese);
        assert_eq!(Style::Casual.resolve(ScriptKind::Japanese), Style::Japanese);
        assert_eq!(Style::Formal.resolve(ScriptKind::Latin), Style::Formal);
    }

    #[test]
    fn test_template_sets_are_populated() {
        for style in [Style::Formal, Style::Casual, Style::Literary, Style::Japanese] {
            let elements = style.elements();
            assert!(!elements.connectors.is_empty());
            assert!(!elements.starters.is_empty());
            assert!(!elements.enders.is_empty());
            assert!(!elements.adjectives.is_empty());
        }
    }

    #[test]
    fn test_connectors_start_with_a_trigger_mark() {
        for style in [Style::Formal, Style::Casual, Style::Literary, Style::Japanese] {
            for connector in style.elements().connectors {
                let first = connector.chars().next().unwrap();
                assert!(
                    matches!(first, ',' | '.' | '、' | '。'),
                    "connector '{}' does not start with a trigger",
                    connector
                );
            }
        }
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("formal".parse::<Style>().unwrap(), Style::Formal);
        assert_eq!("Literary".parse::<Style>().unwrap(), Style::Literary);
        assert!("baroque".parse::<Style>().is_err());
    }
}
