//! English word database.
//!
//! A general vocabulary plus clusters that cover the most common hidden-text
//! characters at deeper positions, and register-specific words so formal,
//! casual and literary covers all find matching material.

/// English words available to the generator.
pub const ENGLISH_WORDS: &[&str] = &[
    // Short common words
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had",
    "her", "was", "one", "our", "out", "day", "get", "has", "him", "his",
    "how", "man", "new", "now", "old", "see", "two", "way", "who", "boy",
    "did", "its", "let", "put", "say", "she", "too", "use",
    // General vocabulary
    "about", "after", "again", "against", "also", "another", "any", "because",
    "before", "being", "between", "both", "came", "come", "could", "each",
    "even", "every", "first", "from", "give", "good", "great", "group",
    "hand", "have", "here", "high", "home", "however", "important", "into",
    "just", "know", "large", "last", "life", "little", "long", "made",
    "make", "many", "most", "move", "much", "must", "name", "need", "never",
    "next", "night", "number", "only", "other", "over", "own", "part",
    "people", "place", "point", "right", "same", "seem", "several", "should",
    "show", "since", "small", "some", "still", "such", "system", "take",
    "than", "their", "them", "there", "these", "they", "thing", "think",
    "this", "those", "though", "three", "through", "time", "today",
    "together", "turn", "under", "until", "very", "want", "water", "well",
    "were", "what", "when", "where", "which", "while", "with", "without",
    "work", "world", "would", "write", "year", "young",
    // Deep-position l/o coverage
    "help", "held", "self", "tell", "will", "call", "full", "skill", "hello",
    "follow", "hollow", "yellow", "allow", "below", "fellow", "pillow",
    // Formal register
    "therefore", "furthermore", "moreover", "nevertheless", "consequently",
    "accordingly", "meanwhile", "distinguished", "honourable", "respectfully",
    "sincerely", "faithfully", "graciously", "humbly", "earnestly",
    "carefully", "thoughtfully", "considerately",
    // Casual register
    "awesome", "amazing", "fantastic", "wonderful", "excellent", "brilliant",
    "perfect", "incredible", "outstanding", "fabulous", "terrific", "superb",
    "marvelous", "spectacular",
    // Literary register
    "whereupon", "whilst", "hence", "thus", "perchance", "verily", "forsooth",
    "indeed", "behold", "mayhap", "dearest", "beloved", "gracious", "noble",
    "gentle", "blessed", "divine", "wondrous", "fair",
];

/// Short fillers used when synthesizing a padding segment.
pub const ENGLISH_FILLERS: &[&str] = &[
    "my", "oh", "ah", "or", "so", "to", "by", "in", "of", "at",
];

/// Character the filler padding is topped up with when no filler fits.
pub const ENGLISH_PAD_CHAR: char = 'a';
