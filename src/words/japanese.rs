//! Japanese word database.
//!
//! Hiragana vocabulary arranged by leading kana so the position index has
//! material for every row of the syllabary.

/// Japanese words available to the generator.
pub const JAPANESE_WORDS: &[&str] = &[
    "あの", "あそこ", "あなた", "あまり", "あとで", "ありがとう", "あります", "あった", "あって", "あんな",
    "いま", "いつも", "いい", "いろいろ", "いちばん", "いっしょ", "いくつ", "いつか", "いかが", "いけません",
    "うち", "うしろ", "うまい", "うれしい", "うんと", "うみ", "うた", "うごく", "うまれる", "うける",
    "えき", "えいが", "えらい", "えんぴつ", "えーと", "えほん", "えがお", "えいご", "えらぶ", "えんきょく",
    "おもしろい", "おかえり", "おなじ", "おいしい", "おとうさん", "おかあさん", "おじいさん", "おばあさん", "おっと", "おそい",
    "かならず", "かんがえる", "かいもの", "かぞく", "かわいい", "かんたん", "からだ", "かれ", "かのじょ", "かたち",
    "きもち", "きれい", "きのう", "きょう", "きっと", "きこえる", "きをつける", "きせつ", "きにいる", "きんじょ",
    "くらい", "くる", "くに", "くるま", "くらす", "くわしい", "くろい", "くちば", "くやしい", "くらべる",
    "けっこう", "けんこう", "けっして", "けいけん", "けれど", "けさ", "けっきょく", "けいかく", "けんきゅう", "けんか",
    "こんど", "こちら", "こんな", "こと", "ことば", "こども", "こっち", "こんにちは", "こまる", "こころ",
    "さいきん", "さっき", "さがす", "さいしょ", "さっそく", "さんぽ", "さいふ", "さくら", "さかな", "さびしい",
    "しかし", "しんぱい", "しずか", "しあわせ", "しつもん", "したがって", "しかも", "しんじる", "しらべる", "しごと",
    "すこし", "すぐ", "すばらしい", "すてき", "すみません", "すでに", "すべて", "するとき", "するから", "すきな",
    "せんせい", "せいかつ", "せんそう", "せかい", "せっかく", "せつめい", "せんたく", "せまい", "せんもん", "せいじ",
    "そうして", "そのため", "そうです", "そちら", "そして", "そんな", "そうすると", "そうですね", "そこで", "そんなに",
    "たいせつ", "ただし", "たとえば", "たすける", "たのしい", "たくさん", "ただいま", "たしかに", "たべもの", "たいへん",
    "ちょっと", "ちいさい", "ちかい", "ちがう", "ちょうど", "ちゃんと", "ちから", "ちゅうい", "ちかく", "ちきゅう",
    "つぎ", "つくる", "つかれる", "つめたい", "つづく", "つよい", "つかう", "つまり", "つきあう", "つもり",
    "てんき", "てつだう", "てがみ", "てんしゃ", "てんち", "てあし", "てんらんかい", "てんごく", "てんきん", "てほん",
    "ところで", "とても", "となり", "ともだち", "とうきょう", "とくに", "とおい", "とき", "ところ", "とまる",
    "なにか", "なるほど", "なかなか", "なぜなら", "なんでも", "なるべく", "なかま", "ながい", "なつかしい", "なんとか",
    "にほん", "にんげん", "にちようび", "にぎやか", "にあう", "にがて", "にゅうす", "にもつ", "にわ", "にっき",
    "ぬれる", "ぬぐ", "ぬかる", "ぬける", "ぬりえ", "ぬいもの", "ぬるい", "ぬらす", "ぬけだす", "ぬきうち",
    "ねる", "ねんまつ", "ねだん", "ねっしん", "ねこ", "ねがい", "ねんれい", "ねんど", "ねむる", "ねつい",
    "のんびり", "のぼる", "のこる", "のみもの", "のうりょく", "のがす", "のろい", "のうか", "のむら", "のあい",
    "はじめて", "はっきり", "はやい", "はなし", "はいる", "はたらく", "はしる", "はんたい", "はこぶ", "はずかしい",
    "ひとり", "ひつよう", "ひくい", "ひろい", "ひさしぶり", "ひみつ", "ひかり", "ひやけ", "ひだり", "ひがし",
    "ふつう", "ふしぎ", "ふたり", "ふるい", "ふゆ", "ふね", "ふくざつ", "ふりかえる", "ふくろう", "ふかい",
    "へや", "へいわ", "へん", "へた", "へんじ", "へいきん", "へんか", "へこむ", "へらす", "へいめん",
    "ほんとう", "ほしい", "ほかの", "ほとんど", "ほうほう", "ほけん", "ほうもん", "ほめる", "ほうそう", "ほんき",
    "まいにち", "まえ", "まわり", "まちがい", "まだまだ", "まるで", "まにあう", "まかせる", "まさか", "まめ",
    "みんな", "みせ", "みつかる", "みち", "みどり", "みらい", "みがく", "みえる", "みなみ", "みじかい",
    "むずかしい", "むりに", "むこう", "むかし", "むすこ", "むすめ", "むらさき", "むしあつい", "むざい", "むりょう",
    "めずらしい", "めんどう", "めがね", "めいじ", "めいわく", "めでたい", "めった", "めんせつ", "めんきょ", "めし",
    "もちろん", "もしかすると", "もっと", "もんだい", "もどる", "もくてき", "もらう", "もつ", "もうすぐ", "もしも",
    "やっぱり", "やすい", "やめる", "やくそく", "やちん", "やっと", "やわらかい", "やきゅう", "やぶる", "やくだつ",
    "ゆっくり", "ゆめ", "ゆうべ", "ゆうえんち", "ゆうこう", "ゆうはん", "ゆきがた", "ゆりかご", "ゆでる", "ゆめみる",
    "よく", "よろしい", "よかった", "よほど", "よぶ", "よい", "よそ", "よてい", "よこ", "よる",
    "らいねん", "らくに", "らいしゅう", "らんち", "らいげつ", "らくだい", "らんぼう", "らっしゃる", "らんたーん", "らくごう",
    "りょこう", "りょうり", "りかい", "りそう", "りゆう", "りっぱ", "りえき", "りようする", "りーだー", "りくつ",
    "るすばん", "るーる", "るーぷ", "るしの", "るすい", "るり", "るんるん", "るぽ", "るいご", "るいせき",
    "れきし", "れんしゅう", "れいぎ", "れんらく", "れっしゃ", "れすとらん", "れんあい", "れきだい", "れんぞく", "れっとう",
    "ろんぶん", "ろうじん", "ろくが", "ろく", "ろばた", "ろっかく", "ろんり", "ろまん", "ろっく", "ろごまーく",
    "わかる", "わすれる", "わるい", "わたし", "わけ", "わざわざ", "わらう", "わきあいあい", "わがまま", "わかれる",
];

/// Short interjections used when synthesizing a padding segment.
pub const JAPANESE_FILLERS: &[&str] = &["えと", "あの", "さて", "まあ", "ねえ"];

/// Character the filler padding is topped up with when no filler fits.
pub const JAPANESE_PAD_CHAR: char = 'あ';
