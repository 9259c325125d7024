//! Static emoji catalog browsed by the picker.
//!
//! Entries are grouped into categories and carry search keywords. The
//! `Recent` category has no static entries; its contents come from
//! [`crate::recent::RecentEmoji`] at display time.

/// Picker tab category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Recent,
    Smileys,
    People,
    Animals,
    Food,
    Travel,
    Activities,
    Objects,
    Symbols,
    Flags,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Recent => "Recent",
            Category::Smileys => "Smileys & Emotion",
            Category::People => "People & Body",
            Category::Animals => "Animals & Nature",
            Category::Food => "Food & Drink",
            Category::Travel => "Travel & Places",
            Category::Activities => "Activities",
            Category::Objects => "Objects",
            Category::Symbols => "Symbols",
            Category::Flags => "Flags",
        }
    }

    /// One-glyph tab label.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Recent => "🕐",
            Category::Smileys => "😀",
            Category::People => "👋",
            Category::Animals => "🐶",
            Category::Food => "🍔",
            Category::Travel => "✈️",
            Category::Activities => "⚽",
            Category::Objects => "💡",
            Category::Symbols => "❤️",
            Category::Flags => "🏳️",
        }
    }

    /// Tab order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Recent,
            Category::Smileys,
            Category::People,
            Category::Animals,
            Category::Food,
            Category::Travel,
            Category::Activities,
            Category::Objects,
            Category::Symbols,
            Category::Flags,
        ]
    }
}

/// One catalog entry. `glyph` is a single user-perceived character,
/// possibly a multi-codepoint sequence; it is always inserted atomically.
#[derive(Debug, Clone, Copy)]
pub struct Emoji {
    pub glyph: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub category: Category,
}

impl Emoji {
    const fn new(
        glyph: &'static str,
        name: &'static str,
        keywords: &'static [&'static str],
        category: Category,
    ) -> Self {
        Self {
            glyph,
            name,
            keywords,
            category,
        }
    }

    /// Case-insensitive match against name and keywords.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .keywords
                .iter()
                .any(|kw| kw.to_lowercase().contains(&query))
    }
}

/// The full static table, in display order.
pub fn catalog() -> &'static [Emoji] {
    CATALOG
}

/// Entries belonging to one category, in catalog order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static Emoji> {
    CATALOG.iter().filter(move |e| e.category == category)
}

/// Entries matching a query. An empty query matches nothing.
pub fn search(query: &str) -> Vec<&'static Emoji> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    CATALOG.iter().filter(|e| e.matches(query)).collect()
}

/// Look an entry up by its exact glyph.
pub fn find(glyph: &str) -> Option<&'static Emoji> {
    CATALOG.iter().find(|e| e.glyph == glyph)
}

use Category::*;

static CATALOG: &[Emoji] = &[
    // Smileys & Emotion
    Emoji::new("😀", "grinning face", &["smile", "happy"], Smileys),
    Emoji::new("😃", "grinning face with big eyes", &["smile", "happy"], Smileys),
    Emoji::new("😄", "grinning face with smiling eyes", &["smile", "laugh"], Smileys),
    Emoji::new("😁", "beaming face", &["grin", "teeth"], Smileys),
    Emoji::new("😆", "grinning squinting face", &["laugh", "haha"], Smileys),
    Emoji::new("😅", "grinning face with sweat", &["relief", "phew"], Smileys),
    Emoji::new("😂", "face with tears of joy", &["laugh", "lol", "cry"], Smileys),
    Emoji::new("🙂", "slightly smiling face", &["smile", "ok"], Smileys),
    Emoji::new("😉", "winking face", &["wink", "flirt"], Smileys),
    Emoji::new("😊", "smiling face with smiling eyes", &["blush", "warm"], Smileys),
    Emoji::new("😍", "smiling face with heart-eyes", &["love", "crush"], Smileys),
    Emoji::new("😘", "face blowing a kiss", &["kiss", "love"], Smileys),
    Emoji::new("🤔", "thinking face", &["think", "hmm"], Smileys),
    Emoji::new("😴", "sleeping face", &["sleep", "zzz", "tired"], Smileys),
    Emoji::new("😭", "loudly crying face", &["cry", "sad", "tears"], Smileys),
    Emoji::new("😡", "enraged face", &["angry", "mad", "rage"], Smileys),
    // People & Body
    Emoji::new("👋", "waving hand", &["wave", "hello", "bye"], People),
    Emoji::new("👍", "thumbs up", &["yes", "approve", "like"], People),
    Emoji::new("👎", "thumbs down", &["no", "dislike"], People),
    Emoji::new("👏", "clapping hands", &["clap", "applause", "bravo"], People),
    Emoji::new("🙌", "raising hands", &["hooray", "celebrate"], People),
    Emoji::new("🙏", "folded hands", &["please", "thanks", "pray"], People),
    Emoji::new("💪", "flexed biceps", &["strong", "muscle", "gym"], People),
    Emoji::new("👀", "eyes", &["look", "watch", "see"], People),
    Emoji::new("🤝", "handshake", &["deal", "agreement"], People),
    Emoji::new("✌️", "victory hand", &["peace", "two"], People),
    Emoji::new("👩‍💻", "woman technologist", &["developer", "coder", "laptop"], People),
    Emoji::new("👨‍👩‍👧", "family", &["family", "parents", "child"], People),
    // Animals & Nature
    Emoji::new("🐶", "dog face", &["dog", "puppy", "pet"], Animals),
    Emoji::new("🐱", "cat face", &["cat", "kitten", "pet"], Animals),
    Emoji::new("🐭", "mouse face", &["mouse"], Animals),
    Emoji::new("🐰", "rabbit face", &["rabbit", "bunny"], Animals),
    Emoji::new("🦊", "fox", &["fox"], Animals),
    Emoji::new("🐻", "bear", &["bear"], Animals),
    Emoji::new("🐼", "panda", &["panda"], Animals),
    Emoji::new("🐸", "frog", &["frog"], Animals),
    Emoji::new("🐵", "monkey face", &["monkey"], Animals),
    Emoji::new("🦁", "lion", &["lion"], Animals),
    Emoji::new("🐢", "turtle", &["turtle", "slow"], Animals),
    Emoji::new("🦋", "butterfly", &["butterfly"], Animals),
    Emoji::new("🌸", "cherry blossom", &["flower", "spring"], Animals),
    Emoji::new("🌳", "deciduous tree", &["tree", "nature"], Animals),
    // Food & Drink
    Emoji::new("🍎", "red apple", &["apple", "fruit"], Food),
    Emoji::new("🍌", "banana", &["banana", "fruit"], Food),
    Emoji::new("🍇", "grapes", &["grapes", "fruit"], Food),
    Emoji::new("🍓", "strawberry", &["strawberry", "fruit"], Food),
    Emoji::new("🍔", "hamburger", &["burger", "fast food"], Food),
    Emoji::new("🍕", "pizza", &["pizza", "slice"], Food),
    Emoji::new("🌮", "taco", &["taco", "mexican"], Food),
    Emoji::new("🍣", "sushi", &["sushi", "japanese"], Food),
    Emoji::new("🍜", "steaming bowl", &["noodles", "ramen"], Food),
    Emoji::new("🍩", "doughnut", &["donut", "sweet"], Food),
    Emoji::new("🎂", "birthday cake", &["cake", "birthday"], Food),
    Emoji::new("☕", "hot beverage", &["coffee", "tea"], Food),
    // Travel & Places
    Emoji::new("✈️", "airplane", &["plane", "flight", "travel"], Travel),
    Emoji::new("🚗", "automobile", &["car", "drive"], Travel),
    Emoji::new("🚕", "taxi", &["taxi", "cab"], Travel),
    Emoji::new("🚆", "train", &["train", "rail"], Travel),
    Emoji::new("🚀", "rocket", &["rocket", "launch", "space"], Travel),
    Emoji::new("🗺️", "world map", &["map", "travel"], Travel),
    Emoji::new("🏖️", "beach with umbrella", &["beach", "vacation"], Travel),
    Emoji::new("⛰️", "mountain", &["mountain", "hike"], Travel),
    Emoji::new("🏕️", "camping", &["camp", "tent"], Travel),
    Emoji::new("🌃", "night with stars", &["city", "night"], Travel),
    // Activities
    Emoji::new("⚽", "soccer ball", &["soccer", "football", "sport"], Activities),
    Emoji::new("🏀", "basketball", &["basketball", "sport"], Activities),
    Emoji::new("🎾", "tennis", &["tennis", "sport"], Activities),
    Emoji::new("🎮", "video game", &["game", "controller", "play"], Activities),
    Emoji::new("🎲", "game die", &["dice", "board game"], Activities),
    Emoji::new("🎸", "guitar", &["guitar", "music", "rock"], Activities),
    Emoji::new("🎤", "microphone", &["mic", "sing", "karaoke"], Activities),
    Emoji::new("🎨", "artist palette", &["art", "paint"], Activities),
    Emoji::new("🎣", "fishing pole", &["fishing"], Activities),
    Emoji::new("🏆", "trophy", &["win", "champion", "prize"], Activities),
    // Objects
    Emoji::new("💡", "light bulb", &["idea", "light"], Objects),
    Emoji::new("📱", "mobile phone", &["phone", "mobile"], Objects),
    Emoji::new("💻", "laptop", &["computer", "laptop", "work"], Objects),
    Emoji::new("⌚", "watch", &["watch", "time"], Objects),
    Emoji::new("📷", "camera", &["camera", "photo"], Objects),
    Emoji::new("🔑", "key", &["key", "lock"], Objects),
    Emoji::new("🔨", "hammer", &["hammer", "tool", "build"], Objects),
    Emoji::new("📦", "package", &["box", "package", "ship"], Objects),
    Emoji::new("✏️", "pencil", &["pencil", "write"], Objects),
    Emoji::new("📎", "paperclip", &["clip", "attach"], Objects),
    // Symbols
    Emoji::new("❤️", "red heart", &["love", "heart"], Symbols),
    Emoji::new("💔", "broken heart", &["heartbreak", "sad"], Symbols),
    Emoji::new("✨", "sparkles", &["sparkle", "shiny", "new"], Symbols),
    Emoji::new("🔥", "fire", &["fire", "lit", "hot"], Symbols),
    Emoji::new("💯", "hundred points", &["100", "perfect"], Symbols),
    Emoji::new("⭐", "star", &["star", "favorite"], Symbols),
    Emoji::new("⚡", "high voltage", &["lightning", "fast", "zap"], Symbols),
    Emoji::new("✅", "check mark button", &["done", "yes", "check"], Symbols),
    Emoji::new("❌", "cross mark", &["no", "wrong", "x"], Symbols),
    Emoji::new("❓", "question mark", &["question", "what"], Symbols),
    Emoji::new("❗", "exclamation mark", &["bang", "warning"], Symbols),
    Emoji::new("🎵", "musical note", &["music", "note", "song"], Symbols),
    // Flags
    Emoji::new("🏳️", "white flag", &["surrender", "flag"], Flags),
    Emoji::new("🏴", "black flag", &["flag"], Flags),
    Emoji::new("🏁", "chequered flag", &["finish", "race"], Flags),
    Emoji::new("🚩", "triangular flag", &["flag", "marker"], Flags),
    Emoji::new("🏳️‍🌈", "rainbow flag", &["pride", "rainbow"], Flags),
    Emoji::new("🇰🇷", "flag of South Korea", &["korea", "kr"], Flags),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_non_recent_category_has_entries() {
        for &category in Category::all() {
            if category == Category::Recent {
                assert_eq!(by_category(category).count(), 0);
            } else {
                assert!(by_category(category).count() > 0, "{:?}", category);
            }
        }
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let hits = search("GRINNING");
        assert!(hits.iter().any(|e| e.glyph == "😀"));
    }

    #[test]
    fn test_search_matches_keywords() {
        let hits = search("lol");
        assert!(hits.iter().any(|e| e.glyph == "😂"));
        let hits = search("ramen");
        assert!(hits.iter().any(|e| e.glyph == "🍜"));
    }

    #[test]
    fn test_empty_or_blank_query_matches_nothing() {
        assert!(search("").is_empty());
        assert!(search("   ").is_empty());
    }

    #[test]
    fn test_find_by_glyph() {
        assert_eq!(find("🔥").map(|e| e.name), Some("fire"));
        assert!(find("not an emoji").is_none());
    }

    #[test]
    fn test_glyphs_are_unique() {
        for (i, a) in catalog().iter().enumerate() {
            for b in catalog().iter().skip(i + 1) {
                assert_ne!(a.glyph, b.glyph, "duplicate glyph {}", a.glyph);
            }
        }
    }

    #[test]
    fn test_multi_codepoint_glyphs_present_and_atomic() {
        // sequences the deletion simplification is documented against
        let family = find("👨‍👩‍👧").unwrap();
        assert!(family.glyph.chars().count() > 1);
        let flag = find("🇰🇷").unwrap();
        assert_eq!(flag.glyph.chars().count(), 2);
    }
}
