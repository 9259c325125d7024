//! Most-recently-used emoji, backing the picker's Recent tab.
//!
//! In-memory only; the list dies with the process.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
struct RecentEntry {
    glyph: String,
    last_used: DateTime<Utc>,
}

/// Deduplicated, capped, most-recent-first list of inserted glyphs.
#[derive(Debug, Clone)]
pub struct RecentEmoji {
    entries: Vec<RecentEntry>,
    cap: usize,
}

impl RecentEmoji {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap,
        }
    }

    /// Record an insertion. A glyph already present moves to the front;
    /// the oldest entry falls off once the cap is reached.
    pub fn record(&mut self, glyph: &str) {
        self.entries.retain(|e| e.glyph != glyph);
        self.entries.insert(
            0,
            RecentEntry {
                glyph: glyph.to_string(),
                last_used: Utc::now(),
            },
        );
        self.entries.truncate(self.cap);
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.glyph.as_str())
    }

    pub fn last_used(&self, glyph: &str) -> Option<DateTime<Utc>> {
        self.entries
            .iter()
            .find(|e| e.glyph == glyph)
            .map(|e| e.last_used)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RecentEmoji {
    fn default() -> Self {
        Self::new(24)
    }
}
