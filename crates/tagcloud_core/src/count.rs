use std::collections::hash_map;
use std::collections::HashMap;

use crate::separators::SeparatorSet;
use crate::token::{tokens, Token};

/// Occurrence count per lowercased word.
///
/// # Invariants
/// - Keys are lowercase and contain no separator characters
/// - Every count is >= 1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, u32>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every word of every line.
    pub fn from_lines<I, S>(lines: I, separators: &SeparatorSet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = Self::new();
        for line in lines {
            counts.add_line(line.as_ref(), separators);
        }
        counts
    }

    pub fn add_line(&mut self, line: &str, separators: &SeparatorSet) {
        for token in tokens(line, separators) {
            self.add_token(&token);
        }
    }

    /// Records one token. Separator tokens are ignored.
    pub fn add_token(&mut self, token: &Token<'_>) {
        if !token.is_word() {
            return;
        }
        self.add_word(token.text);
    }

    fn add_word(&mut self, word: &str) {
        let key = word.to_lowercase();
        let count = self.counts.get(&key).copied().unwrap_or(0);
        self.counts.insert(key, count.saturating_add(1));
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words, the upper bound for a top-N selection.
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts: number of word tokens seen.
    pub fn total_words(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u32> {
        self.counts.iter()
    }
}
