use std::cmp::Ordering;
use std::collections::HashMap;

use crate::scale::FontRange;
use crate::select::{CountEntry, Selection};

/// A selected word with its count and scaled font size class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedWord {
    pub word: String,
    pub count: u32,
    pub size: u32,
}

/// Selected words in display order: alphabetical, ignoring ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCloud {
    words: Vec<SizedWord>,
    count_min: u32,
    count_max: u32,
}

fn alphabetical(a: &CountEntry, b: &CountEntry) -> Ordering {
    let left = a.word.bytes().map(|c| c.to_ascii_lowercase());
    let right = b.word.bytes().map(|c| c.to_ascii_lowercase());
    left.cmp(right).then_with(|| a.count.cmp(&b.count))
}

impl TagCloud {
    /// Orders the selection alphabetically and scales every entry once against
    /// the selection's own count range.
    pub fn build(selection: Selection, fonts: FontRange) -> Self {
        let count_min = selection.count_min();
        let count_max = selection.count_max();
        let mut entries = selection.into_entries();
        entries.sort_by(alphabetical);

        let words = entries
            .into_iter()
            .map(|entry| SizedWord {
                size: fonts.scale(entry.count, count_min, count_max),
                word: entry.word,
                count: entry.count,
            })
            .collect();

        Self {
            words,
            count_min,
            count_max,
        }
    }

    pub fn words(&self) -> &[SizedWord] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SizedWord> {
        self.words.iter()
    }

    /// Font size class per displayed word.
    pub fn font_sizes(&self) -> HashMap<&str, u32> {
        self.words
            .iter()
            .map(|w| (w.word.as_str(), w.size))
            .collect()
    }

    pub fn count_min(&self) -> u32 {
        self.count_min
    }

    pub fn count_max(&self) -> u32 {
        self.count_max
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
