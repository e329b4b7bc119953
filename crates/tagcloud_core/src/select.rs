use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use crate::count::WordCounts;

/// A word together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEntry {
    pub word: String,
    pub count: u32,
}

impl CountEntry {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// The N most frequent entries, highest count first.
///
/// `count_min` and `count_max` are taken from the selection only, not the
/// whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<CountEntry>,
    count_min: u32,
    count_max: u32,
}

impl Selection {
    /// Builds a selection from entries already chosen elsewhere, ordering them
    /// by rank and deriving the count bounds.
    ///
    /// # Errors
    /// Fails on an empty list or when a word appears more than once.
    pub fn from_entries(mut entries: Vec<CountEntry>) -> Result<Self, SelectError> {
        {
            let mut seen = HashSet::with_capacity(entries.len());
            if let Some(dup) = entries.iter().find(|e| !seen.insert(e.word.as_str())) {
                return Err(SelectError::DuplicateWord {
                    word: dup.word.clone(),
                });
            }
        }
        entries.sort_by(|a, b| {
            let a = Ranked { word: &a.word, count: a.count };
            let b = Ranked { word: &b.word, count: b.count };
            b.cmp(&a)
        });
        let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
            return Err(SelectError::ZeroWords);
        };
        let count_max = first.count;
        let count_min = last.count;
        Ok(Self {
            entries,
            count_min,
            count_max,
        })
    }

    pub fn entries(&self) -> &[CountEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CountEntry> {
        self.entries
    }

    pub fn count_min(&self) -> u32 {
        self.count_min
    }

    pub fn count_max(&self) -> u32 {
        self.count_max
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("at least one word must be selected")]
    ZeroWords,
    #[error("requested {requested} words but only {available} distinct words exist")]
    TooManyWords { requested: usize, available: usize },
    #[error("word {word:?} appears more than once")]
    DuplicateWord { word: String },
}

/// Checks `1 <= n <= available`.
pub fn validate_top_n(n: usize, available: usize) -> Result<(), SelectError> {
    if n == 0 {
        return Err(SelectError::ZeroWords);
    }
    if n > available {
        return Err(SelectError::TooManyWords {
            requested: n,
            available,
        });
    }
    Ok(())
}

/// Ranking used for selection: higher count wins, then the alphabetically
/// earlier word wins so equal counts resolve the same way on every run.
#[derive(Debug, PartialEq, Eq)]
struct Ranked<'a> {
    word: &'a str,
    count: u32,
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.word.cmp(self.word))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Selects the `n` highest-ranked entries from `counts`.
///
/// Keeps a min-heap of at most `n` candidates, so the weakest kept entry is
/// always the one evicted.
///
/// # Errors
/// Returns an error unless `1 <= n <= counts.distinct_words()`.
pub fn select_top(counts: &WordCounts, n: usize) -> Result<Selection, SelectError> {
    validate_top_n(n, counts.distinct_words())?;

    let mut heap: BinaryHeap<Reverse<Ranked<'_>>> = BinaryHeap::with_capacity(n + 1);
    for (word, &count) in counts.iter() {
        heap.push(Reverse(Ranked { word, count }));
        if heap.len() > n {
            heap.pop();
        }
    }

    let entries = heap
        .into_iter()
        .map(|Reverse(ranked)| CountEntry::new(ranked.word, ranked.count))
        .collect();
    Selection::from_entries(entries)
}
