use std::collections::HashSet;

/// Characters that never belong to a word: whitespace, punctuation, digits and quotes.
pub const SEPARATOR_CHARS: &str = " \t\n\r,-.!?[]';:/()0123456789_\"*`";

/// Immutable set of separator characters, built once and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Builds a set from every character in `chars`. Duplicates collapse.
    pub fn from_chars(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::from_chars(SEPARATOR_CHARS)
    }
}
