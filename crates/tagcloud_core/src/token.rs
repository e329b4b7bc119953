use crate::separators::SeparatorSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// A maximal run of either word or separator characters, borrowed from its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Byte length, used to advance the scan position.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("position {position} is outside text of length {len}")]
    OutOfBounds { position: usize, len: usize },
    #[error("position {position} is not on a character boundary")]
    NotCharBoundary { position: usize },
}

/// Returns the word or separator run starting at byte offset `position`.
///
/// The class of the first character decides which kind of run is returned;
/// the run extends until the class changes or the text ends.
pub fn next_word_or_separator<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Result<Token<'a>, TokenError> {
    if position >= text.len() {
        return Err(TokenError::OutOfBounds {
            position,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(position) {
        return Err(TokenError::NotCharBoundary { position });
    }

    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let Some((_, first)) = chars.next() else {
        return Err(TokenError::OutOfBounds {
            position,
            len: text.len(),
        });
    };
    let first_is_separator = separators.contains(first);
    let end = chars
        .find(|&(_, c)| separators.contains(c) != first_is_separator)
        .map_or(rest.len(), |(idx, _)| idx);

    let kind = if first_is_separator {
        TokenKind::Separator
    } else {
        TokenKind::Word
    };
    Ok(Token {
        text: &rest[..end],
        kind,
    })
}

/// Iterator partitioning one line into alternating word and separator tokens.
#[derive(Debug, Clone)]
pub struct Tokens<'a, 's> {
    line: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

pub fn tokens<'a, 's>(line: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens {
        line,
        position: 0,
        separators,
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = next_word_or_separator(self.line, self.position, self.separators).ok()?;
        self.position += token.len();
        Some(token)
    }
}
