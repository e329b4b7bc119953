//! Tag cloud core: pure word-frequency pipeline.
//!
//! Text flows through tokenizing, counting, top-N selection, font scaling
//! and alphabetical ordering. Nothing here touches the filesystem.
mod cloud;
mod count;
mod scale;
mod select;
mod separators;
mod token;

pub use cloud::{SizedWord, TagCloud};
pub use count::WordCounts;
pub use scale::{scale_size, FontRange, FontRangeError, DEFAULT_FONT_MAX, DEFAULT_FONT_MIN};
pub use select::{select_top, validate_top_n, CountEntry, SelectError, Selection};
pub use separators::{SeparatorSet, SEPARATOR_CHARS};
pub use token::{next_word_or_separator, tokens, Token, TokenError, TokenKind, Tokens};
