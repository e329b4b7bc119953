use pretty_assertions::assert_eq;
use tagcloud_core::{
    select_top, tokens, validate_top_n, CountEntry, SelectError, Selection, SeparatorSet,
    WordCounts,
};

fn counts_from(pairs: &[(&str, u32)]) -> WordCounts {
    let separators = SeparatorSet::default();
    let mut counts = WordCounts::new();
    for (word, n) in pairs {
        assert_eq!(
            tokens(word, &separators).count(),
            1,
            "{word:?} is not a single word token"
        );
        for _ in 0..*n {
            counts.add_line(word, &separators);
        }
    }
    counts
}

fn words(selection: &tagcloud_core::Selection) -> Vec<(&str, u32)> {
    selection
        .entries()
        .iter()
        .map(|e| (e.word.as_str(), e.count))
        .collect()
}

#[test]
fn selects_highest_counts_in_descending_order() {
    let counts = counts_from(&[("a", 5), ("b", 9), ("c", 1), ("d", 9)]);
    let selection = select_top(&counts, 3).unwrap();
    assert_eq!(words(&selection), vec![("b", 9), ("d", 9), ("a", 5)]);
    assert_eq!(selection.count_max(), 9);
    assert_eq!(selection.count_min(), 5);
}

#[test]
fn equal_counts_prefer_earlier_words() {
    let counts = counts_from(&[("the", 3), ("cat", 2), ("sat", 1), ("on", 1), ("mat", 1), ("ran", 1)]);
    let selection = select_top(&counts, 3).unwrap();
    assert_eq!(words(&selection), vec![("the", 3), ("cat", 2), ("mat", 1)]);
    assert_eq!(selection.count_min(), 1);
}

#[test]
fn tie_break_is_stable_across_runs() {
    let pairs: Vec<(String, u32)> = (0..26u8)
        .map(|i| (format!("w{}x", char::from(b'a' + i)), 2))
        .collect();
    let borrowed: Vec<(&str, u32)> = pairs.iter().map(|(w, c)| (w.as_str(), *c)).collect();
    let first = select_top(&counts_from(&borrowed), 5).unwrap();
    for _ in 0..5 {
        let again = select_top(&counts_from(&borrowed), 5).unwrap();
        assert_eq!(first, again);
    }
    assert_eq!(first.len(), 5);
    assert_eq!(first.entries()[0].word, "wax");
    assert_eq!(first.entries()[4].word, "wex");
}

#[test]
fn selecting_every_word_keeps_all() {
    let counts = counts_from(&[("x", 2), ("y", 7)]);
    let selection = select_top(&counts, 2).unwrap();
    assert_eq!(selection.len(), 2);
    assert_eq!(selection.count_max(), 7);
    assert_eq!(selection.count_min(), 2);
}

#[test]
fn single_word_selection_has_equal_bounds() {
    let counts = counts_from(&[("x", 2), ("y", 7)]);
    let selection = select_top(&counts, 1).unwrap();
    assert_eq!(words(&selection), vec![("y", 7)]);
    assert_eq!(selection.count_min(), selection.count_max());
}

#[test]
fn zero_is_rejected() {
    let counts = counts_from(&[("x", 1)]);
    assert_eq!(select_top(&counts, 0), Err(SelectError::ZeroWords));
}

#[test]
fn more_than_distinct_is_rejected() {
    let counts = counts_from(&[("x", 1), ("y", 1)]);
    assert_eq!(
        select_top(&counts, 3),
        Err(SelectError::TooManyWords {
            requested: 3,
            available: 2
        })
    );
    assert_eq!(
        validate_top_n(1, 0),
        Err(SelectError::TooManyWords {
            requested: 1,
            available: 0
        })
    );
    assert_eq!(validate_top_n(2, 2), Ok(()));
}

#[test]
fn prebuilt_entries_with_repeated_word_are_rejected() {
    let result = Selection::from_entries(vec![CountEntry::new("a", 1), CountEntry::new("a", 1)]);
    assert_eq!(
        result,
        Err(SelectError::DuplicateWord {
            word: "a".to_string()
        })
    );
}
