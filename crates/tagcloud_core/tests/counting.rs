use tagcloud_core::{tokens, SeparatorSet, WordCounts};

#[test]
fn counts_are_case_insensitive() {
    let separators = SeparatorSet::default();
    let counts = WordCounts::from_lines(["The cat", "the CAT tHe"], &separators);
    assert_eq!(counts.get("the"), Some(3));
    assert_eq!(counts.get("cat"), Some(2));
    assert_eq!(counts.get("The"), None);
    assert_eq!(counts.distinct_words(), 2);
}

#[test]
fn separator_tokens_are_not_counted() {
    let separators = SeparatorSet::default();
    let counts = WordCounts::from_lines(["1, 2, 3 -- go!", "   ", ""], &separators);
    assert_eq!(counts.distinct_words(), 1);
    assert_eq!(counts.get("go"), Some(1));
}

#[test]
fn empty_document_has_no_words() {
    let separators = SeparatorSet::default();
    let counts = WordCounts::from_lines(Vec::<String>::new(), &separators);
    assert!(counts.is_empty());
    assert_eq!(counts.total_words(), 0);
}

#[test]
fn total_equals_number_of_word_tokens() {
    let separators = SeparatorSet::default();
    let lines = [
        "It was the best of times, it was the worst of times,",
        "it was the age of wisdom, it was the age of foolishness...",
    ];
    let separators_ref = &separators;
    let word_tokens = lines
        .iter()
        .flat_map(move |line| tokens(line, separators_ref))
        .filter(|t| t.is_word())
        .count() as u64;
    let counts = WordCounts::from_lines(lines, &separators);
    assert_eq!(counts.total_words(), word_tokens);
    assert_eq!(counts.get("it"), Some(4));
    assert_eq!(counts.get("was"), Some(4));
    assert_eq!(counts.get("times"), Some(2));
}

#[test]
fn line_order_does_not_change_counts() {
    let separators = SeparatorSet::default();
    let forward = WordCounts::from_lines(["a b c", "b c", "c"], &separators);
    let backward = WordCounts::from_lines(["c", "b c", "a b c"], &separators);
    assert_eq!(forward, backward);
}

#[test]
fn add_line_accumulates() {
    let separators = SeparatorSet::default();
    let mut counts = WordCounts::new();
    counts.add_line("alpha beta", &separators);
    counts.add_line("Alpha", &separators);
    assert_eq!(counts.get("alpha"), Some(2));
    assert_eq!(counts.get("beta"), Some(1));
}
