use std::fs;
use std::sync::Once;

use pretty_assertions::assert_eq;
use tagcloud_core::{FontRange, SelectError};
use tagcloud_engine::{
    analyze, analyze_text, build_cloud, generate, CloudOptions, HtmlRenderer, PipelineError,
};
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tagcloud_logging::initialize_for_tests);
}

#[test]
fn analyze_counts_file_words() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("story.txt");
    fs::write(&input, "The cat sat.\nThe cat ran!\n").unwrap();

    let analysis = analyze(&input).unwrap();
    assert_eq!(analysis.distinct_words(), 4);
    assert_eq!(analysis.counts.get("the"), Some(2));
    assert_eq!(analysis.counts.get("cat"), Some(2));
    assert_eq!(analysis.encoding_label, "UTF-8");
}

#[test]
fn end_to_end_writes_html() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("story.txt");
    let output = temp.path().join("out").join("cloud.html");
    fs::write(&input, "the cat sat on the mat the cat ran").unwrap();

    let analysis = analyze(&input).unwrap();
    let options = CloudOptions {
        top_n: 3,
        fonts: FontRange::default(),
    };
    let summary = generate(&analysis, options, &HtmlRenderer::default(), &output).unwrap();

    assert_eq!(summary.output_path, output);
    assert_eq!(summary.word_count, 3);
    assert_eq!(summary.count_max, 3);
    assert_eq!(summary.count_min, 1);

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(summary.bytes_written, html.len() as u64);
    assert!(html.contains("class=\"f48\" title=\"count: 3\">the</span>"));
    assert!(html.contains("class=\"f29\" title=\"count: 2\">cat</span>"));
    assert!(html.contains("class=\"f11\" title=\"count: 1\">mat</span>"));
    assert_eq!(html.matches("<span").count(), 3);

    let cat = html.find(">cat<").unwrap();
    let mat = html.find(">mat<").unwrap();
    let the = html.find(">the<").unwrap();
    assert!(cat < mat && mat < the);
}

#[test]
fn top_n_beyond_distinct_words_fails_without_writing() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("cloud.html");
    let analysis = analyze_text("inline", "one two");
    let options = CloudOptions {
        top_n: 3,
        fonts: FontRange::default(),
    };

    let result = generate(&analysis, options, &HtmlRenderer::default(), &output);
    assert!(matches!(
        result,
        Err(PipelineError::Select(SelectError::TooManyWords {
            requested: 3,
            available: 2
        }))
    ));
    assert!(!output.exists());
}

#[test]
fn custom_font_range_is_applied() {
    let analysis = analyze_text("inline", "a a a b");
    let cloud = build_cloud(&analysis, 2, FontRange::new(10, 20).unwrap()).unwrap();
    let sizes: Vec<_> = cloud.iter().map(|w| (w.word.as_str(), w.size)).collect();
    assert_eq!(sizes, vec![("a", 20), ("b", 10)]);
}
