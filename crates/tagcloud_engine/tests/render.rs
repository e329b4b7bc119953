use pretty_assertions::assert_eq;
use tagcloud_core::{CountEntry, FontRange, Selection, TagCloud};
use tagcloud_engine::{escape_html, HtmlRenderer, Renderer, DEFAULT_STYLESHEET_HREF};

fn sample_cloud() -> TagCloud {
    let selection = Selection::from_entries(vec![
        CountEntry::new("the", 3),
        CountEntry::new("cat", 2),
        CountEntry::new("mat", 1),
    ])
    .unwrap();
    TagCloud::build(selection, FontRange::default())
}

#[test]
fn renders_full_document() {
    let html = HtmlRenderer::new("cloud.css").render(&sample_cloud(), "story.txt");
    let expected = "\
<html>
<head>
<title>Top 3 words in story.txt</title>
<link href=\"cloud.css\" rel=\"stylesheet\" type=\"text/css\">
</head>
<body>
<h2>Top 3 words in story.txt</h2>
<hr>
<div class=\"cdiv\">
<p class=\"cbox\">
<span style=\"cursor:default\" class=\"f29\" title=\"count: 2\">cat</span>
<span style=\"cursor:default\" class=\"f11\" title=\"count: 1\">mat</span>
<span style=\"cursor:default\" class=\"f48\" title=\"count: 3\">the</span>
</p>
</div>
</body>
</html>
";
    assert_eq!(html, expected);
}

#[test]
fn default_renderer_links_course_stylesheet() {
    let renderer = HtmlRenderer::default();
    assert_eq!(renderer.stylesheet_href(), DEFAULT_STYLESHEET_HREF);
    let html = renderer.render(&sample_cloud(), "x");
    assert!(html.contains(DEFAULT_STYLESHEET_HREF));
}

#[test]
fn markup_characters_are_escaped() {
    let selection = Selection::from_entries(vec![CountEntry::new("<b>&co", 1)]).unwrap();
    let cloud = TagCloud::build(selection, FontRange::default());
    let html = HtmlRenderer::default().render(&cloud, "a<b>.txt");
    assert!(html.contains(">&lt;b&gt;&amp;co</span>"));
    assert!(html.contains("<title>Top 1 words in a&lt;b&gt;.txt</title>"));
    assert_eq!(escape_html("say \"hi\" 'x'"), "say &quot;hi&quot; &#39;x&#39;");
}
