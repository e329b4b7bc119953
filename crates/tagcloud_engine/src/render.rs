use std::fmt::Write;

use tagcloud_core::TagCloud;

/// Stylesheet providing the `f11`..`f48` size classes and the `cdiv`/`cbox` layout.
pub const DEFAULT_STYLESHEET_HREF: &str = "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";

pub trait Renderer: Send + Sync {
    /// Renders `cloud` as a complete document titled after `source_name`.
    fn render(&self, cloud: &TagCloud, source_name: &str) -> String;
}

/// Static HTML page: one styled span per word, size class `f{size}`, raw count
/// in the `title` attribute.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    stylesheet_href: String,
}

impl HtmlRenderer {
    pub fn new(stylesheet_href: impl Into<String>) -> Self {
        Self {
            stylesheet_href: stylesheet_href.into(),
        }
    }

    pub fn stylesheet_href(&self) -> &str {
        &self.stylesheet_href
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_STYLESHEET_HREF)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, cloud: &TagCloud, source_name: &str) -> String {
        let heading = format!(
            "Top {} words in {}",
            cloud.len(),
            escape_html(source_name)
        );
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "<html>");
        let _ = writeln!(out, "<head>");
        let _ = writeln!(out, "<title>{heading}</title>");
        let _ = writeln!(
            out,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            escape_html(&self.stylesheet_href)
        );
        let _ = writeln!(out, "</head>");
        let _ = writeln!(out, "<body>");
        let _ = writeln!(out, "<h2>{heading}</h2>");
        let _ = writeln!(out, "<hr>");
        let _ = writeln!(out, "<div class=\"cdiv\">");
        let _ = writeln!(out, "<p class=\"cbox\">");
        for word in cloud.iter() {
            let _ = writeln!(
                out,
                "<span style=\"cursor:default\" class=\"f{size}\" title=\"count: {count}\">{text}</span>",
                size = word.size,
                count = word.count,
                text = escape_html(&word.word),
            );
        }
        let _ = writeln!(out, "</p>");
        let _ = writeln!(out, "</div>");
        let _ = writeln!(out, "</body>");
        let _ = writeln!(out, "</html>");
        out
    }
}

/// Escapes text for use in HTML element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
