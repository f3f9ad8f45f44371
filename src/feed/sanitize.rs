//! HTML sanitizing for feed item content

use ammonia::{Builder, UrlRelative};
use std::collections::HashSet;

/// Conventional safe-tag allow-list for user-authored HTML
const DEFAULT_TAGS: &[&str] = &[
    "address", "article", "aside", "footer", "header", "h1", "h2", "h3", "h4", "h5", "h6",
    "hgroup", "main", "nav", "section", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "hr", "li", "ol", "p", "pre", "ul", "a", "abbr", "b", "bdi", "bdo", "br", "cite",
    "code", "data", "dfn", "em", "i", "kbd", "mark", "q", "rb", "rp", "rt", "rtc", "ruby", "s",
    "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var", "wbr", "caption", "col",
    "colgroup", "table", "tbody", "td", "tfoot", "th", "thead", "tr",
];

/// Extra tags feed content needs on top of the defaults
const EXTRA_TAGS: &[&str] = &["img"];

const LINK_ATTRIBUTES: &[&str] = &["href", "name", "target"];

const IMG_ATTRIBUTES: &[&str] = &["src", "srcset", "alt", "title", "width", "height", "loading"];

const URL_SCHEMES: &[&str] = &["http", "https", "ftp", "mailto", "tel"];

/// Tags removed together with their text content
const DISCARD_CONTENT_TAGS: &[&str] = &["script", "style", "textarea", "option", "noscript"];

/// Allow-list HTML sanitizer
///
/// Anything outside the allow-list is dropped, so the output only carries
/// allowed tags no matter what the markdown renderer produced.
pub struct HtmlSanitizer {
    builder: Builder<'static>,
}

impl HtmlSanitizer {
    /// Create a new sanitizer with the feed allow-list
    pub fn new() -> Self {
        let mut builder = Builder::empty();
        builder
            .add_tags(DEFAULT_TAGS)
            .add_tags(EXTRA_TAGS)
            .add_tag_attributes("a", LINK_ATTRIBUTES)
            .add_tag_attributes("img", IMG_ATTRIBUTES)
            .url_schemes(URL_SCHEMES.iter().copied().collect::<HashSet<_>>())
            .url_relative(UrlRelative::PassThrough)
            .clean_content_tags(DISCARD_CONTENT_TAGS.iter().copied().collect::<HashSet<_>>())
            .link_rel(None)
            .strip_comments(true);
        Self { builder }
    }

    /// Sanitize an HTML fragment
    pub fn clean(&self, html: &str) -> String {
        self.builder.clean(html).to_string()
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}
