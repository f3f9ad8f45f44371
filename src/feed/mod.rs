//! Feed generation
//!
//! Turns the post collection into an RSS 2.0 channel. Generation is a pure
//! function of the posts and the site configuration: posts are ordered
//! newest first, each body is rendered from markdown, sanitized to an
//! allow-list and has its root-relative URLs made absolute.

mod sanitize;

pub use sanitize::HtmlSanitizer;

use rss::{validation::Validate, Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use std::collections::BTreeMap;

use crate::config::SiteConfig;
use crate::content::{MarkdownRenderer, PostRecord};
use crate::error::FeedError;
use crate::helpers::{convert_relative_urls_to_absolute, date_rfc2822, post_permalink};

const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";

/// RSS feed generator
pub struct FeedGenerator {
    config: SiteConfig,
    renderer: MarkdownRenderer,
    sanitizer: HtmlSanitizer,
}

impl FeedGenerator {
    /// Create a new generator
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
            renderer: MarkdownRenderer::new(),
            sanitizer: HtmlSanitizer::new(),
        }
    }

    /// Build the feed channel from the full post collection
    pub fn generate(&self, posts: &[PostRecord]) -> Result<Channel, FeedError> {
        let site_root = self.config.site_root()?;

        let items: Vec<Item> = sort_newest_first(posts)
            .into_iter()
            .map(|post| self.build_item(post, &site_root))
            .collect();

        let channel = ChannelBuilder::default()
            .title(self.config.feed_title())
            .link(site_root.as_str())
            .description(self.config.feed_description())
            .generator(format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
            .namespaces(BTreeMap::from([(
                "content".to_string(),
                CONTENT_NAMESPACE.to_string(),
            )]))
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| FeedError::Validation(e.to_string()))?;

        tracing::debug!("Generated feed with {} items", channel.items().len());
        Ok(channel)
    }

    /// Build the feed and serialize it to XML
    pub fn render_xml(&self, posts: &[PostRecord]) -> Result<String, FeedError> {
        Ok(self.generate(posts)?.to_string())
    }

    /// Render, sanitize and absolutize a post body
    pub fn render_content(&self, body: Option<&str>, site_root: &str) -> String {
        let html = self.renderer.render(body.unwrap_or(""));
        let clean = self.sanitizer.clean(&html);
        convert_relative_urls_to_absolute(&clean, site_root)
    }

    fn build_item(&self, post: &PostRecord, site_root: &str) -> Item {
        let link = post_permalink(site_root, &post.slug);

        ItemBuilder::default()
            .title(post.title.clone())
            .description(post.description.clone())
            .link(link.clone())
            .guid(GuidBuilder::default().permalink(true).value(link).build())
            .pub_date(date_rfc2822(&post.publish_date))
            .content(self.render_content(post.body.as_deref(), site_root))
            .build()
    }
}

/// Order posts newest first
///
/// The sort is stable: posts with the same publish date keep their
/// collection order.
pub fn sort_newest_first(posts: &[PostRecord]) -> Vec<&PostRecord> {
    let mut sorted: Vec<&PostRecord> = posts.iter().collect();
    sorted.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
    sorted
}
