//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

use crate::error::FeedError;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub linkedin_handle: Option<String>,

    // URL (declared site origin; only the origin is used)
    pub url: Option<String>,

    // Directory
    pub source_dir: String,
    pub posts_dir: String,
    pub public_dir: String,

    // Feed
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            linkedin_handle: None,

            url: None,

            source_dir: "content".to_string(),
            posts_dir: "posts".to_string(),
            public_dir: "public".to_string(),

            feed: FeedConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Override the declared site URL (e.g. from the deployment environment)
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    /// Absolute site root: the origin of the declared URL, without trailing slash
    pub fn site_root(&self) -> Result<String, FeedError> {
        let raw = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(FeedError::MissingSiteUrl)?;

        let parsed = Url::parse(raw).map_err(|e| FeedError::InvalidSiteUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FeedError::InvalidSiteUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        Ok(parsed.origin().ascii_serialization())
    }

    /// Channel title, falling back to the site title
    pub fn feed_title(&self) -> &str {
        self.feed.title.as_deref().unwrap_or(&self.title)
    }

    /// Channel description, falling back to the site description
    pub fn feed_description(&self) -> &str {
        self.feed
            .description
            .as_deref()
            .unwrap_or(&self.description)
    }

    /// Route of the feed endpoint, always starting with `/`
    pub fn feed_route(&self) -> String {
        format!("/{}", self.feed.path.trim_start_matches('/'))
    }
}

/// Feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub path: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            path: "rss.xml".to_string(),
        }
    }
}
