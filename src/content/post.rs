//! Post record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post as supplied by the content source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Post title
    pub title: String,

    /// Short summary shown in listings and the feed
    pub description: String,

    /// Publication date
    pub publish_date: DateTime<Utc>,

    /// URL-safe identifier, used as `/blog/{slug}/`
    pub slug: String,

    /// Raw markdown body, absent for some posts
    pub body: Option<String>,
}

impl PostRecord {
    /// Create a new post without a body
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        publish_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            publish_date,
            slug: slug.into(),
            body: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
