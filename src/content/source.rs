//! Content source abstraction

use async_trait::async_trait;

use super::PostRecord;
use crate::error::ContentError;

/// Supplies the full post collection on demand
///
/// The order of the returned records is the collection order; the feed
/// generator relies on it to break publish date ties.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<PostRecord>, ContentError>;
}

/// Fixed in-memory post collection
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    posts: Vec<PostRecord>,
}

impl MemorySource {
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl PostSource for MemorySource {
    async fn fetch_all(&self) -> Result<Vec<PostRecord>, ContentError> {
        Ok(self.posts.clone())
    }
}
