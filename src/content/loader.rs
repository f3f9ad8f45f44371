//! Content loader - loads posts from the posts directory

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::source::PostSource;
use super::{FrontMatter, PostRecord};
use crate::error::ContentError;
use crate::helpers::parse_date;
use crate::Site;

/// Loads the post collection from markdown files with YAML front-matter
#[derive(Debug, Clone)]
pub struct ContentLoader {
    posts_dir: PathBuf,
}

impl ContentLoader {
    /// Create a loader for the site's posts directory
    pub fn new(site: &Site) -> Self {
        Self::from_dir(site.posts_dir())
    }

    /// Create a loader for an explicit directory
    pub fn from_dir<P: Into<PathBuf>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    /// Load all posts, in sorted path order
    ///
    /// Files that fail to load are skipped with a warning.
    pub fn load_posts(&self) -> Result<Vec<PostRecord>, ContentError> {
        if !self.posts_dir.exists() {
            tracing::warn!("Posts directory {:?} does not exist", self.posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_post(path) {
                Ok(Some(post)) => posts.push(post),
                Ok(None) => tracing::debug!("Skipping draft {:?}", path),
                Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
            }
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);
        Ok(posts)
    }

    /// Load a single post from a file, `None` for drafts
    fn load_post(&self, path: &Path) -> Result<Option<PostRecord>, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (fm, body) = FrontMatter::parse(&content).map_err(|source| {
            ContentError::FrontMatter {
                path: path.to_path_buf(),
                source,
            }
        })?;

        if fm.draft {
            return Ok(None);
        }

        let raw_date = fm
            .publish_date
            .ok_or_else(|| ContentError::MissingDate(path.to_path_buf()))?;
        let publish_date = parse_date(&raw_date).ok_or_else(|| ContentError::InvalidDate {
            path: path.to_path_buf(),
            value: raw_date.clone(),
        })?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");

        let title = fm.title.unwrap_or_else(|| stem.to_string());
        let slug = fm
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slug::slugify(stem));

        let body = if body.trim().is_empty() {
            None
        } else {
            Some(body.to_string())
        };

        Ok(Some(PostRecord {
            title,
            description: fm.description.unwrap_or_default(),
            publish_date,
            slug,
            body,
        }))
    }
}

#[async_trait]
impl PostSource for ContentLoader {
    async fn fetch_all(&self) -> Result<Vec<PostRecord>, ContentError> {
        let loader = self.clone();
        tokio::task::spawn_blocking(move || loader.load_posts()).await?
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_posts() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "first.md",
            "---\ntitle: First\ndescription: The first one\npublishDate: 2024-01-01\nslug: first\n---\n# Hi\n",
        );
        write(
            dir.path(),
            "second.md",
            "---\ntitle: Second\npublishDate: 2024-06-01\n---\n",
        );
        write(dir.path(), "notes.txt", "not a post");

        let posts = ContentLoader::from_dir(dir.path()).load_posts().unwrap();
        assert_eq!(posts.len(), 2);

        assert_eq!(posts[0].title, "First");
        assert_eq!(posts[0].description, "The first one");
        assert_eq!(posts[0].slug, "first");
        assert_eq!(
            posts[0].publish_date,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(posts[0].body.as_deref(), Some("# Hi\n"));

        // Slug falls back to the file name, empty body is absent
        assert_eq!(posts[1].slug, "second");
        assert_eq!(posts[1].description, "");
        assert!(posts[1].body.is_none());
    }

    #[test]
    fn test_collection_order_is_path_order() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.md", "---\ntitle: B\npublishDate: 2024-01-01\n---\nb");
        write(dir.path(), "a.md", "---\ntitle: A\npublishDate: 2024-01-01\n---\na");
        write(
            dir.path(),
            "nested/c.markdown",
            "---\ntitle: C\npublishDate: 2024-01-01\n---\nc",
        );

        let posts = ContentLoader::from_dir(dir.path()).load_posts().unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_skips_drafts_and_broken_posts() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "ok.md", "---\ntitle: Ok\npublishDate: 2024-01-01\n---\nok");
        write(
            dir.path(),
            "draft.md",
            "---\ntitle: Draft\npublishDate: 2024-01-01\ndraft: true\n---\nwip",
        );
        write(dir.path(), "no-date.md", "---\ntitle: No date\n---\nbody");
        write(
            dir.path(),
            "bad-date.md",
            "---\ntitle: Bad\npublishDate: someday\n---\nbody",
        );
        write(dir.path(), "bad-yaml.md", "---\ntitle: [oops\n---\nbody");

        let posts = ContentLoader::from_dir(dir.path()).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Ok");
    }

    #[test]
    fn test_title_falls_back_to_file_stem() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "my-note.md", "---\npublishDate: 2024-02-02\n---\nA note");

        let posts = ContentLoader::from_dir(dir.path()).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "my-note");
        assert_eq!(posts[0].slug, "my-note");
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let loader = ContentLoader::from_dir(dir.path().join("missing"));
        assert!(loader.load_posts().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "hello-world.md",
            "---\ntitle: Hello\npublishDate: 2024-03-01T12:00:00Z\n---\nHello",
        );

        let loader = ContentLoader::from_dir(dir.path());
        let posts = loader.fetch_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "hello-world");
    }
}
