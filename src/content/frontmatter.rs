//! Front-matter parsing

use serde::{Deserialize, Serialize};

/// Front-matter data of a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "publishDate", alias = "pubDate", alias = "date")]
    pub publish_date: Option<String>,
    pub slug: Option<String>,
    pub draft: bool,
}

impl FrontMatter {
    /// Parse YAML front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let trimmed = content.trim_start();

        let Some(rest) = trimmed.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some((fence_start, fence_end)) = find_closing_fence(rest) else {
            // No closing ---, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..fence_start];
        let remaining = rest[fence_end..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
        Ok((fm, remaining))
    }
}

/// Byte range of the line closing the front-matter block
///
/// Only a line that is exactly `---` (plus trailing whitespace) closes it.
fn find_closing_fence(rest: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        if line.trim_end() == "---" {
            return Some((start, offset));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
description: A first post
publishDate: 2024-01-15
slug: hello-world
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello World"));
        assert_eq!(fm.description.as_deref(), Some("A first post"));
        assert_eq!(fm.publish_date.as_deref(), Some("2024-01-15"));
        assert_eq!(fm.slug.as_deref(), Some("hello-world"));
        assert!(!fm.draft);
        assert!(remaining.starts_with("This is the content."));
    }

    #[test]
    fn test_date_aliases() {
        let content = "---\ntitle: Old\npubDate: '2023-05-01'\n---\nBody";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.publish_date.as_deref(), Some("2023-05-01"));

        let content = "---\ndate: 2023-05-02 10:00:00\n---\nBody";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.publish_date.as_deref(), Some("2023-05-02 10:00:00"));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just markdown\n\nNo front-matter here.";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.title.is_none());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let content = "---\ntitle: Never closed\n\nBody text";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.title.is_none());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_empty_body() {
        let content = "---\ntitle: Only front-matter\n---\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Only front-matter"));
        assert!(remaining.trim().is_empty());
    }

    #[test]
    fn test_closing_fence_must_be_whole_line() {
        let content = "---\ntitle: Dashes\n---note\n----\nBody";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.title.is_none());
        assert_eq!(remaining, content);

        let content = "---\ntitle: Spaced\n---  \r\nBody\n---\nMore";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Spaced"));
        assert_eq!(remaining, "Body\n---\nMore");
    }

    #[test]
    fn test_invalid_yaml() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        assert!(FrontMatter::parse(content).is_err());
    }
}
