//! URL helper functions

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// `src="/..."` or `href="/..."`, but not protocol-relative `//host`
    static ref ROOT_RELATIVE_ATTR: Regex = Regex::new(r#"\b(src|href)="/([^/]|")"#).unwrap();
}

/// Join the site root and a root-relative path without doubling slashes
///
/// # Examples
/// ```ignore
/// full_url_for("https://example.com/", "/about/") // -> "https://example.com/about/"
/// ```
pub fn full_url_for(site_root: &str, path: &str) -> String {
    format!(
        "{}/{}",
        site_root.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Absolute link of a blog post
///
/// # Examples
/// ```ignore
/// post_permalink("https://example.com", "my-post") // -> "https://example.com/blog/my-post/"
/// ```
pub fn post_permalink(site_root: &str, slug: &str) -> String {
    full_url_for(site_root, &format!("blog/{}/", slug.trim_matches('/')))
}

/// Rewrite root-relative `src`/`href` attributes to absolute URLs
///
/// Feed readers resolve content outside the site, so `/images/a.png`
/// has to become `https://example.com/images/a.png`.
pub fn convert_relative_urls_to_absolute(html: &str, site_root: &str) -> String {
    let root = site_root.trim_end_matches('/');
    ROOT_RELATIVE_ATTR
        .replace_all(html, |caps: &Captures| {
            format!(r#"{}="{}/{}"#, &caps[1], root, &caps[2])
        })
        .into_owned()
}
