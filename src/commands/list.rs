//! List posts in feed order

use anyhow::Result;

use crate::content::ContentLoader;
use crate::feed::sort_newest_first;
use crate::helpers::post_permalink;
use crate::Site;

/// Print the post collection, newest first
pub fn run(site: &Site) -> Result<()> {
    let posts = ContentLoader::new(site).load_posts()?;
    let site_root = site.config.site_root().ok();

    println!("Posts ({}):", posts.len());
    for post in sort_newest_first(&posts) {
        let location = match &site_root {
            Some(root) => post_permalink(root, &post.slug),
            None => format!("/blog/{}/", post.slug),
        };
        println!(
            "  {} - {} [{}]",
            post.publish_date.format("%Y-%m-%d"),
            post.title,
            location
        );
    }

    Ok(())
}
