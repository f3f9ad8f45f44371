//! Write the feed to the public directory

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::ContentLoader;
use crate::feed::FeedGenerator;
use crate::Site;

/// Generate the feed file
pub fn run(site: &Site) -> Result<()> {
    write_feed(site).map(|_| ())
}

/// Render the feed from the post collection and write it under `public_dir`
pub fn write_feed(site: &Site) -> Result<PathBuf> {
    let start = std::time::Instant::now();

    let posts = ContentLoader::new(site).load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let xml = FeedGenerator::new(&site.config).render_xml(&posts)?;

    let output_path = site
        .public_dir
        .join(site.config.feed.path.trim_start_matches('/'));
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, xml)?;

    tracing::info!(
        "Generated {:?} in {:.2}s",
        output_path,
        start.elapsed().as_secs_f64()
    );
    Ok(output_path)
}
