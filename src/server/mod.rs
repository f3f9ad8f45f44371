//! HTTP server: the feed endpoint plus static files from the public directory

use anyhow::Result;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{ContentLoader, PostSource};
use crate::error::AppError;
use crate::feed::FeedGenerator;
use crate::Site;

const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Server state
struct ServerState {
    config: SiteConfig,
    source: Arc<dyn PostSource>,
}

/// Build the router for a configuration and content source
pub fn router(config: SiteConfig, source: Arc<dyn PostSource>, public_dir: PathBuf) -> Router {
    let feed_route = config.feed_route();
    let state = Arc::new(ServerState { config, source });

    Router::new()
        .route(&feed_route, get(feed_handler))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    if let Err(e) = site.config.site_root() {
        tracing::warn!("{}; feed requests will fail", e);
    }

    let source: Arc<dyn PostSource> = Arc::new(ContentLoader::new(site));
    let app = router(site.config.clone(), source, site.public_dir.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!(
        "Serving feed at http://{}:{}{}",
        ip,
        port,
        site.config.feed_route()
    );
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Generate the feed from the current post collection
async fn feed_handler(State(state): State<Arc<ServerState>>) -> Result<Response, AppError> {
    let posts = state.source.fetch_all().await?;
    let xml = FeedGenerator::new(&state.config).render_xml(&posts)?;
    tracing::debug!("Served feed with {} posts", posts.len());

    Ok(([(header::CONTENT_TYPE, XML_CONTENT_TYPE)], xml).into_response())
}
