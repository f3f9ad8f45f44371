//! Error types for each layer
//!
//! - `FeedError`: feed generation and site URL resolution
//! - `ContentError`: reading posts from the content source
//! - `AppError`: HTTP handler errors (wraps the above for responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

/// Feed generation errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("site URL is not configured (set `url` in _config.yml or the SITE environment variable)")]
    MissingSiteUrl,

    #[error("invalid site URL {url:?}: {reason}")]
    InvalidSiteUrl { url: String, reason: String },

    #[error("RSS validation failed: {0}")]
    Validation(String),
}

/// Content source errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("missing publishDate in {0:?}")]
    MissingDate(PathBuf),

    #[error("unrecognized publishDate {value:?} in {path:?}")]
    InvalidDate { path: PathBuf, value: String },

    #[error("content loader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Feed(#[from] FeedError),

    #[error("{0}")]
    Content(#[from] ContentError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Feed(FeedError::MissingSiteUrl | FeedError::InvalidSiteUrl { .. }) => {
                tracing::error!("Feed configuration error: {}", self);
            }
            AppError::Feed(e) => tracing::error!("Feed generation failed: {}", e),
            AppError::Content(e) => tracing::error!("Content source error: {}", e),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
