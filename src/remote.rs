//! Remote suggestion sources
//!
//! A source supplies two lists per query: augmentation items (extra
//! suggestions from somewhere else) and engine-style expansions of the query
//! itself. Calls are wrapped in [`bounded`] so a slow or failing source turns
//! into an error value the orchestrator can absorb, never a hang or a panic.

mod http;
mod mock;

use std::future::Future;
use std::time::Duration;

use futures::future::BoxFuture;
use thiserror::Error;

use crate::error::OmniboxError;

pub use http::{HttpRemoteSource, fetch_post_titles, normalize_titles};
pub use mock::MockRemoteSource;

/// Phrases appended to the query to fake search-engine completions
pub const EXPANSION_SUFFIXES: [&str; 5] = [
    "tutorial",
    "examples",
    "best practices",
    "documentation",
    "vs alternatives",
];

/// Errors that can occur while talking to a remote source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// No answer within the allotted time
    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

impl From<RemoteError> for OmniboxError {
    fn from(err: RemoteError) -> Self {
        OmniboxError::RemoteUnavailable(err.to_string())
    }
}

pub type RemoteResult = Result<Vec<String>, RemoteError>;

pub trait RemoteSuggestionSource: Send + Sync {
    /// Extra suggestions relevant to `query`
    fn fetch_augmented<'a>(&'a self, query: &'a str) -> BoxFuture<'a, RemoteResult>;

    /// Engine-style completions built from `query` itself
    fn fetch_mock_expansions<'a>(&'a self, query: &'a str) -> BoxFuture<'a, RemoteResult>;

    /// One-off preparation run before the first query (preloading, etc.)
    fn warm_up(&self) -> BoxFuture<'_, ()> {
        Box::pin(async {})
    }
}

impl<S: RemoteSuggestionSource + ?Sized> RemoteSuggestionSource for Box<S> {
    fn fetch_augmented<'a>(&'a self, query: &'a str) -> BoxFuture<'a, RemoteResult> {
        (**self).fetch_augmented(query)
    }

    fn fetch_mock_expansions<'a>(&'a self, query: &'a str) -> BoxFuture<'a, RemoteResult> {
        (**self).fetch_mock_expansions(query)
    }

    fn warm_up(&self) -> BoxFuture<'_, ()> {
        (**self).warm_up()
    }
}

/// Await a source call for at most `timeout`
pub async fn bounded<F>(timeout: Duration, call: F) -> RemoteResult
where
    F: Future<Output = RemoteResult>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(RemoteError::Timeout(timeout)),
    }
}

/// `query` followed by each of [`EXPANSION_SUFFIXES`]
pub fn mock_expansions(query: &str) -> Vec<String> {
    let bare = format!("{} ", query);
    EXPANSION_SUFFIXES
        .iter()
        .map(|suffix| format!("{} {}", query, suffix))
        .filter(|phrase| *phrase != bare)
        .collect()
}

/// Items containing `query` case-insensitively, in their original order
pub fn filter_containing(items: &[String], query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod remote_tests;
