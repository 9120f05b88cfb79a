use std::time::Duration;

use futures::future::BoxFuture;

use super::{RemoteResult, RemoteSuggestionSource, filter_containing, mock_expansions};

/// In-process source with a fixed augmentation list
///
/// `latency` is slept before each answer to mimic a network round trip;
/// it never changes what is returned.
#[derive(Debug, Clone, Default)]
pub struct MockRemoteSource {
    augmentations: Vec<String>,
    latency: Duration,
}

impl MockRemoteSource {
    pub fn new(augmentations: Vec<String>, latency: Duration) -> Self {
        Self {
            augmentations,
            latency,
        }
    }

    /// No augmentations and no latency
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn augmentations(&self) -> &[String] {
        &self.augmentations
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl RemoteSuggestionSource for MockRemoteSource {
    fn fetch_augmented<'a>(&'a self, query: &'a str) -> BoxFuture<'a, RemoteResult> {
        Box::pin(async move {
            self.simulate_latency().await;
            Ok(filter_containing(&self.augmentations, query))
        })
    }

    fn fetch_mock_expansions<'a>(&'a self, query: &'a str) -> BoxFuture<'a, RemoteResult> {
        Box::pin(async move {
            self.simulate_latency().await;
            Ok(mock_expansions(query))
        })
    }
}
