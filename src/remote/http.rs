use std::time::Duration;

use futures::future::BoxFuture;
use serde::Deserialize;
use tokio::sync::OnceCell;

use super::{
    RemoteError, RemoteResult, RemoteSuggestionSource, filter_containing, mock_expansions,
};

/// Number of post titles kept from the augmentation endpoint
const MAX_TITLES: usize = 20;

#[derive(Deserialize)]
struct Post {
    title: String,
}

/// Source backed by a JSON endpoint returning `[{"title": ...}, ...]`
///
/// Titles are downloaded once per session, either by [`warm_up`] or on the
/// first augmentation request, and filtered locally per query after that.
/// A failed download is logged and remembered as an empty list so a dead
/// endpoint is not retried on every keystroke.
///
/// [`warm_up`]: RemoteSuggestionSource::warm_up
#[derive(Debug)]
pub struct HttpRemoteSource {
    client: reqwest::Client,
    url: String,
    latency: Duration,
    titles: OnceCell<Vec<String>>,
}

impl HttpRemoteSource {
    pub fn new(
        url: impl Into<String>,
        download_timeout: Duration,
        latency: Duration,
    ) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(download_timeout)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            latency,
            titles: OnceCell::new(),
        })
    }

    async fn titles(&self) -> &[String] {
        self.titles
            .get_or_init(|| async {
                match fetch_post_titles(&self.client, &self.url).await {
                    Ok(titles) => {
                        log::debug!("Preloaded {} augmentation titles", titles.len());
                        titles
                    }
                    Err(e) => {
                        log::warn!("Could not preload augmentation titles: {}", e);
                        Vec::new()
                    }
                }
            })
            .await
    }
}

impl RemoteSuggestionSource for HttpRemoteSource {
    fn fetch_augmented<'a>(&'a self, query: &'a str) -> BoxFuture<'a, RemoteResult> {
        Box::pin(async move { Ok(filter_containing(self.titles().await, query)) })
    }

    fn fetch_mock_expansions<'a>(&'a self, query: &'a str) -> BoxFuture<'a, RemoteResult> {
        Box::pin(async move {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            Ok(mock_expansions(query))
        })
    }

    fn warm_up(&self) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            self.titles().await;
        })
    }
}

/// Download post titles and normalize them into suggestion text
pub async fn fetch_post_titles(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<String>, RemoteError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| RemoteError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(RemoteError::Status(status.as_u16()));
    }

    let posts: Vec<Post> = response
        .json()
        .await
        .map_err(|e| RemoteError::Decode(e.to_string()))?;

    Ok(normalize_titles(
        posts.into_iter().take(MAX_TITLES).map(|p| p.title),
    ))
}

/// Lower-case, strip everything but word characters and whitespace, trim,
/// and drop empty or repeated titles (first occurrence wins)
pub fn normalize_titles<I>(titles: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut normalized: Vec<String> = Vec::new();
    for title in titles {
        let cleaned: String = title
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect();
        let cleaned = cleaned.trim().to_string();
        if !cleaned.is_empty() && !normalized.contains(&cleaned) {
            normalized.push(cleaned);
        }
    }
    normalized
}
