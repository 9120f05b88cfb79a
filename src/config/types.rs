// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::debouncer::DEFAULT_DEBOUNCE_MS;
use crate::suggest::cache::DEFAULT_CACHE_CAPACITY;

pub const DEFAULT_AUGMENTATION_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Remote timeout bounds in milliseconds
pub const MIN_REMOTE_TIMEOUT_MS: u64 = 100;
pub const MAX_REMOTE_TIMEOUT_MS: u64 = 5_000;

/// Suggestion lookup configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuggestionsConfig {
    pub debounce_ms: u64,
    /// LRU capacity; 0 keeps every query
    pub cache_capacity: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Remote augmentation configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub enabled: bool,
    pub timeout_ms: u64,
    /// Simulated round trip added before each remote answer
    pub latency_ms: u64,
    pub augmentation_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            enabled: true,
            timeout_ms: 500,
            latency_ms: 100,
            augmentation_url: DEFAULT_AUGMENTATION_URL.to_string(),
        }
    }
}

impl RemoteConfig {
    /// Configured timeout, clamped to the supported range
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(
            self.timeout_ms
                .clamp(MIN_REMOTE_TIMEOUT_MS, MAX_REMOTE_TIMEOUT_MS),
        )
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// History configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub persist: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig { persist: true }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}
