//! Tests for remote suggestion sources

use super::*;
use std::time::Duration;

/// Nothing listens on the discard port, so connects fail fast
const UNREACHABLE_URL: &str = "http://127.0.0.1:9/posts";

struct SlowSource {
    delay: Duration,
}

impl RemoteSuggestionSource for SlowSource {
    fn fetch_augmented<'a>(&'a self, _query: &'a str) -> BoxFuture<'a, RemoteResult> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            Ok(vec!["late".to_string()])
        })
    }

    fn fetch_mock_expansions<'a>(&'a self, query: &'a str) -> BoxFuture<'a, RemoteResult> {
        Box::pin(async move { Ok(mock_expansions(query)) })
    }
}

mod expansion_tests {
    use super::*;

    #[test]
    fn test_mock_expansions_appends_every_suffix_in_order() {
        let expansions = mock_expansions("rust");
        assert_eq!(
            expansions,
            vec![
                "rust tutorial",
                "rust examples",
                "rust best practices",
                "rust documentation",
                "rust vs alternatives",
            ]
        );
    }

    #[test]
    fn test_mock_expansions_is_deterministic() {
        assert_eq!(mock_expansions("css grid"), mock_expansions("css grid"));
    }
}

mod filter_tests {
    use super::*;

    #[test]
    fn test_filter_containing_is_case_insensitive_and_ordered() {
        let items = vec![
            "Qui est esse".to_string(),
            "sunt aut facere".to_string(),
            "est rerum tempore".to_string(),
        ];
        assert_eq!(
            filter_containing(&items, "EST"),
            vec!["Qui est esse", "est rerum tempore"]
        );
    }

    #[test]
    fn test_filter_containing_no_matches() {
        let items = vec!["alpha".to_string()];
        assert!(filter_containing(&items, "beta").is_empty());
    }
}

mod normalize_tests {
    use super::*;

    #[test]
    fn test_normalize_titles_strips_punctuation_and_case() {
        let titles = vec![
            "Sunt aut facere, repellat!".to_string(),
            "  qui est esse?  ".to_string(),
        ];
        assert_eq!(
            normalize_titles(titles),
            vec!["sunt aut facere repellat", "qui est esse"]
        );
    }

    #[test]
    fn test_normalize_titles_dedupes_keeping_first() {
        let titles = vec![
            "Dolorem eum".to_string(),
            "dolorem eum!".to_string(),
            "magnam facilis".to_string(),
        ];
        assert_eq!(normalize_titles(titles), vec!["dolorem eum", "magnam facilis"]);
    }

    #[test]
    fn test_normalize_titles_drops_empty() {
        let titles = vec!["?!".to_string(), "   ".to_string()];
        assert!(normalize_titles(titles).is_empty());
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_remote_error_display() {
        assert_eq!(RemoteError::Status(503).to_string(), "HTTP status 503");
        assert!(
            RemoteError::Timeout(Duration::from_millis(250))
                .to_string()
                .contains("250ms")
        );
    }

    #[test]
    fn test_remote_error_converts_to_remote_unavailable() {
        let err: OmniboxError = RemoteError::Network("refused".to_string()).into();
        assert!(matches!(err, OmniboxError::RemoteUnavailable(msg) if msg.contains("refused")));
    }
}

mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_bounded_passes_through_fast_results() {
        let source = MockRemoteSource::new(vec!["rust book".to_string()], Duration::ZERO);
        let result = bounded(Duration::from_secs(1), source.fetch_augmented("rust")).await;
        assert_eq!(result, Ok(vec!["rust book".to_string()]));
    }

    #[tokio::test]
    async fn test_bounded_times_out_slow_source() {
        let source = SlowSource {
            delay: Duration::from_millis(500),
        };
        let timeout = Duration::from_millis(20);
        let result = bounded(timeout, source.fetch_augmented("rust")).await;
        assert_eq!(result, Err(RemoteError::Timeout(timeout)));
    }

    #[tokio::test]
    async fn test_mock_source_filters_augmentations() {
        let source = MockRemoteSource::new(
            vec!["rust book".to_string(), "go tour".to_string()],
            Duration::from_millis(1),
        );
        assert_eq!(
            source.fetch_augmented("RUST").await,
            Ok(vec!["rust book".to_string()])
        );
    }

    #[tokio::test]
    async fn test_mock_source_expansions() {
        let source = MockRemoteSource::offline();
        let expansions = source.fetch_mock_expansions("vue").await.unwrap();
        assert_eq!(expansions.len(), EXPANSION_SUFFIXES.len());
        assert_eq!(expansions[0], "vue tutorial");
    }

    #[tokio::test]
    async fn test_boxed_dyn_source_delegates() {
        let source: Box<dyn RemoteSuggestionSource> =
            Box::new(MockRemoteSource::new(vec!["rust book".to_string()], Duration::ZERO));
        source.warm_up().await;
        assert_eq!(
            source.fetch_augmented("book").await,
            Ok(vec!["rust book".to_string()])
        );
    }

    #[tokio::test]
    async fn test_fetch_post_titles_unreachable_is_network_error() {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let result = fetch_post_titles(&client, UNREACHABLE_URL).await;
        assert!(matches!(result, Err(RemoteError::Network(_))));
    }

    #[tokio::test]
    async fn test_http_source_degrades_to_empty_augmentations() {
        let source =
            HttpRemoteSource::new(UNREACHABLE_URL, Duration::from_secs(2), Duration::ZERO).unwrap();
        source.warm_up().await;

        assert_eq!(source.fetch_augmented("anything").await, Ok(Vec::new()));
        let expansions = source.fetch_mock_expansions("rust").await.unwrap();
        assert_eq!(expansions[1], "rust examples");
    }
}
