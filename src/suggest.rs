//! Suggestion pipeline
//!
//! Local ranking over a fixed corpus, the per-query cache, the orchestrator
//! that blends in remote sources, and the worker thread that runs it off the
//! UI loop.

pub mod cache;
pub mod corpus;
pub mod highlight;
pub mod orchestrator;
pub mod ranker;
mod suggestion;
pub mod worker;

pub use cache::{SuggestionCache, normalize_query};
pub use highlight::{SuggestionIcon, match_ranges, suggestion_icon, suggestion_label};
pub use orchestrator::{OrchestratorSettings, SuggestionOrchestrator};
pub use ranker::MatchRanker;
pub use suggestion::{MAX_SUGGESTIONS, RankTier, Suggestion, SuggestionList};
pub use worker::{SuggestionClient, SuggestionRequest, SuggestionResponse, spawn_worker};
