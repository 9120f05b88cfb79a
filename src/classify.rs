//! Query classification
//!
//! Decides which kind of instant answer a submitted query gets. Rules are
//! checked in a fixed priority order and `General` catches everything else,
//! so classification never fails.

pub mod calculator;
mod outcome;

use std::fmt;

pub use calculator::{CalcError, evaluate, evaluate_query, format_number};
pub use outcome::{ResultPayload, SearchOutcome, WeatherReport, dispatch};

/// Queries longer than this get the richer general result
const RICH_RESULT_MIN_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Weather,
    Calculator,
    Time,
    Translate,
    General,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultKind::Weather => write!(f, "weather"),
            ResultKind::Calculator => write!(f, "calculator"),
            ResultKind::Time => write!(f, "time"),
            ResultKind::Translate => write!(f, "translate"),
            ResultKind::General => write!(f, "general"),
        }
    }
}

pub fn classify(query: &str) -> ResultKind {
    let lower = query.to_lowercase();

    if lower.contains("weather") {
        ResultKind::Weather
    } else if lower.contains("calculator") || starts_with_arithmetic(query) {
        ResultKind::Calculator
    } else if lower.contains("time") {
        ResultKind::Time
    } else if lower.contains("translate") {
        ResultKind::Translate
    } else {
        ResultKind::General
    }
}

/// Whether a general result for `query` should be the richer variant
pub fn is_rich_general(query: &str) -> bool {
    query.chars().count() >= RICH_RESULT_MIN_CHARS
}

/// `digits operator digits` at the very start of `query`
fn starts_with_arithmetic(query: &str) -> bool {
    let rest = query.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == query.len() {
        return false;
    }
    let Some(rest) = rest.strip_prefix(['+', '-', '*', '/']) else {
        return false;
    };
    rest.starts_with(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod classify_tests;
