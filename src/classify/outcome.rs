use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Local};

use super::calculator::{CalcError, evaluate_query, format_number};
use super::{ResultKind, classify, is_rich_general};

const WEATHER_CONDITIONS: [&str; 4] = ["Sunny", "Cloudy", "Rainy", "Partly Cloudy"];
const WEATHER_LOCATION: &str = "Current Location";

/// What a submitted search resolved to
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub kind: ResultKind,
    pub query: String,
    pub payload: ResultPayload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultPayload {
    Weather(WeatherReport),
    Calculator(Result<f64, CalcError>),
    Time { time: String, date: String },
    Translate { text: Option<String> },
    General { rich: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: i32,
    pub condition: &'static str,
    pub humidity_pct: u8,
    pub wind_kmh: u8,
}

impl WeatherReport {
    /// Mock conditions, stable for a given query
    pub fn for_query(query: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        query.to_lowercase().hash(&mut hasher);
        let seed = hasher.finish();

        Self {
            location: WEATHER_LOCATION.to_string(),
            temperature_c: 10 + (seed % 30) as i32,
            condition: WEATHER_CONDITIONS[((seed >> 8) % 4) as usize],
            humidity_pct: 40 + ((seed >> 16) % 40) as u8,
            wind_kmh: 5 + ((seed >> 24) % 20) as u8,
        }
    }
}

/// Classify `query` and build the matching payload
///
/// `now` is only consulted for time results.
pub fn dispatch(query: &str, now: DateTime<Local>) -> SearchOutcome {
    let kind = classify(query);
    let payload = match kind {
        ResultKind::Weather => ResultPayload::Weather(WeatherReport::for_query(query)),
        ResultKind::Calculator => ResultPayload::Calculator(evaluate_query(query)),
        ResultKind::Time => ResultPayload::Time {
            time: now.format("%H:%M:%S").to_string(),
            date: now.format("%Y-%m-%d").to_string(),
        },
        ResultKind::Translate => ResultPayload::Translate {
            text: translate_text(query),
        },
        ResultKind::General => ResultPayload::General {
            rich: is_rich_general(query),
        },
    };

    SearchOutcome {
        kind,
        query: query.to_string(),
        payload,
    }
}

impl SearchOutcome {
    pub fn title(&self) -> String {
        match self.kind {
            ResultKind::Weather => format!("Weather: \"{}\"", self.query),
            ResultKind::Calculator => format!("Calculator: \"{}\"", self.query),
            ResultKind::Time => "Current Time".to_string(),
            ResultKind::Translate => format!("Translate: \"{}\"", self.query),
            ResultKind::General => format!("Search: \"{}\"", self.query),
        }
    }

    /// Body lines for the result panel
    pub fn summary_lines(&self) -> Vec<String> {
        match &self.payload {
            ResultPayload::Weather(report) => vec![
                format!("Location: {}", report.location),
                format!("Temperature: {}°C", report.temperature_c),
                format!("Condition: {}", report.condition),
                format!("Humidity: {}%", report.humidity_pct),
                format!("Wind: {} km/h", report.wind_kmh),
            ],
            ResultPayload::Calculator(Ok(value)) => {
                vec![format!("Result: {}", format_number(*value))]
            }
            ResultPayload::Calculator(Err(e)) => {
                vec![format!("Couldn't calculate that: {}", e)]
            }
            ResultPayload::Time { time, date } => {
                vec![format!("Time: {}", time), format!("Date: {}", date)]
            }
            ResultPayload::Translate { text: Some(text) } => {
                vec![format!("Text to translate: {}", text)]
            }
            ResultPayload::Translate { text: None } => {
                vec!["Nothing to translate".to_string()]
            }
            ResultPayload::General { rich: true } => {
                vec![format!("Showing detailed results for \"{}\"", self.query)]
            }
            ResultPayload::General { rich: false } => {
                vec![format!("Showing results for \"{}\"", self.query)]
            }
        }
    }
}

/// The words following "translate", case-insensitively
fn translate_text(query: &str) -> Option<String> {
    const KEYWORD: &str = "translate";
    // Scan the query itself so the offset always lands on its own char boundary
    let start = query.char_indices().find_map(|(i, _)| {
        query
            .get(i..i + KEYWORD.len())
            .filter(|word| word.eq_ignore_ascii_case(KEYWORD))
            .map(|_| i + KEYWORD.len())
    })?;
    let text = query[start..].trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod outcome_tests;
