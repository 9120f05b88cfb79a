//! Built-in suggestion corpus and loading a replacement from disk

use std::fs;
use std::io;
use std::path::Path;

/// Default reference corpus, grouped loosely by topic
pub const SAMPLE_SUGGESTIONS: &[&str] = &[
    // Technology & programming
    "javascript tutorial",
    "javascript array methods",
    "javascript promises",
    "javascript async await",
    "javascript fetch api",
    "javascript dom manipulation",
    "javascript es6 features",
    "react js tutorial",
    "react hooks",
    "react router",
    "react redux",
    "vue js tutorial",
    "vue components",
    "vue router",
    "angular tutorial",
    "angular components",
    "angular services",
    "nodejs tutorial",
    "nodejs express",
    "nodejs mongodb",
    "python programming",
    "python django",
    "python flask",
    "python pandas",
    "typescript tutorial",
    "typescript interfaces",
    "typescript generics",
    // Web development
    "html css javascript",
    "web development",
    "frontend development",
    "backend development",
    "full stack development",
    "responsive web design",
    "css grid",
    "css flexbox",
    "css animations",
    "bootstrap tutorial",
    "tailwind css",
    // Tools
    "git tutorial",
    "github pages",
    "visual studio code",
    "chrome developer tools",
    "webpack tutorial",
    "vite tutorial",
    "npm commands",
    "yarn vs npm",
    // Data & APIs
    "api development",
    "rest api",
    "graphql",
    "json tutorial",
    "database design",
    "sql tutorial",
    "mongodb tutorial",
    "firebase tutorial",
    // General
    "weather today",
    "news headlines",
    "translate english to spanish",
    "calculator online",
    "time zones",
    "currency converter",
    "stock market",
    "cryptocurrency prices",
    "sports scores",
    // Entertainment
    "movies 2024",
    "netflix shows",
    "youtube tutorials",
    "music streaming",
    "game reviews",
    "book recommendations",
];

/// Queries seeded into an empty history on first launch
pub const DEMO_HISTORY: &[&str] = &["javascript tutorial", "weather today", "react hooks", "css grid"];

pub fn default_corpus() -> Vec<String> {
    SAMPLE_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// Load a corpus file: one entry per line, blank lines and `#` comments skipped
pub fn load_corpus_from_path(path: &Path) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_corpus(&contents))
}

pub fn parse_corpus(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
