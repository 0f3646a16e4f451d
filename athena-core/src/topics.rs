//! Academic topic extraction.

use std::collections::BTreeSet;

/// Fixed vocabulary of trackable study topics.
pub const VOCABULARY: [&str; 16] = [
    "mathematics",
    "algebra",
    "calculus",
    "statistics",
    "programming",
    "python",
    "javascript",
    "algorithms",
    "science",
    "physics",
    "chemistry",
    "biology",
    "literature",
    "history",
    "philosophy",
    "economics",
];

/// Vocabulary terms that occur as substrings of the lowercased query.
pub fn extract_topics(query: &str) -> BTreeSet<String> {
    let query = query.to_lowercase();
    VOCABULARY
        .iter()
        .filter(|term| query.contains(*term))
        .map(|term| (*term).to_string())
        .collect()
}
