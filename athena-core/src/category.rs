//! Query categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword-matched class of a study query.
///
/// Declaration order is the classification priority: when a query matches
/// several keyword sets, the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mathematics,
    Programming,
    Science,
    Literature,
    Explain,
    Procedure,
    Comparison,
    Example,
    Help,
    General,
}

impl Category {
    /// Every category in priority order.
    pub const ALL: [Category; 10] = [
        Category::Mathematics,
        Category::Programming,
        Category::Science,
        Category::Literature,
        Category::Explain,
        Category::Procedure,
        Category::Comparison,
        Category::Example,
        Category::Help,
        Category::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Mathematics => "mathematics",
            Category::Programming => "programming",
            Category::Science => "science",
            Category::Literature => "literature",
            Category::Explain => "explain",
            Category::Procedure => "procedure",
            Category::Comparison => "comparison",
            Category::Example => "example",
            Category::Help => "help",
            Category::General => "general",
        }
    }

    /// Substrings that select this category. `General` has none: it is the fallback.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Mathematics => &[
                "calculate",
                "solve",
                "equation",
                "formula",
                "derivative",
                "integral",
                "matrix",
                "vector",
                "algebra",
                "calculus",
            ],
            Category::Programming => &[
                "code",
                "program",
                "algorithm",
                "function",
                "debug",
                "python",
                "javascript",
                "software",
            ],
            Category::Science => &[
                "physics",
                "chemistry",
                "biology",
                "experiment",
                "hypothesis",
                "scientific",
            ],
            Category::Literature => &[
                "literature",
                "novel",
                "poem",
                "poetry",
                "author",
                "literary",
            ],
            Category::Explain => &["explain", "what is"],
            Category::Procedure => &["how to", "steps"],
            Category::Comparison => &["difference between", "compare"],
            Category::Example => &["example", "demonstrate"],
            Category::Help => &["help", "assist"],
            Category::General => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted_by_priority() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert_eq!(Category::ALL.last(), Some(&Category::General));
    }

    #[test]
    fn only_general_has_no_keywords() {
        for category in Category::ALL {
            assert_eq!(category.keywords().is_empty(), category == Category::General);
        }
    }

    #[test]
    fn keywords_are_lowercase() {
        for category in Category::ALL {
            for kw in category.keywords() {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&Category::Mathematics).unwrap();
        assert_eq!(json, "\"mathematics\"");
        assert_eq!(Category::Comparison.to_string(), "comparison");
    }
}
