//! Keyword-based query classification.
//!
//! Two classifiers live here: [`QueryClassifier`] picks the response pool for
//! the chat assistant, and [`AcademicDomain::classify`] labels queries for the
//! mock API. Both lowercase the input and test substring containment in a
//! fixed priority order; the first hit wins.

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of classifying a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    /// The keyword that decided the category (`None` for the fallback)
    pub matched_keyword: Option<&'static str>,
}

/// Keyword rule for one category.
struct CategoryRule {
    category: Category,
    keywords: &'static [&'static str],
}

/// Priority-ordered substring classifier.
pub struct QueryClassifier {
    rules: Vec<CategoryRule>,
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClassifier {
    pub fn new() -> Self {
        let rules = Category::ALL
            .iter()
            .filter(|c| !c.keywords().is_empty())
            .map(|&category| CategoryRule {
                category,
                keywords: category.keywords(),
            })
            .collect();

        Self { rules }
    }

    /// Classify a query into its category. Never fails; unmatched text is `General`.
    pub fn classify(&self, text: &str) -> Category {
        self.classify_detailed(text).category
    }

    /// Classify a query and report which keyword matched.
    pub fn classify_detailed(&self, text: &str) -> Classification {
        let text = text.to_lowercase();

        for rule in &self.rules {
            if let Some(keyword) = rule.keywords.iter().copied().find(|kw| text.contains(kw)) {
                return Classification {
                    category: rule.category,
                    matched_keyword: Some(keyword),
                };
            }
        }

        Classification {
            category: Category::General,
            matched_keyword: None,
        }
    }
}

/// Coarse academic domain reported by the study-query API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicDomain {
    Math,
    Science,
    Cs,
    Humanities,
    General,
}

impl AcademicDomain {
    const ORDERED: [(AcademicDomain, &'static [&'static str]); 4] = [
        (
            AcademicDomain::Math,
            &["calculate", "solve", "equation", "derivative"],
        ),
        (
            AcademicDomain::Science,
            &["physics", "chemistry", "biology", "experiment"],
        ),
        (
            AcademicDomain::Cs,
            &["program", "algorithm", "code", "software"],
        ),
        (
            AcademicDomain::Humanities,
            &["literature", "history", "philosophy", "culture"],
        ),
    ];

    /// Classify a query into a domain; unmatched text is `General`.
    pub fn classify(query: &str) -> Self {
        let query = query.to_lowercase();
        Self::ORDERED
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| query.contains(kw)))
            .map_or(AcademicDomain::General, |(domain, _)| *domain)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AcademicDomain::Math => "MATH",
            AcademicDomain::Science => "SCIENCE",
            AcademicDomain::Cs => "CS",
            AcademicDomain::Humanities => "HUMANITIES",
            AcademicDomain::General => "GENERAL ACADEMICS",
        }
    }
}

impl fmt::Display for AcademicDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
