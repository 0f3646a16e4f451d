//! Request and response bodies.
//!
//! Requests deserialize with defaults for every field; responses use the
//! camelCase keys clients expect.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============ Study query ============

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudyQueryRequest {
    pub query: String,
    /// Accepted and ignored
    pub context: Value,
    /// Accepted and ignored
    pub options: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyQueryResponse {
    pub response: String,
    pub sources: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    pub complexity: &'static str,
    pub estimated_study_time: &'static str,
    /// RFC 3339 UTC
    pub timestamp: String,
    pub query_id: String,
    pub confidence: f64,
}

// ============ Math ============

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MathSolveRequest {
    /// Echoed back verbatim
    pub problem: Value,
    pub steps: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MathSolution {
    #[serde(skip_serializing_if = "Value::is_null")]
    pub problem: Value,
    pub solution: &'static str,
    pub steps: Vec<&'static str>,
    pub method: &'static str,
    pub alternative_methods: Vec<&'static str>,
    pub verification: &'static str,
    pub common_mistakes: Vec<&'static str>,
}

// ============ Code ============

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CodeAnalyzeRequest {
    pub code: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeIssue {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub line: u32,
    pub message: &'static str,
    pub suggestion: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestCase {
    pub input: &'static str,
    pub expected: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAnalysis {
    pub language: String,
    pub complexity: &'static str,
    pub issues: Vec<CodeIssue>,
    pub best_practices: Vec<&'static str>,
    pub test_cases: Vec<TestCase>,
}

// ============ Progress ============

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudyMetrics {
    pub focus_time: f64,
    pub total_time: f64,
    pub performance: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressRequest {
    /// Accepted and ignored
    pub session_data: Value,
    pub metrics: StudyMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyPlan {
    pub daily: &'static str,
    pub weekly: &'static str,
    pub monthly: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressAnalysis {
    pub efficiency: f64,
    pub recommendations: Vec<&'static str>,
    pub predicted_score: f64,
    pub weak_areas: Vec<&'static str>,
    pub study_plan: StudyPlan,
}

// ============ Research ============

/// Search query parameters (`query`, `maxResults`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Option<String>,
    /// Raw value; parsed by the handler so bad input becomes a search failure
    pub max_results: Option<String>,
}

impl SearchParams {
    /// Build from decoded query pairs. The first occurrence of a repeated
    /// key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "query" => &mut params.query,
                "maxResults" => &mut params.max_results,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub authors: Vec<&'static str>,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub year: u32,
    pub citations: u32,
    pub url: String,
    pub relevance: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub total_results: u32,
    pub papers: Vec<Paper>,
    pub search_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_request_defaults() {
        let req: ProgressRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.metrics.total_time, 0.0);

        let req: ProgressRequest =
            serde_json::from_str(r#"{"metrics":{"focusTime":30,"totalTime":60}}"#).unwrap();
        assert_eq!(req.metrics.focus_time, 30.0);
        assert_eq!(req.metrics.performance, 0.0);
    }

    #[test]
    fn test_search_params_first_value_wins() {
        let pairs = [
            ("query", "graphs"),
            ("maxResults", "2"),
            ("maxResults", "3"),
            ("page", "9"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        assert_eq!(
            SearchParams::from_pairs(pairs),
            SearchParams {
                query: Some("graphs".into()),
                max_results: Some("2".into()),
            }
        );
        assert_eq!(SearchParams::from_pairs(Vec::new()), SearchParams::default());
    }

    #[test]
    fn test_code_issue_uses_type_key() {
        let issue = CodeIssue {
            kind: "optimization",
            line: 10,
            message: "m",
            suggestion: "s",
        };
        let json = serde_json::to_value(issue).unwrap();
        assert_eq!(json["type"], "optimization");
    }
}
