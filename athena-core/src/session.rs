//! Study session and conversation state.

use crate::topics::extract_topics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Retention score a new session starts with unless configured otherwise.
pub const DEFAULT_RETENTION_SCORE: u8 = 84;

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub role: Role,
}

/// Append-only, ordered conversation log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: Role, text: impl Into<String>, timestamp: DateTime<Utc>) {
        self.turns.push(ConversationTurn {
            text: text.into(),
            timestamp,
            role,
        });
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of turns the user authored.
    pub fn query_count(&self) -> usize {
        self.turns.iter().filter(|t| t.role == Role::User).count()
    }
}

/// Mutable record of one ongoing study interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub active: bool,
    pub start_time: Option<DateTime<Utc>>,
    pub duration_minutes: u32,
    pub topics: BTreeSet<String>,
    pub retention_score: u8,
}

impl Default for StudySession {
    fn default() -> Self {
        Self {
            active: false,
            start_time: None,
            duration_minutes: 0,
            topics: BTreeSet::new(),
            retention_score: DEFAULT_RETENTION_SCORE,
        }
    }
}

impl StudySession {
    /// Reset into a fresh active session starting at `now`.
    pub fn start(&mut self, now: DateTime<Utc>, retention_score: u8) {
        *self = Self {
            active: true,
            start_time: Some(now),
            duration_minutes: 0,
            topics: BTreeSet::new(),
            retention_score: retention_score.min(100),
        };
    }

    /// Timer tick: one more study minute, only while active.
    pub fn tick(&mut self) {
        if self.active {
            self.duration_minutes = self.duration_minutes.saturating_add(1);
        }
    }

    /// Recompute duration from the wall clock and merge the query's topics.
    ///
    /// Returns the topics that were new to this session.
    pub fn record_query(&mut self, query: &str, now: DateTime<Utc>) -> Vec<String> {
        if self.active {
            if let Some(start) = self.start_time {
                let elapsed = (now - start).num_minutes().max(0);
                let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
                // ticks may already have counted further than the clock says
                self.duration_minutes = self.duration_minutes.max(elapsed);
            }
        }

        extract_topics(query)
            .into_iter()
            .filter(|topic| self.topics.insert(topic.clone()))
            .collect()
    }

    /// Elapsed study time as `HH:MM`.
    pub fn formatted_duration(&self) -> String {
        format_minutes(self.duration_minutes)
    }
}

/// Format a minute count as zero-padded `HH:MM`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn tick_only_counts_while_active() {
        let mut session = StudySession::default();
        session.tick();
        assert_eq!(session.duration_minutes, 0);

        session.start(t0(), 84);
        session.tick();
        session.tick();
        assert_eq!(session.duration_minutes, 2);

        session.active = false;
        session.tick();
        assert_eq!(session.duration_minutes, 2);
    }

    #[test]
    fn record_query_recomputes_duration() {
        let mut session = StudySession::default();
        session.start(t0(), 84);
        session.record_query("hello", t0() + Duration::seconds(150));
        assert_eq!(session.duration_minutes, 2);
    }

    #[test]
    fn duration_never_decreases() {
        let mut session = StudySession::default();
        session.start(t0(), 84);
        for _ in 0..5 {
            session.tick();
        }
        session.record_query("hello", t0() + Duration::minutes(1));
        assert_eq!(session.duration_minutes, 5);

        // clock skew backwards
        session.record_query("hello", t0() - Duration::minutes(3));
        assert_eq!(session.duration_minutes, 5);
    }

    #[test]
    fn inactive_duration_is_frozen() {
        let mut session = StudySession {
            duration_minutes: 3,
            start_time: Some(t0()),
            ..Default::default()
        };
        session.record_query("physics", t0() + Duration::hours(2));
        assert_eq!(session.duration_minutes, 3);
        assert!(session.topics.contains("physics"));
    }

    #[test]
    fn topics_union_without_duplicates() {
        let mut session = StudySession::default();
        session.start(t0(), 84);

        let added = session.record_query("physics and calculus", t0());
        assert_eq!(added, vec!["calculus".to_string(), "physics".to_string()]);

        let added = session.record_query("more physics, some history", t0());
        assert_eq!(added, vec!["history".to_string()]);
        assert_eq!(session.topics.len(), 3);
    }

    #[test]
    fn start_resets_state() {
        let mut session = StudySession::default();
        session.start(t0(), 84);
        session.record_query("biology", t0());
        session.tick();

        session.start(t0() + Duration::hours(1), 90);
        assert!(session.topics.is_empty());
        assert_eq!(session.duration_minutes, 0);
        assert_eq!(session.retention_score, 90);
        assert_eq!(session.start_time, Some(t0() + Duration::hours(1)));
    }

    #[test]
    fn format_minutes_pads() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(75), "01:15");
        assert_eq!(format_minutes(600), "10:00");
    }

    #[test]
    fn conversation_counts_queries() {
        let mut conversation = Conversation::new();
        conversation.push(Role::User, "solve x", t0());
        conversation.push(Role::Assistant, "x = 1", t0());
        conversation.push(Role::User, "thanks", t0());
        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.query_count(), 2);
        assert_eq!(conversation.turns()[1].role, Role::Assistant);
    }

    #[test]
    fn session_serializes_camel_case() {
        let mut session = StudySession::default();
        session.start(t0(), 84);
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["durationMinutes"], 0);
        assert_eq!(json["retentionScore"], 84);
        assert!(json["startTime"].is_string());
        assert!(json["topics"].is_array());
    }
}
