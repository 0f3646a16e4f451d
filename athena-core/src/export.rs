//! Session export document.

use crate::error::AssistantResult;
use crate::preferences::Preferences;
use crate::session::{Conversation, StudySession};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of everything the assistant knows about the current study session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExport {
    pub session: StudySession,
    pub conversation: Conversation,
    pub preferences: Preferences,
    pub export_date: DateTime<Utc>,
}

impl SessionExport {
    pub fn new(
        session: &StudySession,
        conversation: &Conversation,
        preferences: Preferences,
        export_date: DateTime<Utc>,
    ) -> Self {
        Self {
            session: session.clone(),
            conversation: conversation.clone(),
            preferences,
            export_date,
        }
    }

    /// Download name, dated by the export's UTC calendar day.
    pub fn filename(&self) -> String {
        export_filename(self.export_date)
    }

    /// Two-space indented JSON.
    pub fn to_json(&self) -> AssistantResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> AssistantResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// `athena-study-session-YYYY-MM-DD.json`
pub fn export_filename(date: DateTime<Utc>) -> String {
    format!("athena-study-session-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::ResponseDepth;
    use crate::session::Role;
    use chrono::TimeZone;

    fn sample() -> SessionExport {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 30).unwrap();
        let mut session = StudySession::default();
        session.start(t0, 84);
        session.record_query("calculus homework", t0);

        let mut conversation = Conversation::new();
        conversation.push(Role::User, "calculus homework", t0);
        conversation.push(Role::Assistant, "Mathematical framework", t0);

        let preferences = Preferences {
            adaptive_learning: false,
            response_depth: ResponseDepth::new(4).unwrap(),
        };
        SessionExport::new(&session, &conversation, preferences, t0)
    }

    #[test]
    fn filename_uses_utc_date() {
        assert_eq!(sample().filename(), "athena-study-session-2024-03-09.json");
    }

    #[test]
    fn json_shape() {
        let json = sample().to_json().unwrap();
        assert!(json.starts_with("{\n  \""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["exportDate"], "2024-03-09T23:59:30Z");
        assert_eq!(value["session"]["topics"][0], "calculus");
        assert_eq!(value["conversation"][0]["role"], "user");
        assert_eq!(value["preferences"]["responseDepth"], 4);
    }

    #[test]
    fn json_round_trip() {
        let export = sample();
        let parsed = SessionExport::from_json(&export.to_json().unwrap()).unwrap();
        assert_eq!(parsed, export);
    }
}
