//! Presentation port.
//!
//! The assistant never touches a screen, speaker or file system directly;
//! every visible side effect goes through a [`PresentationPort`].

use crate::error::AssistantResult;
use crate::session::Role;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A message ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub role: Role,
    /// Message text as written
    pub text: String,
    /// Escaped HTML fragment with code blocks rendered
    pub html: String,
    /// Local wall-clock time as `HH:MM`
    pub time: String,
}

/// Session metrics shown alongside the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMetrics {
    /// Study duration as `HH:MM`
    pub focus_timer: String,
    pub topics_covered: usize,
    /// Retention score with a percent sign, e.g. `84%`
    pub retention: String,
}

/// Kind of input the user is composing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Text,
    Code,
    Math,
}

impl InputMode {
    /// Placeholder hint for the input field.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Text => "Enter your study query, problem, or topic for analysis...",
            Self::Code => "Enter your code, algorithm, or programming question...",
            Self::Math => "Enter mathematical problem, equation, or formula...",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Code => "code",
            Self::Math => "math",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = String;

    /// Unknown names fall back to text mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "code" => Self::Code,
            "math" => Self::Math,
            _ => Self::Text,
        })
    }
}

/// UI side effects requested by the assistant.
///
/// `speak` and `export_file` may fail; the assistant logs the failure and
/// carries on.
pub trait PresentationPort {
    /// Append a message to the visible conversation.
    fn show_message(&mut self, message: RenderedMessage);

    /// Read text aloud.
    fn speak(&mut self, text: &str) -> AssistantResult<()>;

    /// Refresh the session metrics display.
    fn update_metrics(&mut self, metrics: &SessionMetrics);

    /// Offer `contents` to the user as a downloadable file.
    fn export_file(&mut self, filename: &str, contents: &str) -> AssistantResult<()>;

    /// Change the input field hint.
    fn set_placeholder(&mut self, placeholder: &str);
}

#[cfg(any(test, feature = "testing"))]
pub use recording::RecordingPresenter;

#[cfg(any(test, feature = "testing"))]
mod recording {
    use super::*;
    use crate::error::AssistantError;

    /// Presenter that records every call, for tests.
    #[derive(Debug, Default)]
    pub struct RecordingPresenter {
        pub messages: Vec<RenderedMessage>,
        pub spoken: Vec<String>,
        pub metrics: Vec<SessionMetrics>,
        pub exports: Vec<(String, String)>,
        pub placeholders: Vec<String>,
        /// Make `speak` fail
        pub speech_broken: bool,
        /// Make `export_file` fail
        pub export_broken: bool,
    }

    impl RecordingPresenter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Texts of all shown messages, in order.
        pub fn texts(&self) -> Vec<&str> {
            self.messages.iter().map(|m| m.text.as_str()).collect()
        }

        pub fn last_text(&self) -> Option<&str> {
            self.messages.last().map(|m| m.text.as_str())
        }

        pub fn last_metrics(&self) -> Option<&SessionMetrics> {
            self.metrics.last()
        }
    }

    impl PresentationPort for RecordingPresenter {
        fn show_message(&mut self, message: RenderedMessage) {
            self.messages.push(message);
        }

        fn speak(&mut self, text: &str) -> AssistantResult<()> {
            if self.speech_broken {
                return Err(AssistantError::SpeechUnavailable("speech disabled in test".into()));
            }
            self.spoken.push(text.to_string());
            Ok(())
        }

        fn update_metrics(&mut self, metrics: &SessionMetrics) {
            self.metrics.push(metrics.clone());
        }

        fn export_file(&mut self, filename: &str, contents: &str) -> AssistantResult<()> {
            if self.export_broken {
                return Err(AssistantError::ExportFailed("export disabled in test".into()));
            }
            self.exports.push((filename.to_string(), contents.to_string()));
            Ok(())
        }

        fn set_placeholder(&mut self, placeholder: &str) {
            self.placeholders.push(placeholder.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_mode_parse() {
        assert_eq!("code".parse::<InputMode>(), Ok(InputMode::Code));
        assert_eq!(" MATH ".parse::<InputMode>(), Ok(InputMode::Math));
        assert_eq!("essay".parse::<InputMode>(), Ok(InputMode::Text));
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            InputMode::Math.placeholder(),
            "Enter mathematical problem, equation, or formula..."
        );
        assert!(InputMode::default().placeholder().starts_with("Enter your study query"));
    }

    #[test]
    fn test_recording_presenter_failures() {
        let mut presenter = RecordingPresenter {
            speech_broken: true,
            ..Default::default()
        };
        assert!(presenter.speak("hello").is_err());
        assert!(presenter.spoken.is_empty());
        assert!(presenter.export_file("a.json", "{}").is_ok());
        assert_eq!(presenter.exports.len(), 1);
    }
}
