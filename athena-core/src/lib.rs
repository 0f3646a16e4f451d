//! Athena Core - the rule-based study assistant.
//!
//! Keyword classification, canned response templates, topic extraction,
//! study-session tracking, preference persistence and session export,
//! tied together by [`StudyAssistant`] behind a [`PresentationPort`].

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod assistant;
pub mod category;
pub mod classifier;
pub mod error;
pub mod export;
pub mod generator;
pub mod preferences;
pub mod presentation;
pub mod render;
pub mod session;
pub mod templates;
pub mod timer;
pub mod topics;

pub use assistant::{AssistantSettings, QueryOutcome, QuickAction, StudyAssistant};
pub use category::Category;
pub use classifier::{AcademicDomain, Classification, QueryClassifier};
pub use error::{AssistantError, AssistantResult};
pub use export::SessionExport;
pub use generator::ResponseGenerator;
pub use preferences::{FileStore, KeyValueStore, MemoryStore, Preferences, ResponseDepth};
pub use presentation::{InputMode, PresentationPort, RenderedMessage, SessionMetrics};
pub use session::{Conversation, ConversationTurn, Role, StudySession};
pub use timer::SessionTicker;
pub use topics::extract_topics;

#[cfg(any(test, feature = "testing"))]
pub use presentation::RecordingPresenter;
