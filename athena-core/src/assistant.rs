//! The study assistant controller.
//!
//! [`StudyAssistant`] owns all conversation and session state and drives a
//! [`PresentationPort`]. Every operation runs to completion on the caller's
//! task; timer ticks are fed in through [`StudyAssistant::tick`].

use crate::category::Category;
use crate::classifier::QueryClassifier;
use crate::error::AssistantResult;
use crate::export::SessionExport;
use crate::generator::ResponseGenerator;
use crate::preferences::{self, KeyValueStore, Preferences, ResponseDepth};
use crate::presentation::{InputMode, PresentationPort, RenderedMessage, SessionMetrics};
use crate::render::render_html;
use crate::session::{format_minutes, Conversation, Role, StudySession, DEFAULT_RETENTION_SCORE};
use crate::templates;
use athena_common::config::AssistantConfig;
use athena_common::util::first_line;
use chrono::{DateTime, Local, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Knowledge areas listed in the analytics summary.
pub const KNOWLEDGE_AREAS: [&str; 4] = ["mathematics", "programming", "science", "literature"];

/// Fixed-text shortcut actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Explain,
    Problem,
    Summary,
    Quiz,
}

impl QuickAction {
    pub fn text(self) -> &'static str {
        match self {
            Self::Explain => templates::QUICK_EXPLAIN,
            Self::Problem => templates::QUICK_PROBLEM,
            Self::Summary => templates::QUICK_SUMMARY,
            Self::Quiz => templates::QUICK_QUIZ,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explain => "explain",
            Self::Problem => "problem",
            Self::Summary => "summary",
            Self::Quiz => "quiz",
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "explain" => Ok(Self::Explain),
            "problem" | "solve" => Ok(Self::Problem),
            "summary" => Ok(Self::Summary),
            "quiz" => Ok(Self::Quiz),
            other => Err(format!("unknown quick action: {other}")),
        }
    }
}

/// Runtime knobs taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantSettings {
    /// Retention score every new session starts with
    pub retention_score: u8,
    /// Whether responses are read aloud
    pub voice_responses: bool,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            retention_score: DEFAULT_RETENTION_SCORE,
            voice_responses: true,
        }
    }
}

impl From<&AssistantConfig> for AssistantSettings {
    fn from(config: &AssistantConfig) -> Self {
        Self {
            retention_score: config.retention_score.min(100),
            voice_responses: config.voice_responses,
        }
    }
}

/// Result of answering one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub category: Category,
    pub response: &'static str,
    /// Topics first seen in this query
    pub new_topics: Vec<String>,
    /// Whether this query started the session
    pub session_started: bool,
}

/// Rule-based study assistant.
pub struct StudyAssistant<P, R = StdRng> {
    presenter: P,
    store: Box<dyn KeyValueStore + Send>,
    classifier: QueryClassifier,
    generator: ResponseGenerator<R>,
    settings: AssistantSettings,
    session: StudySession,
    conversation: Conversation,
    preferences: Preferences,
    focus_mode: bool,
    recording: bool,
    input_mode: InputMode,
}

impl<P: PresentationPort> StudyAssistant<P, StdRng> {
    /// Assistant with an entropy-seeded generator.
    pub fn new(
        presenter: P,
        store: Box<dyn KeyValueStore + Send>,
        settings: AssistantSettings,
    ) -> Self {
        Self::with_generator(presenter, store, ResponseGenerator::from_entropy(), settings)
    }
}

impl<P: PresentationPort, R: Rng> StudyAssistant<P, R> {
    /// Build an assistant, loading stored preferences when present.
    pub fn with_generator(
        presenter: P,
        store: Box<dyn KeyValueStore + Send>,
        generator: ResponseGenerator<R>,
        settings: AssistantSettings,
    ) -> Self {
        let preferences = preferences::load_preferences(store.as_ref()).unwrap_or_default();
        tracing::debug!(
            adaptive_learning = preferences.adaptive_learning,
            response_depth = preferences.response_depth.get(),
            "Preferences loaded"
        );

        Self {
            presenter,
            store,
            classifier: QueryClassifier::new(),
            generator,
            settings,
            session: StudySession {
                retention_score: settings.retention_score,
                ..StudySession::default()
            },
            conversation: Conversation::new(),
            preferences,
            focus_mode: false,
            recording: false,
            input_mode: InputMode::default(),
        }
    }

    /// Greet the user and paint the initial UI state.
    pub fn initialize(&mut self) {
        self.refresh_metrics();
        self.presenter.set_placeholder(self.input_mode.placeholder());
        self.speak(templates::STARTUP_SPEECH);
        self.post(Role::Assistant, templates::STARTUP_MESSAGE, Utc::now());
        tracing::info!("Study assistant initialized");
    }

    /// Answer a user query. Blank input is ignored.
    pub fn handle_user_query(&mut self, text: &str) -> Option<QueryOutcome> {
        self.handle_user_query_at(text, Utc::now())
    }

    /// [`Self::handle_user_query`] with an explicit clock reading.
    pub fn handle_user_query_at(&mut self, text: &str, now: DateTime<Utc>) -> Option<QueryOutcome> {
        let query = text.trim();
        if query.is_empty() {
            return None;
        }

        self.post(Role::User, query, now);
        self.conversation.push(Role::User, query, now);

        // the session must exist before metrics, so the first query's topics count
        let session_started = !self.session.active;
        if session_started {
            self.session.start(now, self.settings.retention_score);
            self.post(Role::Assistant, templates::SESSION_STARTED, now);
            tracing::info!("Study session started");
        }

        let classification = self.classifier.classify_detailed(query);
        let response = self.generator.respond(classification.category);
        tracing::debug!(
            category = %classification.category,
            keyword = ?classification.matched_keyword,
            "Query classified"
        );

        self.post(Role::Assistant, response, now);
        self.conversation.push(Role::Assistant, response, now);

        let new_topics = self.session.record_query(query, now);
        self.refresh_metrics();
        self.speak(response);

        Some(QueryOutcome {
            category: classification.category,
            response,
            new_topics,
            session_started,
        })
    }

    /// Show a quick action's protocol text and read its first line.
    pub fn quick_action(&mut self, action: QuickAction) {
        let text = action.text();
        self.post(Role::Assistant, text, Utc::now());
        self.speak(first_line(text));
    }

    /// Flip focus mode. Returns the new state.
    pub fn toggle_focus_mode(&mut self) -> bool {
        self.focus_mode = !self.focus_mode;
        self.speak(if self.focus_mode {
            templates::FOCUS_ON
        } else {
            templates::FOCUS_OFF
        });
        self.focus_mode
    }

    /// Flip session recording. Returns the new state.
    pub fn toggle_recording(&mut self) -> bool {
        self.recording = !self.recording;
        let notice = if self.recording {
            templates::RECORDING_ON
        } else {
            templates::RECORDING_OFF
        };
        self.post(Role::Assistant, notice, Utc::now());
        self.recording
    }

    /// Persist new preferences and confirm.
    pub fn save_preferences(&mut self, prefs: Preferences) -> AssistantResult<()> {
        preferences::save_preferences(self.store.as_mut(), &prefs)?;
        self.preferences = prefs;
        tracing::info!(
            adaptive_learning = prefs.adaptive_learning,
            detail = prefs.response_depth.label(),
            "Preferences saved"
        );
        self.post(Role::Assistant, templates::PREFERENCES_SAVED, Utc::now());
        Ok(())
    }

    /// Validate raw settings input, then save it.
    pub fn save_settings(&mut self, adaptive_learning: bool, depth: u8) -> AssistantResult<()> {
        let response_depth = ResponseDepth::new(depth)?;
        self.save_preferences(Preferences {
            adaptive_learning,
            response_depth,
        })
    }

    pub fn show_documentation(&mut self) {
        self.post(Role::Assistant, templates::DOCUMENTATION, Utc::now());
    }

    /// Show a summary of the current session.
    pub fn show_analytics(&mut self) {
        let analytics = self.analytics_text();
        self.post(Role::Assistant, &analytics, Utc::now());
    }

    /// Analytics summary text.
    pub fn analytics_text(&self) -> String {
        format!(
            "**Study Analytics**\n\n\
             **Session**: {}\n\
             **Topics**: {} covered\n\
             **Retention**: {}%\n\
             **Queries**: {} total\n\
             **Focus Areas**: {}\n\n\
             **Recommendations**:\n\
             1. Review topics every 48 hours\n\
             2. Practice active recall\n\
             3. Space repetition for optimal retention",
            self.session.formatted_duration(),
            self.session.topics.len(),
            self.session.retention_score,
            self.conversation.query_count(),
            KNOWLEDGE_AREAS.join(", "),
        )
    }

    /// Export session data through the presenter.
    pub fn export_data(&mut self) -> AssistantResult<SessionExport> {
        self.export_data_at(Utc::now())
    }

    pub fn export_data_at(&mut self, now: DateTime<Utc>) -> AssistantResult<SessionExport> {
        let export = SessionExport::new(&self.session, &self.conversation, self.preferences, now);
        let json = export.to_json()?;
        let filename = export.filename();

        match self.presenter.export_file(&filename, &json) {
            Ok(()) => {
                tracing::info!(%filename, turns = self.conversation.len(), "Session exported");
                self.post(Role::Assistant, templates::EXPORT_DONE, now);
            }
            Err(e) => tracing::warn!(error = %e, %filename, "Session export failed"),
        }
        Ok(export)
    }

    /// One timer period elapsed.
    pub fn tick(&mut self) {
        if self.session.active {
            self.session.tick();
            self.refresh_metrics();
        }
    }

    /// Switch input mode and update the placeholder.
    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.presenter.set_placeholder(mode.placeholder());
    }

    /// Current metrics snapshot.
    pub fn metrics(&self) -> SessionMetrics {
        SessionMetrics {
            focus_timer: format_minutes(self.session.duration_minutes),
            topics_covered: self.session.topics.len(),
            retention: format!("{}%", self.session.retention_score),
        }
    }

    pub fn session(&self) -> &StudySession {
        &self.session
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Label for the current response depth.
    pub fn detail_label(&self) -> &'static str {
        self.preferences.response_depth.label()
    }

    pub fn focus_mode(&self) -> bool {
        self.focus_mode
    }

    pub fn recording(&self) -> bool {
        self.recording
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consume the assistant, returning its presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn post(&mut self, role: Role, text: &str, now: DateTime<Utc>) {
        self.presenter.show_message(RenderedMessage {
            role,
            text: text.to_string(),
            html: render_html(text),
            time: now.with_timezone(&Local).format("%H:%M").to_string(),
        });
    }

    fn speak(&mut self, text: &str) {
        if !self.settings.voice_responses {
            return;
        }
        if let Err(e) = self.presenter.speak(text) {
            tracing::warn!(error = %e, "Speech output failed");
        }
    }

    fn refresh_metrics(&mut self) {
        let metrics = self.metrics();
        self.presenter.update_metrics(&metrics);
    }
}
