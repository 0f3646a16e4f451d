//! Terminal presentation port.
//!
//! Prints assistant messages to a writer, hands speech to an optional
//! external command and writes exports into a directory.

use athena_core::{
    AssistantError, AssistantResult, PresentationPort, RenderedMessage, Role, SessionMetrics,
};
use std::io::Write;
use std::path::PathBuf;
use tokio::process::Command;

pub struct TerminalPresenter<W: Write> {
    out: W,
    speech_command: Option<String>,
    export_dir: PathBuf,
    last_metrics: Option<SessionMetrics>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, speech_command: Option<String>, export_dir: PathBuf) -> Self {
        Self {
            out,
            speech_command: speech_command.filter(|c| !c.trim().is_empty()),
            export_dir,
            last_metrics: None,
        }
    }

    /// Print a front-end notice that is not part of the conversation.
    pub fn notice(&mut self, text: &str) {
        self.write_line(&format!("[{text}]"));
    }

    /// Clear the screen.
    pub fn clear(&mut self) {
        if let Err(e) = write!(self.out, "\x1b[2J\x1b[H").and_then(|()| self.out.flush()) {
            tracing::debug!(error = %e, "Terminal write failed");
        }
    }

    /// Input prompt. The mode hint is printed when the mode changes.
    pub fn prompt(&mut self) {
        if let Err(e) = write!(self.out, "> ").and_then(|()| self.out.flush()) {
            tracing::debug!(error = %e, "Terminal write failed");
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            tracing::debug!(error = %e, "Terminal write failed");
        }
    }
}

impl<W: Write> PresentationPort for TerminalPresenter<W> {
    fn show_message(&mut self, message: RenderedMessage) {
        // the user's own line is already on screen
        if message.role == Role::User {
            return;
        }
        self.write_line(&format!("\n[{}] Athena:\n{}\n", message.time, message.text));
    }

    fn speak(&mut self, text: &str) -> AssistantResult<()> {
        let Some(command) = self.speech_command.as_deref() else {
            return Ok(());
        };

        let mut parts = command.split_whitespace();
        let program = parts.next().unwrap_or(command);
        // the child is reaped by the runtime; nobody waits on speech
        Command::new(program)
            .args(parts)
            .arg(text)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|e| AssistantError::SpeechUnavailable(format!("{program}: {e}")))
    }

    fn update_metrics(&mut self, metrics: &SessionMetrics) {
        if self.last_metrics.as_ref() == Some(metrics) {
            return;
        }
        self.write_line(&format!(
            "[session {} | topics {} | retention {}]",
            metrics.focus_timer, metrics.topics_covered, metrics.retention
        ));
        self.last_metrics = Some(metrics.clone());
    }

    fn export_file(&mut self, filename: &str, contents: &str) -> AssistantResult<()> {
        let path = self.export_dir.join(filename);
        std::fs::create_dir_all(&self.export_dir)
            .and_then(|()| std::fs::write(&path, contents))
            .map_err(|e| AssistantError::ExportFailed(format!("{}: {e}", path.display())))?;
        self.notice(&format!("saved {}", path.display()));
        Ok(())
    }

    fn set_placeholder(&mut self, placeholder: &str) {
        self.write_line(&format!("({placeholder})"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter(dir: PathBuf) -> TerminalPresenter<Vec<u8>> {
        TerminalPresenter::new(Vec::new(), None, dir)
    }

    fn output(p: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(p.into_inner()).unwrap()
    }

    fn message(role: Role, text: &str) -> RenderedMessage {
        RenderedMessage {
            role,
            text: text.to_string(),
            html: text.to_string(),
            time: "09:15".to_string(),
        }
    }

    #[test]
    fn assistant_messages_are_printed() {
        let mut p = presenter(PathBuf::from("."));
        p.show_message(message(Role::User, "my question"));
        p.show_message(message(Role::Assistant, "the answer"));

        let out = output(p);
        assert!(!out.contains("my question"));
        assert!(out.contains("[09:15] Athena:\nthe answer"));
    }

    #[test]
    fn unchanged_metrics_print_once() {
        let mut p = presenter(PathBuf::from("."));
        let metrics = SessionMetrics {
            focus_timer: "00:01".into(),
            topics_covered: 2,
            retention: "84%".into(),
        };
        p.update_metrics(&metrics);
        p.update_metrics(&metrics);

        let out = output(p);
        assert_eq!(out.matches("[session 00:01 | topics 2 | retention 84%]").count(), 1);
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = presenter(dir.path().join("exports"));
        p.export_file("athena-study-session-2024-01-01.json", "{}").unwrap();

        let written =
            std::fs::read_to_string(dir.path().join("exports/athena-study-session-2024-01-01.json"))
                .unwrap();
        assert_eq!(written, "{}");
        assert!(output(p).contains("saved"));
    }

    #[test]
    fn speech_without_command_is_silent() {
        let mut p = presenter(PathBuf::from("."));
        assert!(p.speak("hello").is_ok());
        assert!(output(p).is_empty());
    }

    #[tokio::test]
    async fn missing_speech_binary_is_an_error() {
        let mut p = TerminalPresenter::new(
            Vec::new(),
            Some("athena-no-such-tts-binary --rate 150".into()),
            PathBuf::from("."),
        );
        assert!(matches!(
            p.speak("hello"),
            Err(AssistantError::SpeechUnavailable(_))
        ));
    }

    #[test]
    fn placeholder_is_printed_as_hint() {
        let mut p = presenter(PathBuf::from("."));
        p.set_placeholder("Enter your code, algorithm, or programming question...");
        assert_eq!(
            output(p),
            "(Enter your code, algorithm, or programming question...)\n"
        );
    }
}
