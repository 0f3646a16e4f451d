//! Interactive chat loop.
//!
//! One task reads stdin lines and timer ticks through `tokio::select!`, so a
//! tick is applied only between whole commands.

use crate::commands::{ReplCommand, REPL_HELP};
use crate::terminal::TerminalPresenter;
use anyhow::Result;
use athena_common::error::ResultExt;
use athena_core::{SessionTicker, StudyAssistant};
use rand::Rng;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub type TerminalAssistant<W, R> = StudyAssistant<TerminalPresenter<W>, R>;

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the REPL until `/quit` or end of input.
pub async fn run_chat<W, R, I>(
    assistant: &mut TerminalAssistant<W, R>,
    input: I,
    mut ticker: SessionTicker,
) -> Result<()>
where
    W: Write,
    R: Rng,
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    assistant.initialize();
    assistant.presenter_mut().notice(REPL_HELP);
    assistant.presenter_mut().prompt();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if dispatch(assistant, &line) == Flow::Quit {
                    break;
                }
                assistant.presenter_mut().prompt();
            }
            () = ticker.tick() => assistant.tick(),
        }
    }

    tracing::info!(
        minutes = assistant.session().duration_minutes,
        queries = assistant.conversation().query_count(),
        "Chat ended"
    );
    Ok(())
}

/// Apply one line of input to the assistant.
pub fn dispatch<W: Write, R: Rng>(assistant: &mut TerminalAssistant<W, R>, line: &str) -> Flow {
    match ReplCommand::parse(line) {
        ReplCommand::Empty => {}
        ReplCommand::Query(text) => {
            assistant.handle_user_query(&text);
        }
        ReplCommand::Quick(action) => assistant.quick_action(action),
        ReplCommand::Focus => {
            let on = assistant.toggle_focus_mode();
            let state = if on { "on" } else { "off" };
            assistant.presenter_mut().notice(&format!("focus mode {state}"));
        }
        ReplCommand::Record => {
            assistant.toggle_recording();
        }
        ReplCommand::Help => {
            assistant.show_documentation();
            assistant.presenter_mut().notice(REPL_HELP);
        }
        ReplCommand::Analytics => assistant.show_analytics(),
        ReplCommand::Export => {
            if let Err(e) = assistant.export_data().context("export failed") {
                assistant.presenter_mut().notice(&e.to_string());
            }
        }
        ReplCommand::Settings {
            adaptive_learning,
            depth,
        } => match assistant
            .save_settings(adaptive_learning, depth)
            .context("settings not saved")
        {
            Ok(()) => {
                let label = assistant.detail_label();
                assistant.presenter_mut().notice(&format!("detail level: {label}"));
            }
            Err(e) => assistant.presenter_mut().notice(&e.to_string()),
        },
        ReplCommand::Mode(mode) => assistant.set_input_mode(mode),
        ReplCommand::Clear => assistant.presenter_mut().clear(),
        ReplCommand::Quit => return Flow::Quit,
        ReplCommand::Usage(usage) => assistant.presenter_mut().notice(usage),
        ReplCommand::Unknown(name) => assistant
            .presenter_mut()
            .notice(&format!("unknown command /{name}; try /help")),
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use athena_core::{AssistantSettings, InputMode, MemoryStore, ResponseGenerator};
    use rand::rngs::StdRng;
    use std::path::PathBuf;
    use std::time::Duration;

    fn assistant(export_dir: PathBuf) -> TerminalAssistant<Vec<u8>, StdRng> {
        StudyAssistant::with_generator(
            TerminalPresenter::new(Vec::new(), None, export_dir),
            Box::new(MemoryStore::new()),
            ResponseGenerator::seeded(5),
            AssistantSettings::default(),
        )
    }

    fn output(assistant: TerminalAssistant<Vec<u8>, StdRng>) -> String {
        String::from_utf8(assistant.into_presenter().into_inner()).unwrap()
    }

    #[test]
    fn dispatch_routes_commands() {
        let mut a = assistant(PathBuf::from("."));
        assert_eq!(dispatch(&mut a, "solve 3x = 9"), Flow::Continue);
        assert_eq!(a.conversation().query_count(), 1);

        dispatch(&mut a, "/focus");
        assert!(a.focus_mode());
        dispatch(&mut a, "/record");
        assert!(a.recording());
        dispatch(&mut a, "/mode math");
        assert_eq!(a.input_mode(), InputMode::Math);
        dispatch(&mut a, "/settings off 5");
        assert!(!a.preferences().adaptive_learning);

        assert_eq!(dispatch(&mut a, "/quit"), Flow::Quit);

        let out = output(a);
        assert!(out.contains("[focus mode on]"));
        assert!(out.contains("[detail level: Comprehensive]"));
    }

    #[test]
    fn invalid_depth_is_reported() {
        let mut a = assistant(PathBuf::from("."));
        dispatch(&mut a, "/settings on 7");
        assert_eq!(a.preferences().response_depth.get(), 3);
        let out = output(a);
        assert!(out.contains("[settings not saved: Invalid input:"));
        assert!(out.contains("Response depth 7 is outside 1-5"));
    }

    #[test]
    fn export_lands_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = assistant(dir.path().to_path_buf());
        dispatch(&mut a, "calculus question");
        dispatch(&mut a, "/export");

        let entry = std::fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
        let name = entry.file_name().into_string().unwrap();
        assert!(name.starts_with("athena-study-session-"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(entry.path()).unwrap()).unwrap();
        assert_eq!(json["conversation"].as_array().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn chat_loop_reads_until_quit() {
        let mut a = assistant(PathBuf::from("."));
        let input: &[u8] = b"what is physics?\n/analytics\n/quit\nnever read\n";

        run_chat(&mut a, input, SessionTicker::new(Duration::from_secs(60)))
            .await
            .unwrap();

        assert_eq!(a.conversation().query_count(), 1);
        let out = output(a);
        assert!(out.contains("**Queries**: 1 total"));
        assert!(!out.contains("never read"));
    }

    #[tokio::test(start_paused = true)]
    async fn chat_loop_stops_at_eof() {
        let mut a = assistant(PathBuf::from("."));
        let input: &[u8] = b"hello\n";
        run_chat(&mut a, input, SessionTicker::new(Duration::from_secs(60)))
            .await
            .unwrap();
        assert!(a.session().active);
    }
}
