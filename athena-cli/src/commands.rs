//! Slash-command parsing for the chat REPL.

use athena_core::{InputMode, QuickAction};

/// One line of REPL input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Free text for the assistant
    Query(String),
    Quick(QuickAction),
    Focus,
    Record,
    Help,
    Analytics,
    Export,
    Settings { adaptive_learning: bool, depth: u8 },
    Mode(InputMode),
    Clear,
    Quit,
    /// Recognized command with bad arguments
    Usage(&'static str),
    Unknown(String),
    Empty,
}

pub const SETTINGS_USAGE: &str = "usage: /settings <on|off> <1-5>";
pub const MODE_USAGE: &str = "usage: /mode <text|code|math>";

/// Commands understood by the terminal, beyond the documentation list.
pub const REPL_HELP: &str = "Terminal commands: /explain /problem /summary /quiz /focus /record \
/analytics /export /settings <on|off> <1-5> /mode <text|code|math> /clear /help /quit";

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Self::Query(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        if let Ok(action) = name.parse::<QuickAction>() {
            return Self::Quick(action);
        }

        match name.as_str() {
            "focus" => Self::Focus,
            "record" => Self::Record,
            "help" | "docs" => Self::Help,
            "analytics" | "stats" => Self::Analytics,
            "export" => Self::Export,
            "settings" => parse_settings(&args),
            "mode" => match args.as_slice() {
                [mode] => Self::Mode(mode.parse().unwrap_or_default()),
                _ => Self::Usage(MODE_USAGE),
            },
            "clear" => Self::Clear,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(name),
        }
    }
}

fn parse_settings(args: &[&str]) -> ReplCommand {
    let [adaptive, depth] = args else {
        return ReplCommand::Usage(SETTINGS_USAGE);
    };
    let adaptive_learning = match adaptive.to_lowercase().as_str() {
        "on" | "true" | "yes" => true,
        "off" | "false" | "no" => false,
        _ => return ReplCommand::Usage(SETTINGS_USAGE),
    };
    match depth.parse() {
        Ok(depth) => ReplCommand::Settings {
            adaptive_learning,
            depth,
        },
        Err(_) => ReplCommand::Usage(SETTINGS_USAGE),
    }
}
