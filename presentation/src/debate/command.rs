//! Line classification for the debate REPL

/// Slash commands available while a round is being entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// End the debate early (needs at least one completed round)
    End,
    /// Show the scoreboard
    Status,
    /// Leave; the session snapshot stays for `resume`
    Quit,
    Help,
    Unknown(String),
}

/// One line typed at an argument prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Command(ReplCommand),
    Text(String),
}

impl ReplInput {
    /// Classify a line. `//` escapes text that starts with a slash.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Some(escaped) = line.strip_prefix("//") {
            return ReplInput::Text(format!("/{}", escaped));
        }
        let Some(rest) = line.strip_prefix('/') else {
            return ReplInput::Text(line.to_string());
        };

        let name = rest.split_whitespace().next().unwrap_or_default();
        let command = match name.to_ascii_lowercase().as_str() {
            "end" | "finish" => ReplCommand::End,
            "status" | "s" => ReplCommand::Status,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            "help" | "h" | "?" => ReplCommand::Help,
            _ => ReplCommand::Unknown(line.to_string()),
        };
        ReplInput::Command(command)
    }
}

impl ReplCommand {
    pub fn help_text() -> &'static str {
        "Commands:\n  \
         /end             - End the debate now and go to the verdict\n  \
         /status, /s      - Show scores and standing\n  \
         /quit, /exit, /q - Leave (resume later with `debate-host resume`)\n  \
         /help, /h, /?    - Show this help\n\
         Start an argument with // to send text beginning with '/'."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_trimmed() {
        assert_eq!(
            ReplInput::parse("  Cars pollute.  "),
            ReplInput::Text("Cars pollute.".to_string())
        );
    }

    #[test]
    fn test_commands_and_aliases() {
        assert_eq!(ReplInput::parse("/end"), ReplInput::Command(ReplCommand::End));
        assert_eq!(ReplInput::parse("/S"), ReplInput::Command(ReplCommand::Status));
        assert_eq!(ReplInput::parse(" /exit "), ReplInput::Command(ReplCommand::Quit));
        assert_eq!(ReplInput::parse("/?"), ReplInput::Command(ReplCommand::Help));
    }

    #[test]
    fn test_unknown_command_keeps_line() {
        assert_eq!(
            ReplInput::parse("/rewind 2"),
            ReplInput::Command(ReplCommand::Unknown("/rewind 2".to_string()))
        );
        assert_eq!(
            ReplInput::parse("/"),
            ReplInput::Command(ReplCommand::Unknown("/".to_string()))
        );
    }

    #[test]
    fn test_double_slash_escapes() {
        assert_eq!(
            ReplInput::parse("//etc holds config files"),
            ReplInput::Text("/etc holds config files".to_string())
        );
    }
}
