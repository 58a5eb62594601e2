//! REPL (Read-Eval-Print Loop) for an interactive debate

use super::command::{ReplCommand, ReplInput};
use crate::cli::commands::NewArgs;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use colored::Colorize;
use debate_application::{
    ArchiveDebateUseCase, BehaviorConfig, DebateOrchestrator, LlmGateway, NoProgress,
    ProgressNotifier, RecordStore, ResumeSessionUseCase, RoundOutcome, RoundSubmission,
    SessionSnapshot, SessionStore,
};
use debate_domain::{DebateConfig, DebateState, DomainError, RoundCount};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io::{self, IsTerminal};
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// Where a round prompt left the debate
enum Step {
    Continue(DebateState),
    Quit(DebateState),
}

/// What the user typed at an argument prompt
enum Entry {
    Argument(String),
    End,
    Quit,
}

/// Interactive debate REPL
pub struct DebateRepl<G: LlmGateway + 'static> {
    orchestrator: DebateOrchestrator<G>,
    archive: ArchiveDebateUseCase<dyn RecordStore>,
    session: ResumeSessionUseCase<dyn SessionStore>,
    behavior: BehaviorConfig,
    config: ReplConfig,
}

impl<G: LlmGateway + 'static> DebateRepl<G> {
    pub fn new(
        orchestrator: DebateOrchestrator<G>,
        archive: ArchiveDebateUseCase<dyn RecordStore>,
        session: ResumeSessionUseCase<dyn SessionStore>,
        behavior: BehaviorConfig,
    ) -> Self {
        Self {
            orchestrator,
            archive,
            session,
            behavior,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Set up and run a new debate
    pub async fn run_new(&self, args: NewArgs) -> io::Result<()> {
        let mut editor = self.editor();
        self.print_welcome();

        let Some(config) = self.setup(&mut editor, args)? else {
            println!("Bye!");
            return Ok(());
        };

        let progress = self.progress();
        let state = self
            .orchestrator
            .start_debate(config, progress.as_ref())
            .await;
        println!("{}", ConsoleFormatter::format_opening(&state));
        println!("{}", ReplCommand::help_text().dimmed());

        let snapshot = SessionSnapshot::new(state);
        self.checkpoint(&snapshot);
        self.drive(&mut editor, snapshot).await
    }

    /// Continue a debate from its session snapshot
    pub async fn resume(&self, snapshot: SessionSnapshot) -> io::Result<()> {
        let mut editor = self.editor();
        let config = snapshot.state.config();
        println!(
            "\n{} {} ({} vs {})",
            "Resuming:".cyan().bold(),
            config.topic(),
            config.party1_name(),
            config.party2_name()
        );
        println!("{}", ConsoleFormatter::format_scoreboard(&snapshot.state));
        self.drive(&mut editor, snapshot).await
    }

    async fn drive(&self, editor: &mut Reedline, mut snapshot: SessionSnapshot) -> io::Result<()> {
        while !snapshot.state.is_finished() {
            match self.play_round(editor, snapshot.state).await? {
                Step::Continue(state) => {
                    snapshot.state = state;
                    self.checkpoint(&snapshot);
                }
                Step::Quit(state) => {
                    snapshot.state = state;
                    self.checkpoint(&snapshot);
                    if self.behavior.autosave_session {
                        println!("Debate paused. Run `debate-host resume` to continue.");
                    } else {
                        println!("Debate abandoned.");
                    }
                    return Ok(());
                }
            }
        }

        self.conclude(editor, snapshot).await
    }

    async fn play_round(&self, editor: &mut Reedline, state: DebateState) -> io::Result<Step> {
        println!("{}", ConsoleFormatter::format_round_banner(&state));

        let party1 = state.config().party1_name().to_string();
        let party2 = state.config().party2_name().to_string();

        let argument1 = match self.read_argument(editor, &party1, &state)? {
            Entry::Argument(text) => text,
            Entry::End => return Ok(self.end_early(state)),
            Entry::Quit => return Ok(Step::Quit(state)),
        };
        let argument2 = match self.read_argument(editor, &party2, &state)? {
            Entry::Argument(text) => text,
            Entry::End => return Ok(self.end_early(state)),
            Entry::Quit => return Ok(Step::Quit(state)),
        };

        let progress = self.progress();
        let mut state = state;
        loop {
            match self
                .orchestrator
                .submit_round(state, &argument1, &argument2, progress.as_ref())
                .await
            {
                Ok(RoundSubmission {
                    state,
                    outcome: RoundOutcome::Recorded(record),
                }) => {
                    println!(
                        "{}",
                        ConsoleFormatter::format_round_result(state.config(), &record)
                    );
                    println!("{}", ConsoleFormatter::format_scoreboard(&state));
                    if state.is_finished() {
                        println!("{}", "All rounds complete.".green().bold());
                    }
                    return Ok(Step::Continue(state));
                }
                Ok(RoundSubmission {
                    state: unchanged,
                    outcome: RoundOutcome::AnalysisFailed { message },
                }) => {
                    eprintln!("{}", message.red());
                    if !self.confirm(editor, "Retry the analysis with the same arguments?", true)? {
                        println!("Round {} was not recorded.", unchanged.current_round());
                        return Ok(Step::Continue(unchanged));
                    }
                    state = unchanged;
                }
                Err(rejected) => {
                    println!("{}", rejected.error.to_string().yellow());
                    return Ok(Step::Continue(rejected.into_state()));
                }
            }
        }
    }

    fn end_early(&self, state: DebateState) -> Step {
        match self.orchestrator.end_early(state) {
            Ok(state) => {
                println!(
                    "{}",
                    format!("Debate ended after {} rounds.", state.rounds_completed()).bold()
                );
                Step::Continue(state)
            }
            Err(rejected) => {
                println!("{}", rejected.error.to_string().yellow());
                Step::Continue(rejected.into_state())
            }
        }
    }

    async fn conclude(&self, editor: &mut Reedline, mut snapshot: SessionSnapshot) -> io::Result<()> {
        let verdict = match snapshot.verdict.clone() {
            Some(text) => {
                println!("{}", "Verdict already generated:".dimmed());
                println!("\n{}\n", text);
                text
            }
            None => {
                let Some(text) = self.generate_verdict(editor, &snapshot.state).await? else {
                    println!("Debate kept; run `debate-host resume` to ask for the verdict again.");
                    return Ok(());
                };
                snapshot.verdict = Some(text.clone());
                self.checkpoint(&snapshot);
                text
            }
        };

        if let Some(key) = &snapshot.saved_as {
            println!("Already saved as {}.", key.yellow());
        } else if self.behavior.auto_export || self.confirm(editor, "Save this debate?", true)? {
            match self.archive.save(&snapshot.state, &verdict) {
                Ok(key) => {
                    println!("{} {}", "Saved as".green(), key.to_string().yellow());
                    snapshot.saved_as = Some(key.to_string());
                }
                Err(e) => {
                    eprintln!("{} {}", "Could not save the debate:".red(), e);
                    self.checkpoint(&snapshot);
                    println!("The session is kept; run `debate-host resume` to try again.");
                    return Ok(());
                }
            }
        }

        if let Err(e) = self.session.discard() {
            warn!("Could not remove session snapshot: {}", e);
        }
        Ok(())
    }

    /// Generate the verdict, offering retries while it fails. `None` if the user gives up.
    async fn generate_verdict(
        &self,
        editor: &mut Reedline,
        state: &DebateState,
    ) -> io::Result<Option<String>> {
        let progress = self.progress();
        loop {
            let verdict = match self
                .orchestrator
                .generate_verdict(state, progress.as_ref())
                .await
            {
                Ok(verdict) => verdict,
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    return Ok(None);
                }
            };

            println!("{}", ConsoleFormatter::format_verdict(&verdict));
            if !verdict.degraded {
                return Ok(Some(verdict.text));
            }
            if !self.confirm(editor, "Retry the verdict?", true)? {
                return Ok(None);
            }
        }
    }

    fn read_argument(
        &self,
        editor: &mut Reedline,
        party: &str,
        state: &DebateState,
    ) -> io::Result<Entry> {
        let prompt = Self::prompt(party);
        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => match ReplInput::parse(&line) {
                    ReplInput::Text(text) if text.is_empty() => {
                        println!("{}", format!("{}'s argument cannot be empty.", party).yellow());
                    }
                    ReplInput::Text(text) => return Ok(Entry::Argument(text)),
                    ReplInput::Command(ReplCommand::End) => return Ok(Entry::End),
                    ReplInput::Command(ReplCommand::Quit) => return Ok(Entry::Quit),
                    ReplInput::Command(ReplCommand::Status) => {
                        println!("{}", ConsoleFormatter::format_scoreboard(state));
                    }
                    ReplInput::Command(ReplCommand::Help) => {
                        println!("{}", ReplCommand::help_text());
                    }
                    ReplInput::Command(ReplCommand::Unknown(cmd)) => {
                        println!("Unknown command: {}", cmd);
                        println!("Type /help for available commands");
                    }
                },
                Signal::CtrlC => println!("^C"),
                _ => return Ok(Entry::Quit),
            }
        }
    }

    /// Ask for topic, names and round count, whatever `args` left open.
    fn setup(&self, editor: &mut Reedline, mut args: NewArgs) -> io::Result<Option<DebateConfig>> {
        loop {
            let Some(topic) = self.ask_if_missing(editor, args.topic.take(), "Debate topic")? else {
                return Ok(None);
            };
            let Some(party1) =
                self.ask_if_missing(editor, args.party1.take(), "First party name")?
            else {
                return Ok(None);
            };
            let Some(party2) =
                self.ask_if_missing(editor, args.party2.take(), "Second party name")?
            else {
                return Ok(None);
            };
            let rounds = match args.rounds {
                Some(rounds) => rounds,
                None => match self.ask_rounds(editor)? {
                    Some(rounds) => rounds,
                    None => return Ok(None),
                },
            };

            match DebateConfig::new(topic.as_str(), party1.as_str(), party2.as_str(), rounds) {
                Ok(config) => return Ok(Some(config)),
                Err(e) => {
                    println!("{}", e.to_string().yellow());
                    args.rounds = Some(rounds);
                    if e == DomainError::EmptyTopic {
                        args.party1 = Some(party1);
                        args.party2 = Some(party2);
                    } else {
                        args.topic = Some(topic);
                    }
                }
            }
        }
    }

    fn ask_if_missing(
        &self,
        editor: &mut Reedline,
        given: Option<String>,
        label: &str,
    ) -> io::Result<Option<String>> {
        if let Some(value) = given {
            return Ok(Some(value));
        }
        loop {
            match self.read_plain(editor, label)? {
                None => return Ok(None),
                Some(value) if value.is_empty() => continue,
                Some(value) => return Ok(Some(value)),
            }
        }
    }

    fn ask_rounds(&self, editor: &mut Reedline) -> io::Result<Option<RoundCount>> {
        let default = self.behavior.default_rounds;
        let label = format!("Rounds [3/5/7] (default {})", default);
        loop {
            let Some(answer) = self.read_plain(editor, &label)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(default));
            }
            match answer.parse::<RoundCount>() {
                Ok(rounds) => return Ok(Some(rounds)),
                Err(_) => println!("{}", "Choose 3, 5 or 7.".yellow()),
            }
        }
    }

    fn confirm(&self, editor: &mut Reedline, question: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let label = format!("{} [{}]", question, hint);
        loop {
            let Some(answer) = self.read_plain(editor, &label)? else {
                return Ok(false);
            };
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("Please answer y or n."),
            }
        }
    }

    /// A trimmed line, or `None` on Ctrl-C / Ctrl-D
    fn read_plain(&self, editor: &mut Reedline, label: &str) -> io::Result<Option<String>> {
        match editor.read_line(&Self::prompt(label))? {
            Signal::Success(line) => Ok(Some(line.trim().to_string())),
            _ => Ok(None),
        }
    }

    fn prompt(label: &str) -> DefaultPrompt {
        DefaultPrompt::new(
            DefaultPromptSegment::Basic(label.to_string()),
            DefaultPromptSegment::Empty,
        )
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.config.history_file else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if !self.config.show_progress {
            Box::new(NoProgress)
        } else if io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            // Spinners redraw in place; plain lines when output is redirected
            Box::new(SimpleProgress)
        }
    }

    fn checkpoint(&self, snapshot: &SessionSnapshot) {
        if !self.behavior.autosave_session {
            return;
        }
        if let Err(e) = self.session.checkpoint(snapshot) {
            warn!("Could not save session snapshot: {}", e);
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              AI Debate Host                 │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Each round both parties argue; the judge scores Argument, Evidence,");
        println!("Rebuttal and Clarity from 0 to 10. Highest total after the final round wins.");
        println!();
    }
}
