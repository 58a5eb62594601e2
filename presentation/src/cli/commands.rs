//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use debate_domain::RoundCount;
use std::path::PathBuf;

/// Output format for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every round with its analysis
    Full,
    /// Topic, final scores, standing and verdict
    Summary,
    /// The stored JSON record
    Json,
}

impl From<OutputFormat> for debate_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => debate_domain::OutputFormat::Full,
            OutputFormat::Summary => debate_domain::OutputFormat::Summary,
            OutputFormat::Json => debate_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for debate-host
#[derive(Parser, Debug)]
#[command(name = "debate-host")]
#[command(author, version, about = "AI-hosted debates between two parties")]
#[command(long_about = r#"
debate-host runs a structured debate between two named parties with an LLM
acting as host and judge.

The debate has three phases:
1. Opening: the host introduces the topic and the rules
2. Rounds: both parties argue, the judge analyzes and scores each round
   (Argument, Evidence, Rebuttal, Clarity; 0-10 each)
3. Verdict: the judge reviews the whole debate and names a winner

Configuration files are loaded from (in priority order):
1. DEBATE_* environment variables (e.g. DEBATE_LLM__MODEL)
2. --config <path>     Explicit config file
3. ./debate.toml       Project-level config
4. ~/.config/debate-host/config.toml   Global config

Example:
  debate-host new "Should cities ban cars?" --party1 Alice --party2 Bob -r 5
  debate-host resume
  debate-host list
  debate-host show debate_20261019_143005 -o json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The command to run; no subcommand starts a new debate
    pub fn action(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::New(NewArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new debate (prompts for anything not given)
    New(NewArgs),

    /// Continue the debate saved in the session file
    Resume,

    /// List saved debate records, most recent first
    List,

    /// Show a saved debate record
    Show {
        /// Record key, e.g. debate_20261019_143005 (default: most recent)
        key: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Discard the saved session
    Reset,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct NewArgs {
    /// Debate topic
    pub topic: Option<String>,

    /// Name of the first party
    #[arg(long, short = 'a', value_name = "NAME")]
    pub party1: Option<String>,

    /// Name of the second party
    #[arg(long, short = 'b', value_name = "NAME")]
    pub party2: Option<String>,

    /// Number of rounds: 3, 5 or 7
    #[arg(short, long, value_parser = parse_rounds)]
    pub rounds: Option<RoundCount>,
}

fn parse_rounds(s: &str) -> Result<RoundCount, String> {
    s.parse().map_err(|_| format!("'{}' is not one of 3, 5, 7", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_new() {
        let cli = Cli::try_parse_from(["debate-host", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.action(), Command::New(NewArgs::default()));
    }

    #[test]
    fn test_new_with_arguments() {
        let cli = Cli::try_parse_from([
            "debate-host",
            "new",
            "Cars in cities",
            "-a",
            "Alice",
            "--party2",
            "Bob",
            "-r",
            "5",
        ])
        .unwrap();

        assert_eq!(
            cli.action(),
            Command::New(NewArgs {
                topic: Some("Cars in cities".to_string()),
                party1: Some("Alice".to_string()),
                party2: Some("Bob".to_string()),
                rounds: Some(RoundCount::Five),
            })
        );
    }

    #[test]
    fn test_even_round_count_rejected() {
        assert!(Cli::try_parse_from(["debate-host", "new", "-r", "4"]).is_err());
    }

    #[test]
    fn test_show_with_format() {
        let cli = Cli::try_parse_from(["debate-host", "show", "-o", "json", "--no-color"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(
            cli.action(),
            Command::Show {
                key: None,
                output: Some(OutputFormat::Json),
            }
        );
    }
}
