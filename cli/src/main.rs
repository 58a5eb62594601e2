//! CLI entrypoint for debate-host
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use debate_application::{
    ArchiveDebateUseCase, ConversationLogger, DebateOrchestrator, NoConversationLogger,
    RecordStore, ResumeSessionUseCase, SessionStore,
};
use debate_domain::RecordKey;
use debate_infrastructure::config::data_dir;
use debate_infrastructure::{
    ConfigLoader, FileConfig, GeminiGateway, JsonRecordStore, JsonSessionStore,
    JsonlConversationLogger,
};
use debate_presentation::{Cli, Command, ConsoleFormatter, DebateRepl, OutputConfig, ReplConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file_dir());

    info!("Starting debate-host");

    let mut fatal = Vec::new();
    for issue in config.validate() {
        if issue.is_fatal() {
            fatal.push(issue.to_string());
        } else {
            warn!("{}", issue);
        }
    }
    if !fatal.is_empty() {
        bail!("Invalid configuration:\n  {}", fatal.join("\n  "));
    }

    let output = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    output.apply();

    // === Dependency Injection ===
    let records: Arc<dyn RecordStore> =
        Arc::new(JsonRecordStore::new(config.storage.records_dir()));
    let sessions: Arc<dyn SessionStore> =
        Arc::new(JsonSessionStore::new(config.storage.session_file()));

    match cli.action() {
        Command::List => list_records(records),
        Command::Show { key, output: format } => {
            let format = format.map(Into::into).unwrap_or(output.format);
            show_record(records, key.as_deref(), format)
        }
        Command::Reset => {
            ResumeSessionUseCase::new(sessions).discard()?;
            println!("Saved session cleared.");
            Ok(())
        }
        Command::Resume => {
            let Some(snapshot) = ResumeSessionUseCase::new(sessions.clone()).resume()? else {
                bail!("No saved debate to resume. Start one with `debate-host new`.");
            };
            let repl = build_repl(&cli, &config, records, sessions)?;
            repl.resume(snapshot).await?;
            Ok(())
        }
        Command::New(args) => {
            warn_if_session_pending(&sessions);
            let repl = build_repl(&cli, &config, records, sessions)?;
            repl.run_new(args).await?;
            Ok(())
        }
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set
fn init_logging(verbose: u8, file_dir: Option<PathBuf>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let stderr = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match file_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "debate-host.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr)
                .init();
            None
        }
    }
}

fn build_repl(
    cli: &Cli,
    config: &FileConfig,
    records: Arc<dyn RecordStore>,
    sessions: Arc<dyn SessionStore>,
) -> Result<DebateRepl<GeminiGateway>> {
    let gateway = Arc::new(
        GeminiGateway::from_config(&config.llm).context("Failed to set up the Gemini gateway")?,
    );

    let transcript: Arc<dyn ConversationLogger> = if config.logging.transcript {
        match JsonlConversationLogger::in_dir(config.logging.transcript_dir()) {
            Some(logger) => {
                info!("Writing transcript to {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoConversationLogger),
        }
    } else {
        Arc::new(NoConversationLogger)
    };

    let orchestrator = DebateOrchestrator::new(gateway).with_logger(transcript.clone());
    let archive = ArchiveDebateUseCase::new(records).with_logger(transcript);
    let session = ResumeSessionUseCase::new(sessions);

    Ok(DebateRepl::new(
        orchestrator,
        archive,
        session,
        config.debate.to_behavior_config(),
    )
    .with_config(ReplConfig {
        show_progress: config.output.show_progress && !cli.quiet,
        history_file: Some(data_dir().join("history.txt")),
    }))
}

fn warn_if_session_pending(sessions: &Arc<dyn SessionStore>) {
    if let Ok(Some(snapshot)) = sessions.load()
        && !snapshot.state.is_finished()
    {
        println!(
            "A debate on '{}' is still in progress; starting a new one will replace it.",
            snapshot.state.config().topic()
        );
        println!("(Use `debate-host resume` to continue it instead.)");
    }
}

fn list_records(records: Arc<dyn RecordStore>) -> Result<()> {
    let archive = ArchiveDebateUseCase::new(records);
    let rows: Vec<_> = archive
        .list()?
        .into_iter()
        .map(|key| {
            let blob = archive
                .load(&key)
                .inspect_err(|e| warn!("Could not read {}: {}", key, e))
                .ok();
            (key, blob)
        })
        .collect();

    print!("{}", ConsoleFormatter::format_record_list(&rows));
    Ok(())
}

fn show_record(
    records: Arc<dyn RecordStore>,
    key: Option<&str>,
    format: debate_domain::OutputFormat,
) -> Result<()> {
    let archive = ArchiveDebateUseCase::new(records);
    let (key, blob): (RecordKey, _) = match key {
        Some(key) => archive.load_by_name(key)?,
        None => archive
            .latest()?
            .ok_or_else(|| anyhow!("No saved debates yet."))?,
    };

    info!("Showing {}", key);
    println!("{}", ConsoleFormatter::format_record(&blob, format));
    Ok(())
}
