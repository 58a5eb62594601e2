//! Progress reporting for debate model calls

use colored::Colorize;
use debate_application::ProgressNotifier;
use debate_domain::DebatePhase;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while the host or judge is thinking
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn waiting_message(phase: DebatePhase) -> &'static str {
        match phase {
            DebatePhase::Opening => "Host preparing opening statement...",
            DebatePhase::Analysis => "Judge analyzing arguments...",
            DebatePhase::Verdict => "Judge preparing final verdict...",
        }
    }

    fn prefix(phase: DebatePhase, round: Option<u32>) -> String {
        match round {
            Some(n) => format!("{} {}", phase.display_name(), n),
            None => phase.display_name().to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: DebatePhase, round: Option<u32>) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::prefix(phase, round));
        pb.set_message(Self::waiting_message(phase));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_phase_complete(&self, phase: DebatePhase, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if success {
            pb.finish_with_message(format!("{} {}", "v".green(), "done".green()));
        } else {
            pb.finish_with_message(format!(
                "{} {} failed",
                "x".red(),
                phase.display_name().red()
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: DebatePhase, round: Option<u32>) {
        println!(
            "{} {} {}",
            "->".cyan(),
            ProgressReporter::prefix(phase, round).bold(),
            ProgressReporter::waiting_message(phase).dimmed()
        );
    }

    fn on_phase_complete(&self, phase: DebatePhase, success: bool) {
        if success {
            println!("  {} {}", "v".green(), phase);
        } else {
            println!("  {} {} (failed)", "x".red(), phase);
        }
    }
}
