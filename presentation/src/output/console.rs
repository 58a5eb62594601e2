//! Console output formatter for debates and saved records

use colored::Colorize;
use debate_application::Verdict;
use debate_domain::core::string::preview;
use debate_domain::{
    DebateConfig, DebateRecordBlob, DebateState, OutputFormat, RecordKey, RoundRecord, RoundScore,
    Standing,
};

const PROGRESS_WIDTH: usize = 20;
const TOPIC_PREVIEW_LEN: usize = 48;

/// Formats debate output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Topic, participants and the host's opening statement
    pub fn format_opening(state: &DebateState) -> String {
        let config = state.config();
        let mut output = String::new();

        output.push_str(&Self::header("Debate"));
        output.push('\n');
        output.push_str(&Self::topic_lines(
            config.topic(),
            config.participants(),
            config.max_rounds(),
        ));
        output.push_str(&Self::section_header("Opening Statement"));
        output.push_str(&format!("\n{}\n", state.opening_statement()));
        output
    }

    /// "Round 2 of 5" with a progress bar over completed rounds
    pub fn format_round_banner(state: &DebateState) -> String {
        let config = state.config();
        format!(
            "\n{} {}  {}\n",
            format!("Round {} of {}", state.current_round(), config.max_rounds())
                .cyan()
                .bold(),
            Self::progress_bar(state.progress()),
            format!(
                "{}: {}  {}: {}",
                config.party1_name(),
                state.party1_total(),
                config.party2_name(),
                state.party2_total()
            )
            .dimmed()
        )
    }

    /// The judge's analysis followed by the round's score table
    pub fn format_round_result(config: &DebateConfig, record: &RoundRecord) -> String {
        let mut output = Self::section_header(&format!("Round {} Analysis", record.round));
        output.push_str(&format!("\n{}\n\n", record.analysis_text));
        output.push_str(&Self::score_table(&[
            (config.party1_name(), &record.party1_score),
            (config.party2_name(), &record.party2_score),
        ]));
        if record.is_unscored() {
            output.push_str(&format!(
                "{}\n",
                "No score block found in the analysis; both parties scored 0.".yellow()
            ));
        }
        output
    }

    /// Cumulative totals and who is ahead
    pub fn format_scoreboard(state: &DebateState) -> String {
        let config = state.config();
        let mut output = Self::section_header("Scoreboard");
        output.push_str(&format!(
            "\n  {:<width$}  {:>5}\n  {:<width$}  {:>5}\n",
            config.party1_name(),
            state.party1_total(),
            config.party2_name(),
            state.party2_total(),
            width = Self::name_width(&config.participants())
        ));
        output.push_str(&format!(
            "\n{} {}  ({} of {} rounds played)\n",
            "Standing:".cyan().bold(),
            Self::standing(&state.standing()),
            state.rounds_completed(),
            config.max_rounds()
        ));
        output
    }

    pub fn format_verdict(verdict: &Verdict) -> String {
        let mut output = Self::header("Final Verdict");
        output.push('\n');
        if verdict.degraded {
            output.push_str(&format!("\n{}\n", verdict.text.red()));
        } else {
            output.push_str(&format!("\n{}\n", verdict.text));
        }
        output.push_str(&format!(
            "\n{} {}\n",
            "By the numbers:".cyan().bold(),
            Self::standing(&verdict.standing)
        ));
        output.push_str(&Self::footer());
        output
    }

    /// Render a saved record in the requested format
    pub fn format_record(blob: &DebateRecordBlob, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format_record_full(blob),
            OutputFormat::Summary => Self::format_record_summary(blob),
            OutputFormat::Json => Self::format_json(blob),
        }
    }

    /// Format as JSON
    pub fn format_json(blob: &DebateRecordBlob) -> String {
        blob.to_json().unwrap_or_else(|_| "{}".to_string())
    }

    /// One line per saved record; `None` marks a record that could not be read
    pub fn format_record_list(records: &[(RecordKey, Option<DebateRecordBlob>)]) -> String {
        if records.is_empty() {
            return format!("{}\n", "No saved debates.".dimmed());
        }

        let mut output = String::new();
        for (key, blob) in records {
            let saved = key.stamp().format("%Y-%m-%d %H:%M:%S");
            match blob {
                Some(blob) => output.push_str(&format!(
                    "{}  {}  {}  {} vs {}, {} rounds\n",
                    key.to_string().yellow(),
                    saved.to_string().dimmed(),
                    preview(&blob.topic, TOPIC_PREVIEW_LEN).bold(),
                    blob.participants[0],
                    blob.participants[1],
                    blob.rounds
                )),
                None => output.push_str(&format!(
                    "{}  {}  {}\n",
                    key.to_string().yellow(),
                    saved.to_string().dimmed(),
                    "(unreadable)".red()
                )),
            }
        }
        output
    }

    fn format_record_full(blob: &DebateRecordBlob) -> String {
        let [p1, p2] = &blob.participants;
        let mut output = Self::header("Debate Record");
        output.push('\n');
        output.push_str(&Self::topic_lines(
            &blob.topic,
            [p1.as_str(), p2.as_str()],
            blob.max_rounds.unwrap_or(blob.rounds),
        ));

        if !blob.opening_statement.is_empty() {
            output.push_str(&Self::section_header("Opening Statement"));
            output.push_str(&format!("\n{}\n", blob.opening_statement));
        }

        for entry in &blob.history {
            output.push_str(&Self::section_header(&format!("Round {}", entry.round)));
            output.push_str(&format!(
                "\n{}\n{}\n\n{}\n{}\n\n{}\n{}\n\n",
                format!("── {} ──", entry.party1_name).yellow().bold(),
                entry.party1_argument,
                format!("── {} ──", entry.party2_name).yellow().bold(),
                entry.party2_argument,
                "── Analysis ──".yellow().bold(),
                entry.analysis
            ));
            let rows: Vec<(&str, &RoundScore)> = [&entry.party1_name, &entry.party2_name]
                .into_iter()
                .filter_map(|name| entry.scores.get(name).map(|s| (name.as_str(), s)))
                .collect();
            output.push_str(&Self::score_table(&rows));
        }

        output.push_str(&Self::final_lines(blob));
        output.push_str(&Self::section_header("Final Verdict"));
        output.push_str(&format!("\n{}\n", blob.final_verdict));
        output.push_str(&Self::footer());
        output
    }

    fn format_record_summary(blob: &DebateRecordBlob) -> String {
        let mut output = format!("{}\n\n", "=== Debate Summary ===".cyan().bold());
        output.push_str(&format!("{} {}\n", "Topic:".bold(), blob.topic));
        output.push_str(&format!(
            "{} {}\n",
            "Saved:".dimmed(),
            blob.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&Self::final_lines(blob));
        output.push('\n');
        output.push_str(&blob.final_verdict);
        output.push('\n');
        output
    }

    fn final_lines(blob: &DebateRecordBlob) -> String {
        let [p1, p2] = &blob.participants;
        let width = Self::name_width(&[p1.as_str(), p2.as_str()]);
        let mut output = Self::section_header("Final Scores");
        for name in [p1, p2] {
            output.push_str(&format!(
                "  {:<width$}  {:>5}\n",
                name,
                blob.total_for(name),
                width = width
            ));
        }
        let played = match blob.max_rounds {
            Some(max) => format!("{} of {} rounds", blob.rounds, max),
            None => format!("{} rounds", blob.rounds),
        };
        output.push_str(&format!(
            "\n{} {}  ({})\n",
            "Standing:".cyan().bold(),
            Self::standing(&blob.standing()),
            played
        ));
        output
    }

    fn topic_lines(topic: &str, participants: [&str; 2], max_rounds: u32) -> String {
        format!(
            "{} {}\n{} {} vs {}\n{} {}\n",
            "Topic:".cyan().bold(),
            topic,
            "Parties:".cyan().bold(),
            participants[0],
            participants[1],
            "Rounds:".cyan().bold(),
            max_rounds
        )
    }

    /// Per-category table; totals outside the 0-10 per-category range are flagged
    fn score_table(rows: &[(&str, &RoundScore)]) -> String {
        let names: Vec<&str> = rows.iter().map(|(name, _)| *name).collect();
        let width = Self::name_width(&names);

        let mut output = format!(
            "  {:<width$}  {:>8}  {:>8}  {:>8}  {:>8}  {:>5}\n",
            "Party",
            "Argument",
            "Evidence",
            "Rebuttal",
            "Clarity",
            "Total",
            width = width
        )
        .bold()
        .to_string();

        for (name, score) in rows {
            let flag = if score.is_within_range() { "" } else { " !" };
            output.push_str(&format!(
                "  {:<width$}  {:>8}  {:>8}  {:>8}  {:>8}  {:>5}{}\n",
                name,
                score.argument,
                score.evidence,
                score.rebuttal,
                score.clarity,
                score.total,
                flag,
                width = width
            ));
        }
        output
    }

    fn standing(standing: &Standing) -> String {
        match standing {
            Standing::Leader { .. } => standing.to_string().green().bold().to_string(),
            Standing::Tie => standing.to_string().yellow().bold().to_string(),
        }
    }

    fn progress_bar(fraction: f64) -> String {
        let fraction = fraction.clamp(0.0, 1.0);
        let filled = (fraction * PROGRESS_WIDTH as f64).round() as usize;
        format!(
            "[{}{}] {:>3.0}%",
            "#".repeat(filled),
            ".".repeat(PROGRESS_WIDTH - filled),
            fraction * 100.0
        )
    }

    fn name_width(names: &[&str]) -> usize {
        names
            .iter()
            .map(|n| n.chars().count())
            .max()
            .unwrap_or(0)
            .max("Party".len())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use debate_domain::{RoundCount, ScorePair};

    fn plain() {
        colored::control::set_override(false);
    }

    fn state_with_round() -> (DebateState, RoundRecord) {
        let config = DebateConfig::new("Cars in cities", "Alpha", "Beta", RoundCount::Five).unwrap();
        let mut state = DebateState::new(config, "Welcome, debaters.");
        let record = RoundRecord::new(
            1,
            "Cars pollute.",
            "Cars are freedom.",
            "Alpha was sharper.",
            ScorePair::new(RoundScore::new(8, 7, 9, 6), RoundScore::new(9, 9, 8, 8)),
            Utc.with_ymd_and_hms(2026, 10, 19, 14, 30, 5).unwrap(),
        );
        state.record_round(record.clone()).unwrap();
        (state, record)
    }

    #[test]
    fn test_round_banner_shows_progress() {
        plain();
        let (state, _) = state_with_round();
        let banner = ConsoleFormatter::format_round_banner(&state);
        assert!(banner.contains("Round 2 of 5"));
        assert!(banner.contains("[####................]  20%"));
        assert!(banner.contains("Alpha: 30  Beta: 34"));
    }

    #[test]
    fn test_round_result_table() {
        plain();
        let (state, record) = state_with_round();
        let output = ConsoleFormatter::format_round_result(state.config(), &record);
        assert!(output.contains("Round 1 Analysis"));
        assert!(output.contains("Alpha was sharper."));
        assert!(output.contains("  Alpha         8         7         9         6     30\n"));
        assert!(output.contains("  Beta          9         9         8         8     34\n"));
        assert!(!output.contains("No score block"));
    }

    #[test]
    fn test_out_of_range_scores_flagged() {
        plain();
        let (state, mut record) = state_with_round();
        record.party1_score = RoundScore::new(15, 7, 9, 6);
        let output = ConsoleFormatter::format_round_result(state.config(), &record);
        assert!(output.contains("    37 !\n"));
    }

    #[test]
    fn test_scoreboard_standing() {
        plain();
        let (state, _) = state_with_round();
        let output = ConsoleFormatter::format_scoreboard(&state);
        assert!(output.contains("Standing: Beta leads by 4 points"));
        assert!(output.contains("(1 of 5 rounds played)"));
    }

    #[test]
    fn test_record_formats() {
        plain();
        let (mut state, _) = state_with_round();
        state.end_early().unwrap();
        let ts = Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).unwrap();
        let blob = DebateRecordBlob::from_state(&state, "Beta wins on evidence.", ts).unwrap();

        let full = ConsoleFormatter::format_record(&blob, OutputFormat::Full);
        assert!(full.contains("Welcome, debaters."));
        assert!(full.contains("Cars are freedom."));
        assert!(full.contains("Beta wins on evidence."));
        assert!(full.contains("(1 of 5 rounds)"));

        let summary = ConsoleFormatter::format_record(&blob, OutputFormat::Summary);
        assert!(summary.contains("Topic: Cars in cities"));
        assert!(summary.contains("Standing: Beta leads by 4 points"));
        assert!(!summary.contains("Cars are freedom."));

        let json = ConsoleFormatter::format_record(&blob, OutputFormat::Json);
        assert_eq!(DebateRecordBlob::from_json(&json).unwrap(), blob);
    }

    #[test]
    fn test_record_list() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_record_list(&[]),
            "No saved debates.\n"
        );

        let key: RecordKey = "debate_20261019_143005_1".parse().unwrap();
        let output = ConsoleFormatter::format_record_list(&[(key, None)]);
        assert_eq!(
            output,
            "debate_20261019_143005_1  2026-10-19 14:30:05  (unreadable)\n"
        );
    }

    #[test]
    fn test_degraded_verdict_still_shows_standing() {
        plain();
        let verdict = Verdict {
            text: "Error generating final verdict: Request failed: HTTP 500".to_string(),
            standing: Standing::Tie,
            degraded: true,
        };
        let output = ConsoleFormatter::format_verdict(&verdict);
        assert!(output.contains("Error generating final verdict"));
        assert!(output.contains("By the numbers: Tie"));
    }
}
