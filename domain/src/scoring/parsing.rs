//! Score block parsing for round analyses.
//!
//! The analysis prompt asks the model to finish with a fixed-format block:
//!
//! ```text
//! SCORES:
//! Alpha: Argument=8, Evidence=7, Rebuttal=9, Clarity=6
//! Beta: Argument=9, Evidence=9, Rebuttal=8, Clarity=8
//! ```
//!
//! These functions pull that block back out of free-form model text. They
//! are pure domain logic (no I/O, just pattern matching) and never fail:
//! anything unreadable degrades to all-zero scores.
//!
//! | Item | Behavior |
//! |------|----------|
//! | [`parse_scores`] | Extract both parties' scores after the `SCORES:` marker |
//! | [`ScoreExtractor`] | Seam for swapping the matching strategy |
//! | [`MarkerScoreExtractor`] | Default regex-based extractor |

use crate::debate::score::{RoundScore, ScorePair};
use regex::Regex;

/// Literal token that opens the score block.
pub const SCORE_MARKER: &str = "SCORES:";

/// Strategy for turning analysis text into a [`ScorePair`].
///
/// Implementations must be total: a missing or malformed block yields
/// zero scores rather than an error.
pub trait ScoreExtractor: Send + Sync {
    fn extract(&self, text: &str, party1_name: &str, party2_name: &str) -> ScorePair;
}

/// Regex extractor anchored on [`SCORE_MARKER`] and the party names.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerScoreExtractor;

impl ScoreExtractor for MarkerScoreExtractor {
    fn extract(&self, text: &str, party1_name: &str, party2_name: &str) -> ScorePair {
        parse_scores(text, party1_name, party2_name)
    }
}

/// Parse both parties' scores from an analysis response.
///
/// - No marker: both scores are zero.
/// - Fewer than four fields found for a party: that party's score is zero.
/// - Values are kept verbatim (a `15` stays `15`); `total` is always the sum.
///
/// Matching is case-insensitive, accepts `=` or `:` between label and value,
/// and tolerates whitespace and line breaks between fields.
///
/// # Examples
///
/// ```
/// use debate_domain::scoring::parsing::parse_scores;
///
/// let text = "SCORES:\nAlpha: Argument=8, Evidence=7, Rebuttal=9, Clarity=6\n\
///             Beta: Argument=9, Evidence=9, Rebuttal=8, Clarity=8";
/// let scores = parse_scores(text, "Alpha", "Beta");
/// assert_eq!(scores.party1.total, 30);
/// assert_eq!(scores.party2.total, 34);
///
/// assert!(parse_scores("no block here", "Alpha", "Beta").party1.is_zero());
/// ```
pub fn parse_scores(text: &str, party1_name: &str, party2_name: &str) -> ScorePair {
    let Some(section) = score_section(text) else {
        return ScorePair::zero();
    };

    ScorePair::new(
        party_score(section, party1_name).unwrap_or_default(),
        party_score(section, party2_name).unwrap_or_default(),
    )
}

/// Text following the first marker occurrence (matched case-insensitively).
fn score_section(text: &str) -> Option<&str> {
    // ASCII uppercasing keeps byte offsets aligned with the original text
    let start = text.to_ascii_uppercase().find(SCORE_MARKER)?;
    Some(&text[start + SCORE_MARKER.len()..])
}

fn party_score(section: &str, name: &str) -> Option<RoundScore> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let captures = party_pattern(name)?.captures(section)?;
    let field = |i: usize| -> Option<u32> { captures.get(i)?.as_str().parse().ok() };

    Some(RoundScore::new(field(1)?, field(2)?, field(3)?, field(4)?))
}

/// Build the name-anchored pattern for one party's line.
///
/// The name must open a line (optionally behind list or bold markers) or
/// follow a `,`/`;`/`|` separator, so "Alpha" does not match inside
/// "Team Alpha". Each value is one to four digits; a trailing `/10` is allowed.
fn party_pattern(name: &str) -> Option<Regex> {
    const VALUE: &str = r"\s*[=:]\s*(\d{1,4})\b(?:\s*/\s*10)?";
    let pattern = format!(
        r"(?im)(?:^|[,;|])[ \t*\-•]*{name}[\s*]*:[\s*]*argument{v}[\s,;]*evidence{v}[\s,;]*rebuttal{v}[\s,;]*clarity{v}",
        name = regex::escape(name),
        v = VALUE,
    );
    Regex::new(&pattern).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "SCORES:\nAlpha: Argument=8, Evidence=7, Rebuttal=9, Clarity=6\nBeta: Argument=9, Evidence=9, Rebuttal=8, Clarity=8";

    #[test]
    fn test_parse_reference_block() {
        let scores = parse_scores(SAMPLE, "Alpha", "Beta");
        assert_eq!(scores.party1, RoundScore::new(8, 7, 9, 6));
        assert_eq!(scores.party1.total, 30);
        assert_eq!(scores.party2, RoundScore::new(9, 9, 8, 8));
        assert_eq!(scores.party2.total, 34);
    }

    #[test]
    fn test_block_after_analysis_prose() {
        let text = format!(
            "## Round Assessment\nAlpha was sharper this round.\n\n{}\n\nThanks!",
            SAMPLE
        );
        let scores = parse_scores(&text, "Alpha", "Beta");
        assert_eq!(scores.party1.total, 30);
        assert_eq!(scores.party2.total, 34);
    }

    #[test]
    fn test_missing_marker_gives_zero() {
        let text = SAMPLE.replace("SCORES:", "Results");
        let scores = parse_scores(&text, "Alpha", "Beta");
        assert!(scores.party1.is_zero());
        assert!(scores.party2.is_zero());
    }

    #[test]
    fn test_scores_before_marker_are_ignored() {
        let text = "Alpha: Argument=8, Evidence=7, Rebuttal=9, Clarity=6\nSCORES:\nnothing parseable";
        assert_eq!(parse_scores(text, "Alpha", "Beta"), ScorePair::zero());
    }

    #[test]
    fn test_partial_fields_zero_only_that_party() {
        let text = "SCORES:\nAlpha: Argument=8, Evidence=7, Rebuttal=9\nBeta: Argument=9, Evidence=9, Rebuttal=8, Clarity=8";
        let scores = parse_scores(text, "Alpha", "Beta");
        assert!(scores.party1.is_zero());
        assert_eq!(scores.party2.total, 34);
    }

    #[test]
    fn test_case_separator_and_line_breaks() {
        let text = "scores:\n  alpha :\n argument: 5,\n EVIDENCE = 6\n rebuttal:7\n clarity=8\nbeta: Argument:1 Evidence:2 Rebuttal:3 Clarity:4";
        let scores = parse_scores(text, "Alpha", "Beta");
        assert_eq!(scores.party1, RoundScore::new(5, 6, 7, 8));
        assert_eq!(scores.party2, RoundScore::new(1, 2, 3, 4));
    }

    #[test]
    fn test_markdown_decorations() {
        let text = "**SCORES:**\n- **Alpha**: Argument=8/10, Evidence=7/10, Rebuttal=9/10, Clarity=6/10\n- **Beta:** Argument=9, Evidence=9, Rebuttal=8, Clarity=8";
        let scores = parse_scores(text, "Alpha", "Beta");
        assert_eq!(scores.party1.total, 30);
        assert_eq!(scores.party2.total, 34);
    }

    #[test]
    fn test_both_parties_on_one_line() {
        let text = "SCORES: Alpha: Argument=1, Evidence=1, Rebuttal=1, Clarity=1; Beta: Argument=2, Evidence=2, Rebuttal=2, Clarity=2";
        let scores = parse_scores(text, "Alpha", "Beta");
        assert_eq!(scores.party1.total, 4);
        assert_eq!(scores.party2.total, 8);
    }

    #[test]
    fn test_out_of_range_values_preserved() {
        let text = "SCORES:\nAlpha: Argument=15, Evidence=7, Rebuttal=9, Clarity=6\nBeta: Argument=9, Evidence=9, Rebuttal=8, Clarity=8";
        let scores = parse_scores(text, "Alpha", "Beta");
        assert_eq!(scores.party1.argument, 15);
        assert_eq!(scores.party1.total, 37);
        assert!(!scores.party1.is_within_range());
    }

    #[test]
    fn test_negative_or_oversized_values_fail_party() {
        let text = "SCORES:\nAlpha: Argument=-3, Evidence=7, Rebuttal=9, Clarity=6\nBeta: Argument=9, Evidence=9, Rebuttal=8, Clarity=123456";
        let scores = parse_scores(text, "Alpha", "Beta");
        assert!(scores.party1.is_zero());
        assert!(scores.party2.is_zero());
    }

    #[test]
    fn test_name_must_not_be_suffix_of_longer_name() {
        let text = "SCORES:\nTeam Alpha: Argument=8, Evidence=7, Rebuttal=9, Clarity=6\nBeta: Argument=9, Evidence=9, Rebuttal=8, Clarity=8";
        let scores = parse_scores(text, "Alpha", "Beta");
        assert!(scores.party1.is_zero());
        assert_eq!(scores.party2.total, 34);
    }

    #[test]
    fn test_names_with_regex_metacharacters() {
        let text = "SCORES:\nC++ (fans): Argument=3, Evidence=3, Rebuttal=3, Clarity=3\nRust.*: Argument=4, Evidence=4, Rebuttal=4, Clarity=4";
        let scores = parse_scores(text, "C++ (fans)", "Rust.*");
        assert_eq!(scores.party1.total, 12);
        assert_eq!(scores.party2.total, 16);
    }

    #[test]
    fn test_extractor_trait_object() {
        let extractor: Box<dyn ScoreExtractor> = Box::new(MarkerScoreExtractor);
        let scores = extractor.extract(SAMPLE, "Alpha", "Beta");
        assert_eq!(scores.party1.total + scores.party2.total, 64);
    }

    #[test]
    fn test_total_always_sum_of_fields() {
        for text in [
            SAMPLE,
            "SCORES:\nAlpha: Argument=0, Evidence=10, Rebuttal=10, Clarity=0\nBeta: Argument=10, Evidence=10, Rebuttal=10, Clarity=10",
            "garbage",
        ] {
            let scores = parse_scores(text, "Alpha", "Beta");
            for s in [scores.party1, scores.party2] {
                assert_eq!(s.total, s.argument + s.evidence + s.rebuttal + s.clarity);
            }
        }
    }
}
