//! Prompt templates for the debate flow

use crate::debate::{DebateConfig, DebateState};
use crate::record::HistoryEntry;
use crate::scoring::SCORE_MARKER;

/// Templates for generating prompts at each stage
///
/// Every method is a pure function of its inputs; none of them talk to a model.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Host opening statement for a new debate
    pub fn opening(topic: &str) -> String {
        format!(
            r#"You are an AI debate host. Generate a professional opening statement for a debate on the topic: "{}"

Your opening should:
1. Welcome participants
2. Clearly state the debate topic
3. Explain the format (alternating arguments, AI analysis after each round)
4. Set ground rules for respectful discourse
5. Encourage both parties to present their strongest arguments

Keep it concise but authoritative."#,
            topic
        )
    }

    /// Score block the analysis must end with, for the given parties
    pub fn score_block_format(party1_name: &str, party2_name: &str) -> String {
        format!(
            "{}\n{}: Argument=<0-10>, Evidence=<0-10>, Rebuttal=<0-10>, Clarity=<0-10>\n{}: Argument=<0-10>, Evidence=<0-10>, Rebuttal=<0-10>, Clarity=<0-10>",
            SCORE_MARKER, party1_name, party2_name
        )
    }

    /// Impartial analysis of one round, ending in a parseable score block
    pub fn analysis(
        config: &DebateConfig,
        round: u32,
        party1_argument: &str,
        party2_argument: &str,
    ) -> String {
        let (p1, p2) = (config.party1_name(), config.party2_name());
        format!(
            r#"You are an impartial AI debate analyst. Analyze the following debate round objectively:

Topic: {topic}
Round: {round} of {max_rounds}

{p1}'s Argument:
{party1_argument}

{p2}'s Argument:
{party2_argument}

Provide an unbiased analysis covering:

1. ARGUMENT STRENGTH (for each party):
   - Logic and reasoning quality
   - Evidence and support provided
   - Clarity of communication

2. DEBATE TECHNIQUE (for each party):
   - Addressing opponent's points
   - Use of persuasive elements
   - Structure and flow

3. ROUND ASSESSMENT:
   - Which argument was stronger this round and why
   - Key points that stood out
   - Areas for improvement for each party

4. CURRENT STANDING:
   - Brief assessment of overall debate progress
   - No final winner declaration (debate continues)

Be fair, constructive, and specific in your feedback.

Finish your response with the scores for this round, each category an integer from 0 to 10, in exactly this format:

{score_block}"#,
            topic = config.topic(),
            max_rounds = config.max_rounds(),
            score_block = Self::score_block_format(p1, p2),
        )
    }

    /// Final verdict over the whole debate
    ///
    /// Embeds the complete round history as JSON, the cumulative totals and
    /// the score-based standing as advisory context for the judge.
    pub fn verdict(state: &DebateState) -> String {
        let config = state.config();
        let history: Vec<HistoryEntry> = state
            .history()
            .iter()
            .map(|record| HistoryEntry::from_round(config, record))
            .collect();
        let history_json =
            serde_json::to_string_pretty(&history).unwrap_or_else(|_| "[]".to_string());

        let mut prompt = format!(
            r#"You are an impartial AI judge concluding a debate on: "{}"

Here is the complete debate history:
{}
"#,
            config.topic(),
            history_json
        );

        prompt.push_str(&format!(
            "\nCumulative scores after {} of {} scheduled rounds:\n- {}: {}\n- {}: {}\n",
            state.rounds_completed(),
            config.max_rounds(),
            config.party1_name(),
            state.party1_total(),
            config.party2_name(),
            state.party2_total(),
        ));
        prompt.push_str(&format!(
            "Score-based standing (advisory, the higher total wins and equal totals are a tie): {}\n",
            state.standing()
        ));

        prompt.push_str(
            r#"
Provide a comprehensive final verdict that includes:

1. OVERALL PERFORMANCE SUMMARY:
   - Strengths and weaknesses of each debater
   - Quality of arguments throughout the debate

2. KEY MOMENTS:
   - Most compelling arguments from each side
   - Critical turning points in the debate

3. FINAL JUDGMENT:
   - Which side presented the stronger overall case
   - Reasoning for your decision
   - Final score or assessment

4. CONSTRUCTIVE FEEDBACK:
   - Areas for improvement for both parties
   - Positive highlights from the debate

Be thorough, fair, and provide educational value in your analysis."#,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::{RoundCount, RoundRecord, RoundScore, ScorePair};
    use crate::scoring::parse_scores;
    use chrono::Utc;

    fn config() -> DebateConfig {
        DebateConfig::new("AI in schools", "Alpha", "Beta", RoundCount::Three).unwrap()
    }

    #[test]
    fn test_opening_contains_topic() {
        let prompt = PromptTemplate::opening("AI in schools");
        assert!(prompt.contains("\"AI in schools\""));
        assert!(prompt.contains("opening statement"));
    }

    #[test]
    fn test_analysis_embeds_round_and_arguments() {
        let prompt = PromptTemplate::analysis(
            &config(),
            2,
            "Tutors scale.",
            "Teachers mentor.",
        );
        assert!(prompt.contains("Topic: AI in schools"));
        assert!(prompt.contains("Round: 2 of 3"));
        assert!(prompt.contains("Alpha's Argument:\nTutors scale."));
        assert!(prompt.contains("Beta's Argument:\nTeachers mentor."));
        assert!(prompt.contains("SCORES:\nAlpha: Argument=<0-10>"));
    }

    #[test]
    fn test_score_block_template_is_parseable_shape() {
        // Filling the placeholders must yield something the parser accepts
        let filled = PromptTemplate::score_block_format("Alpha", "Beta").replace("<0-10>", "5");
        let scores = parse_scores(&filled, "Alpha", "Beta");
        assert_eq!(scores.party1.total, 20);
        assert_eq!(scores.party2.total, 20);
    }

    #[test]
    fn test_verdict_embeds_history_and_totals() {
        let mut state = DebateState::new(config(), "Welcome");
        state
            .record_round(RoundRecord::new(
                1,
                "Personalized learning at scale.",
                "Human judgment matters.",
                "Both solid.",
                ScorePair::new(RoundScore::new(8, 7, 9, 6), RoundScore::new(9, 9, 8, 8)),
                Utc::now(),
            ))
            .unwrap();

        let prompt = PromptTemplate::verdict(&state);
        assert!(prompt.contains("concluding a debate on: \"AI in schools\""));
        assert!(prompt.contains("Personalized learning at scale."));
        assert!(prompt.contains("Human judgment matters."));
        assert!(prompt.contains("\"party1_name\": \"Alpha\""));
        assert!(prompt.contains("- Alpha: 30"));
        assert!(prompt.contains("- Beta: 34"));
        assert!(prompt.contains("Beta leads by 4 points"));
        assert!(prompt.contains("after 1 of 3 scheduled rounds"));
    }
}
