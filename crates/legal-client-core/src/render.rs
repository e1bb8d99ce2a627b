//! Text formatting shared by every front-end

use crate::api::SourceDocument;

/// Assistant message appended to the transcript when a chat call fails
pub const CHAT_APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

/// Split an answer into paragraphs, one per line break
pub fn answer_paragraphs(answer: &str) -> Vec<&str> {
    answer.split('\n').collect()
}

/// Relevance score with three decimals
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

pub fn score_line(source: &SourceDocument) -> String {
    format!("Relevance score: {}", format_score(source.relevance_score))
}
