use crate::types::{ConceptPair, ScoreSummary};

/// Canonical form used to compare typed answers
fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether a typed answer matches the pair's target word. Case is ignored,
/// as is whitespace around the answer.
pub fn check_answer(pair: &ConceptPair, answer: &str) -> bool {
    normalize_answer(answer) == pair.target_text.to_lowercase()
}

/// Score answers against pairs by position. Missing or blank answers count
/// as unanswered and wrong.
pub fn score(pairs: &[ConceptPair], answers: &[String]) -> ScoreSummary {
    let mut summary = ScoreSummary {
        total: pairs.len(),
        ..ScoreSummary::default()
    };

    for (pair, answer) in pairs.iter().zip(answers) {
        if answer.trim().is_empty() {
            continue;
        }
        summary.answered += 1;
        if check_answer(pair, answer) {
            summary.correct += 1;
        }
    }

    if summary.total > 0 {
        summary.percentage = (summary.correct as f64 / summary.total as f64 * 100.0).round() as u32;
    }
    summary
}
