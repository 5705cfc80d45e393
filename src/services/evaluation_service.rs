use std::collections::HashMap;

use serde::Serialize;

use crate::models::domain::activity::{ActivityContent, BlankSentence, MatchPair};
use crate::models::dto::request::ActivitySubmission;

/// Outcome of evaluating one submission against one activity's answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub score: i32,
    pub items: Vec<ItemResult>,
}

/// Correctness of a single question, blank, or pair. Keys are the question
/// index, `sentence.blank` position, or pair id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemResult {
    pub key: String,
    pub correct: bool,
}

impl Evaluation {
    pub fn correct_count(&self) -> usize {
        self.items.iter().filter(|item| item.correct).count()
    }
}

pub struct EvaluationService;

impl EvaluationService {
    /// Score a submission against an activity's answer key.
    ///
    /// Never fails: an empty answer key or a submission whose shape does
    /// not match the activity type scores 0, with every keyed item marked
    /// incorrect. Unanswered items always count against the denominator.
    pub fn evaluate(content: &ActivityContent, submission: &ActivitySubmission) -> Evaluation {
        match content {
            ActivityContent::Reading { questions, .. }
            | ActivityContent::Listening { questions, .. }
            | ActivityContent::Quiz { questions } => {
                let expected: Vec<&str> =
                    questions.iter().map(|q| q.correct_answer.as_str()).collect();
                Self::score_choices(&expected, choice_selection(submission))
            }
            ActivityContent::Video { questions, .. } => {
                let expected: Vec<&str> = questions.iter().map(|q| q.correct.as_str()).collect();
                Self::score_choices(&expected, choice_selection(submission))
            }
            ActivityContent::FillBlank { sentences } => {
                Self::score_blanks(sentences, blank_fills(submission))
            }
            ActivityContent::DragDrop { pairs }
            | ActivityContent::MatchLines { pairs }
            | ActivityContent::FlipCards { pairs } => {
                Self::score_pairs(pairs, pair_assignments(submission))
            }
        }
    }

    /// Single-choice questions: exact, case-sensitive match against the
    /// stored answer, positional by question index.
    fn score_choices(expected: &[&str], selected: Option<&HashMap<usize, String>>) -> Evaluation {
        let items: Vec<ItemResult> = expected
            .iter()
            .enumerate()
            .map(|(index, answer)| {
                let correct = selected
                    .and_then(|s| s.get(&index))
                    .map(|chosen| chosen == answer)
                    .unwrap_or(false);
                ItemResult {
                    key: index.to_string(),
                    correct,
                }
            })
            .collect();

        Self::finish(items)
    }

    /// Fill-in-the-blank: one item per blank token across all sentences,
    /// compared positionally after trimming and lowercasing both sides.
    fn score_blanks(
        sentences: &[BlankSentence],
        filled: Option<&HashMap<usize, Vec<String>>>,
    ) -> Evaluation {
        let mut items = Vec::new();

        for (sentence_index, sentence) in sentences.iter().enumerate() {
            let expected = sentence.answer.values();
            let submitted = filled.and_then(|f| f.get(&sentence_index));

            for blank_index in 0..sentence.blank_count() {
                let correct = match (
                    expected.get(blank_index),
                    submitted.and_then(|values| values.get(blank_index)),
                ) {
                    (Some(want), Some(got)) => {
                        got.trim().to_lowercase() == want.trim().to_lowercase()
                    }
                    _ => false,
                };
                items.push(ItemResult {
                    key: format!("{}.{}", sentence_index, blank_index),
                    correct,
                });
            }
        }

        Self::finish(items)
    }

    /// Pairing games: an assignment is correct iff the match assigned to a
    /// term carries the term's own pair id.
    fn score_pairs(pairs: &[MatchPair], assigned: Option<&HashMap<String, String>>) -> Evaluation {
        let items: Vec<ItemResult> = pairs
            .iter()
            .map(|pair| {
                let correct = assigned
                    .and_then(|a| a.get(&pair.id))
                    .map(|match_id| *match_id == pair.id)
                    .unwrap_or(false);
                ItemResult {
                    key: pair.id.clone(),
                    correct,
                }
            })
            .collect();

        Self::finish(items)
    }

    fn finish(items: Vec<ItemResult>) -> Evaluation {
        let correct = items.iter().filter(|item| item.correct).count();
        Evaluation {
            score: percent(correct, items.len()),
            items,
        }
    }
}

/// `round(100 * correct / total)` as an integer, 0 when there is nothing
/// to grade. Rounds to nearest, never truncates.
fn percent(correct: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    (100.0 * correct as f64 / total as f64).round() as i32
}

fn choice_selection(submission: &ActivitySubmission) -> Option<&HashMap<usize, String>> {
    match submission {
        ActivitySubmission::Choices { selected } => Some(selected),
        _ => None,
    }
}

fn blank_fills(submission: &ActivitySubmission) -> Option<&HashMap<usize, Vec<String>>> {
    match submission {
        ActivitySubmission::Blanks { filled } => Some(filled),
        _ => None,
    }
}

fn pair_assignments(submission: &ActivitySubmission) -> Option<&HashMap<String, String>> {
    match submission {
        ActivitySubmission::Pairs { assigned } => Some(assigned),
        _ => None,
    }
}
