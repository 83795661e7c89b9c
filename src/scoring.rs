// src/scoring.rs

use std::collections::{HashMap, HashSet};

use crate::models::{
    answer::{ScoreResult, SubmittedAnswer},
    question::{AnswerOption, Question, TakerOption, TakerQuestion},
};

/// Produces the taker-safe view of a quiz's questions.
///
/// Strips the `correct` flag from every option and the stored `answer` from
/// text questions. Question and option order is preserved. Assumes
/// well-formed input; only internally validated questions reach this point.
pub fn redact(questions: &[Question]) -> Vec<TakerQuestion> {
    questions
        .iter()
        .map(|q| match q {
            Question::Single { id, text, options } => TakerQuestion::Single {
                id: id.clone(),
                text: text.clone(),
                options: redact_options(options),
            },
            Question::Multiple { id, text, options } => TakerQuestion::Multiple {
                id: id.clone(),
                text: text.clone(),
                options: redact_options(options),
            },
            Question::Text {
                id,
                text,
                word_limit,
                ..
            } => TakerQuestion::Text {
                id: id.clone(),
                text: text.clone(),
                word_limit: *word_limit,
            },
        })
        .collect()
}

fn redact_options(options: &[AnswerOption]) -> Vec<TakerOption> {
    options
        .iter()
        .map(|o| TakerOption {
            id: o.id.clone(),
            text: o.text.clone(),
        })
        .collect()
}

/// Scores a submission against a quiz's stored questions.
///
/// `total` is always the quiz's question count, independent of how many
/// answers were submitted. One point per correctly answered question, no
/// partial credit. An answer whose `question_id` matches no stored question
/// contributes nothing; only the first submission per question counts, later
/// duplicates are ignored.
pub fn score(questions: &[Question], answers: &[SubmittedAnswer]) -> ScoreResult {
    let by_id: HashMap<&str, &Question> = questions.iter().map(|q| (q.id(), q)).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut score = 0;

    for answer in answers {
        let Some(question) = by_id.get(answer.question_id.as_str()) else {
            continue;
        };
        if !seen.insert(answer.question_id.as_str()) {
            continue;
        }
        if is_correct(question, answer) {
            score += 1;
        }
    }

    ScoreResult {
        score,
        total: questions.len(),
    }
}

/// Dispatches on the stored question's type; the submitted answer carries no
/// type tag of its own.
fn is_correct(question: &Question, answer: &SubmittedAnswer) -> bool {
    match question {
        Question::Single { options, .. } => {
            // Prefer the first element of selectedOptionIds, fall back to
            // selectedOptionId.
            let selected = answer
                .selected_option_ids
                .as_ref()
                .and_then(|ids| ids.first())
                .or(answer.selected_option_id.as_ref());
            let correct = options.iter().find(|o| o.correct);
            match (selected, correct) {
                (Some(sel), Some(opt)) => *sel == opt.id,
                _ => false,
            }
        }
        Question::Multiple { options, .. } => {
            let selected: HashSet<&str> = answer
                .selected_option_ids
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(String::as_str)
                .collect();
            let correct: HashSet<&str> = options
                .iter()
                .filter(|o| o.correct)
                .map(|o| o.id.as_str())
                .collect();
            selected == correct
        }
        Question::Text { answer: stored, .. } => {
            let given = answer
                .text_answer
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase();
            let expected = stored.trim().to_lowercase();
            // An empty side never matches, even if both are empty.
            !given.is_empty() && !expected.is_empty() && given == expected
        }
    }
}
