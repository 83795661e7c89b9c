// src/models/answer.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO for submitting a quiz for scoring.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(nested)]
    pub answers: Vec<SubmittedAnswer>,
}

/// One taker answer. Carries no type tag: the stored question's type governs
/// which of the optional fields is consulted, so a taker cannot change how a
/// question is interpreted.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: String,
    pub selected_option_ids: Option<Vec<String>>,
    pub selected_option_id: Option<String>,
    #[validate(length(max = 300, message = "textAnswer too long"))]
    pub text_answer: Option<String>,
}

/// Submit response: points earned and the quiz's question count.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u32,
    pub total: usize,
}
