// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::question::Question;

/// A stored quiz. Questions are append-only and keep insertion order.
///
/// The question list is never serialized from here: the author view of a
/// single question is returned at creation time, and the taker view goes
/// through redaction.
#[derive(Debug, Clone, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing)]
    pub questions: Vec<Question>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Summary row for the quiz list.
#[derive(Debug, Serialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    #[serde(rename = "questionCount")]
    pub question_count: usize,
}

impl From<&Quiz> for QuizSummary {
    fn from(quiz: &Quiz) -> Self {
        QuizSummary {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            question_count: quiz.questions.len(),
        }
    }
}

/// DTO for creating a new quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
}
