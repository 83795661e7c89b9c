// src/store.rs

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::models::{
    question::Question,
    quiz::{Quiz, QuizSummary},
};

/// In-memory quiz repository, shared through the axum state.
///
/// Quizzes keep insertion order; lookups are by UUID string. Readers get
/// cloned snapshots, so the scorer and redactor operate on data that cannot
/// change under them.
#[derive(Clone, Default)]
pub struct QuizStore {
    quizzes: Arc<RwLock<Vec<Quiz>>>,
}

impl QuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a quiz with a fresh ID and no questions.
    pub fn create_quiz(&self, title: String) -> Quiz {
        let quiz = Quiz {
            id: Uuid::new_v4().to_string(),
            title,
            questions: Vec::new(),
            created_at: chrono::Utc::now(),
        };
        let mut quizzes = self.quizzes.write().expect("quiz store lock poisoned");
        quizzes.push(quiz.clone());
        quiz
    }

    /// Lists quiz summaries in creation order.
    pub fn list_quizzes(&self) -> Vec<QuizSummary> {
        let quizzes = self.quizzes.read().expect("quiz store lock poisoned");
        quizzes.iter().map(QuizSummary::from).collect()
    }

    /// Appends an already-validated question to a quiz. Returns the stored
    /// question (author view), or `None` if the quiz does not exist.
    pub fn add_question(&self, quiz_id: &str, question: Question) -> Option<Question> {
        let mut quizzes = self.quizzes.write().expect("quiz store lock poisoned");
        let quiz = quizzes.iter_mut().find(|q| q.id == quiz_id)?;
        quiz.questions.push(question.clone());
        Some(question)
    }

    /// Snapshot of a quiz's question list in insertion order, or `None` if
    /// the quiz does not exist.
    pub fn list_questions(&self, quiz_id: &str) -> Option<Vec<Question>> {
        let quizzes = self.quizzes.read().expect("quiz store lock poisoned");
        quizzes
            .iter()
            .find(|q| q.id == quiz_id)
            .map(|q| q.questions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{CreateOptionRequest, CreateQuestionRequest};

    #[test]
    fn created_quiz_is_listed_with_question_count() {
        let store = QuizStore::new();
        let quiz = store.create_quiz("Sample Quiz".to_string());

        let listed = store.list_quizzes();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, quiz.id);
        assert_eq!(listed[0].title, "Sample Quiz");
        assert_eq!(listed[0].question_count, 0);

        let question = CreateQuestionRequest::Single {
            text: "Capital of France?".to_string(),
            options: vec![
                CreateOptionRequest {
                    text: "Paris".to_string(),
                    correct: true,
                },
                CreateOptionRequest {
                    text: "London".to_string(),
                    correct: false,
                },
            ],
        }
        .into_question();
        assert!(store.add_question(&quiz.id, question).is_some());
        assert_eq!(store.list_quizzes()[0].question_count, 1);
    }

    #[test]
    fn unknown_quiz_yields_none() {
        let store = QuizStore::new();
        assert!(store.list_questions("missing").is_none());
        let question = CreateQuestionRequest::Text {
            text: "q".to_string(),
            answer: "a".to_string(),
            word_limit: None,
        }
        .into_question();
        assert!(store.add_question("missing", question).is_none());
    }

    #[test]
    fn questions_keep_insertion_order() {
        let store = QuizStore::new();
        let quiz = store.create_quiz("ordered".to_string());
        for i in 0..3 {
            let question = CreateQuestionRequest::Text {
                text: format!("question {}", i),
                answer: "a".to_string(),
                word_limit: None,
            }
            .into_question();
            store.add_question(&quiz.id, question);
        }
        let questions = store.list_questions(&quiz.id).unwrap();
        let texts: Vec<_> = questions
            .iter()
            .map(|q| match q {
                Question::Text { text, .. } => text.clone(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(texts, ["question 0", "question 1", "question 2"]);
    }
}
