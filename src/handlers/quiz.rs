// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        answer::SubmitRequest,
        question::CreateQuestionRequest,
        quiz::CreateQuizRequest,
    },
    scoring,
    store::QuizStore,
};

/// Creates a new quiz from a title. The body goes through a raw value so a
/// missing or malformed `title` surfaces as 400 rather than the extractor's
/// 422, matching the other write paths.
pub async fn create_quiz(
    State(store): State<QuizStore>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateQuizRequest = serde_json::from_value(body)?;
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let quiz = store.create_quiz(payload.title);
    tracing::info!("Created quiz {}", quiz.id);

    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Lists all quizzes as summaries (id, title, question count).
pub async fn list_quizzes(State(store): State<QuizStore>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(store.list_quizzes()))
}

/// Validates and appends a question to a quiz.
///
/// Returns the stored question including its generated IDs and answer
/// material. This is the author path; takers fetch through `get_questions`.
///
/// The body is taken as a raw value so that shape errors (unknown type tag,
/// missing options, fields illegal for the declared type) surface as 400
/// rather than the extractor's 422.
pub async fn add_question(
    State(store): State<QuizStore>,
    Path(quiz_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let payload = CreateQuestionRequest::from_body(body)?;
    payload.validate()?;

    let question = payload.into_question();
    let created = store
        .add_question(&quiz_id, question)
        .ok_or_else(|| AppError::NotFound("quiz not found".to_string()))?;

    tracing::info!("Added question {} to quiz {}", created.id(), quiz_id);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Returns the taker-safe question list: no `correct` flags, no stored
/// answers.
pub async fn get_questions(
    State(store): State<QuizStore>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store
        .list_questions(&quiz_id)
        .ok_or_else(|| AppError::NotFound("quiz not found".to_string()))?;

    Ok(Json(scoring::redact(&questions)))
}

/// Scores a submission against the quiz's stored questions.
pub async fn submit_answers(
    State(store): State<QuizStore>,
    Path(quiz_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let payload: SubmitRequest = serde_json::from_value(body)?;
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let questions = store
        .list_questions(&quiz_id)
        .ok_or_else(|| AppError::NotFound("quiz not found".to_string()))?;

    let result = scoring::score(&questions, &payload.answers);
    tracing::info!(
        "Scored submission for quiz {}: {}/{}",
        quiz_id,
        result.score,
        result.total
    );

    Ok(Json(result))
}
