// src/models/question.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// A stored question, tagged by type.
///
/// Each variant carries only the fields legal for its type, so a text
/// question with options (or a choice question with a stored answer) is
/// unrepresentable. This is the authoritative "author view": choice options
/// keep their `correct` flag and text questions keep their `answer`. It must
/// never be serialized on the taker-facing read path; see [`TakerQuestion`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Question {
    Single {
        id: String,
        text: String,
        options: Vec<AnswerOption>,
    },
    Multiple {
        id: String,
        text: String,
        options: Vec<AnswerOption>,
    },
    Text {
        id: String,
        text: String,
        answer: String,
        #[serde(rename = "wordLimit")]
        word_limit: u32,
    },
}

impl Question {
    pub fn id(&self) -> &str {
        match self {
            Question::Single { id, .. }
            | Question::Multiple { id, .. }
            | Question::Text { id, .. } => id,
        }
    }
}

/// A candidate answer choice for choice-type questions.
/// The option ID is generated once at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    pub correct: bool,
}

pub const MAX_ANSWER_LEN: usize = 300;
pub const MAX_WORD_LIMIT: u32 = 300;
pub const DEFAULT_WORD_LIMIT: u32 = 300;
pub const MIN_OPTIONS: usize = 2;

/// DTO for appending a question to a quiz.
///
/// The `type` tag in the request body selects the variant, so cross-type
/// fields (`options` on a text question, `answer` on a choice question) are
/// simply dropped at deserialization. The count/length rules that serde
/// cannot express live in [`CreateQuestionRequest::validate`].
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CreateQuestionRequest {
    Single {
        text: String,
        options: Vec<CreateOptionRequest>,
    },
    Multiple {
        text: String,
        options: Vec<CreateOptionRequest>,
    },
    Text {
        text: String,
        answer: String,
        #[serde(rename = "wordLimit")]
        word_limit: Option<u32>,
    },
}

#[derive(Debug, Deserialize)]
pub struct CreateOptionRequest {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

impl CreateQuestionRequest {
    /// Deserializes a request body, rejecting fields that are illegal for
    /// the declared question type (`options` on a text question, `answer`
    /// or `wordLimit` on a choice question). Serde would otherwise drop
    /// them silently, and a payload mixing answer material across types is
    /// an authoring mistake that must surface as a validation error.
    pub fn from_body(body: serde_json::Value) -> Result<Self, AppError> {
        let forbidden: &[&str] = match body.get("type").and_then(|t| t.as_str()) {
            Some("single") | Some("multiple") => &["answer", "wordLimit"],
            Some("text") => &["options"],
            _ => &[],
        };
        if let Some(object) = body.as_object() {
            for key in forbidden {
                if object.contains_key(*key) {
                    return Err(AppError::BadRequest(format!(
                        "{} is not allowed for this question type",
                        key
                    )));
                }
            }
        }
        Ok(serde_json::from_value(body)?)
    }

    /// Enforces the per-type structural rules before a question may enter
    /// storage, so the redactor and scorer only ever see well-formed data.
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            CreateQuestionRequest::Single { text, options } => {
                validate_question_text(text)?;
                validate_options(options)?;
                let correct_count = options.iter().filter(|o| o.correct).count();
                if correct_count != 1 {
                    return Err(AppError::BadRequest(
                        "single choice must have exactly 1 correct option".to_string(),
                    ));
                }
            }
            CreateQuestionRequest::Multiple { text, options } => {
                validate_question_text(text)?;
                validate_options(options)?;
                let correct_count = options.iter().filter(|o| o.correct).count();
                if correct_count < 1 {
                    return Err(AppError::BadRequest(
                        "multiple choice must have at least 1 correct option".to_string(),
                    ));
                }
            }
            CreateQuestionRequest::Text {
                text,
                answer,
                word_limit,
            } => {
                validate_question_text(text)?;
                if answer.trim().is_empty() {
                    return Err(AppError::BadRequest("answer must not be empty".to_string()));
                }
                if answer.chars().count() > MAX_ANSWER_LEN {
                    return Err(AppError::BadRequest(format!(
                        "answer must be at most {} characters",
                        MAX_ANSWER_LEN
                    )));
                }
                if let Some(limit) = word_limit {
                    if *limit < 1 || *limit > MAX_WORD_LIMIT {
                        return Err(AppError::BadRequest(format!(
                            "wordLimit must be between 1 and {}",
                            MAX_WORD_LIMIT
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Converts a validated request into a stored [`Question`], assigning
    /// fresh IDs to the question and every option.
    pub fn into_question(self) -> Question {
        let id = Uuid::new_v4().to_string();
        match self {
            CreateQuestionRequest::Single { text, options } => Question::Single {
                id,
                text,
                options: assign_option_ids(options),
            },
            CreateQuestionRequest::Multiple { text, options } => Question::Multiple {
                id,
                text,
                options: assign_option_ids(options),
            },
            CreateQuestionRequest::Text {
                text,
                answer,
                word_limit,
            } => Question::Text {
                id,
                text,
                answer,
                word_limit: word_limit.unwrap_or(DEFAULT_WORD_LIMIT),
            },
        }
    }
}

fn validate_question_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "question text must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_options(options: &[CreateOptionRequest]) -> Result<(), AppError> {
    if options.len() < MIN_OPTIONS {
        return Err(AppError::BadRequest(format!(
            "choice questions need at least {} options",
            MIN_OPTIONS
        )));
    }
    for opt in options {
        if opt.text.trim().is_empty() {
            return Err(AppError::BadRequest(
                "option text must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

fn assign_option_ids(options: Vec<CreateOptionRequest>) -> Vec<AnswerOption> {
    options
        .into_iter()
        .map(|opt| AnswerOption {
            id: Uuid::new_v4().to_string(),
            text: opt.text,
            correct: opt.correct,
        })
        .collect()
}

/// DTO for sending a question to a quiz taker (excludes all answer material).
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TakerQuestion {
    Single {
        id: String,
        text: String,
        options: Vec<TakerOption>,
    },
    Multiple {
        id: String,
        text: String,
        options: Vec<TakerOption>,
    },
    Text {
        id: String,
        text: String,
        #[serde(rename = "wordLimit")]
        word_limit: u32,
    },
}

/// An option as shown to a taker: no `correct` flag.
#[derive(Debug, Serialize)]
pub struct TakerOption {
    pub id: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(correct_flags: &[bool]) -> Vec<CreateOptionRequest> {
        correct_flags
            .iter()
            .enumerate()
            .map(|(i, &correct)| CreateOptionRequest {
                text: format!("option {}", i),
                correct,
            })
            .collect()
    }

    #[test]
    fn single_requires_exactly_one_correct() {
        let none = CreateQuestionRequest::Single {
            text: "q".to_string(),
            options: options(&[false, false]),
        };
        assert!(none.validate().is_err());

        let two = CreateQuestionRequest::Single {
            text: "q".to_string(),
            options: options(&[true, true]),
        };
        assert!(two.validate().is_err());

        let one = CreateQuestionRequest::Single {
            text: "q".to_string(),
            options: options(&[true, false]),
        };
        assert!(one.validate().is_ok());
    }

    #[test]
    fn multiple_requires_at_least_one_correct() {
        let none = CreateQuestionRequest::Multiple {
            text: "q".to_string(),
            options: options(&[false, false, false]),
        };
        assert!(none.validate().is_err());

        let all = CreateQuestionRequest::Multiple {
            text: "q".to_string(),
            options: options(&[true, true, true]),
        };
        assert!(all.validate().is_ok());
    }

    #[test]
    fn choice_questions_need_two_options() {
        let short = CreateQuestionRequest::Single {
            text: "q".to_string(),
            options: options(&[true]),
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn text_answer_and_word_limit_bounds() {
        let empty_answer = CreateQuestionRequest::Text {
            text: "q".to_string(),
            answer: "   ".to_string(),
            word_limit: None,
        };
        assert!(empty_answer.validate().is_err());

        let long_answer = CreateQuestionRequest::Text {
            text: "q".to_string(),
            answer: "x".repeat(MAX_ANSWER_LEN + 1),
            word_limit: None,
        };
        assert!(long_answer.validate().is_err());

        let zero_limit = CreateQuestionRequest::Text {
            text: "q".to_string(),
            answer: "Earth".to_string(),
            word_limit: Some(0),
        };
        assert!(zero_limit.validate().is_err());

        let over_limit = CreateQuestionRequest::Text {
            text: "q".to_string(),
            answer: "Earth".to_string(),
            word_limit: Some(MAX_WORD_LIMIT + 1),
        };
        assert!(over_limit.validate().is_err());
    }

    #[test]
    fn word_limit_defaults_to_300() {
        let req = CreateQuestionRequest::Text {
            text: "q".to_string(),
            answer: "Earth".to_string(),
            word_limit: None,
        };
        match req.into_question() {
            Question::Text { word_limit, .. } => assert_eq!(word_limit, DEFAULT_WORD_LIMIT),
            other => panic!("expected text question, got {:?}", other),
        }
    }

    #[test]
    fn request_type_tag_selects_variant() {
        let req: CreateQuestionRequest = serde_json::from_value(serde_json::json!({
            "text": "Capital of France?",
            "type": "single",
            "options": [{"text": "Paris", "correct": true}, {"text": "London"}],
        }))
        .unwrap();
        assert!(matches!(req, CreateQuestionRequest::Single { .. }));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn cross_type_fields_are_rejected_not_dropped() {
        // text question carrying options
        let result = CreateQuestionRequest::from_body(serde_json::json!({
            "text": "Name of planet we live on",
            "type": "text",
            "answer": "Earth",
            "options": [{"text": "Earth", "correct": true}, {"text": "Mars"}],
        }));
        assert!(result.is_err());

        // single question carrying a stored answer
        let result = CreateQuestionRequest::from_body(serde_json::json!({
            "text": "Capital of France?",
            "type": "single",
            "answer": "Paris",
            "options": [{"text": "Paris", "correct": true}, {"text": "London"}],
        }));
        assert!(result.is_err());

        // multiple question carrying a word limit
        let result = CreateQuestionRequest::from_body(serde_json::json!({
            "text": "Pick prime numbers",
            "type": "multiple",
            "wordLimit": 50,
            "options": [{"text": "2", "correct": true}, {"text": "4"}],
        }));
        assert!(result.is_err());
    }

    #[test]
    fn from_body_accepts_well_formed_payloads() {
        let req = CreateQuestionRequest::from_body(serde_json::json!({
            "text": "Name of planet we live on",
            "type": "text",
            "answer": "Earth",
        }))
        .unwrap();
        assert!(matches!(req, CreateQuestionRequest::Text { .. }));

        // unknown type tag still fails, through deserialization
        let result = CreateQuestionRequest::from_body(serde_json::json!({
            "text": "essay",
            "type": "essay",
            "answer": "long",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn option_ids_are_unique() {
        let req = CreateQuestionRequest::Multiple {
            text: "q".to_string(),
            options: options(&[true, true, false]),
        };
        match req.into_question() {
            Question::Multiple { options, .. } => {
                let mut ids: Vec<_> = options.iter().map(|o| o.id.clone()).collect();
                ids.sort();
                ids.dedup();
                assert_eq!(ids.len(), 3);
            }
            other => panic!("expected multiple question, got {:?}", other),
        }
    }
}
