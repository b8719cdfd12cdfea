//! Quiz records and API payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Question row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
}

/// Choice row. Belongs to exactly one question through `question_id`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Choice {
    pub id: i32,
    pub choice_text: String,
    pub is_correct: bool,
    pub question_id: i32,
}

/// Choice as returned to clients; correctness is withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSummary {
    pub id: i32,
    pub choice_text: String,
    pub question_id: i32,
}

impl From<Choice> for ChoiceSummary {
    fn from(c: Choice) -> Self {
        Self {
            id: c.id,
            choice_text: c.choice_text,
            question_id: c.question_id,
        }
    }
}

/// Create question request
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub question_text: String,
    pub choices: Vec<NewChoice>,
}

/// Choice submitted alongside a new question
#[derive(Debug, Clone, Deserialize)]
pub struct NewChoice {
    pub choice_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// Create question response
#[derive(Debug, Serialize)]
pub struct QuestionCreated {
    pub message: &'static str,
    pub question_id: i32,
}

impl QuestionCreated {
    pub fn new(question_id: i32) -> Self {
        Self {
            message: "Question and choices created successfully",
            question_id,
        }
    }
}

/// Answer check response
#[derive(Debug, Serialize)]
pub struct AnswerVerdict {
    pub message: &'static str,
}

impl AnswerVerdict {
    pub fn for_choice(choice: &Choice) -> Self {
        let message = if choice.is_correct {
            "Correct answer!"
        } else {
            "Incorrect answer!"
        };
        Self { message }
    }
}
