//! Store implementations for quiz data
//!
//! Handlers depend on [`QuizStore`] so the backing database can be swapped:
//! - `PgQuizStore` for PostgreSQL
//! - `MemoryQuizStore` for tests and local demos

pub mod memory;
pub mod questions;

use async_trait::async_trait;

use crate::models::{Choice, NewQuestion, Question};

pub use memory::MemoryQuizStore;
pub use questions::PgQuizStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Data access for questions and their choices
#[async_trait]
pub trait QuizStore: Send + Sync + 'static {
    /// Fetch a question by id.
    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError>;

    /// All choices belonging to a question, ordered by id.
    async fn list_choices(&self, question_id: i32) -> Result<Vec<Choice>, DbError>;

    /// Insert a question and all of its choices atomically.
    async fn create_question(&self, new: NewQuestion) -> Result<Question, DbError>;

    /// Fetch a choice only if it belongs to the given question.
    async fn find_choice(&self, question_id: i32, choice_id: i32)
        -> Result<Option<Choice>, DbError>;

    /// Connectivity check for health reporting.
    async fn ping(&self) -> Result<(), DbError>;
}
