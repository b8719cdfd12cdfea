//! quizctl-server: HTTP quiz API
//!
//! Stores questions with multiple-choice answers and exposes them over
//! HTTP: create a question with its choices, read a question, read its
//! choices, and check a submitted answer.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;

pub use config::{DatabaseConfig, QuizConfig, ServerSettings};
pub use error::{ServerError, ServerResult};
