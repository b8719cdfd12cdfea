//! Question endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiPath};
use crate::http::server::AppState;
use crate::models::{NewQuestion, Question, QuestionCreated};

/// GET /questions/{question_id} - get a single question
async fn get_question(
    State(state): State<AppState>,
    ApiPath(question_id): ApiPath<i32>,
) -> Result<Json<Question>, ApiError> {
    let question = state
        .store()
        .get_question(question_id)
        .await?
        .ok_or(ApiError::NotFound {
            detail: "Question is not found",
        })?;

    Ok(Json(question))
}

/// POST /questions/ - create a question together with its choices
async fn create_question(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewQuestion>,
) -> Result<Json<QuestionCreated>, ApiError> {
    let choice_count = req.choices.len();
    let question = state.store().create_question(req).await?;

    tracing::info!(
        question_id = question.id,
        choices = choice_count,
        "Question created"
    );

    Ok(Json(QuestionCreated::new(question.id)))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions/", post(create_question))
        .route("/questions/{question_id}", get(get_question))
}
