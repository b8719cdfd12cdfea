//! Answer checking endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::ApiQuery;
use crate::http::server::AppState;
use crate::models::AnswerVerdict;

/// Query parameters for an answer check
#[derive(Debug, Deserialize)]
pub struct CheckAnswerParams {
    pub question_id: i32,
    pub choice_id: i32,
}

/// POST /check_answer/?question_id=&choice_id= - is this choice correct?
async fn check_answer(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CheckAnswerParams>,
) -> Result<Json<AnswerVerdict>, ApiError> {
    let choice = state
        .store()
        .find_choice(params.question_id, params.choice_id)
        .await?
        .ok_or(ApiError::NotFound {
            detail: "Choice not found for the question",
        })?;

    tracing::debug!(
        question_id = params.question_id,
        choice_id = params.choice_id,
        correct = choice.is_correct,
        "Answer checked"
    );

    Ok(Json(AnswerVerdict::for_choice(&choice)))
}

/// Answer routes
pub fn router() -> Router<AppState> {
    Router::new().route("/check_answer/", post(check_answer))
}
