//! Choice endpoints

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::ApiPath;
use crate::http::server::AppState;
use crate::models::ChoiceSummary;

/// GET /choices/{question_id} - list choices for a question
///
/// An empty result is reported as 404 whether or not the question exists.
async fn list_choices(
    State(state): State<AppState>,
    ApiPath(question_id): ApiPath<i32>,
) -> Result<Json<Vec<ChoiceSummary>>, ApiError> {
    let choices = state.store().list_choices(question_id).await?;

    if choices.is_empty() {
        return Err(ApiError::NotFound {
            detail: "Choices not found",
        });
    }

    Ok(Json(choices.into_iter().map(ChoiceSummary::from).collect()))
}

/// Choice routes
pub fn router() -> Router<AppState> {
    Router::new().route("/choices/{question_id}", get(list_choices))
}
