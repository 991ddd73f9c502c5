use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use yj_interpret::Interpretation;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::AiRequest;

/// POST /api/ai - forward a hexagram and question to the language model
pub async fn interpret(
    State(state): State<AppState>,
    payload: Result<Json<AiRequest>, JsonRejection>,
) -> Result<Json<Interpretation>, ApiError> {
    let Json(request) = payload?;
    let question = request.question.trim();
    if question.is_empty() {
        return Err(ApiError::BadRequest("question is required".to_string()));
    }
    if request.hexagram.name.trim().is_empty() {
        return Err(ApiError::BadRequest("hexagram.name is required".to_string()));
    }

    let interpretation = state
        .interpreter()
        .interpret(question, &request.hexagram, request.model.as_deref())
        .await?;
    tracing::info!(model = %interpretation.model, hexagram = %request.hexagram.name, "interpretation served");
    Ok(Json(interpretation))
}
