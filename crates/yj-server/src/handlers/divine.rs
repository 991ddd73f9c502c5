use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use yj_engine::commentary::{self, Commentary, CommentaryRequest, DEFAULT_QUESTION};
use yj_engine::{EngineError, Hexagram, ReferenceRecord, generate_divination, king_wen};
use yj_interpret::HexagramContext;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{
    CoinRequest, CoinResponse, HexagramRef, InterpretRequest, LineRequest, LineResponse,
};

/// POST /api/divine/coin - cast a hexagram with three coins per line
pub async fn coin(
    payload: Result<Option<Json<CoinRequest>>, JsonRejection>,
) -> Result<Json<CoinResponse>, ApiError> {
    let request = payload?.map(|Json(r)| r).unwrap_or_default();
    let divination = generate_divination(request.seed.as_deref(), request.topic.as_deref());
    Ok(Json(CoinResponse::from(&divination)))
}

/// GET /api/divine/hex/{code} - reference texts for one hexagram
pub async fn hexagram(
    State(state): State<AppState>,
    code: Result<Path<i64>, PathRejection>,
) -> Result<Json<ReferenceRecord>, ApiError> {
    let Path(code) = code?;
    Ok(Json(state.resolver().resolve_hexagram(code)?))
}

/// POST /api/divine/interpret - offline commentary for a cast
pub async fn interpret(
    State(state): State<AppState>,
    payload: Result<Json<InterpretRequest>, JsonRejection>,
) -> Result<Json<Commentary>, ApiError> {
    let Json(request) = payload?;
    let primary = ordinal_of(&request.hexagram.primary, "primary")?;
    let changed = ordinal_of(&request.hexagram.changed, "changed")?;
    let commentary = commentary::compose(
        &CommentaryRequest {
            question: &request.question,
            primary,
            moving: &request.hexagram.primary.moving,
            changed,
        },
        state.resolver(),
    )?;
    Ok(Json(commentary))
}

/// POST /api/divine/line - statement of one line, optionally interpreted
pub async fn line(
    State(state): State<AppState>,
    payload: Result<Json<LineRequest>, JsonRejection>,
) -> Result<Json<LineResponse>, ApiError> {
    let Json(request) = payload?;
    let text = state.resolver().resolve_line(request.code, request.line)?;
    let ai = if request.llm {
        Some(line_interpretation(&state, &request).await?)
    } else {
        None
    };
    Ok(Json(LineResponse {
        text: text.text,
        modern: text.modern,
        ai,
    }))
}

async fn line_interpretation(state: &AppState, request: &LineRequest) -> Result<String, ApiError> {
    let index = usize::try_from(request.line)
        .ok()
        .filter(|i| *i < 6)
        .ok_or_else(|| ApiError::BadRequest(format!("line {} is outside 0..=5", request.line)))?;
    let record = state.resolver().resolve_hexagram(request.code)?;
    let hexagram = u8::try_from(request.code)
        .ok()
        .and_then(Hexagram::from_ordinal)
        .ok_or(EngineError::OutOfRangeOrdinal(request.code))?;

    let ctx = HexagramContext::for_line(&hexagram, &record, index);
    let question = match request.question.trim() {
        "" => DEFAULT_QUESTION,
        q => q,
    };
    let interpretation = state
        .interpreter()
        .interpret(question, &ctx, request.model.as_deref())
        .await?;
    Ok(interpretation.content)
}

/// Ordinal of a referenced hexagram, from its code or else its name.
fn ordinal_of(reference: &HexagramRef, role: &str) -> Result<i64, ApiError> {
    if let Some(code) = reference.code {
        return Ok(code);
    }
    reference
        .name
        .as_deref()
        .and_then(king_wen::ordinal_for_name)
        .map(i64::from)
        .ok_or_else(|| ApiError::BadRequest(format!("{role} hexagram needs a code or a known name")))
}
