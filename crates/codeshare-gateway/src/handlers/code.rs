use crate::error::{AppError, Result};
use crate::model::{CodeResponse, CreateCodeRequest, CreateCodeResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use codeshare_core::ShareId;
use tracing::trace;

pub async fn create_code_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateCodeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateCodeResponse>)> {
    let Json(request) = payload?;
    let params = request.into_params()?;

    let created = state.service().create(params).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn get_code_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CodeResponse>> {
    // Anything that is not a well-formed id was never handed out by create.
    let id = ShareId::new(id).map_err(|e| {
        trace!(error = %e, "rejecting malformed share id");
        AppError::NotFound("code not found".to_string())
    })?;

    let record = state.service().fetch(&id).await?;
    Ok(Json(record.into()))
}
