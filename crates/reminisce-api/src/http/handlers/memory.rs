//! Memory handlers.
//!
//! - `GET|POST /postMemory` (alias `/store`) - store a memory
//! - `GET|POST /getMemory` (alias `/query`) - recall memories for a query
//!
//! The write path reports failures through the HTTP status. The read path
//! always answers 200 once a query is present: upstream failures arrive as
//! recollection text.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use uuid::Uuid;

use reminisce_types::memory::Recollection;

use crate::http::error::AppError;
use crate::http::extractors::input::MemoryInput;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StoreMemoryResponse {
    pub success: bool,
    pub document_id: Uuid,
}

/// Store the `text` field as a memory.
pub async fn store_memory(
    State(state): State<AppState>,
    input: MemoryInput,
) -> Result<Json<StoreMemoryResponse>, AppError> {
    let text = input
        .text
        .ok_or_else(|| AppError::Validation("No text provided".to_string()))?;

    let document_id = state.writer.store(&text, input.metadata.as_ref()).await?;

    Ok(Json(StoreMemoryResponse {
        success: true,
        document_id,
    }))
}

/// Recall memories for the `query` field.
pub async fn recall_memory(
    State(state): State<AppState>,
    input: MemoryInput,
) -> Result<Json<Recollection>, AppError> {
    let query = input
        .query
        .ok_or_else(|| AppError::Validation("No query provided".to_string()))?;

    let recollection = state.reader.recall(&query).await?;
    Ok(Json(recollection))
}
