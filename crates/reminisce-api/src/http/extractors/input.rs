//! Memory request input: query string merged with an optional JSON body.
//!
//! Clients send `text`/`query` either as query parameters or as JSON body
//! fields. Body fields win. `metadata` is only read from the body. Blank
//! values count as absent.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, Query, Request};
use serde_json::Value;

use reminisce_types::memory::Metadata;

use crate::http::error::AppError;

/// Fields accepted by the memory routes.
#[derive(Debug, Default)]
pub struct MemoryInput {
    pub text: Option<String>,
    pub query: Option<String>,
    pub metadata: Option<Metadata>,
}

impl MemoryInput {
    /// Merge query parameters with a raw request body.
    pub fn from_parts(params: HashMap<String, String>, body: &[u8]) -> Result<Self, AppError> {
        let mut input = MemoryInput {
            text: non_blank(params.get("text").cloned()),
            query: non_blank(params.get("query").cloned()),
            metadata: None,
        };

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(input);
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?;
        let Value::Object(mut fields) = value else {
            return Err(AppError::Validation(
                "Invalid JSON body: expected an object".to_string(),
            ));
        };

        if let Some(text) = non_blank(string_field(&fields, "text")) {
            input.text = Some(text);
        }
        if let Some(query) = non_blank(string_field(&fields, "query")) {
            input.query = Some(query);
        }
        input.metadata = match fields.remove("metadata") {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                return Err(AppError::Validation(
                    "metadata must be a JSON object".to_string(),
                ));
            }
        };

        Ok(input)
    }
}

fn string_field(fields: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl<S> FromRequest<S> for MemoryInput
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(req.uri())
            .map_err(|e| AppError::Validation(format!("Invalid query string: {e}")))?;
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read request body: {e}")))?;

        MemoryInput::from_parts(params, &body)
    }
}
