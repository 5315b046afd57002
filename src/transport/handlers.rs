use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};

use crate::{
    quote::Quote,
    service::validate::parse_quote_id,
    transport::{AppState, error::ApiError},
};

/// Request header selecting quotes of one author on `GET /quotes`.
pub const AUTHOR_HEADER: &str = "author";

/// `POST /quotes`
#[tracing::instrument(skip_all)]
pub async fn create_quote(
    State(state): State<AppState>,
    body: Result<Json<Quote>, JsonRejection>,
) -> Result<(StatusCode, Json<Quote>), ApiError> {
    let Json(mut quote) =
        body.map_err(|e| ApiError::BadRequest(format!("invalid request body: {}", e.body_text())))?;
    state.service.add_quote(&state.context(), &mut quote)?;
    Ok((StatusCode::CREATED, Json(quote)))
}

/// `GET /quotes`, narrowed to one author when the `author` header is set.
#[tracing::instrument(skip_all)]
pub async fn list_quotes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let author = headers
        .get(AUTHOR_HEADER)
        .map(|v| {
            v.to_str()
                .map_err(|_| ApiError::BadRequest("author header must be valid UTF-8".to_string()))
        })
        .transpose()?
        .filter(|v| !v.is_empty());

    let ctx = state.context();
    let quotes = match author {
        Some(author) => state.service.quotes_by_author(&ctx, author)?,
        None => state.service.list_quotes(&ctx)?,
    };
    Ok(Json(quotes))
}

/// `GET /quotes/random`
#[tracing::instrument(skip_all)]
pub async fn random_quote(State(state): State<AppState>) -> Result<Json<Quote>, ApiError> {
    let quote = state.service.random_quote(&state.context())?;
    Ok(Json(quote))
}

/// `DELETE /quotes/{id}`
#[tracing::instrument(skip_all)]
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_quote_id(&raw_id).map_err(|e| ApiError::Service(e.into()))?;
    state.service.delete_quote(&state.context(), id)?;
    Ok(StatusCode::NO_CONTENT)
}
