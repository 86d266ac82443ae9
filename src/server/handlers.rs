//! Route handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::entity::ResolvedEntities;

/// Body of `POST /sidebyside`
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveRequest {
    #[serde(rename = "queryTokens")]
    pub query_tokens: Vec<String>,
}

/// Query string of `GET /sidebyside`
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".to_string(),
    })
}

/// Resolve a pre-split token list
pub async fn resolve_tokens(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> Json<ResolvedEntities> {
    tracing::info!(tokens = ?request.query_tokens, "Resolving token list");

    let resolution = state.resolver.resolve_tokens(&request.query_tokens).await;
    if !resolution.unmatched.is_empty() {
        tracing::info!(unmatched = ?resolution.unmatched, "Tokens left unresolved");
    }

    Json(resolution.entities)
}

/// Resolve a raw search query containing the trigger phrase
pub async fn resolve_query(
    State(state): State<AppState>,
    Query(params): Query<ResolveQuery>,
) -> Result<Json<ResolvedEntities>, (StatusCode, Json<ErrorBody>)> {
    tracing::info!(query = %params.q, "Resolving search query");

    match state.resolver.resolve_query(&params.q).await {
        Some(resolution) => Ok(Json(resolution.entities)),
        None => {
            tracing::warn!(query = %params.q, "Query is not a side-by-side request");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "query does not contain \"side by side\"".to_string(),
                }),
            ))
        }
    }
}
