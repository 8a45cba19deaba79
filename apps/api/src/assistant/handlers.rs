//! Axum route handlers for the assistant API.
//!
//! Handlers are thin: decode, delegate to the task operation, encode.
//! Input preconditions live in the operations themselves so they hold for
//! every caller, not just this surface.

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::profile::ProfileDocument;
use crate::state::AppState;

use super::chat::{chat, ChatReply, ChatRequest};
use super::content::{generate_cover_letter, generate_cv, GeneratedDocument, GenerationRequest};
use super::fit::{job_fit_analysis, FitOutcome, FitRequest};
use super::research::{company_research, ResearchReport, ResearchRequest};
use super::url_analysis::{url_analysis, UrlAnalysisReport, UrlAnalysisRequest};

/// GET /api/v1/profile
///
/// Read-only echo of the collaborator-owned profile document.
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<ProfileDocument> {
    Json(state.profile.document().clone())
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    Ok(Json(chat(&state.llm, &state.profile, request).await?))
}

/// POST /api/v1/research
pub async fn handle_research(
    State(state): State<AppState>,
    Json(request): Json<ResearchRequest>,
) -> Result<Json<ResearchReport>, AppError> {
    Ok(Json(company_research(&state.llm, request).await?))
}

/// POST /api/v1/fit-analysis
pub async fn handle_fit_analysis(
    State(state): State<AppState>,
    Json(request): Json<FitRequest>,
) -> Result<Json<FitOutcome>, AppError> {
    Ok(Json(
        job_fit_analysis(&state.llm, &state.profile, request).await?,
    ))
}

/// POST /api/v1/url-analysis
pub async fn handle_url_analysis(
    State(state): State<AppState>,
    Json(request): Json<UrlAnalysisRequest>,
) -> Result<Json<UrlAnalysisReport>, AppError> {
    Ok(Json(
        url_analysis(&state.llm, &state.profile, request).await?,
    ))
}

/// POST /api/v1/generate/letter
///
/// The letter's date line is computed here, at the impure edge, so prompt
/// composition stays a pure function of its inputs.
pub async fn handle_generate_letter(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GeneratedDocument>, AppError> {
    let date = chrono::Local::now().format("%-d %B %Y").to_string();
    Ok(Json(
        generate_cover_letter(&state.llm, &state.profile, request, &date).await?,
    ))
}

/// POST /api/v1/generate/cv
pub async fn handle_generate_cv(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GeneratedDocument>, AppError> {
    Ok(Json(
        generate_cv(&state.llm, &state.profile, request).await?,
    ))
}
