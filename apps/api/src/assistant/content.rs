//! Content generation — cover letters and CVs, returned as plain text.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::profile::ProfileContext;

use super::composer;
use super::CvStyle;

/// Input bundle shared by letter and CV generation. Everything is optional:
/// a bare request still produces a generic document from the profile alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    pub company: Option<String>,
    pub role: Option<String>,
    pub job_description: Option<String>,
    #[serde(default)]
    pub cv_style: CvStyle,
    /// Prior research text, caller-supplied; the core never fetches it.
    pub company_research: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GeneratedDocument {
    pub content: String,
}

/// Generates a cover letter. `date` is the letter's date line, computed by
/// the caller so composition stays pure.
pub async fn generate_cover_letter(
    llm: &LlmClient,
    profile: &ProfileContext,
    request: GenerationRequest,
    date: &str,
) -> Result<GeneratedDocument, AppError> {
    let prompt = composer::cover_letter(profile, &request, date);
    let content = llm.complete(&prompt).await?;
    Ok(GeneratedDocument { content })
}

/// Generates a CV in the requested style framing.
pub async fn generate_cv(
    llm: &LlmClient,
    profile: &ProfileContext,
    request: GenerationRequest,
) -> Result<GeneratedDocument, AppError> {
    let prompt = composer::cv(profile, &request);
    let content = llm.complete(&prompt).await?;
    Ok(GeneratedDocument { content })
}
