//! URL analysis — the one two-stage task.
//!
//! Stage 1 asks for a six-section narrative on the linked content compared
//! against the profile. Stage 2 reduces that narrative to a JSON array of
//! newly identified skills, and runs only after stage 1 succeeds. A stage-2
//! failure never fails the call: the narrative is preserved and the skill
//! list degrades to empty.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::profile::ProfileContext;

use super::{composer, extract};

#[derive(Debug, Deserialize)]
pub struct UrlAnalysisRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct UrlAnalysisReport {
    pub analysis: String,
    pub new_skills: Vec<String>,
}

pub async fn url_analysis(
    llm: &LlmClient,
    profile: &ProfileContext,
    request: UrlAnalysisRequest,
) -> Result<UrlAnalysisReport, AppError> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    let analysis = llm.complete(&composer::url_analysis(profile, url)).await?;

    let new_skills = match llm.complete(&composer::skill_extraction(&analysis)).await {
        Ok(completion) => extract::extract_array(&completion),
        Err(e) => {
            warn!("skill extraction failed, keeping narrative only: {e}");
            Vec::new()
        }
    };

    Ok(UrlAnalysisReport {
        analysis,
        new_skills,
    })
}
