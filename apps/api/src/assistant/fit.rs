//! Job-fit analysis — structured assessment of the profile against a job
//! description.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::profile::ProfileContext;

use super::{composer, extract, CvStyle};

#[derive(Debug, Deserialize)]
pub struct FitRequest {
    pub company: Option<String>,
    pub role: Option<String>,
    pub job_description: String,
}

/// Structured fit assessment. `fit_score` must be present in the service's
/// JSON; everything else defaults when absent so a partial object still
/// parses rather than degrading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitAnalysisResult {
    /// 1 (no fit) to 10 (ideal fit).
    pub fit_score: u8,
    #[serde(default)]
    pub fit_summary: String,
    #[serde(default)]
    pub matching_skills: Vec<String>,
    #[serde(default)]
    pub skill_gaps: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub cv_version: CvStyle,
    #[serde(default)]
    pub keywords_to_include: Vec<String>,
    #[serde(default)]
    pub opening_hook: String,
}

/// A fit call that reached the service successfully. `Unparsed` is the
/// degraded shape when no JSON object could be extracted: the completion
/// text is preserved and the call still succeeds.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FitOutcome {
    Parsed(FitAnalysisResult),
    Unparsed { raw: String },
}

pub async fn job_fit_analysis(
    llm: &LlmClient,
    profile: &ProfileContext,
    request: FitRequest,
) -> Result<FitOutcome, AppError> {
    let job_description = request.job_description.trim();
    if job_description.is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let prompt = composer::job_fit(
        profile,
        request.company.as_deref(),
        request.role.as_deref(),
        job_description,
    );
    let completion = llm.complete(&prompt).await?;

    match extract::extract_object::<FitAnalysisResult>(&completion) {
        Some(result) => Ok(FitOutcome::Parsed(result)),
        None => {
            warn!("fit analysis completion carried no parseable JSON object");
            Ok(FitOutcome::Unparsed { raw: completion })
        }
    }
}
