//! The generative request orchestration layer: one operation per task.
//!
//! Every operation composes a prompt from the immutable profile context and
//! the caller's inputs, makes bounded service calls through `llm_client`,
//! and shapes the completion into its reply type. The layer holds no state
//! between calls; conversation history and results are caller-owned.

pub mod chat;
pub mod composer;
pub mod content;
pub mod extract;
pub mod fit;
pub mod handlers;
pub mod history;
pub mod prompts;
pub mod research;
pub mod url_analysis;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The closed set of orchestration tasks. Determines which prompt template
/// applies and the output-length and time budget of the service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Chat,
    CompanyResearch,
    JobFitAnalysis,
    UrlAnalysis,
    ContentGeneration(ContentKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Letter,
    Cv,
}

impl TaskKind {
    /// Maximum output-token budget for the task's service call.
    pub fn max_tokens(self) -> u32 {
        match self {
            TaskKind::Chat => 1024,
            TaskKind::CompanyResearch => 1500,
            TaskKind::JobFitAnalysis => 1500,
            TaskKind::UrlAnalysis => 1500,
            TaskKind::ContentGeneration(_) => 2048,
        }
    }

    /// Per-round-trip timeout. URL analysis gets a longer budget for its
    /// narrative stage; the skill-extraction follow-up carries its own
    /// short budget in `composer`.
    pub fn timeout(self) -> Duration {
        match self {
            TaskKind::UrlAnalysis => Duration::from_secs(60),
            _ => Duration::from_secs(30),
        }
    }
}

/// The three CV framings the assistant can produce. Also the value space of
/// `cv_version` in a fit analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvStyle {
    #[default]
    Localisation,
    Language,
    Product,
}

#[cfg(test)]
mod tests {
    use crate::errors::AppError;
    use crate::llm_client::testing::MockTransport;
    use crate::llm_client::LlmClient;
    use crate::profile::testing::sample_profile;

    use super::chat::{chat, ChatRequest};
    use super::content::{generate_cover_letter, generate_cv, GenerationRequest};
    use super::fit::{job_fit_analysis, FitRequest};
    use super::research::{company_research, ResearchRequest};
    use super::url_analysis::{url_analysis, UrlAnalysisRequest};
    use super::*;

    #[test]
    fn test_cv_style_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&CvStyle::Localisation).unwrap(),
            r#""localisation""#
        );
        let style: CvStyle = serde_json::from_str(r#""product""#).unwrap();
        assert_eq!(style, CvStyle::Product);
    }

    #[test]
    fn test_url_analysis_gets_the_long_timeout() {
        assert_eq!(TaskKind::UrlAnalysis.timeout().as_secs(), 60);
        assert_eq!(TaskKind::Chat.timeout().as_secs(), 30);
    }

    #[test]
    fn test_content_generation_gets_the_large_budget() {
        assert!(
            TaskKind::ContentGeneration(ContentKind::Cv).max_tokens()
                > TaskKind::Chat.max_tokens()
        );
    }

    /// A missing credential must fail every task kind before any network
    /// call is attempted.
    #[tokio::test]
    async fn test_missing_credential_fails_every_task_before_any_call() {
        let transport = MockTransport::scripted(vec![]);
        let llm = LlmClient::with_transport(None, transport.clone());
        let profile = sample_profile();

        let err = chat(
            &llm,
            &profile,
            ChatRequest {
                message: "Any advice for today?".to_string(),
                history: vec![],
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Configuration));

        let err = company_research(
            &llm,
            ResearchRequest {
                company: "InnoGames".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Configuration));

        let err = job_fit_analysis(
            &llm,
            &profile,
            FitRequest {
                company: None,
                role: None,
                job_description: "Coordinate localisation for live games.".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Configuration));

        let err = url_analysis(
            &llm,
            &profile,
            UrlAnalysisRequest {
                url: "https://example.com/writing-sample".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Configuration));

        let err = generate_cover_letter(&llm, &profile, GenerationRequest::default(), "7 August 2026")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration));

        let err = generate_cv(&llm, &profile, GenerationRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration));

        assert_eq!(transport.calls(), 0);
    }
}
