//! Company research task — a single-turn six-section briefing.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmClient;

use super::composer;

#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub company: String,
}

#[derive(Debug, Serialize)]
pub struct ResearchReport {
    pub company: String,
    pub research: String,
}

/// Produces the company briefing. The caller may later feed the text back
/// into letter or CV generation as prior research context.
pub async fn company_research(
    llm: &LlmClient,
    request: ResearchRequest,
) -> Result<ResearchReport, AppError> {
    let company = request.company.trim();
    if company.is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }

    let prompt = composer::company_research(company);
    let research = llm.complete(&prompt).await?;

    Ok(ResearchReport {
        company: company.to_string(),
        research,
    })
}

#[cfg(test)]
mod tests {
    use crate::llm_client::testing::MockTransport;

    use super::*;

    #[tokio::test]
    async fn test_empty_company_is_rejected_before_any_call() {
        let transport = MockTransport::scripted(vec![]);
        let llm = LlmClient::with_transport(Some("key".to_string()), transport.clone());

        let err = company_research(
            &llm,
            ResearchRequest {
                company: "  ".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_report_echoes_trimmed_company_name() {
        let transport = MockTransport::scripted(vec![Ok("1. BUSINESS SUMMARY ...".to_string())]);
        let llm = LlmClient::with_transport(Some("key".to_string()), transport);

        let report = company_research(
            &llm,
            ResearchRequest {
                company: " InnoGames ".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(report.company, "InnoGames");
        assert!(report.research.starts_with("1. BUSINESS SUMMARY"));
    }
}
