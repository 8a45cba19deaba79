//! Prompt composition — pure functions mapping task inputs to the exact
//! payload sent to the generative service.
//!
//! Composition performs no I/O and consults no ambient state, so identical
//! inputs always produce byte-identical payloads. Absent optional context
//! omits its section entirely; a composed prompt never contains a dangling
//! header with no content.

use std::time::Duration;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{ChatMessage, ComposedPrompt, Role};
use crate::profile::ProfileContext;

use super::content::GenerationRequest;
use super::history::{self, ConversationTurn};
use super::prompts;
use super::{ContentKind, CvStyle, TaskKind};

/// Placeholders used when the job-fit caller omits company or role.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const UNKNOWN_ROLE: &str = "Unknown Role";

/// The skill-extraction follow-up produces a short list, not a narrative.
const SKILL_EXTRACTION_MAX_TOKENS: u32 = 512;
const SKILL_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

fn single_turn(system: &str, prompt: String, kind: TaskKind) -> ComposedPrompt {
    ComposedPrompt {
        system: system.to_string(),
        messages: vec![ChatMessage {
            role: Role::User,
            content: prompt,
        }],
        max_tokens: kind.max_tokens(),
        timeout: kind.timeout(),
    }
}

/// A labeled prompt section, or nothing at all when the content is absent.
fn optional_section(header: &str, body: Option<&str>) -> String {
    match body.map(str::trim).filter(|b| !b.is_empty()) {
        Some(body) => format!("\n{header}:\n{body}\n"),
        None => String::new(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Chat: persona system instruction plus the windowed history with the new
/// user turn appended. The reply is consumed verbatim.
pub fn chat(
    profile: &ProfileContext,
    window: &[ConversationTurn],
    message: &str,
) -> ComposedPrompt {
    ComposedPrompt {
        system: prompts::CHAT_SYSTEM_TEMPLATE.replace("{profile}", profile.grounding()),
        messages: history::windowed(window, message),
        max_tokens: TaskKind::Chat.max_tokens(),
        timeout: TaskKind::Chat.timeout(),
    }
}

/// Company research: a single-turn six-section briefing request.
pub fn company_research(company: &str) -> ComposedPrompt {
    single_turn(
        prompts::RESEARCH_SYSTEM,
        prompts::COMPANY_RESEARCH_TEMPLATE.replace("{company}", company),
        TaskKind::CompanyResearch,
    )
}

/// Job-fit analysis: profile, target, and job description with a JSON-only
/// output contract. Company and role fall back to fixed placeholders.
pub fn job_fit(
    profile: &ProfileContext,
    company: Option<&str>,
    role: Option<&str>,
    job_description: &str,
) -> ComposedPrompt {
    let prompt = prompts::FIT_ANALYSIS_PROMPT_TEMPLATE
        .replace("{company}", non_empty(company).unwrap_or(UNKNOWN_COMPANY))
        .replace("{role}", non_empty(role).unwrap_or(UNKNOWN_ROLE))
        .replace("{profile}", profile.grounding())
        .replace("{job_description}", job_description);
    single_turn(prompts::FIT_ANALYSIS_SYSTEM, prompt, TaskKind::JobFitAnalysis)
}

/// URL analysis stage 1: six-section narrative against the current profile.
pub fn url_analysis(profile: &ProfileContext, url: &str) -> ComposedPrompt {
    let prompt = prompts::URL_ANALYSIS_TEMPLATE
        .replace("{url}", url)
        .replace("{profile}", profile.grounding());
    single_turn(prompts::RESEARCH_SYSTEM, prompt, TaskKind::UrlAnalysis)
}

/// URL analysis stage 2: reduce the stage-1 narrative to a JSON array of
/// newly identified skills. Short budget: a list, not prose.
pub fn skill_extraction(analysis: &str) -> ComposedPrompt {
    ComposedPrompt {
        system: JSON_ONLY_SYSTEM.to_string(),
        messages: vec![ChatMessage {
            role: Role::User,
            content: prompts::SKILL_EXTRACTION_TEMPLATE.replace("{analysis}", analysis),
        }],
        max_tokens: SKILL_EXTRACTION_MAX_TOKENS,
        timeout: SKILL_EXTRACTION_TIMEOUT,
    }
}

/// Cover letter: profile plus whatever optional context the caller supplied.
/// The date is computed at the impure edge and passed in as data.
pub fn cover_letter(
    profile: &ProfileContext,
    request: &GenerationRequest,
    date: &str,
) -> ComposedPrompt {
    let context = format!(
        "{}{}",
        optional_section("JOB DESCRIPTION", request.job_description.as_deref()),
        optional_section("COMPANY RESEARCH", request.company_research.as_deref()),
    );
    let prompt = prompts::LETTER_PROMPT_TEMPLATE
        .replace("{role}", non_empty(request.role.as_deref()).unwrap_or("[ROLE]"))
        .replace(
            "{company}",
            non_empty(request.company.as_deref()).unwrap_or("[COMPANY]"),
        )
        .replace("{date}", date)
        .replace("{profile}", profile.grounding())
        .replace("{context}", &context);
    single_turn(
        prompts::LETTER_SYSTEM,
        prompt,
        TaskKind::ContentGeneration(ContentKind::Letter),
    )
}

/// CV: style-framed rendition of the profile with optional targeting context.
pub fn cv(profile: &ProfileContext, request: &GenerationRequest) -> ComposedPrompt {
    let role = non_empty(request.role.as_deref()).unwrap_or("Project Manager");
    let target = match non_empty(request.company.as_deref()) {
        Some(company) => format!("the {role} role at {company}"),
        None => format!("the {role} role"),
    };
    let (headline, summary) = style_descriptor(request.cv_style);
    let context = format!(
        "{}{}",
        optional_section("JOB DESCRIPTION", request.job_description.as_deref()),
        optional_section("COMPANY RESEARCH", request.company_research.as_deref()),
    );
    let prompt = prompts::CV_PROMPT_TEMPLATE
        .replace("{target}", &target)
        .replace("{style_headline}", headline)
        .replace("{style_summary}", summary)
        .replace("{profile}", profile.grounding())
        .replace("{context}", &context);
    single_turn(
        prompts::CV_SYSTEM,
        prompt,
        TaskKind::ContentGeneration(ContentKind::Cv),
    )
}

fn style_descriptor(style: CvStyle) -> (&'static str, &'static str) {
    match style {
        CvStyle::Localisation => (
            prompts::CV_STYLE_LOCALISATION_HEADLINE,
            prompts::CV_STYLE_LOCALISATION_SUMMARY,
        ),
        CvStyle::Language => (
            prompts::CV_STYLE_LANGUAGE_HEADLINE,
            prompts::CV_STYLE_LANGUAGE_SUMMARY,
        ),
        CvStyle::Product => (
            prompts::CV_STYLE_PRODUCT_HEADLINE,
            prompts::CV_STYLE_PRODUCT_SUMMARY,
        ),
    }
}

#[cfg(test)]
mod tests {
    use crate::profile::testing::sample_profile;

    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            company: Some("InnoGames".to_string()),
            role: Some("Localisation Producer".to_string()),
            job_description: Some("Coordinate translations for live games.".to_string()),
            cv_style: CvStyle::Localisation,
            company_research: Some("Hamburg studio, browser and mobile titles.".to_string()),
        }
    }

    #[test]
    fn test_composition_is_idempotent() {
        let profile = sample_profile();
        let turns = vec![ConversationTurn {
            role: Role::User,
            content: "hello".to_string(),
        }];

        assert_eq!(
            chat(&profile, &turns, "what next?"),
            chat(&profile, &turns, "what next?")
        );
        assert_eq!(
            cover_letter(&profile, &request(), "7 August 2026"),
            cover_letter(&profile, &request(), "7 August 2026")
        );
        assert_eq!(job_fit(&profile, None, None, "JD"), job_fit(&profile, None, None, "JD"));
    }

    #[test]
    fn test_chat_payload_carries_window_plus_new_message() {
        let profile = sample_profile();
        let turns: Vec<ConversationTurn> = (0..12)
            .map(|i| ConversationTurn {
                role: Role::User,
                content: format!("turn {i}"),
            })
            .collect();

        let prompt = chat(&profile, &turns, "latest");

        assert_eq!(prompt.messages.len(), 11);
        assert!(prompt.system.contains("Alex Morgan"));
    }

    #[test]
    fn test_job_fit_defaults_to_placeholder_target() {
        let profile = sample_profile();

        let prompt = job_fit(&profile, None, None, "Some job description");
        let body = &prompt.messages[0].content;

        assert!(body.contains("Unknown Role at Unknown Company"));
        assert!(body.contains("Some job description"));
    }

    #[test]
    fn test_job_fit_uses_supplied_target() {
        let profile = sample_profile();

        let prompt = job_fit(
            &profile,
            Some("InnoGames"),
            Some("Localisation Producer"),
            "JD text",
        );

        assert!(prompt.messages[0]
            .content
            .contains("Localisation Producer at InnoGames"));
    }

    #[test]
    fn test_letter_without_optional_context_has_no_dangling_headers() {
        let profile = sample_profile();
        let bare = GenerationRequest {
            company: Some("InnoGames".to_string()),
            role: Some("Localisation Producer".to_string()),
            ..Default::default()
        };

        let prompt = cover_letter(&profile, &bare, "7 August 2026");
        let body = &prompt.messages[0].content;

        assert!(!body.contains("JOB DESCRIPTION:"));
        assert!(!body.contains("COMPANY RESEARCH"));
    }

    #[test]
    fn test_letter_includes_supplied_context_sections() {
        let profile = sample_profile();

        let prompt = cover_letter(&profile, &request(), "7 August 2026");
        let body = &prompt.messages[0].content;

        assert!(body.contains("JOB DESCRIPTION:\nCoordinate translations for live games."));
        assert!(body.contains("COMPANY RESEARCH:\nHamburg studio, browser and mobile titles."));
        assert!(body.contains("dated 7 August 2026"));
    }

    #[test]
    fn test_blank_optional_context_is_treated_as_absent() {
        let profile = sample_profile();
        let blank = GenerationRequest {
            job_description: Some("   ".to_string()),
            company_research: Some(String::new()),
            ..Default::default()
        };

        let prompt = cover_letter(&profile, &blank, "7 August 2026");

        assert!(!prompt.messages[0].content.contains("JOB DESCRIPTION:"));
        assert!(!prompt.messages[0].content.contains("COMPANY RESEARCH"));
    }

    #[test]
    fn test_cv_target_line_omits_absent_company() {
        let profile = sample_profile();
        let without_company = GenerationRequest {
            role: Some("Localisation Producer".to_string()),
            ..Default::default()
        };

        let prompt = cv(&profile, &without_company);
        let body = &prompt.messages[0].content;

        assert!(body.contains("targeting the Localisation Producer role."));
        assert!(!body.contains("Localisation Producer role at"));
    }

    #[test]
    fn test_cv_style_selects_framing() {
        let profile = sample_profile();
        let product = GenerationRequest {
            cv_style: CvStyle::Product,
            ..Default::default()
        };

        let prompt = cv(&profile, &product);

        assert!(prompt.messages[0].content.contains("Product Manager"));
    }

    #[test]
    fn test_skill_extraction_uses_the_short_budget() {
        let prompt = skill_extraction("Narrative analysis text");

        assert_eq!(prompt.max_tokens, SKILL_EXTRACTION_MAX_TOKENS);
        assert!(prompt.max_tokens < TaskKind::UrlAnalysis.max_tokens());
        assert!(prompt.messages[0].content.contains("Narrative analysis text"));
    }

    #[test]
    fn test_research_prompt_names_the_company() {
        let prompt = company_research("InnoGames");
        assert!(prompt.messages[0].content.contains(r#""InnoGames""#));
    }
}
